use {
    crate::shapes::enums::ScreenActionEnum,
    crokey::*,
    serde::{Deserialize, Serialize},
    std::{
        collections::{HashMap, HashSet},
        fmt,
    },
};

/// A mapping from key combinations to actions.
///
/// Several key combinations can go to the same action. The lookup map is only
/// populated on slices, so every screen works on the subset it declares.
#[derive(Clone, Deserialize, Serialize)]
pub struct KeyBindings {
    #[serde(skip)]
    map: HashMap<KeyCombination, ScreenActionEnum>,
    #[serde(flatten)]
    default_bindings: HashMap<ScreenActionEnum, HashSet<KeyCombination>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.set(ScreenActionEnum::Quit, key!(ctrl - q));
        bindings.set(ScreenActionEnum::Quit, key!(q));
        bindings.set(ScreenActionEnum::Back, key!(esc));
        bindings.set(ScreenActionEnum::Select, key!(enter));
        bindings.set(ScreenActionEnum::New, key!(n));
        bindings.set(ScreenActionEnum::Edit, key!(e));
        bindings.set(ScreenActionEnum::Delete, key!(d));
        bindings.set(ScreenActionEnum::Reload, key!(r));
        bindings.set(ScreenActionEnum::Filter, key!(f));
        bindings.set(ScreenActionEnum::Next, key!(down));
        bindings.set(ScreenActionEnum::Next, key!(j));
        bindings.set(ScreenActionEnum::Previous, key!(up));
        bindings.set(ScreenActionEnum::Previous, key!(k));
        bindings.set(ScreenActionEnum::NextField, key!(tab));
        bindings.set(ScreenActionEnum::PreviousField, key!(shift - backtab));
        bindings.set(ScreenActionEnum::Confirm, key!(enter));
        bindings.set(ScreenActionEnum::Cancel, key!(esc));
        bindings.set(ScreenActionEnum::YearUp, key!(pageup));
        bindings.set(ScreenActionEnum::YearDown, key!(pagedown));
        bindings.set(ScreenActionEnum::DayForward, key!(right));
        bindings.set(ScreenActionEnum::DayBackward, key!(left));
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: HashMap::default(),
            default_bindings: HashMap::new(),
        }
    }

    pub fn set<A: Into<ScreenActionEnum>>(&mut self, action: A, ck: KeyCombination) -> bool {
        self.default_bindings
            .entry(action.into())
            .or_default()
            .insert(ck)
    }

    fn set_to_map<A: Into<ScreenActionEnum>>(&mut self, action: A, ck: KeyCombination) {
        let action_enum = action.into();
        self.map.entry(ck).or_insert(action_enum);
    }

    pub fn get(&self, key: KeyCombination) -> Option<&ScreenActionEnum> {
        self.map.get(&key)
    }

    /// return the key combination for the action with the shortest Display
    /// representation, along with the action description.
    pub fn shortest_key_for(&self, action: &ScreenActionEnum) -> Option<(KeyCombination, String)> {
        let cks = self.default_bindings.get(action)?;
        let mut shortest: Option<(KeyCombination, String)> = None;
        for ck in cks {
            let s = ck.to_string();
            match &shortest {
                Some(previous) if previous.1.len() <= s.len() => {}
                _ => shortest = Some((*ck, s)),
            }
        }
        shortest.map(|(ck, _)| (ck, action.with_desc().1))
    }

    pub fn slice(&self, actions: &[ScreenActionEnum]) -> KeyBindings {
        let mut slice = KeyBindings::empty();
        for (action, cks) in &self.default_bindings {
            if actions.contains(action) {
                cks.iter().for_each(|ck| slice.set_to_map(*action, *ck));
            }
        }
        slice
    }
}

impl fmt::Debug for KeyBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ds = f.debug_struct("KeyBindings");
        for (kc, action) in &self.map {
            ds.field(&kc.to_string(), &action);
        }
        ds.finish()
    }
}

#[test]
fn test_deserialize_keybindings() {
    #[derive(Deserialize)]
    struct Config {
        keybindings: KeyBindings,
    }
    let json = r#"
    {
        "keybindings": {
            "previous": ["shift-tab"],
            "quit": ["q","ctrl-q"]
        }
    }
    "#;
    let conf = serde_json::from_str::<Config>(json).unwrap();
    assert_eq!(conf.keybindings.shortest_key_for(&ScreenActionEnum::Back), None);
    assert_eq!(
        conf.keybindings.shortest_key_for(&ScreenActionEnum::Quit),
        Some((key!(q), "quit".into()))
    );
    assert_eq!(
        conf.keybindings.shortest_key_for(&ScreenActionEnum::Previous),
        Some((key!(shift - tab), "previous".into()))
    );
}

#[test]
fn slice_only_maps_requested_actions() {
    let slice = KeyBindings::default().slice(&[ScreenActionEnum::Confirm, ScreenActionEnum::Cancel]);
    assert_eq!(slice.get(key!(enter)), Some(&ScreenActionEnum::Confirm));
    assert_eq!(slice.get(key!(esc)), Some(&ScreenActionEnum::Cancel));
    assert_eq!(slice.get(key!(q)), None);
}
