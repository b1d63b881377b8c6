use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LanguageEnum {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-br")]
    PtBr,
}

impl fmt::Display for LanguageEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageEnum::En => write!(f, "en"),
            LanguageEnum::PtBr => write!(f, "pt-br"),
        }
    }
}

/// Everything a key press can mean on some screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenActionEnum {
    Quit,
    Back,
    Select,
    New,
    Edit,
    Delete,
    Reload,
    Filter,
    Next,
    Previous,
    NextField,
    PreviousField,
    Confirm,
    Cancel,
    YearUp,
    YearDown,
    DayForward,
    DayBackward,
}

impl ScreenActionEnum {
    /// Returns the config key and the description shown in the footer.
    pub fn with_desc(&self) -> (&'static str, String) {
        let (key, desc) = match self {
            ScreenActionEnum::Quit => ("quit", "quit"),
            ScreenActionEnum::Back => ("back", "back"),
            ScreenActionEnum::Select => ("select", "select"),
            ScreenActionEnum::New => ("new", "new"),
            ScreenActionEnum::Edit => ("edit", "edit"),
            ScreenActionEnum::Delete => ("delete", "delete"),
            ScreenActionEnum::Reload => ("reload", "reload"),
            ScreenActionEnum::Filter => ("filter", "filter by team"),
            ScreenActionEnum::Next => ("next", "next"),
            ScreenActionEnum::Previous => ("previous", "previous"),
            ScreenActionEnum::NextField => ("next_field", "next field"),
            ScreenActionEnum::PreviousField => ("previous_field", "previous field"),
            ScreenActionEnum::Confirm => ("confirm", "save"),
            ScreenActionEnum::Cancel => ("cancel", "cancel"),
            ScreenActionEnum::YearUp => ("year_up", "next year"),
            ScreenActionEnum::YearDown => ("year_down", "previous year"),
            ScreenActionEnum::DayForward => ("day_forward", "next day"),
            ScreenActionEnum::DayBackward => ("day_backward", "previous day"),
        };
        (key, desc.to_string())
    }
}
