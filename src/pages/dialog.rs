use async_trait::async_trait;

/// How an edit dialog was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// The user saved; carries the edited copy, changed or not.
    Committed(T),
    Cancelled,
}

/// A modal edit of one record. The caller is suspended until the user either
/// saves or cancels; there is no other way out.
#[async_trait]
pub trait EditDialog<T: Clone + Send + Sync> {
    async fn edit(&mut self, original: &T, new_entry: bool) -> DialogOutcome<T>;
}

/// The record a dialog is bound to. Field edits land on a private clone, so
/// the original is untouched until the controller commits the outcome.
#[derive(Debug)]
pub struct WorkingCopy<'a, T: Clone> {
    original: &'a T,
    copy: T,
}

impl<'a, T: Clone + PartialEq> WorkingCopy<'a, T> {
    pub fn open(original: &'a T) -> Self {
        Self {
            original,
            copy: original.clone(),
        }
    }

    pub fn edit<F: FnOnce(&mut T)>(&mut self, change: F) {
        change(&mut self.copy);
    }

    #[cfg(test)]
    pub fn current(&self) -> &T {
        &self.copy
    }

    pub fn is_modified(&self) -> bool {
        self.copy != *self.original
    }

    pub fn save(self) -> DialogOutcome<T> {
        DialogOutcome::Committed(self.copy)
    }

    pub fn cancel(self) -> DialogOutcome<T> {
        DialogOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::team::TeamEntry;

    #[test]
    fn edits_never_reach_the_original() {
        let original = TeamEntry {
            id: Some(1),
            name: "Fluminense".into(),
            ..Default::default()
        };
        let mut copy = WorkingCopy::open(&original);
        copy.edit(|t| t.name = "Botafogo".into());
        assert!(copy.is_modified());
        assert_eq!(copy.current().name, "Botafogo");
        assert_eq!(original.name, "Fluminense");
        assert_eq!(copy.cancel(), DialogOutcome::Cancelled);
        assert_eq!(original.name, "Fluminense");
    }

    #[test]
    fn saving_an_untouched_copy_still_commits() {
        let original = TeamEntry::new_empty();
        let copy = WorkingCopy::open(&original);
        assert!(!copy.is_modified());
        assert_eq!(copy.save(), DialogOutcome::Committed(TeamEntry::new_empty()));
    }
}
