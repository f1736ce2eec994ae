//! Per-entry action menu commands.
//!
//! Every action is registered with an explicit [`Capability`]. Actions
//! without a handler dispatch to [`ActionOutcome::Unimplemented`], a
//! deliberate no-op the UI can log and tests can assert on.

use super::navigation::Activation;
use crate::models::Entry;

/// Actions offered in an entry's menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryAction {
    Share,
    Download,
    Rename,
    Delete,
}

impl EntryAction {
    /// All actions in menu order.
    pub const ALL: [EntryAction; 4] = [Self::Share, Self::Download, Self::Rename, Self::Delete];

    pub fn label(self) -> &'static str {
        match self {
            Self::Share => "Share",
            Self::Download => "Download",
            Self::Rename => "Rename",
            Self::Delete => "Delete",
        }
    }

    /// Rendered with destructive styling.
    pub fn is_destructive(self) -> bool {
        matches!(self, Self::Delete)
    }
}

/// Handler invoked for an implemented action.
pub type ActionHandler = fn(&Entry) -> Option<Activation>;

/// Whether an action does anything.
#[derive(Clone, Copy)]
pub enum Capability {
    Unimplemented,
    Handler(ActionHandler),
}

impl Capability {
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Handler(_))
    }
}

/// Result of dispatching an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// No handler registered; nothing happened
    Unimplemented(EntryAction),
    /// Handler ran and may request a follow-up activation
    Completed(Option<Activation>),
}

/// Capability table for [`EntryAction`]s.
#[derive(Clone, Copy)]
pub struct ActionRegistry {
    share: Capability,
    download: Capability,
    rename: Capability,
    delete: Capability,
}

impl ActionRegistry {
    /// Every action unimplemented.
    pub fn placeholder() -> Self {
        Self {
            share: Capability::Unimplemented,
            download: Capability::Unimplemented,
            rename: Capability::Unimplemented,
            delete: Capability::Unimplemented,
        }
    }

    /// Replace the capability of one action.
    #[cfg(test)]
    pub fn with(mut self, action: EntryAction, capability: Capability) -> Self {
        *self.slot_mut(action) = capability;
        self
    }

    pub fn capability(&self, action: EntryAction) -> Capability {
        match action {
            EntryAction::Share => self.share,
            EntryAction::Download => self.download,
            EntryAction::Rename => self.rename,
            EntryAction::Delete => self.delete,
        }
    }

    pub fn dispatch(&self, action: EntryAction, entry: &Entry) -> ActionOutcome {
        match self.capability(action) {
            Capability::Unimplemented => ActionOutcome::Unimplemented(action),
            Capability::Handler(handler) => ActionOutcome::Completed(handler(entry)),
        }
    }

    #[cfg(test)]
    fn slot_mut(&mut self, action: EntryAction) -> &mut Capability {
        match action {
            EntryAction::Share => &mut self.share,
            EntryAction::Download => &mut self.download,
            EntryAction::Rename => &mut self.rename,
            EntryAction::Delete => &mut self.delete,
        }
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaType;

    fn logo() -> Entry {
        Entry::file("5", "Logo Design.ai", Some(MediaType::Image)).with_resource("/files/logo.ai")
    }

    fn open_resource(entry: &Entry) -> Option<Activation> {
        entry
            .resource()
            .map(|locator| Activation::OpenResource(locator.to_string()))
    }

    #[test]
    fn test_menu_order_and_labels() {
        let labels: Vec<_> = EntryAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["Share", "Download", "Rename", "Delete"]);

        let destructive: Vec<_> = EntryAction::ALL
            .into_iter()
            .filter(|a| a.is_destructive())
            .collect();
        assert_eq!(destructive, [EntryAction::Delete]);
    }

    #[test]
    fn test_placeholder_actions_are_noops() {
        let registry = ActionRegistry::placeholder();
        let entry = logo();

        for action in EntryAction::ALL {
            assert!(!registry.capability(action).is_implemented());
            assert_eq!(
                registry.dispatch(action, &entry),
                ActionOutcome::Unimplemented(action)
            );
        }
    }

    #[test]
    fn test_registered_handler_runs() {
        let registry = ActionRegistry::placeholder()
            .with(EntryAction::Download, Capability::Handler(open_resource));
        let entry = logo();

        assert_eq!(
            registry.dispatch(EntryAction::Download, &entry),
            ActionOutcome::Completed(Some(Activation::OpenResource(
                "/files/logo.ai".to_string()
            )))
        );
        assert_eq!(
            registry.dispatch(EntryAction::Delete, &entry),
            ActionOutcome::Unimplemented(EntryAction::Delete)
        );
    }

    #[test]
    fn test_handler_without_followup() {
        let registry = ActionRegistry::placeholder()
            .with(EntryAction::Download, Capability::Handler(open_resource));
        let folder = Entry::folder("1", "Documents", vec![]);

        assert_eq!(
            registry.dispatch(EntryAction::Download, &folder),
            ActionOutcome::Completed(None)
        );
    }
}
