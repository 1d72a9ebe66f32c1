use crate::ui::components::notification_dialog::DialogKind;

/// Messages returned by components and dispatched by their caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Quote banner
    AdvanceQuote,

    // Focus traversal
    FocusNext,
    FocusPrevious,

    // Notification dialog
    ShowNotification(DialogKind),
    CloseNotification,
    NotificationConfirmed,
    NotificationCancelled,

    // Reason modal
    OpenReasonModal,
    CloseReasonModal,
    ReasonSubmitted(String),

    // Selectors
    AssigneesChanged(Vec<String>),
    ProjectChanged(String),
    ToggleProjectsLoading,

    // Gallery
    CycleIconTheme,
    ToggleLogs,

    /// Several actions dispatched in order
    Batch(Vec<Action>),

    // App control
    Quit,
    None,
}

impl Action {
    /// Build a batch, dropping `None` entries and unwrapping single actions
    #[must_use]
    pub fn sequence(actions: impl IntoIterator<Item = Action>) -> Action {
        let mut actions: Vec<Action> = actions.into_iter().filter(|a| !a.is_none()).collect();
        match actions.len() {
            0 => Action::None,
            1 => actions.remove(0),
            _ => Action::Batch(actions),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }

    /// Flatten nested batches into dispatch order
    #[must_use]
    pub fn flatten(self) -> Vec<Action> {
        match self {
            Action::Batch(actions) => actions.into_iter().flat_map(Action::flatten).collect(),
            Action::None => Vec::new(),
            action => vec![action],
        }
    }
}
