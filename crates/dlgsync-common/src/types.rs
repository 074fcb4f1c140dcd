use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a dialog as seen by the host.
///
/// `Created -> Opened -> Closed`. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogState {
    #[default]
    Created,
    Opened,
    Closed,
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DialogState::Created => "created",
            DialogState::Opened => "opened",
            DialogState::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Operations that move a dialog through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOp {
    Open,
    Close,
}

impl fmt::Display for LifecycleOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleOp::Open => f.write_str("open"),
            LifecycleOp::Close => f.write_str("close"),
        }
    }
}

impl DialogState {
    /// State reached by applying `op`, or `None` if the transition is not allowed.
    pub fn apply(self, op: LifecycleOp) -> Option<DialogState> {
        match (self, op) {
            (DialogState::Created, LifecycleOp::Open) => Some(DialogState::Opened),
            (DialogState::Opened, LifecycleOp::Close) => Some(DialogState::Closed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_created() {
        assert_eq!(DialogState::default(), DialogState::Created);
    }

    #[test]
    fn allowed_transitions() {
        assert_eq!(
            DialogState::Created.apply(LifecycleOp::Open),
            Some(DialogState::Opened)
        );
        assert_eq!(
            DialogState::Opened.apply(LifecycleOp::Close),
            Some(DialogState::Closed)
        );
    }

    #[test]
    fn rejected_transitions() {
        assert_eq!(DialogState::Created.apply(LifecycleOp::Close), None);
        assert_eq!(DialogState::Opened.apply(LifecycleOp::Open), None);
        assert_eq!(DialogState::Closed.apply(LifecycleOp::Open), None);
        assert_eq!(DialogState::Closed.apply(LifecycleOp::Close), None);
    }

    #[test]
    fn state_serde_lowercase() {
        let json = serde_json::to_string(&DialogState::Opened).unwrap();
        assert_eq!(json, "\"opened\"");
    }
}
