use std::path::PathBuf;

use crate::id::Handle;
use crate::types::{DialogState, LifecycleOp};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the outbound transport.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("channel closed")]
    Closed,

    #[error("failed to encode directive: {0}")]
    Encode(serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("no reaction registered for handle {0}")]
    UnknownHandle(Handle),

    #[error("cannot {operation} dialog {handle} in state {state}")]
    InvalidLifecycle {
        handle: Handle,
        state: DialogState,
        operation: LifecycleOp,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Channel(#[from] ChannelError),
}

#[derive(Debug, thiserror::Error)]
pub enum DlgsyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("labels.ok is empty".into());
        assert_eq!(err.to_string(), "config validation error: labels.ok is empty");
    }

    #[test]
    fn bridge_error_display() {
        let err = BridgeError::UnknownHandle(Handle(9));
        assert_eq!(err.to_string(), "no reaction registered for handle #9");

        let err = BridgeError::InvalidLifecycle {
            handle: Handle(3),
            state: DialogState::Created,
            operation: LifecycleOp::Close,
        };
        assert_eq!(err.to_string(), "cannot close dialog #3 in state created");

        let err: BridgeError = ChannelError::Closed.into();
        assert_eq!(err.to_string(), "channel closed");
    }

    #[test]
    fn bridge_error_from_serde() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: BridgeError = json_err.into();
        assert!(matches!(err, BridgeError::Serialization(_)));
    }

    #[test]
    fn channel_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        let err: ChannelError = io_err.into();
        assert!(matches!(err, ChannelError::Io(_)));
        assert!(err.to_string().contains("pipe gone"));

        let err: BridgeError = err.into();
        assert!(matches!(err, BridgeError::Channel(ChannelError::Io(_))));
    }

    #[test]
    fn dlgsync_error_conversions() {
        let err: DlgsyncError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, DlgsyncError::Config(_)));
        assert!(err.to_string().contains("bad toml"));

        let err: DlgsyncError = BridgeError::UnknownHandle(Handle(1)).into();
        assert!(matches!(err, DlgsyncError::Bridge(_)));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DlgsyncError = io_err.into();
        assert!(matches!(err, DlgsyncError::Io(_)));

        let err = DlgsyncError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
