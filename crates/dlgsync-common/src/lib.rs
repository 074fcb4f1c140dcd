pub mod errors;
pub mod id;
pub mod types;

pub use errors::{BridgeError, ChannelError, ConfigError, DlgsyncError};
pub use id::{Handle, ObjectKey, ObjectKind};
pub use types::{DialogState, LifecycleOp};
