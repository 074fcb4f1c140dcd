//! Cross-process dialog synchronization.
//!
//! A [`Coordinator`] builds dialogs, tabs and buttons locally and mirrors
//! them on a separate rendering host:
//! - Objects are identified on the wire by opaque integer handles, issued
//!   lazily and never reused
//! - State flows out as one-way [`Directive`]s, children before parents
//! - Button clicks flow back as [`Notification`]s and are routed to the
//!   reactions registered on the button

pub mod allocator;
pub mod button;
pub mod channel;
pub mod coordinator;
pub mod dialog;
pub mod dispatcher;
pub mod protocol;
pub mod registry;
pub mod tab;

pub use allocator::HandleAllocator;
pub use button::{Button, ButtonClick};
pub use channel::{JsonLinesChannel, MpscChannel, Outbound, RecordingChannel};
pub use coordinator::{ButtonLabels, Coordinator};
pub use dialog::{Dialog, DialogContent};
pub use dispatcher::{EventDispatcher, Reaction};
pub use protocol::{ButtonDetails, ContentDetails, DialogDetails, Directive, Notification, TabDetails};
pub use registry::{Proxied, ProxyRegistry};
pub use tab::Tab;
