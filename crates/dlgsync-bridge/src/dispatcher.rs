//! Routing of inbound host events to local reactions.

use std::collections::HashMap;

use dlgsync_common::{BridgeError, Handle};
use tracing::{debug, warn};

/// A reaction invoked when the host reports an event for a handle.
pub type Reaction = Box<dyn FnMut(Handle)>;

/// One reaction per handle.
#[derive(Default)]
pub struct EventDispatcher {
    entries: HashMap<Handle, Reaction>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the reaction for `handle`, replacing any previous one.
    pub fn register(&mut self, handle: Handle, reaction: impl FnMut(Handle) + 'static) {
        if self.entries.insert(handle, Box::new(reaction)).is_some() {
            warn!(%handle, "replaced existing dispatch entry");
        }
    }

    pub fn unregister(&mut self, handle: Handle) -> bool {
        self.entries.remove(&handle).is_some()
    }

    pub fn is_registered(&self, handle: Handle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Invoke the reaction registered for `handle`.
    ///
    /// An unknown handle is reported as [`BridgeError::UnknownHandle`]; the
    /// dispatcher stays usable afterwards.
    pub fn on_event(&mut self, handle: Handle) -> Result<(), BridgeError> {
        match self.entries.get_mut(&handle) {
            Some(reaction) => {
                debug!(%handle, "dispatching event");
                reaction(handle);
                Ok(())
            }
            None => {
                warn!(%handle, "event for unknown handle");
                Err(BridgeError::UnknownHandle(handle))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut handles: Vec<&Handle> = self.entries.keys().collect();
        handles.sort();
        f.debug_struct("EventDispatcher")
            .field("handles", &handles)
            .finish()
    }
}
