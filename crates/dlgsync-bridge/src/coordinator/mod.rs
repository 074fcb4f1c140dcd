//! The coordinating side of the bridge.
//!
//! `Coordinator` owns the handle registry, the dispatch table and the
//! outbound channel. Model objects are created through it and every
//! synchronization goes through it; the proxy operations for each kind of
//! object live next to the object type (`dialog`, `tab`, `button`).

use dlgsync_common::{BridgeError, Handle};
use tracing::{debug, warn};

use crate::channel::Outbound;
use crate::dispatcher::EventDispatcher;
use crate::protocol::{Directive, Notification};
use crate::registry::ProxyRegistry;


/// Default labels for the buttons every dialog starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLabels {
    pub ok: String,
    pub cancel: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            ok: "Done".to_string(),
            cancel: "Cancel".to_string(),
        }
    }
}

/// Owns all cross-process state for one host connection.
pub struct Coordinator<C: Outbound> {
    pub(crate) registry: ProxyRegistry,
    pub(crate) dispatcher: EventDispatcher,
    channel: C,
    labels: ButtonLabels,
}

impl<C: Outbound> Coordinator<C> {
    pub fn new(channel: C) -> Self {
        Self::with_labels(channel, ButtonLabels::default())
    }

    pub fn with_labels(channel: C, labels: ButtonLabels) -> Self {
        Self {
            registry: ProxyRegistry::new(),
            dispatcher: EventDispatcher::new(),
            channel,
            labels,
        }
    }

    pub fn labels(&self) -> &ButtonLabels {
        &self.labels
    }

    pub fn registry(&self) -> &ProxyRegistry {
        &self.registry
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }

    pub(crate) fn send(&mut self, directive: Directive) -> Result<(), BridgeError> {
        debug!(kind = directive.kind(), handle = %directive.handle(), "sending directive");
        self.channel.send(directive)?;
        Ok(())
    }

    // =========================================================================
    // INBOUND
    // =========================================================================

    /// Route a click reported by the host to the button's reactions.
    pub fn on_button_click(&mut self, handle: Handle) -> Result<(), BridgeError> {
        self.dispatcher.on_event(handle)
    }

    pub fn handle_notification(&mut self, notification: Notification) -> Result<(), BridgeError> {
        match notification {
            Notification::ButtonClick { handle } => self.on_button_click(handle),
            Notification::Unknown => {
                warn!("ignoring notification of unknown type");
                Ok(())
            }
        }
    }

    /// Decode one raw message from the host and route it.
    pub fn handle_message(&mut self, raw: &str) -> Result<(), BridgeError> {
        let notification = Notification::from_json(raw).map_err(|e| {
            warn!(body_len = raw.len(), error = %e, "notification rejected: failed to parse");
            BridgeError::Serialization(e)
        })?;
        self.handle_notification(notification)
    }
}
