//! Buttons and their click reactions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use dlgsync_common::{BridgeError, Handle, ObjectKey, ObjectKind};
use tracing::debug;

use crate::channel::Outbound;
use crate::coordinator::Coordinator;
use crate::protocol::{ButtonDetails, Directive};
use crate::registry::Proxied;

/// Delivered to click reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonClick {
    pub handle: Handle,
}

type ClickReaction = Box<dyn FnMut(&ButtonClick)>;

/// Reaction list shared between a button and its single dispatch entry.
#[derive(Clone, Default)]
struct ClickListeners(Rc<RefCell<Vec<ClickReaction>>>);

impl ClickListeners {
    fn push(&self, reaction: ClickReaction) {
        self.0.borrow_mut().push(reaction);
    }

    fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Call every reaction in subscription order.
    ///
    /// The list is taken out while reactions run, so a reaction may
    /// subscribe further reactions; those run from the next click on.
    fn emit(&self, click: &ButtonClick) {
        let mut running = std::mem::take(&mut *self.0.borrow_mut());
        for reaction in running.iter_mut() {
            reaction(click);
        }
        let mut slot = self.0.borrow_mut();
        let added = std::mem::replace(&mut *slot, running);
        slot.extend(added);
    }
}

/// A push button mirrored on the host.
///
/// `label` and `enabled` are changed through the coordinator so that each
/// change is sent immediately.
pub struct Button {
    key: ObjectKey,
    label: String,
    enabled: bool,
    listeners: ClickListeners,
}

impl Button {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Subscribe to clicks on this button.
    pub fn on_click(&self, reaction: impl FnMut(&ButtonClick) + 'static) {
        self.listeners.push(Box::new(reaction));
    }

    pub fn reaction_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn details(&self) -> ButtonDetails {
        ButtonDetails {
            label: self.label.clone(),
            enabled: self.enabled,
        }
    }
}

impl Proxied for Button {
    const KIND: ObjectKind = ObjectKind::Button;

    fn key(&self) -> ObjectKey {
        self.key
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .field("reactions", &self.listeners.len())
            .finish()
    }
}

impl<C: Outbound> Coordinator<C> {
    /// Create an enabled button, register its click route and send it once.
    pub fn create_button(&mut self, label: impl Into<String>) -> Result<Button, BridgeError> {
        let button = Button {
            key: ObjectKey::new(),
            label: label.into(),
            enabled: true,
            listeners: ClickListeners::default(),
        };
        let handle = self.registry.get_or_assign(&button);

        let listeners = button.listeners.clone();
        self.dispatcher
            .register(handle, move |handle| listeners.emit(&ButtonClick { handle }));

        debug!(%handle, label = %button.label, "button created");
        self.push_button(&button)?;
        Ok(button)
    }

    pub fn set_button_label(
        &mut self,
        button: &mut Button,
        label: impl Into<String>,
    ) -> Result<(), BridgeError> {
        button.label = label.into();
        self.push_button(button).map(|_| ())
    }

    pub fn set_button_enabled(&mut self, button: &mut Button, enabled: bool) -> Result<(), BridgeError> {
        button.enabled = enabled;
        self.push_button(button).map(|_| ())
    }

    /// Send the button's current state. Returns its handle.
    pub fn push_button(&mut self, button: &Button) -> Result<Handle, BridgeError> {
        let handle = self.registry.get_or_assign(button);
        self.send(Directive::SetButtonDetails {
            handle,
            details: button.details(),
        })?;
        Ok(handle)
    }

    /// Forget the button and stop routing clicks to it. Nothing is sent.
    pub fn dispose_button(&mut self, button: Button) {
        if let Some(handle) = self.registry.evict(&button) {
            self.dispatcher.unregister(handle);
            debug!(%handle, label = %button.label, "button disposed");
        }
    }
}
