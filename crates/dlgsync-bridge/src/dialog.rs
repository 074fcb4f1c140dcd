//! Dialogs: the root of the synchronized object tree.
//!
//! A dialog owns its tabs and buttons. Synchronizing a dialog first
//! synchronizes every child it refers to, so the host never receives a
//! handle it has no details for:
//!
//! 1. tabs, in content order
//! 2. custom buttons, in order
//! 3. the OK button
//! 4. the Cancel button
//! 5. the dialog itself
//!
//! A failing child send aborts the whole push before the dialog is sent.

use dlgsync_common::{BridgeError, DialogState, Handle, LifecycleOp, ObjectKey, ObjectKind};
use tracing::{debug, info, warn};

use crate::button::Button;
use crate::channel::Outbound;
use crate::coordinator::Coordinator;
use crate::protocol::{ContentDetails, DialogDetails, Directive};
use crate::registry::Proxied;
use crate::tab::Tab;

/// Dialog body.
#[derive(Debug)]
pub enum DialogContent {
    /// Opaque text or markup rendered as-is.
    Text(String),
    /// Tabs, in display order.
    Tabs(Vec<Tab>),
}

impl Default for DialogContent {
    fn default() -> Self {
        DialogContent::Text(String::new())
    }
}

impl From<String> for DialogContent {
    fn from(text: String) -> Self {
        DialogContent::Text(text)
    }
}

impl From<&str> for DialogContent {
    fn from(text: &str) -> Self {
        DialogContent::Text(text.to_string())
    }
}

impl From<Vec<Tab>> for DialogContent {
    fn from(tabs: Vec<Tab>) -> Self {
        DialogContent::Tabs(tabs)
    }
}

#[derive(Debug)]
pub struct Dialog {
    key: ObjectKey,
    title: String,
    content: DialogContent,
    ok_button: Button,
    cancel_button: Button,
    custom_buttons: Option<Vec<Button>>,
    state: DialogState,
}

impl Dialog {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn content(&self) -> &DialogContent {
        &self.content
    }

    /// Tab at `index`, if the content is tabbed.
    pub fn tab_mut(&mut self, index: usize) -> Option<&mut Tab> {
        match &mut self.content {
            DialogContent::Tabs(tabs) => tabs.get_mut(index),
            DialogContent::Text(_) => None,
        }
    }

    pub fn ok_button(&self) -> &Button {
        &self.ok_button
    }

    pub fn ok_button_mut(&mut self) -> &mut Button {
        &mut self.ok_button
    }

    pub fn cancel_button(&self) -> &Button {
        &self.cancel_button
    }

    pub fn cancel_button_mut(&mut self) -> &mut Button {
        &mut self.cancel_button
    }

    pub fn custom_buttons(&self) -> Option<&[Button]> {
        self.custom_buttons.as_deref()
    }

    pub fn custom_button_mut(&mut self, index: usize) -> Option<&mut Button> {
        self.custom_buttons.as_mut()?.get_mut(index)
    }

    pub fn state(&self) -> DialogState {
        self.state
    }
}

impl Proxied for Dialog {
    const KIND: ObjectKind = ObjectKind::Dialog;

    fn key(&self) -> ObjectKey {
        self.key
    }
}

impl<C: Outbound> Coordinator<C> {
    /// Create a dialog with its OK and Cancel buttons.
    ///
    /// The buttons are created (and sent) first, then the dialog's own
    /// handle is assigned. Tabs get handles later, on first push.
    pub fn create_dialog(&mut self, title: impl Into<String>) -> Result<Dialog, BridgeError> {
        let ok_label = self.labels().ok.clone();
        let cancel_label = self.labels().cancel.clone();
        let ok_button = self.create_button(ok_label)?;
        let cancel_button = self.create_button(cancel_label)?;

        let dialog = Dialog {
            key: ObjectKey::new(),
            title: title.into(),
            content: DialogContent::default(),
            ok_button,
            cancel_button,
            custom_buttons: None,
            state: DialogState::Created,
        };
        let handle = self.registry.get_or_assign(&dialog);
        debug!(%handle, title = %dialog.title, "dialog created");
        Ok(dialog)
    }

    /// Synchronize the dialog and all of its children. Returns its handle.
    pub fn push_dialog(&mut self, dialog: &Dialog) -> Result<Handle, BridgeError> {
        let handle = self.registry.get_or_assign(dialog);

        let content = match &dialog.content {
            DialogContent::Text(text) => ContentDetails::Text(text.clone()),
            DialogContent::Tabs(tabs) => {
                let mut handles = Vec::with_capacity(tabs.len());
                for tab in tabs {
                    handles.push(self.push_tab(tab)?);
                }
                ContentDetails::Tabs(handles)
            }
        };

        let custom_buttons = match &dialog.custom_buttons {
            Some(buttons) => {
                let mut handles = Vec::with_capacity(buttons.len());
                for button in buttons {
                    handles.push(self.push_button(button)?);
                }
                Some(handles)
            }
            None => None,
        };

        let ok_button = self.push_button(&dialog.ok_button)?;
        let cancel_button = self.push_button(&dialog.cancel_button)?;

        self.send(Directive::SetDialogDetails {
            handle,
            details: DialogDetails {
                title: dialog.title.clone(),
                ok_button,
                cancel_button,
                content,
                custom_buttons,
            },
        })?;
        Ok(handle)
    }

    /// Push full state, then ask the host to show the dialog.
    pub fn open_dialog(&mut self, dialog: &mut Dialog) -> Result<(), BridgeError> {
        let handle = self.registry.get_or_assign(dialog);
        let next = self.transition(dialog, handle, LifecycleOp::Open)?;

        self.push_dialog(dialog)?;
        self.send(Directive::Open { handle })?;
        dialog.state = next;
        info!(%handle, title = %dialog.title, "dialog opened");
        Ok(())
    }

    /// Ask the host to hide the dialog. No state is pushed.
    pub fn close_dialog(&mut self, dialog: &mut Dialog) -> Result<(), BridgeError> {
        let handle = self.registry.get_or_assign(dialog);
        let next = self.transition(dialog, handle, LifecycleOp::Close)?;

        self.send(Directive::Close { handle })?;
        dialog.state = next;
        info!(%handle, "dialog closed");
        Ok(())
    }

    /// Replace the dialog body. Local only; the next push carries it.
    ///
    /// Tabs dropped by the replacement are disposed.
    pub fn set_dialog_content(&mut self, dialog: &mut Dialog, content: impl Into<DialogContent>) {
        let old = std::mem::replace(&mut dialog.content, content.into());
        if let DialogContent::Tabs(tabs) = old {
            for tab in tabs {
                self.dispose_tab(tab);
            }
        }
    }

    /// Replace the custom buttons. `None` omits them from the wire entirely.
    ///
    /// Buttons dropped by the replacement are disposed, so clicks on their
    /// old handles are no longer routed.
    pub fn set_custom_buttons(&mut self, dialog: &mut Dialog, buttons: Option<Vec<Button>>) {
        let old = std::mem::replace(&mut dialog.custom_buttons, buttons);
        for button in old.into_iter().flatten() {
            self.dispose_button(button);
        }
    }

    /// Forget the dialog and everything it owns.
    ///
    /// Registry entries and click routes are dropped; their handles are
    /// never issued again. Nothing is sent to the host.
    pub fn dispose_dialog(&mut self, dialog: Dialog) {
        if dialog.state == DialogState::Opened {
            warn!(title = %dialog.title, "disposing a dialog that is still open");
        }
        let handle = self.registry.evict(&dialog);
        let Dialog {
            content,
            ok_button,
            cancel_button,
            custom_buttons,
            ..
        } = dialog;
        if let DialogContent::Tabs(tabs) = content {
            for tab in tabs {
                self.dispose_tab(tab);
            }
        }
        for button in custom_buttons.into_iter().flatten() {
            self.dispose_button(button);
        }
        self.dispose_button(ok_button);
        self.dispose_button(cancel_button);
        if let Some(handle) = handle {
            debug!(%handle, "dialog disposed");
        }
    }

    fn transition(
        &self,
        dialog: &Dialog,
        handle: Handle,
        operation: LifecycleOp,
    ) -> Result<DialogState, BridgeError> {
        dialog.state.apply(operation).ok_or_else(|| {
            warn!(%handle, state = %dialog.state, %operation, "lifecycle violation");
            BridgeError::InvalidLifecycle {
                handle,
                state: dialog.state,
                operation,
            }
        })
    }
}
