//! Wire protocol between the coordinator and the rendering host.
//!
//! Messages flow in both directions, one JSON object each:
//! - **Coordinator -> host**: [`Directive`]s describing object state and
//!   lifecycle. Fire-and-forget, no acknowledgement.
//! - **Host -> coordinator**: [`Notification`]s about user interaction.
//!
//! Every message names its subject by [`Handle`]. A directive that refers
//! to a child handle is only sent after the child's own details.

use dlgsync_common::Handle;
use serde::{Deserialize, Serialize};

/// State of a button as rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDetails {
    pub label: String,
    pub enabled: bool,
}

/// State of a tab as rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDetails {
    pub title: String,
    pub content: String,
}

/// Dialog body: either opaque text or an ordered list of tab handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentDetails {
    Text(String),
    Tabs(Vec<Handle>),
}

/// State of a dialog as rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogDetails {
    pub title: String,
    pub ok_button: Handle,
    pub cancel_button: Handle,
    pub content: ContentDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_buttons: Option<Vec<Handle>>,
}

/// Messages sent from the coordinator to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Directive {
    Open {
        handle: Handle,
    },
    Close {
        handle: Handle,
    },
    SetDialogDetails {
        handle: Handle,
        details: DialogDetails,
    },
    SetTabDetails {
        handle: Handle,
        details: TabDetails,
    },
    SetButtonDetails {
        handle: Handle,
        details: ButtonDetails,
    },
}

impl Directive {
    /// The handle this directive is about.
    pub fn handle(&self) -> Handle {
        match self {
            Directive::Open { handle }
            | Directive::Close { handle }
            | Directive::SetDialogDetails { handle, .. }
            | Directive::SetTabDetails { handle, .. }
            | Directive::SetButtonDetails { handle, .. } => *handle,
        }
    }

    /// Wire name of the directive.
    pub fn kind(&self) -> &'static str {
        match self {
            Directive::Open { .. } => "open",
            Directive::Close { .. } => "close",
            Directive::SetDialogDetails { .. } => "setDialogDetails",
            Directive::SetTabDetails { .. } => "setTabDetails",
            Directive::SetButtonDetails { .. } => "setButtonDetails",
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Messages sent from the host to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notification {
    #[serde(rename = "onButtonClick")]
    ButtonClick { handle: Handle },
    #[serde(other)]
    Unknown,
}

impl Notification {
    /// Parse a notification from one raw JSON message.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
