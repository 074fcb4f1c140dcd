//! Tabs: titled pages of dialog content, synchronized on first push.

use dlgsync_common::{BridgeError, Handle, ObjectKey, ObjectKind};
use tracing::debug;

use crate::channel::Outbound;
use crate::coordinator::Coordinator;
use crate::protocol::{Directive, TabDetails};
use crate::registry::Proxied;

/// A titled page of dialog content.
///
/// A tab has no handle until it is first synchronized as part of a dialog
/// (or pushed directly).
#[derive(Debug)]
pub struct Tab {
    key: ObjectKey,
    title: String,
    content: String,
}

impl Tab {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: ObjectKey::new(),
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl Proxied for Tab {
    const KIND: ObjectKind = ObjectKind::Tab;

    fn key(&self) -> ObjectKey {
        self.key
    }
}

impl<C: Outbound> Coordinator<C> {
    /// Send the tab's title and content. Returns its handle.
    pub fn push_tab(&mut self, tab: &Tab) -> Result<Handle, BridgeError> {
        let handle = self.registry.get_or_assign(tab);
        self.send(Directive::SetTabDetails {
            handle,
            details: TabDetails {
                title: tab.title.clone(),
                content: tab.content.clone(),
            },
        })?;
        Ok(handle)
    }

    /// Forget the tab. A tab that was never pushed has nothing to evict.
    pub fn dispose_tab(&mut self, tab: Tab) {
        if let Some(handle) = self.registry.evict(&tab) {
            debug!(%handle, "tab disposed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::RecordingChannel;

    #[test]
    fn handle_is_assigned_lazily() {
        let mut c = Coordinator::new(RecordingChannel::new());
        let tab = Tab::new("General", "form");
        assert_eq!(c.registry().lookup(&tab), None);

        let handle = c.push_tab(&tab).unwrap();
        assert_eq!(c.registry().lookup(&tab), Some(handle));
        assert_eq!(c.push_tab(&tab).unwrap(), handle);
    }

    #[test]
    fn push_sends_title_and_content() {
        let mut c = Coordinator::new(RecordingChannel::new());
        let mut tab = Tab::new("General", "form");
        tab.set_content("<form></form>");
        let handle = c.push_tab(&tab).unwrap();

        assert_eq!(
            c.channel().sent(),
            &[Directive::SetTabDetails {
                handle,
                details: TabDetails {
                    title: "General".into(),
                    content: "<form></form>".into(),
                },
            }]
        );
    }

    #[test]
    fn local_edits_do_not_send() {
        let mut c = Coordinator::new(RecordingChannel::new());
        let mut tab = Tab::new("a", "b");
        c.push_tab(&tab).unwrap();
        tab.set_title("renamed");
        assert_eq!(tab.title(), "renamed");
        assert_eq!(c.channel().len(), 1);
    }

    #[test]
    fn dispose_evicts_a_pushed_tab() {
        let mut c = Coordinator::new(RecordingChannel::new());
        let tab = Tab::new("General", "form");
        let never_pushed = Tab::new("Advanced", "more");
        c.push_tab(&tab).unwrap();
        assert_eq!(c.registry().len(), 1);

        c.dispose_tab(tab);
        c.dispose_tab(never_pushed);
        assert!(c.registry().is_empty());
        assert_eq!(c.channel().len(), 1);
    }

    #[test]
    fn identical_tabs_get_distinct_handles() {
        let mut c = Coordinator::new(RecordingChannel::new());
        let a = Tab::new("same", "same");
        let b = Tab::new("same", "same");
        assert_ne!(c.push_tab(&a).unwrap(), c.push_tab(&b).unwrap());
    }
}
