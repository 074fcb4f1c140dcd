//! A single dialog session against a host speaking JSON lines on stdio.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use dlgsync_bridge::{
    Button, ButtonLabels, Coordinator, Dialog, Directive, JsonLinesChannel, MpscChannel, Outbound,
    Tab,
};
use dlgsync_common::{BridgeError, ChannelError, DlgsyncError};
use dlgsync_config::DlgsyncConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// How the user left the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Confirmed,
    Cancelled,
}

/// Work queued by click reactions, applied once dispatch returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Confirm,
    Cancel,
    Test,
}

type Queue = Rc<RefCell<VecDeque<Command>>>;

fn enqueue_on_click(button: &Button, queue: &Queue, command: Command) {
    let queue = queue.clone();
    button.on_click(move |click| {
        debug!(handle = %click.handle, ?command, "click");
        queue.borrow_mut().push_back(command);
    });
}

pub struct Session<C: Outbound> {
    coordinator: Coordinator<C>,
    dialog: Dialog,
    queue: Queue,
    outcome: Option<Outcome>,
}

impl<C: Outbound> Session<C> {
    /// Build the connection dialog and open it on the host.
    pub fn start(mut coordinator: Coordinator<C>, title: &str) -> Result<Self, BridgeError> {
        let queue: Queue = Rc::default();

        let mut dialog = coordinator.create_dialog(title)?;
        let tabs = vec![
            Tab::new(
                "General",
                "<label>Host <input name=\"host\"></label><label>Port <input name=\"port\"></label>",
            ),
            Tab::new(
                "Advanced",
                "<label><input type=\"checkbox\" name=\"tls\"> Use TLS</label>",
            ),
        ];
        coordinator.set_dialog_content(&mut dialog, tabs);
        let test = coordinator.create_button("Test connection")?;
        enqueue_on_click(&test, &queue, Command::Test);
        coordinator.set_custom_buttons(&mut dialog, Some(vec![test]));

        enqueue_on_click(dialog.ok_button(), &queue, Command::Confirm);
        enqueue_on_click(dialog.cancel_button(), &queue, Command::Cancel);

        coordinator.open_dialog(&mut dialog)?;

        Ok(Self {
            coordinator,
            dialog,
            queue,
            outcome: None,
        })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Route one line from the host, then apply whatever the click queued.
    pub fn handle_line(&mut self, line: &str) -> Result<(), BridgeError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        self.coordinator.handle_message(line)?;
        self.apply_pending()
    }

    fn apply_pending(&mut self) -> Result<(), BridgeError> {
        loop {
            let Some(command) = self.queue.borrow_mut().pop_front() else {
                return Ok(());
            };
            if self.outcome.is_some() {
                debug!(?command, "dialog already finished, ignoring");
                continue;
            }
            match command {
                Command::Confirm => self.finish(Outcome::Confirmed)?,
                Command::Cancel => self.finish(Outcome::Cancelled)?,
                Command::Test => self.mark_tested()?,
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Result<(), BridgeError> {
        self.coordinator.close_dialog(&mut self.dialog)?;
        self.outcome = Some(outcome);
        info!(?outcome, "dialog finished");
        Ok(())
    }

    fn mark_tested(&mut self) -> Result<(), BridgeError> {
        let Some(test) = self.dialog.custom_button_mut(0) else {
            return Ok(());
        };
        if !test.enabled() {
            return Ok(());
        }
        self.coordinator.set_button_enabled(test, false)?;
        self.coordinator.set_button_label(test, "Connection OK")?;
        Ok(())
    }

    /// Release everything the session registered with the coordinator.
    pub fn into_coordinator(self) -> Coordinator<C> {
        let Self {
            mut coordinator,
            dialog,
            ..
        } = self;
        coordinator.dispose_dialog(dialog);
        coordinator
    }
}

/// Drain directives into `out` until every sender is gone.
///
/// A directive that fails to encode is logged and skipped. A write
/// failure ends the drain.
fn drain_directives<W: std::io::Write>(
    mut rx: mpsc::UnboundedReceiver<Directive>,
    out: &mut JsonLinesChannel<W>,
) -> Result<(), ChannelError> {
    while let Some(directive) = rx.blocking_recv() {
        let kind = directive.kind();
        let handle = directive.handle();
        match out.send(directive) {
            Ok(()) => {}
            Err(ChannelError::Encode(e)) => {
                error!(kind, %handle, error = %e, "failed to encode directive");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Run one session on stdio until the dialog is finished or stdin closes.
pub async fn run(config: &DlgsyncConfig, title: &str) -> Result<Option<Outcome>, DlgsyncError> {
    let (channel, rx) = MpscChannel::pair();
    let writer = tokio::task::spawn_blocking(move || {
        let mut out = JsonLinesChannel::new(std::io::stdout());
        drain_directives(rx, &mut out)
    });

    let labels = ButtonLabels {
        ok: config.labels.ok.clone(),
        cancel: config.labels.cancel.clone(),
    };
    let mut session = Session::start(Coordinator::with_labels(channel, labels), title)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while session.outcome().is_none() {
        let Some(line) = lines.next_line().await? else {
            info!("host closed input");
            break;
        };
        match session.handle_line(&line) {
            Ok(()) => {}
            Err(e @ BridgeError::Channel(_)) => return Err(e.into()),
            Err(e) => warn!(error = %e, "notification dropped"),
        }
    }

    let outcome = session.outcome();
    drop(session.into_coordinator());

    writer
        .await
        .map_err(|e| DlgsyncError::Other(format!("writer task failed: {e}")))?
        .map_err(BridgeError::from)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlgsync_bridge::RecordingChannel;
    use dlgsync_common::Handle;

    impl<C: Outbound> Session<C> {
        fn coordinator(&self) -> &Coordinator<C> {
            &self.coordinator
        }

        fn coordinator_mut(&mut self) -> &mut Coordinator<C> {
            &mut self.coordinator
        }

        fn dialog(&self) -> &Dialog {
            &self.dialog
        }
    }

    fn start() -> Session<RecordingChannel> {
        Session::start(Coordinator::new(RecordingChannel::new()), "Connect").unwrap()
    }

    fn click(handle: Handle) -> String {
        format!(r#"{{"type":"onButtonClick","handle":{}}}"#, handle.get())
    }

    fn handle_of(session: &Session<RecordingChannel>, button: &Button) -> Handle {
        session.coordinator().registry().lookup(button).unwrap()
    }

    #[test]
    fn start_opens_the_dialog() {
        let session = start();
        let sent = session.coordinator().channel().sent();
        assert_eq!(sent.last().unwrap().kind(), "open");
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn ok_click_confirms_and_closes() {
        let mut session = start();
        let ok = handle_of(&session, session.dialog().ok_button());
        session.coordinator_mut().channel_mut().take();

        session.handle_line(&click(ok)).unwrap();
        assert_eq!(session.outcome(), Some(Outcome::Confirmed));
        let sent = session.coordinator().channel().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].kind(), "close");
    }

    #[test]
    fn cancel_click_cancels() {
        let mut session = start();
        let cancel = handle_of(&session, session.dialog().cancel_button());
        session.handle_line(&click(cancel)).unwrap();
        assert_eq!(session.outcome(), Some(Outcome::Cancelled));
    }

    #[test]
    fn clicks_after_finish_are_ignored() {
        let mut session = start();
        let ok = handle_of(&session, session.dialog().ok_button());
        let cancel = handle_of(&session, session.dialog().cancel_button());
        session.handle_line(&click(ok)).unwrap();
        session.coordinator_mut().channel_mut().take();

        session.handle_line(&click(cancel)).unwrap();
        assert_eq!(session.outcome(), Some(Outcome::Confirmed));
        assert!(session.coordinator().channel().is_empty());
    }

    #[test]
    fn test_click_updates_the_custom_button() {
        let mut session = start();
        let test = handle_of(&session, &session.dialog().custom_buttons().unwrap()[0]);
        session.coordinator_mut().channel_mut().take();

        session.handle_line(&click(test)).unwrap();
        let sent = session.coordinator_mut().channel_mut().take();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|d| d.handle() == test));

        // second click on a disabled button changes nothing
        session.handle_line(&click(test)).unwrap();
        assert!(session.coordinator().channel().is_empty());
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut session = start();
        assert!(session.handle_line("   ").is_ok());
    }

    #[test]
    fn unknown_handle_is_reported() {
        let mut session = start();
        let err = session.handle_line(&click(Handle(10_000))).unwrap_err();
        assert!(matches!(err, BridgeError::UnknownHandle(_)));
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn drain_writes_every_directive_as_a_line() {
        let (mut channel, rx) = MpscChannel::pair();
        channel.send(Directive::Open { handle: Handle(4) }).unwrap();
        channel.send(Directive::Close { handle: Handle(4) }).unwrap();
        drop(channel);

        let mut out = JsonLinesChannel::new(Vec::new());
        drain_directives(rx, &mut out).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""type":"open""#));
        assert!(lines[1].contains(r#""type":"close""#));
    }

    #[test]
    fn into_coordinator_disposes_the_dialog() {
        let session = start();
        let coordinator = session.into_coordinator();
        assert!(coordinator.registry().is_empty());
        assert!(coordinator.dispatcher().is_empty());
    }
}
