//! Outbound transport to the host.
//!
//! The coordinator only needs to enqueue a [`Directive`] and move on. How
//! the directive reaches the host is up to the [`Outbound`] implementation.

use std::io::Write;

use dlgsync_common::ChannelError;
use tokio::sync::mpsc;

use crate::protocol::Directive;

/// One-way sink for directives. Sends must not block on the host.
pub trait Outbound {
    fn send(&mut self, directive: Directive) -> Result<(), ChannelError>;
}

impl<T: Outbound + ?Sized> Outbound for Box<T> {
    fn send(&mut self, directive: Directive) -> Result<(), ChannelError> {
        (**self).send(directive)
    }
}

/// Keeps every directive in memory, in send order.
///
/// Optionally closes after a fixed number of sends, which lets callers
/// observe how a failing transport interrupts synchronization.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    sent: Vec<Directive>,
    limit: Option<usize>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel that accepts `limit` directives and reports `Closed` after.
    pub fn closing_after(limit: usize) -> Self {
        Self {
            sent: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn sent(&self) -> &[Directive] {
        &self.sent
    }

    /// Drain everything recorded so far.
    pub fn take(&mut self) -> Vec<Directive> {
        std::mem::take(&mut self.sent)
    }

    pub fn len(&self) -> usize {
        self.sent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.is_empty()
    }
}

impl Outbound for RecordingChannel {
    fn send(&mut self, directive: Directive) -> Result<(), ChannelError> {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err(ChannelError::Closed);
            }
            self.limit = Some(limit - 1);
        }
        self.sent.push(directive);
        Ok(())
    }
}

/// Enqueues directives on an unbounded tokio channel.
///
/// The receiving half is typically drained by a writer task that owns
/// the actual connection to the host.
#[derive(Debug, Clone)]
pub struct MpscChannel {
    tx: mpsc::UnboundedSender<Directive>,
}

impl MpscChannel {
    pub fn new(tx: mpsc::UnboundedSender<Directive>) -> Self {
        Self { tx }
    }

    pub fn pair() -> (Self, mpsc::UnboundedReceiver<Directive>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl Outbound for MpscChannel {
    fn send(&mut self, directive: Directive) -> Result<(), ChannelError> {
        self.tx.send(directive).map_err(|_| ChannelError::Closed)
    }
}

/// Writes each directive as one JSON object followed by a newline.
///
/// The writer is flushed after every directive so the host sees it
/// without waiting for a buffer to fill.
#[derive(Debug)]
pub struct JsonLinesChannel<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesChannel<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Outbound for JsonLinesChannel<W> {
    fn send(&mut self, directive: Directive) -> Result<(), ChannelError> {
        let line = directive.to_json().map_err(ChannelError::Encode)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
