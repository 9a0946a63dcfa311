//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use storee_core::{LifecyclePhase, TimingContext, WorkloadError};

use crate::shell::Shell;

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Shell not yet sent.
    Initial,
    /// Shell sent; sections may follow.
    ShellSent,
    /// Closing fragment written.
    Completed,
}

/// Streaming sink that enforces shell, then sections, then close.
///
/// Generic over any `Sink<Vec<u8>>`, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        let len = bytes.len();
        self.inner
            .send(bytes)
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.bytes_sent += len;
        Ok(())
    }

    /// Send the opening of the shell. Must be called before any sections.
    pub async fn send_shell(&mut self, shell: &Shell) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.timing.mark("shell_start");
        self.write(shell.render_opening().into_bytes()).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. The shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => return Err(WorkloadError::ShellNotSent),
            SinkState::Completed => {
                return Err(WorkloadError::StreamError(
                    "Sink already completed".to_string(),
                ))
            }
            SinkState::ShellSent => {}
        }

        self.timing.mark_section_start(name);
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Write the closing fragment of the shell and complete the response.
    pub async fn finish(&mut self, shell: &Shell) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => return Err(WorkloadError::ShellNotSent),
            SinkState::Completed => {
                return Err(WorkloadError::StreamError(
                    "Sink already completed".to_string(),
                ))
            }
            SinkState::ShellSent => {}
        }

        self.write(shell.render_closing().into_bytes()).await?;
        self.inner
            .close()
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.mark("complete");
        Ok(())
    }

    /// Names of the sections sent, in order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Total bytes written so far.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match self.state {
            SinkState::Initial => LifecyclePhase::Start,
            SinkState::ShellSent => match self.sections_sent.last() {
                Some(last) => LifecyclePhase::SectionSent(last.clone()),
                None => LifecyclePhase::ShellSent,
            },
            SinkState::Completed => LifecyclePhase::Completion,
        }
    }

    /// Timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::StreamExt;

    use super::*;
    use crate::shell::HeadContent;

    fn shell() -> Shell {
        Shell::new(HeadContent::new("Test"))
            .with_body_start("<body>")
            .with_body_end("</body></html>")
    }

    #[test]
    fn test_section_before_shell_fails() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());
        let err = block_on(sink.send_section("grid", "<div></div>")).unwrap_err();
        assert!(matches!(err, WorkloadError::ShellNotSent));
    }

    #[test]
    fn test_full_sequence_writes_in_order() {
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());
        let shell = shell();

        block_on(async {
            sink.send_shell(&shell).await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::ShellSent);
            sink.send_section("hero", "<h1>Hi</h1>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::SectionSent("hero".to_string()));
            sink.finish(&shell).await.unwrap();
        });

        assert_eq!(sink.phase(), LifecyclePhase::Completion);
        assert!(sink.timing().time_to_shell().is_some());
        assert!(sink.timing().section_duration("hero").is_some());

        let chunks: Vec<Vec<u8>> = block_on(rx.collect());
        let page = String::from_utf8(chunks.concat()).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.ends_with("<body><h1>Hi</h1></body></html>"));
        assert_eq!(sink.bytes_sent(), page.len());
    }

    #[test]
    fn test_shell_twice_fails() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());
        let shell = shell();
        block_on(sink.send_shell(&shell)).unwrap();
        assert!(block_on(sink.send_shell(&shell)).is_err());
    }
}
