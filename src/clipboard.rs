/// Clipboard access on a background worker.
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use anyhow::{Context, Result, anyhow};

/// Text shown once a copy settles, whichever way it went.
pub const COPY_NOTICE: &str = "Color copied to clipboard!";

/// Anything that can receive text the way the system clipboard does.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard. Opened lazily so a missing display only fails the
/// copy, not startup.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: bool,
}

impl SystemClipboard {
    /// For processes that exit right after copying. On X11 and Wayland the
    /// contents are only served while their owner lives, so each write blocks
    /// until another application takes the clipboard over.
    pub fn holding() -> Self {
        Self {
            inner: None,
            hold: true,
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().context("failed to open system clipboard")?,
        };
        let clipboard = self.inner.insert(clipboard);
        set_text(clipboard, text, self.hold).context("failed to write to system clipboard")
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str, hold: bool) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold {
        return clipboard.set().wait().text(text.to_owned());
    }
    clipboard.set_text(text.to_owned())
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str, _hold: bool) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_owned())
}

/// Result of one copy request.
#[derive(Debug)]
pub struct CopyOutcome {
    pub text: String,
    pub result: Result<()>,
}

/// Owns a clipboard on its own thread. Requests are fire-and-forget; outcomes
/// are collected with [`ClipboardWriter::poll`].
pub struct ClipboardWriter {
    requests: Sender<String>,
    outcomes: Receiver<CopyOutcome>,
}

impl ClipboardWriter {
    /// Start the worker. The clipboard is built on the worker thread since
    /// platform handles are not always `Send`.
    pub fn spawn<C, F>(make: F) -> Self
    where
        C: Clipboard,
        F: FnOnce() -> C + Send + 'static,
    {
        let (requests, request_rx) = mpsc::channel::<String>();
        let (outcome_tx, outcomes) = mpsc::channel();
        thread::spawn(move || {
            let mut clipboard = make();
            for text in request_rx {
                let result = clipboard.write_text(&text);
                if outcome_tx.send(CopyOutcome { text, result }).is_err() {
                    break;
                }
            }
        });
        Self { requests, outcomes }
    }

    pub fn system() -> Self {
        Self::spawn(SystemClipboard::default)
    }

    /// Queue `text` for writing. A dead worker settles the request as failed.
    pub fn copy(&self, text: String) -> Option<CopyOutcome> {
        match self.requests.send(text) {
            Ok(()) => None,
            Err(mpsc::SendError(text)) => Some(CopyOutcome {
                text,
                result: Err(anyhow!("clipboard worker stopped")),
            }),
        }
    }

    /// Settled outcomes since the last call, without blocking.
    pub fn poll(&self) -> Vec<CopyOutcome> {
        let mut settled = Vec::new();
        loop {
            match self.outcomes.try_recv() {
                Ok(outcome) => settled.push(outcome),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        settled
    }
}
