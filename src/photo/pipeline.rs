use std::path::PathBuf;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::error::PhotoError;
use super::preview::{PreviewImage, render_preview};
use crate::model::PhotoFile;

/// Result of one background preview job.
#[derive(Debug)]
pub struct PreviewOutcome {
    /// Sequence number assigned by [`PhotoPipeline::submit`].
    pub seq: u64,
    pub result: Result<PreviewImage, PhotoError>,
}

/// Turns selected photo files into [`PreviewImage`]s in the background.
///
/// Jobs run on the tokio runtime behind `handle`; the UI thread collects
/// finished jobs with [`poll`](Self::poll). Only the most recently submitted
/// job may publish a preview. Anything older that finishes later is dropped.
pub struct PhotoPipeline {
    handle: Handle,
    tx: UnboundedSender<PreviewOutcome>,
    rx: UnboundedReceiver<PreviewOutcome>,
    latest: u64,
    pending: bool,
    preview: Option<PreviewImage>,
    warning: Option<String>,
}

impl PhotoPipeline {
    /// Creates an idle pipeline that spawns jobs on `handle`.
    pub fn new(handle: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            tx,
            rx,
            latest: 0,
            pending: false,
            preview: None,
            warning: None,
        }
    }

    /// Starts reading `photo` and returns its sequence number immediately.
    pub fn submit(&mut self, photo: &PhotoFile) -> u64 {
        self.latest += 1;
        self.pending = true;
        let seq = self.latest;
        let tx = self.tx.clone();
        let path = photo.path().to_path_buf();
        log::debug!("preview #{seq}: reading {}", path.display());
        self.handle.spawn(async move {
            let result = load_preview(path).await;
            // The receiver only goes away when the app is shutting down.
            let _ = tx.send(PreviewOutcome { seq, result });
        });
        seq
    }

    /// Applies every finished job without blocking.
    ///
    /// Returns `true` if the preview slot or warning changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.rx.try_recv() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Waits for the next finished job and applies it.
    #[cfg(test)]
    pub(crate) async fn wait(&mut self) -> bool {
        match self.rx.recv().await {
            Some(outcome) => self.apply(outcome),
            None => false,
        }
    }

    /// Returns the published preview, if any.
    pub fn preview(&self) -> Option<&PreviewImage> {
        self.preview.as_ref()
    }

    /// Returns the warning left by the last failed read, if any.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Returns `true` while the latest job has not finished.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    fn apply(&mut self, outcome: PreviewOutcome) -> bool {
        if outcome.seq != self.latest {
            log::debug!(
                "preview #{}: superseded by #{}, discarding",
                outcome.seq,
                self.latest
            );
            return false;
        }

        self.pending = false;
        match outcome.result {
            Ok(preview) => {
                log::info!(
                    "preview #{}: {} ({} bytes)",
                    outcome.seq,
                    preview.mime,
                    preview.byte_len
                );
                self.preview = Some(preview);
                self.warning = None;
            }
            Err(e) => {
                log::warn!("preview #{}: {e}", outcome.seq);
                self.preview = None;
                self.warning = Some(format!("Preview unavailable: {e}"));
            }
        }
        true
    }
}

async fn load_preview(path: PathBuf) -> Result<PreviewImage, PhotoError> {
    let bytes = tokio::fs::read(&path).await?;
    let preview = tokio::task::spawn_blocking(move || render_preview(&path, bytes)).await?;
    Ok(preview)
}
