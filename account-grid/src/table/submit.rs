//! Submit cycle: send the drafts, notify, reload, clear what was accepted.

use super::{AccountTable, SubmitPhase};
use crate::draft::DraftEdits;
use crate::error::Error;
use crate::notify::Notification;
use crate::source::Ack;

/// Puts the table back in [`SubmitPhase::Idle`] when the submit ends, however
/// it ends. Also covers a submit future dropped mid-flight.
struct PhaseGuard {
    table: AccountTable,
}

impl Drop for PhaseGuard {
    fn drop(&mut self) {
        self.table.update(|state| state.phase = SubmitPhase::Idle);
    }
}

enum Begin {
    Empty,
    Started(DraftEdits, PhaseGuard),
}

impl AccountTable {
    /// Submits all pending drafts as one batch.
    ///
    /// On acceptance a success notification is emitted, the cache is dropped
    /// and the rows reloaded. Drafts are cleared only after the reload
    /// succeeds; edits recorded while the submit was running are kept.
    ///
    /// # Errors
    ///
    /// - [`Error::SubmitInFlight`] if another submit is running
    /// - [`Error::Submit`] if the record source rejected the batch. Drafts are
    ///   kept and an error notification is emitted.
    /// - [`Error::ReloadAfterSubmit`] if the batch was committed but the
    ///   reload failed. Drafts are kept and an error notification is emitted.
    pub async fn submit(&self) -> Result<Ack, Error> {
        let (submitted, _guard) = match self.begin_submit()? {
            Begin::Empty => {
                log::debug!("Nothing to submit");
                return Ok(Ack::default());
            }
            Begin::Started(submitted, guard) => (submitted, guard),
        };

        let batch = submitted.to_batch();
        log::debug!(
            "Submitting {} edit(s) across {} record(s)",
            batch.len(),
            submitted.len()
        );

        let ack = match self.inner.context.source.submit_edits(batch).await {
            Ok(ack) => ack,
            Err(err) => {
                log::warn!("Submit rejected: {}", err);
                self.notify(Notification::error(
                    &self.inner.config.error_title,
                    &err.message,
                ));
                return Err(Error::Submit(err));
            }
        };

        log::info!("Submit accepted: {} record(s) updated", ack.updated);
        self.notify(Notification::success(
            &self.inner.config.success_title,
            &self.inner.config.success_message,
        ));

        self.inner.loader.invalidate().await;
        self.update(|state| state.phase = SubmitPhase::Reloading);

        match self.reload().await {
            Ok(_) => {
                self.update(|state| state.drafts.discard_submitted(&submitted));
                Ok(ack)
            }
            Err(source) => {
                self.notify(Notification::error(
                    &self.inner.config.error_title,
                    &source.message,
                ));
                Err(Error::ReloadAfterSubmit { ack, source })
            }
        }
    }

    /// Rejects a second submit, skips an empty batch, otherwise enters the
    /// submitting phase.
    fn begin_submit(&self) -> Result<Begin, Error> {
        let ready = self.read(|state| {
            if state.is_submitting() {
                Err(Error::SubmitInFlight)
            } else {
                Ok(!state.drafts.is_empty())
            }
        });
        match ready {
            Err(err) => {
                log::warn!("Submit requested while another is in flight");
                return Err(err);
            }
            Ok(false) => return Ok(Begin::Empty),
            Ok(true) => {}
        }

        self.update(|state| {
            if state.is_submitting() {
                return Err(Error::SubmitInFlight);
            }
            if state.drafts.is_empty() {
                return Ok(Begin::Empty);
            }
            state.phase = SubmitPhase::Submitting;
            let guard = PhaseGuard {
                table: self.clone(),
            };
            Ok(Begin::Started(state.drafts.clone(), guard))
        })
    }
}
