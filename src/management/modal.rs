use std::time::Duration;

use tokio::time::sleep;

use crate::types::Record;

/// How long the closing transition plays before the modal actually flips to
/// `Closed`. Presentation timing only; network calls are never delayed by it.
pub const CLOSE_DELAY: Duration = Duration::from_millis(200);

/// Which dialog is currently up. At most one is ever open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Adding,
    Editing(u64),
    ConfirmingDelete(u64),
}

/// Transition phase of the open dialog. Carries no correctness weight; it
/// exists so a renderer can animate enter/exit deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Entering,
    Steady,
    Exiting,
}

/// Governs the add/edit/delete dialog workflow for one record kind and
/// carries the draft being composed.
///
/// The draft is always an independent copy; in-progress edits never leak
/// into a displayed collection until the manager commits them. Closing the
/// controller in any way other than a commit discards the draft.
pub struct ModalController<R> {
    state: ModalState,
    phase: ModalPhase,
    draft: Option<R>,
}

impl<R: Record> ModalController<R> {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            phase: ModalPhase::Steady,
            draft: None,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    pub fn draft(&self) -> Option<&R> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut R> {
        self.draft.as_mut()
    }

    /// Opens the add dialog with an empty-field draft. Ignored while another
    /// dialog is up.
    pub fn open_add(&mut self)
    where
        R: Default,
    {
        if self.is_open() {
            return;
        }
        self.draft = Some(R::default());
        self.state = ModalState::Adding;
        self.phase = ModalPhase::Entering;
    }

    /// Opens the edit dialog with a copy of the given collection member.
    /// Ignored while another dialog is up or if the record has no id.
    pub fn open_edit(&mut self, record: &R) {
        if self.is_open() {
            return;
        }
        let Some(id) = record.id() else {
            return;
        };
        self.draft = Some(record.clone());
        self.state = ModalState::Editing(id);
        self.phase = ModalPhase::Entering;
    }

    /// Opens the delete confirmation for the given id. No draft is needed.
    pub fn open_delete(&mut self, id: u64) {
        if self.is_open() {
            return;
        }
        self.state = ModalState::ConfirmingDelete(id);
        self.phase = ModalPhase::Entering;
    }

    /// Completes the opening transition.
    pub fn settle(&mut self) {
        if self.phase == ModalPhase::Entering {
            self.phase = ModalPhase::Steady;
        }
    }

    /// Closes immediately, discarding the draft. Used for explicit cancel
    /// and backdrop dismissal.
    pub fn cancel(&mut self) {
        self.state = ModalState::Closed;
        self.phase = ModalPhase::Steady;
        self.draft = None;
    }

    /// Starts the closing transition without flipping the state yet.
    pub fn begin_close(&mut self) {
        if self.is_open() {
            self.phase = ModalPhase::Exiting;
        }
    }

    /// Finishes the closing transition: state flips to `Closed` and the
    /// draft is discarded unconditionally.
    pub fn finish_close(&mut self) {
        self.state = ModalState::Closed;
        self.phase = ModalPhase::Steady;
        self.draft = None;
    }

    /// Animated close used after a successful commit: the exit transition
    /// plays for [`CLOSE_DELAY`], then the dialog closes. The commit's
    /// network call has already completed by the time this runs.
    pub async fn dismiss(&mut self) {
        if !self.is_open() {
            return;
        }
        self.begin_close();
        sleep(CLOSE_DELAY).await;
        self.finish_close();
    }
}

impl<R: Record> Default for ModalController<R> {
    fn default() -> Self {
        Self::new()
    }
}
