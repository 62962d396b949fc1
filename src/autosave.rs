//! Debounced auto-save for editor drafts.
//!
//! The editor records every keystroke's worth of changes here instead of
//! calling the store directly. Edits to the same note coalesce into one
//! pending patch whose deadline moves out with each edit; the store only
//! sees the patch once the user pauses for the debounce interval.

use std::time::{Duration, Instant};

use crate::model::NotePatch;
use crate::store::NotesStore;

/// A coalesced patch ready to hand to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    pub note_id: String,
    pub patch: NotePatch,
}

impl PendingSave {
    pub fn apply(self, store: &mut NotesStore) {
        tracing::debug!(id = %self.note_id, "Auto-saving note");
        store.update_note(&self.note_id, self.patch);
    }
}

#[derive(Debug)]
struct Pending {
    save: PendingSave,
    deadline: Instant,
}

#[derive(Debug)]
pub struct AutoSave {
    debounce: Duration,
    pending: Option<Pending>,
}

impl AutoSave {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending: None,
        }
    }

    /// Queue `patch` for `note_id` and restart the quiet period.
    ///
    /// If a different note already has a pending patch, that patch is
    /// returned and must be applied before anything else happens to the
    /// store.
    pub fn record(&mut self, note_id: &str, patch: NotePatch, now: Instant) -> Option<PendingSave> {
        let deadline = now + self.debounce;
        match &mut self.pending {
            Some(pending) if pending.save.note_id == note_id => {
                pending.save.patch.merge(patch);
                pending.deadline = deadline;
                None
            }
            slot => {
                let displaced = slot.take().map(|pending| pending.save);
                *slot = Some(Pending {
                    save: PendingSave {
                        note_id: note_id.to_string(),
                        patch,
                    },
                    deadline,
                });
                displaced
            }
        }
    }

    /// The pending patch, once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<PendingSave> {
        if self.pending.as_ref()?.deadline <= now {
            self.flush()
        } else {
            None
        }
    }

    /// The pending patch, regardless of its deadline.
    pub fn flush(&mut self) -> Option<PendingSave> {
        self.pending.take().map(|pending| pending.save)
    }

    /// Drop a pending patch for a note that is about to disappear.
    pub fn discard(&mut self, note_id: &str) {
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.save.note_id == note_id)
        {
            self.pending = None;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
