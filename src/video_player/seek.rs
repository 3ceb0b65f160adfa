// SPDX-License-Identifier: MPL-2.0
//! Seek request bookkeeping.
//!
//! Seeks complete asynchronously and can overlap. Each request gets a fresh
//! [`SeekToken`]; only the completion of the most recent request is acted on,
//! older completions are ignored.

use crate::application::port::SeekToken;

/// Why a seek was issued. Decides what happens when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekPurpose {
    /// Commit of a slider drag.
    Scrub,
    /// Relative jump from the skip buttons.
    Skip,
    /// Rewind to zero after play was requested at the end of the media.
    /// Playback starts once the seek finishes.
    RestartFromEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSeek {
    token: SeekToken,
    purpose: SeekPurpose,
    clears_seeking: bool,
}

/// Completion of the authoritative seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedSeek {
    pub purpose: SeekPurpose,
    /// The seek-in-progress flag should drop now.
    pub clears_seeking: bool,
}

/// Tracks which seek request is authoritative.
#[derive(Debug, Default)]
pub struct SeekTracker {
    issued: u64,
    latest: Option<PendingSeek>,
}

impl SeekTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new request, superseding any pending one.
    ///
    /// A superseded scrub hands its duty of clearing the seek-in-progress
    /// flag to the new request, so the flag cannot stay stuck.
    pub fn begin(&mut self, purpose: SeekPurpose) -> SeekToken {
        self.issued = self.issued.wrapping_add(1);
        let token = SeekToken::new(self.issued);
        let inherited = self.latest.is_some_and(|pending| pending.clears_seeking);
        self.latest = Some(PendingSeek {
            token,
            purpose,
            clears_seeking: purpose == SeekPurpose::Scrub || inherited,
        });
        token
    }

    /// A new drag owns the seek-in-progress flag; a pending request must not
    /// clear it from under the drag.
    pub fn drag_started(&mut self) {
        if let Some(pending) = self.latest.as_mut() {
            pending.clears_seeking = false;
        }
    }

    /// Resolves a completion. Returns `None` for superseded or unknown tokens.
    pub fn complete(&mut self, token: SeekToken) -> Option<CompletedSeek> {
        match self.latest {
            Some(pending) if pending.token == token => {
                self.latest = None;
                Some(CompletedSeek {
                    purpose: pending.purpose,
                    clears_seeking: pending.clears_seeking,
                })
            }
            _ => None,
        }
    }

    /// Forgets the pending request. Used when the item is replaced.
    ///
    /// A drag that is still under the user's finger keeps the
    /// seek-in-progress flag. Returns `true` when the dropped request was
    /// the one due to clear that flag, since its completion will never
    /// arrive now.
    pub fn reset(&mut self) -> bool {
        self.latest
            .take()
            .is_some_and(|pending| pending.clears_seeking)
    }
}
