//! # Sales Session State
//!
//! Per-session state for the sales portal: the live order draft, the
//! memoized geolocation fix, and the submission re-entrancy guard.
//!
//! ## Thread Safety
//! The draft is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple operations may access/modify the draft
//! 2. Only one operation should modify the draft at a time
//! 3. Portal methods can run concurrently
//!
//! ## Geolocation Memoization
//! The position is read at most once per session. The first submission
//! resolves it (success or sentinel) and every later submission in the
//! same session reuses that fix without prompting again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use strider_core::types::LocationFix;
use strider_core::OrderDraft;

/// Session-scoped draft state.
#[derive(Debug)]
pub struct DraftState {
    draft: Arc<Mutex<OrderDraft>>,
    location_fix: Mutex<Option<LocationFix>>,
    submitting: AtomicBool,
}

impl DraftState {
    /// Creates a fresh session: empty draft, no fix, nothing in flight.
    pub fn new() -> Self {
        DraftState {
            draft: Arc::new(Mutex::new(OrderDraft::new())),
            location_fix: Mutex::new(None),
            submitting: AtomicBool::new(false),
        }
    }

    /// Executes a function with read access to the draft.
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderDraft) -> R,
    {
        let draft = self.draft.lock().expect("draft mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderDraft) -> R,
    {
        let mut draft = self.draft.lock().expect("draft mutex poisoned");
        f(&mut draft)
    }

    /// The memoized geolocation fix, if one has been resolved.
    pub fn cached_fix(&self) -> Option<LocationFix> {
        *self.location_fix.lock().expect("location fix mutex poisoned")
    }

    /// Memoizes the session's geolocation fix.
    pub fn store_fix(&self, fix: LocationFix) {
        *self.location_fix.lock().expect("location fix mutex poisoned") = Some(fix);
    }

    /// Tries to claim the submission slot. Returns `false` if another
    /// submission is already in flight.
    pub fn begin_submission(&self) -> bool {
        self.submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Releases the submission slot.
    pub fn end_submission(&self) {
        self.submitting.store(false, Ordering::Release);
    }

    /// Whether a submission currently holds the slot.
    ///
    /// Draft mutators check this: the payload snapshot and the
    /// clear-on-accept are separate lock acquisitions, so a line added
    /// mid-flight would be destroyed without ever being submitted.
    pub fn submission_in_flight(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }
}

impl Default for DraftState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
