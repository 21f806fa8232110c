// ── Operation status context ──
//
// Explicit loading/busy/error state for UI consumers. Flags bracket
// their operation: set when the window opens, cleared when the guard
// drops — on success, failure, and unwind alike.

use crate::error::CoreError;

/// Shown when a failure renders to an empty message.
const GENERIC_FAILURE: &str = "The request failed";

/// Status context for asynchronous operations.
///
/// `loading` covers the list fetch; `busy` covers any create, update, or
/// delete in flight. The two windows are independent. A single `error`
/// slot holds the last failure's message — cleared at the start of every
/// new operation, overwritten (never appended) on each failure.
///
/// The context only exposes the flags; it does not enforce mutual
/// exclusion. Callers gate mutating actions on [`is_idle`](Self::is_idle).
#[derive(Debug, Default)]
pub struct OpStatus {
    loading: bool,
    busy: bool,
    error: Option<String>,
}

impl OpStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while the list fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `true` while a create/update/delete is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// `true` when no operation is in flight.
    pub fn is_idle(&self) -> bool {
        !self.loading && !self.busy
    }

    /// The last failure's message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Open the loading window: clears the error slot, sets `loading`.
    /// The flag clears when the returned guard drops.
    #[must_use = "the loading flag clears as soon as the guard drops"]
    pub fn begin_loading(&mut self) -> StatusGuard<'_> {
        self.error = None;
        self.loading = true;
        StatusGuard {
            flag: &mut self.loading,
        }
    }

    /// Open the busy window: clears the error slot, sets `busy`.
    /// The flag clears when the returned guard drops.
    #[must_use = "the busy flag clears as soon as the guard drops"]
    pub fn begin_busy(&mut self) -> StatusGuard<'_> {
        self.error = None;
        self.busy = true;
        StatusGuard {
            flag: &mut self.busy,
        }
    }

    /// Record a failure, overwriting any previous message. An empty
    /// rendering falls back to a generic message.
    pub fn record(&mut self, err: &CoreError) {
        let message = err.to_string();
        self.error = Some(if message.trim().is_empty() {
            GENERIC_FAILURE.to_owned()
        } else {
            message
        });
    }
}

/// RAII guard for a status flag. Dropping it clears the flag — the
/// guaranteed-cleanup path regardless of how the operation exits.
#[derive(Debug)]
pub struct StatusGuard<'a> {
    flag: &'a mut bool,
}

impl Drop for StatusGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
