//! Cancellation tokens forming a parent/child tree
//!
//! Cancelling a token cancels every token derived from it. The overlay cycler
//! relies on this: its pending revert timers are scheduled under children of
//! the cycle token, so stopping the cycle silences them all at once.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
struct Inner {
    cancelled: Cell<bool>,
    parent: Option<CancelToken>,
}

/// A cloneable cancellation flag with ancestor propagation
///
/// Clones share the same flag; [`CancelToken::child`] derives a new flag that
/// also reports cancelled whenever any ancestor does.
#[derive(Debug, Clone)]
pub struct CancelToken {
    inner: Rc<Inner>,
}

impl CancelToken {
    /// Create a root token
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                cancelled: Cell::new(false),
                parent: None,
            }),
        }
    }

    /// Derive a token that is cancelled whenever this one is
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            inner: Rc::new(Inner {
                cancelled: Cell::new(false),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Cancel this token and, transitively, all tokens derived from it
    pub fn cancel(&self) {
        self.inner.cancelled.set(true);
    }

    /// True if this token or any ancestor has been cancelled
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        if self.inner.cancelled.get() {
            return true;
        }
        self.inner
            .parent
            .as_ref()
            .is_some_and(CancelToken::is_cancelled)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
