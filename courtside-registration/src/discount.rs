//! Discount engine
//!
//! Holds the applied-discount state. Validation gates (empty code, no
//! category, party size) live in the session, which also owns the
//! forced removal on category or party-size change; the engine itself
//! guarantees that a failed attempt never half-applies.

use shared::models::DiscountResult;

/// A code the backend accepted, together with its validation result.
#[derive(Debug, Clone)]
pub struct AppliedDiscount {
    pub code: String,
    pub result: DiscountResult,
}

/// Applied/removed discount state.
#[derive(Debug, Clone, Default)]
pub struct DiscountEngine {
    applied: Option<AppliedDiscount>,
}

impl DiscountEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently applied discount, if any.
    pub fn applied(&self) -> Option<&AppliedDiscount> {
        self.applied.as_ref()
    }

    pub fn code(&self) -> Option<&str> {
        self.applied.as_ref().map(|a| a.code.as_str())
    }

    pub fn result(&self) -> Option<&DiscountResult> {
        self.applied.as_ref().map(|a| &a.result)
    }

    /// Store a backend-accepted result. Only called with `valid` results;
    /// rejected attempts leave prior state untouched.
    pub(crate) fn store(&mut self, code: String, result: DiscountResult) {
        debug_assert!(result.valid);
        self.applied = Some(AppliedDiscount { code, result });
    }

    /// Clear the discount. Idempotent.
    pub fn remove(&mut self) {
        self.applied = None;
    }
}
