//! Front/back UID reconciliation.

use crate::models::record::UidMatch;

/// Outcome of comparing the UIDs recovered from both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Canonical UID: the front one if present, else the back one.
    pub uid: Option<String>,
    /// Agreement between the two sides.
    pub status: UidMatch,
}

/// Compare the front and back UIDs.
///
/// Anything short of two UIDs is reported as [`UidMatch::BackNotFound`],
/// including a back-only UID.
pub fn reconcile(front: Option<&str>, back: Option<&str>) -> Reconciliation {
    let status = match (front, back) {
        (Some(f), Some(b)) if f == b => UidMatch::Matched,
        (Some(_), Some(_)) => UidMatch::Mismatch,
        // Without both values there is nothing to compare.
        _ => UidMatch::BackNotFound,
    };

    Reconciliation {
        uid: front.or(back).map(str::to_string),
        status,
    }
}
