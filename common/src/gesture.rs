//! Swipe gesture classifier
//!
//! Vertical motion dominates: up packs, down discards. Left defers.
//! Right is not an action.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default drag distance a card must travel before release counts
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 100.0;

/// What the user decided for the card on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Pack,
    Discard,
    /// "Later"
    Defer,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Pack => write!(f, "pack"),
            Action::Discard => write!(f, "discard"),
            Action::Defer => write!(f, "later"),
        }
    }
}

/// Drag offset at release time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub dx: f64,
    pub dy: f64,
}

impl GestureSample {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn classify(&self, threshold: f64) -> Option<Action> {
        classify(self.dx, self.dy, threshold)
    }
}

/// Classify a released drag, first match wins:
///
/// 1. `dy <= -T` → Pack
/// 2. `dy >= T` → Discard
/// 3. `dx <= -T` → Defer
/// 4. otherwise → None (card springs back)
///
/// A threshold that is not a positive finite number is replaced by
/// [`DEFAULT_SWIPE_THRESHOLD`].
pub fn classify(dx: f64, dy: f64, threshold: f64) -> Option<Action> {
    let t = if threshold.is_finite() && threshold > 0.0 {
        threshold
    } else {
        DEFAULT_SWIPE_THRESHOLD
    };

    if dy <= -t {
        Some(Action::Pack)
    } else if dy >= t {
        Some(Action::Discard)
    } else if dx <= -t {
        Some(Action::Defer)
    } else {
        None
    }
}
