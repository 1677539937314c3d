//! Packing triage state machine
//!
//! States are `Presenting(i)` for each card and `Complete`. Every input
//! (swipe release, button, quantity tap, undo) is one synchronous call.

use crate::gesture::{Action, GestureSample};
use crate::ledger::{Decision, Ledger, LedgerSummary, Outcome};
use crate::queue::{build_queue, PackingCandidate};
use crate::types::CategorySuggestion;

/// Number of cards shown stacked on screen
pub const VISIBLE_STACK: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageState {
    Presenting(usize),
    Complete,
}

/// Result of a commit or swipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Moved on to the card at `cursor`
    Advanced { cursor: usize },
    /// The last card was decided; the finished ledger for the summary
    Completed(Vec<Decision>),
    /// No state change (gesture under threshold, or session already complete)
    Ignored,
}

#[derive(Debug, Clone)]
pub struct TriageSession {
    queue: Vec<PackingCandidate>,
    cursor: usize,
    pending_quantity: u32,
    ledger: Ledger,
}

impl TriageSession {
    /// An empty queue starts out complete.
    pub fn new(queue: Vec<PackingCandidate>) -> Self {
        Self {
            queue,
            cursor: 0,
            pending_quantity: 1,
            ledger: Ledger::new(),
        }
    }

    pub fn from_categories(categories: &[CategorySuggestion]) -> Self {
        Self::new(build_queue(categories))
    }

    pub fn state(&self) -> TriageState {
        if self.cursor < self.queue.len() {
            TriageState::Presenting(self.cursor)
        } else {
            TriageState::Complete
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == TriageState::Complete
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn queue(&self) -> &[PackingCandidate] {
        &self.queue
    }

    pub fn current(&self) -> Option<&PackingCandidate> {
        self.queue.get(self.cursor)
    }

    /// The current card plus the ones stacked behind it
    pub fn upcoming(&self) -> &[PackingCandidate] {
        let end = (self.cursor + VISIBLE_STACK).min(self.queue.len());
        &self.queue[self.cursor.min(end)..end]
    }

    pub fn pending_quantity(&self) -> u32 {
        self.pending_quantity
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Cards decided so far that left no ledger entry
    pub fn discard_count(&self) -> usize {
        self.cursor - self.ledger.len()
    }

    /// Percentage of cards decided
    pub fn progress(&self) -> f64 {
        if self.queue.is_empty() {
            return 100.0;
        }
        self.cursor as f64 / self.queue.len() as f64 * 100.0
    }

    /// Running totals over the ledger as it stands
    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary()
    }

    /// Commit `action` for the current card with an explicit quantity
    ///
    /// Pack and defer record a decision (quantity floored at 1), discard
    /// records nothing. The pending quantity resets and the cursor advances.
    pub fn commit(&mut self, action: Action, quantity: u32) -> Transition {
        let Some(candidate) = self.queue.get(self.cursor) else {
            return Transition::Ignored;
        };

        if let Some(outcome) = Outcome::from_action(action) {
            let decision = Decision::from_candidate(candidate, quantity, outcome);
            self.ledger.push(self.cursor, decision);
        }

        self.pending_quantity = 1;
        self.cursor += 1;

        if self.cursor < self.queue.len() {
            Transition::Advanced { cursor: self.cursor }
        } else {
            Transition::Completed(self.ledger.to_vec())
        }
    }

    /// Button path: commit with the pending quantity
    pub fn commit_pending(&mut self, action: Action) -> Transition {
        self.commit(action, self.pending_quantity)
    }

    /// Drag path: classify the release, then commit like the buttons do
    pub fn swipe(&mut self, sample: GestureSample, threshold: f64) -> Transition {
        match sample.classify(threshold) {
            Some(action) => self.commit_pending(action),
            None => Transition::Ignored,
        }
    }

    /// Step back one card, dropping its ledger entry if it had one
    ///
    /// Returns false (and changes nothing) at the first card.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.ledger.pop_at(self.cursor);
        self.pending_quantity = 1;
        true
    }

    /// `pending = max(1, pending + delta)`
    pub fn adjust_quantity(&mut self, delta: i64) -> u32 {
        let next = (i64::from(self.pending_quantity) + delta).clamp(1, i64::from(u32::MAX));
        self.pending_quantity = next as u32;
        self.pending_quantity
    }

    pub fn into_decisions(self) -> Vec<Decision> {
        self.ledger.to_vec()
    }
}
