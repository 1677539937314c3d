//! Screen flow
//!
//! splash → input → processing_plan → luggage_selection → packing_game → summary
//!
//! A failed plan request is the only way back (to input).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Splash,
    Input,
    ProcessingPlan,
    LuggageSelection,
    PackingGame,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    SplashDone,
    PlanSubmitted,
    PlanReady,
    PlanFailed,
    LuggageConfirmed,
    PackingFinished,
}

impl Screen {
    /// Next screen for `event`, or None when the event does not apply here
    pub fn next(self, event: FlowEvent) -> Option<Screen> {
        use FlowEvent::*;
        use Screen::*;

        match (self, event) {
            (Splash, SplashDone) => Some(Input),
            (Input, PlanSubmitted) => Some(ProcessingPlan),
            (ProcessingPlan, PlanReady) => Some(LuggageSelection),
            (ProcessingPlan, PlanFailed) => Some(Input),
            (LuggageSelection, LuggageConfirmed) => Some(PackingGame),
            (PackingGame, PackingFinished) => Some(Summary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScreenFlow {
    current: Screen,
}

impl ScreenFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Apply `event`; a rejected event leaves the screen unchanged
    pub fn handle(&mut self, event: FlowEvent) -> bool {
        match self.current.next(event) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }
}
