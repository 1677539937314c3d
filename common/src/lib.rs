//! Packwise Common Library
//!
//! The packing-triage core and the types shared by every front end:
//! queue building, swipe classification, the triage state machine, the
//! decision ledger, and the generation-service schema.

pub mod types;
pub mod error;
pub mod parser;
pub mod prompts;
pub mod queue;
pub mod gesture;
pub mod ledger;
pub mod triage;
pub mod luggage;
pub mod screen;
pub mod checklist;
pub mod chat;
pub mod export;

pub use types::{CategorySuggestion, LuggageKind, LuggageRecommendation, PackingPlan, SuggestedItem, Weather};
pub use error::{Error, Result};
pub use parser::{extract_json, parse_packing_plan};
pub use prompts::{assistant_greeting, build_assistant_instruction, build_plan_prompt, compose_trip_description, TRIP_TAGS};
pub use queue::{build_queue, PackingCandidate};
pub use gesture::{classify, Action, GestureSample, DEFAULT_SWIPE_THRESHOLD};
pub use ledger::{CategoryTotal, Decision, Ledger, LedgerSummary, Outcome};
pub use triage::{Transition, TriageSession, TriageState};
pub use luggage::{LuggageItem, LuggageSet};
pub use screen::{FlowEvent, Screen, ScreenFlow};
pub use checklist::{Checklist, ShareCard};
pub use chat::{ChatMessage, ChatTranscript, Role};
