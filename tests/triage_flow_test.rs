//! Triage session end to end
//!
//! Plan JSON → queue → game inputs → checklist, through the public API only.

use packwise::game::{apply_input, parse_input};
use packwise_common::{
    parse_packing_plan, Action, Checklist, PackingCandidate, Transition, TriageSession, TriageState,
    DEFAULT_SWIPE_THRESHOLD,
};

fn candidate(id: &str, name: &str, category: &str) -> PackingCandidate {
    PackingCandidate {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        reason: None,
        default_quantity: 1,
    }
}

fn jacket_and_passport() -> TriageSession {
    TriageSession::new(vec![
        candidate("a-0", "Jacket", "Clothing"),
        candidate("a-1", "Passport", "Documents"),
    ])
}

const PLAN_REPLY: &str = r#"Here you go:
```json
{
  "weather": {"summary": "Cool and breezy", "tempRange": "8°C - 15°C", "rainProb": "40%"},
  "destinationTips": ["Bring layers"],
  "luggageRecommendation": {
    "packageName": "Weekend Light Pack",
    "items": [{"type": "backpack", "size": 30, "reason": "Short trip"}],
    "reason": "Two nights only"
  },
  "categories": [
    {"name": "Clothing", "items": [
      {"name": "Rain jacket", "reason": "Showers expected", "defaultQuantity": 1},
      {"name": "Socks", "defaultQuantity": 3}
    ]},
    {"name": "Documents", "items": [{"name": "ID card", "defaultQuantity": 0}]}
  ]
}
```"#;

/// Pack the jacket, discard the passport
#[test]
fn test_pack_then_discard() {
    let mut session = jacket_and_passport();

    assert_eq!(session.commit(Action::Pack, 1), Transition::Advanced { cursor: 1 });
    let decisions = match session.commit(Action::Discard, 1) {
        Transition::Completed(decisions) => decisions,
        other => panic!("expected completion, got {:?}", other),
    };

    assert_eq!(decisions.len(), 1);
    let json = serde_json::to_value(&decisions[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "a-0",
            "name": "Jacket",
            "category": "Clothing",
            "quantity": 1,
            "outcome": "packed"
        })
    );

    let summary = session.summary();
    assert_eq!(summary.total_quantity, 1);
    assert_eq!(summary.category_total("Clothing"), 1);
    assert!(summary.deferred.is_empty());
}

/// Defer the passport, then take it back from the finished state
#[test]
fn test_undo_after_completion() {
    let mut session = jacket_and_passport();

    session.commit_pending(Action::Pack);
    assert_eq!(session.cursor(), 1);
    assert!(matches!(session.commit(Action::Defer, 2), Transition::Completed(_)));
    assert_eq!(session.state(), TriageState::Complete);

    assert!(session.undo());
    assert_eq!(session.state(), TriageState::Presenting(1));
    assert_eq!(session.pending_quantity(), 1);

    let ledger = session.ledger().to_vec();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].name, "Jacket");
    assert_eq!(ledger[0].quantity, 1);
}

/// Undo across a discard leaves the ledger alone
#[test]
fn test_undo_discard_keeps_earlier_entries() {
    let mut session = jacket_and_passport();
    session.commit(Action::Pack, 1);
    session.commit(Action::Discard, 1);

    assert!(session.undo());
    assert_eq!(session.ledger().len(), 1);
    assert!(session.undo());
    assert!(session.ledger().is_empty());
    assert!(!session.undo());
}

/// Model reply through the parser into a finished checklist
#[test]
fn test_plan_reply_to_checklist() {
    let plan = parse_packing_plan(PLAN_REPLY).expect("plan should parse");
    let mut session = TriageSession::from_categories(&plan.categories);
    assert_eq!(session.len(), 3);
    assert_eq!(session.queue()[2].default_quantity, 1);

    // rain jacket: swipe up
    apply_input(&mut session, &parse_input("swipe 10 -140"), DEFAULT_SWIPE_THRESHOLD);
    // socks: three, later
    for line in ["+", "+", "l"] {
        apply_input(&mut session, &parse_input(line), DEFAULT_SWIPE_THRESHOLD);
    }
    // id card: drag too short, then discard
    assert_eq!(apply_input(&mut session, &parse_input("0 60"), DEFAULT_SWIPE_THRESHOLD), None);
    let finished = apply_input(&mut session, &parse_input("d"), DEFAULT_SWIPE_THRESHOLD);

    let decisions = match finished {
        Some(Transition::Completed(decisions)) => decisions,
        other => panic!("expected completion, got {:?}", other),
    };
    let mut checklist = Checklist::from_decisions(decisions);
    assert_eq!(checklist.len(), 2);

    let summary = checklist.summary();
    assert_eq!(summary.total_quantity, 4);
    assert_eq!(summary.category_total("Clothing"), 4);
    assert_eq!(summary.category_total("Documents"), 0);
    assert_eq!(summary.deferred.len(), 1);
    assert_eq!(summary.deferred[0].name, "Socks");

    let id = checklist.add_custom("Documents", "Boarding pass").expect("custom item");
    assert!(checklist.delete(&id));
    assert_eq!(checklist.len(), 2);
}

/// A commit on a finished session changes nothing
#[test]
fn test_commit_after_completion_is_ignored() {
    let mut session = jacket_and_passport();
    session.commit(Action::Discard, 1);
    session.commit(Action::Discard, 1);

    assert_eq!(session.commit(Action::Pack, 1), Transition::Ignored);
    assert!(session.ledger().is_empty());
    assert_eq!(session.progress(), 100.0);
}
