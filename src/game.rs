//! Interactive packing game
//!
//! Terminal stand-in for the swipe cards: one line of input per card.
//! Keys map to the same actions as the buttons, and `swipe DX DY` feeds a
//! drag release through the classifier.

use crate::error::Result;
use dialoguer::Input;
use packwise_common::{Action, Decision, GestureSample, Transition, TriageSession};
use tracing::debug;

/// One parsed line of game input
#[derive(Debug, Clone, PartialEq)]
pub enum GameInput {
    Act(Action),
    Swipe(GestureSample),
    More,
    Less,
    Undo,
    Quit,
    Help,
    Unknown(String),
}

/// How the game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every card decided
    Finished(Vec<Decision>),
    /// User quit early; decisions made so far
    Stopped(Vec<Decision>),
}

impl GameOutcome {
    pub fn into_decisions(self) -> Vec<Decision> {
        match self {
            GameOutcome::Finished(d) | GameOutcome::Stopped(d) => d,
        }
    }
}

pub const HELP: &str = "keys: [p]ack (swipe up)  [d]iscard (swipe down)  [l]ater (swipe left)  [+]/[-] quantity  [u]ndo  [q]uit  |  swipe DX DY";

pub fn parse_input(line: &str) -> GameInput {
    let trimmed = line.trim();
    let lower = trimmed.to_lowercase();

    if let Some(rest) = lower.strip_prefix("swipe") {
        return parse_offsets(rest).unwrap_or_else(|| GameInput::Unknown(trimmed.to_string()));
    }

    match lower.as_str() {
        "p" | "pack" | "up" | "w" => GameInput::Act(Action::Pack),
        "d" | "discard" | "down" | "s" => GameInput::Act(Action::Discard),
        "l" | "later" | "left" | "a" => GameInput::Act(Action::Defer),
        "+" | "=" => GameInput::More,
        "-" | "_" => GameInput::Less,
        "u" | "undo" | "z" => GameInput::Undo,
        "q" | "quit" => GameInput::Quit,
        "?" | "h" | "help" => GameInput::Help,
        _ => parse_offsets(&lower).unwrap_or_else(|| GameInput::Unknown(trimmed.to_string())),
    }
}

/// "DX DY" or "DX,DY"
fn parse_offsets(s: &str) -> Option<GameInput> {
    let mut parts = s.split(|c: char| c == ',' || c.is_whitespace()).filter(|p| !p.is_empty());
    let dx = parts.next()?.parse::<f64>().ok()?;
    let dy = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(GameInput::Swipe(GestureSample::new(dx, dy)))
}

/// Card text for the current candidate
pub fn render_card(session: &TriageSession) -> Option<String> {
    let candidate = session.current()?;
    let mut card = format!(
        "[{}/{}] {} ({}) x{}",
        session.cursor() + 1,
        session.len(),
        candidate.name,
        candidate.category,
        session.pending_quantity()
    );
    if let Some(reason) = &candidate.reason {
        card.push_str(&format!("\n      {}", reason));
    }
    let behind: Vec<&str> = session.upcoming().iter().skip(1).map(|c| c.name.as_str()).collect();
    if !behind.is_empty() {
        card.push_str(&format!("\n      next: {}", behind.join(", ")));
    }
    Some(card)
}

/// Apply one input; returns the transition when a card was decided
pub fn apply_input(session: &mut TriageSession, input: &GameInput, threshold: f64) -> Option<Transition> {
    match input {
        GameInput::Act(action) => Some(session.commit_pending(*action)),
        GameInput::Swipe(sample) => match session.swipe(*sample, threshold) {
            Transition::Ignored => None,
            other => Some(other),
        },
        GameInput::More => {
            session.adjust_quantity(1);
            None
        }
        GameInput::Less => {
            session.adjust_quantity(-1);
            None
        }
        GameInput::Undo => {
            session.undo();
            None
        }
        GameInput::Quit | GameInput::Help | GameInput::Unknown(_) => None,
    }
}

/// Run the game until the queue is exhausted or the user quits
pub fn run_game(session: &mut TriageSession, threshold: f64) -> Result<GameOutcome> {
    if session.is_complete() {
        println!("No items to sort.");
        return Ok(GameOutcome::Finished(session.ledger().to_vec()));
    }

    println!("🃏 {} items to sort", session.len());
    println!("{}\n", HELP);

    loop {
        let Some(card) = render_card(session) else {
            return Ok(GameOutcome::Finished(session.ledger().to_vec()));
        };
        println!("{}", card);

        let line: String = Input::new()
            .with_prompt(format!("{:.0}%", session.progress()))
            .allow_empty(true)
            .interact_text()?;

        let input = parse_input(&line);
        debug!(?input, cursor = session.cursor(), "game input");

        match &input {
            GameInput::Quit => {
                println!("Stopping; keeping {} decisions so far.", session.ledger().len());
                return Ok(GameOutcome::Stopped(session.ledger().to_vec()));
            }
            GameInput::Help => println!("{}", HELP),
            GameInput::Unknown(text) if !text.is_empty() => println!("  ? {}  ({})", text, HELP),
            GameInput::Undo if session.cursor() == 0 => println!("  nothing to undo"),
            _ => {}
        }

        match apply_input(session, &input, threshold) {
            Some(Transition::Completed(decisions)) => {
                println!("\n✔ All items sorted\n");
                return Ok(GameOutcome::Finished(decisions));
            }
            Some(Transition::Advanced { .. }) => println!(),
            _ => {
                if let GameInput::Swipe(_) = input {
                    println!("  (not far enough, card returns)");
                }
            }
        }
    }
}
