//! Interactive luggage confirmation
//!
//! Shows the recommended package and lets the user add, remove or resize
//! pieces before the game starts.

use crate::error::Result;
use dialoguer::Input;
use packwise_common::luggage::SIZE_STEP;
use packwise_common::{LuggageKind, LuggageSet, PackingPlan};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LuggageCommand {
    Confirm,
    Add(LuggageKind),
    Remove(String),
    Grow(String),
    Shrink(String),
    Unknown(String),
}

pub const HELP: &str = "[Enter] confirm  add <suitcase|backpack|handbag>  rm <id>  + <id>  - <id>";

pub fn parse_command(line: &str) -> LuggageCommand {
    let trimmed = line.trim();
    let mut parts = trimmed.split_whitespace();
    let verb = parts.next().unwrap_or("").to_lowercase();
    let arg = parts.next().map(str::to_string);

    match (verb.as_str(), arg) {
        ("" | "ok" | "y", None) => LuggageCommand::Confirm,
        ("add" | "a", Some(kind)) => match kind.parse() {
            Ok(kind) => LuggageCommand::Add(kind),
            Err(_) => LuggageCommand::Unknown(trimmed.to_string()),
        },
        ("rm" | "remove" | "r", Some(id)) => LuggageCommand::Remove(id),
        ("+", Some(id)) => LuggageCommand::Grow(id),
        ("-", Some(id)) => LuggageCommand::Shrink(id),
        _ => LuggageCommand::Unknown(trimmed.to_string()),
    }
}

/// Apply a command; false when nothing changed
pub fn apply_command(set: &mut LuggageSet, command: &LuggageCommand) -> bool {
    match command {
        LuggageCommand::Add(kind) => {
            set.add(*kind);
            true
        }
        LuggageCommand::Remove(id) => set.remove(id),
        LuggageCommand::Grow(id) => set.adjust_size(id, SIZE_STEP).is_some(),
        LuggageCommand::Shrink(id) => set.adjust_size(id, -SIZE_STEP).is_some(),
        LuggageCommand::Confirm | LuggageCommand::Unknown(_) => false,
    }
}

pub fn print_plan_overview(plan: &PackingPlan) {
    println!("☀ {} ({}, rain: {})", plan.weather.summary, plan.weather.temp_range, plan.weather.rain_prob);
    for tip in &plan.destination_tips {
        println!("  • {}", tip);
    }
    println!();
    println!("🧳 {}", plan.luggage_recommendation.package_name);
    if !plan.luggage_recommendation.reason.is_empty() {
        println!("  {}", plan.luggage_recommendation.reason);
    }
}

fn print_set(set: &LuggageSet) {
    for item in set.items() {
        println!("  [{}] {} {}\"", item.id, item.label, item.size);
    }
}

/// Let the user adjust the luggage until they confirm
pub fn confirm_luggage(plan: &PackingPlan) -> Result<LuggageSet> {
    let mut set = LuggageSet::from_recommendation(&plan.luggage_recommendation);
    if set.is_empty() {
        set.add(LuggageKind::Suitcase);
    }

    print_plan_overview(plan);
    println!("{}", HELP);

    loop {
        print_set(&set);
        let line: String = Input::new()
            .with_prompt("luggage")
            .allow_empty(true)
            .interact_text()?;

        let command = parse_command(&line);
        if command == LuggageCommand::Confirm {
            println!("✔ {} piece(s) of luggage\n", set.len());
            return Ok(set);
        }
        if !apply_command(&mut set, &command) {
            println!("  unchanged ({})", HELP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command(""), LuggageCommand::Confirm);
        assert_eq!(parse_command("add backpack"), LuggageCommand::Add(LuggageKind::Backpack));
        assert_eq!(parse_command("rm init-0"), LuggageCommand::Remove("init-0".into()));
        assert_eq!(parse_command("+ new-0"), LuggageCommand::Grow("new-0".into()));
        assert_eq!(parse_command("- new-0"), LuggageCommand::Shrink("new-0".into()));
        assert!(matches!(parse_command("add trunk"), LuggageCommand::Unknown(_)));
        assert!(matches!(parse_command("ok now"), LuggageCommand::Unknown(_)));
    }

    #[test]
    fn test_apply_commands() {
        let mut set = LuggageSet::default();
        assert!(apply_command(&mut set, &LuggageCommand::Add(LuggageKind::Handbag)));
        assert!(apply_command(&mut set, &LuggageCommand::Grow("new-0".into())));
        assert_eq!(set.items()[0].size, 22);
        assert!(!apply_command(&mut set, &LuggageCommand::Remove("new-0".into())));
        assert!(!apply_command(&mut set, &LuggageCommand::Shrink("missing".into())));
    }
}
