//! Summary screen (terminal)

use crate::error::Result;
use dialoguer::Input;
use packwise_common::export::markdown::later_preview;
use packwise_common::{Checklist, PackingPlan};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Done,
    Delete(String),
    Add { category: String, name: String },
    Unknown(String),
}

pub const EDIT_HELP: &str = "[Enter] done  rm <id>  add <category>: <item>";

pub fn parse_edit(line: &str) -> EditCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return EditCommand::Done;
    }
    if let Some(id) = trimmed.strip_prefix("rm ") {
        return EditCommand::Delete(id.trim().to_string());
    }
    if let Some(rest) = trimmed.strip_prefix("add ") {
        if let Some((category, name)) = rest.split_once(':') {
            if !category.trim().is_empty() && !name.trim().is_empty() {
                return EditCommand::Add {
                    category: category.trim().to_string(),
                    name: name.trim().to_string(),
                };
            }
        }
    }
    EditCommand::Unknown(trimmed.to_string())
}

/// Let the user delete or add items after the game
pub fn edit_checklist(checklist: &mut Checklist) -> Result<()> {
    println!("{}", EDIT_HELP);
    loop {
        let line: String = Input::new()
            .with_prompt("edit")
            .allow_empty(true)
            .interact_text()?;

        match parse_edit(&line) {
            EditCommand::Done => return Ok(()),
            EditCommand::Delete(id) => {
                if checklist.delete(&id) {
                    println!("  removed {}", id);
                } else {
                    println!("  no item {}", id);
                }
            }
            EditCommand::Add { category, name } => {
                if let Some(id) = checklist.add_custom(&category, &name) {
                    println!("  added [{}] {} to {}", id, name, category);
                }
            }
            EditCommand::Unknown(text) => println!("  ? {}  ({})", text, EDIT_HELP),
        }
    }
}

pub fn render_summary(checklist: &Checklist, plan: Option<&PackingPlan>) -> String {
    let summary = checklist.summary();
    let card = checklist.share_card(plan);
    let mut out = String::from("🎒 Packing complete!\n");

    if !card.weather.is_empty() {
        out.push_str(&format!("   {} · {} items\n", card.weather, card.total_quantity));
    }
    out.push_str(&format!(
        "   Total: {}   Packed: {}   Later: {}\n",
        summary.total_quantity, summary.packed_count, card.later
    ));

    for category in &summary.categories {
        out.push_str(&format!("\n{} ({})\n", category.name, category.quantity));
        for item in checklist.items_in(&category.name) {
            let status = if item.is_deferred() { "Last minute item" } else { "Packed" };
            out.push_str(&format!("  [{}] {:<28} x{:<3} {}\n", item.id, item.name, item.quantity, status));
        }
    }

    if card.later > 0 {
        out.push_str(&format!("\n⚑ Pack before leaving ({}): {}\n", card.later, later_preview(checklist)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use packwise_common::{Decision, Outcome};

    #[test]
    fn test_render_summary() {
        let list = Checklist::from_decisions(vec![
            Decision { id: "a-0".into(), name: "Jacket".into(), category: "Clothing".into(), quantity: 1, outcome: Outcome::Packed },
            Decision { id: "b-0".into(), name: "Charger".into(), category: "Tech".into(), quantity: 2, outcome: Outcome::Deferred },
        ]);
        let text = render_summary(&list, None);
        assert!(text.contains("Total: 3   Packed: 1   Later: 1"));
        assert!(text.contains("Clothing (1)"));
        assert!(text.contains("Pack before leaving (1): Charger"));
    }

    #[test]
    fn test_parse_edit() {
        assert_eq!(parse_edit("  "), EditCommand::Done);
        assert_eq!(parse_edit("rm Clothing-0"), EditCommand::Delete("Clothing-0".into()));
        assert_eq!(
            parse_edit("add Clothing: Warm scarf"),
            EditCommand::Add { category: "Clothing".into(), name: "Warm scarf".into() }
        );
        assert!(matches!(parse_edit("add Clothing"), EditCommand::Unknown(_)));
        assert!(matches!(parse_edit("add : x"), EditCommand::Unknown(_)));
    }

    #[test]
    fn test_render_empty_summary() {
        let text = render_summary(&Checklist::default(), None);
        assert!(text.contains("Total: 0   Packed: 0   Later: 0"));
        assert!(!text.contains("Pack before leaving"));
    }
}
