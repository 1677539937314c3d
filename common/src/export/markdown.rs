//! Markdown checklist
//!
//! One section per category in first-seen order, `- [ ]` lines for packed
//! items and `- [ ] ... (later)` for deferred ones.

use crate::checklist::Checklist;
use crate::types::PackingPlan;

/// Number of deferred items listed in the reminder line before "+N"
pub const LATER_PREVIEW: usize = 5;

/// Render the checklist as Markdown
///
/// # Arguments
/// * `checklist` - final list
/// * `plan` - generated plan, used for the weather/luggage header when present
/// * `title` - document heading
pub fn render_markdown(checklist: &Checklist, plan: Option<&PackingPlan>, title: &str) -> String {
    let summary = checklist.summary();
    let mut out = format!("# {}\n\n", title);

    if let Some(plan) = plan {
        out.push_str(&format!(
            "**Weather:** {} ({}, {})\n\n",
            plan.weather.summary, plan.weather.temp_range, plan.weather.rain_prob
        ));
        if !plan.luggage_recommendation.package_name.is_empty() {
            out.push_str(&format!("**Luggage:** {}\n\n", plan.luggage_recommendation.package_name));
        }
    }

    out.push_str(&format!(
        "Total items: {} ({} packed, {} later)\n",
        summary.total_quantity,
        summary.packed_count,
        summary.deferred_count()
    ));

    for category in &summary.categories {
        out.push_str(&format!("\n## {} ({})\n\n", category.name, category.quantity));
        for item in checklist.items_in(&category.name) {
            let mark = if item.is_deferred() { "[ ]" } else { "[x]" };
            let later = if item.is_deferred() { " (later)" } else { "" };
            out.push_str(&format!("- {} {} x{}{}\n", mark, item.name, item.quantity, later));
        }
    }

    if !summary.deferred.is_empty() {
        out.push_str(&format!("\n**Pack before leaving:** {}\n", later_preview(checklist)));
    }

    out
}

/// "a, b, c, d, e +2"
pub fn later_preview(checklist: &Checklist) -> String {
    let deferred = checklist.summary().deferred;
    let mut line = deferred
        .iter()
        .take(LATER_PREVIEW)
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    if deferred.len() > LATER_PREVIEW {
        line.push_str(&format!(" +{}", deferred.len() - LATER_PREVIEW));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Decision, Outcome};

    fn item(n: usize, category: &str, outcome: Outcome) -> Decision {
        Decision {
            id: format!("{}-{}", category, n),
            name: format!("Item{}", n),
            category: category.to_string(),
            quantity: 1,
            outcome,
        }
    }

    #[test]
    fn test_render_groups_by_category() {
        let list = Checklist::from_decisions(vec![
            item(0, "Clothing", Outcome::Packed),
            item(1, "Tech", Outcome::Deferred),
            item(2, "Clothing", Outcome::Packed),
        ]);
        let md = render_markdown(&list, None, "My Packing List");
        assert!(md.starts_with("# My Packing List"));
        assert!(md.contains("## Clothing (2)"));
        assert!(md.contains("- [ ] Item1 x1 (later)"));
        assert!(md.contains("- [x] Item2 x1"));
        assert!(md.find("## Clothing").unwrap() < md.find("## Tech").unwrap());
    }

    #[test]
    fn test_later_preview_truncates() {
        let list = Checklist::from_decisions((0..7).map(|n| item(n, "Misc", Outcome::Deferred)).collect());
        assert_eq!(later_preview(&list), "Item0, Item1, Item2, Item3, Item4 +2");
    }

    #[test]
    fn test_empty_checklist() {
        let md = render_markdown(&Checklist::default(), None, "Empty");
        assert!(md.contains("Total items: 0 (0 packed, 0 later)"));
        assert!(!md.contains("Pack before leaving"));
    }
}
