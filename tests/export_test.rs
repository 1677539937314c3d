//! Checklist export
//!
//! Writes every format into a temp directory and checks the files.

use packwise::cli::ExportFormat;
use packwise::export::export_checklist;
use packwise_common::{Checklist, Decision, Outcome, PackingPlan, Weather};
use tempfile::tempdir;

fn decision(id: &str, name: &str, category: &str, quantity: u32, outcome: Outcome) -> Decision {
    Decision {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        outcome,
    }
}

fn sample_checklist() -> Checklist {
    Checklist::from_decisions(vec![
        decision("Clothing-0", "Jacket", "Clothing", 1, Outcome::Packed),
        decision("Clothing-1", "Socks", "Clothing", 3, Outcome::Deferred),
        decision("Documents-0", "Passport", "Documents", 1, Outcome::Packed),
    ])
}

fn sample_plan() -> PackingPlan {
    PackingPlan {
        weather: Weather {
            summary: "Cool".to_string(),
            temp_range: "8°C - 15°C".to_string(),
            rain_prob: "40%".to_string(),
        },
        ..Default::default()
    }
}

#[test]
fn test_markdown_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("list.md");

    let written = export_checklist(
        &sample_checklist(),
        Some(&sample_plan()),
        ExportFormat::Markdown,
        &output,
        "Oslo Weekend",
    )
    .expect("markdown export failed");

    assert_eq!(written, vec![output.clone()]);
    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("# Oslo Weekend"));
    assert!(text.contains("**Weather:** Cool"));
    assert!(text.contains("## Clothing (4)"));
    assert!(text.contains("- [ ] Socks x3 (later)"));
    assert!(text.contains("- [x] Passport x1"));
}

#[test]
fn test_excel_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("list.xlsx");

    export_checklist(&sample_checklist(), None, ExportFormat::Excel, &output, "Oslo Weekend")
        .expect("excel export failed");

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");
}

/// `all` into a directory names files after the title
#[test]
fn test_export_all_into_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out_dir = dir.path().join("exports");

    let written = export_checklist(&sample_checklist(), None, ExportFormat::All, &out_dir, "My Packing List")
        .expect("export failed");

    assert_eq!(written.len(), 3);
    for ext in ["json", "md", "xlsx"] {
        assert!(out_dir.join(format!("my-packing-list.{}", ext)).exists(), "missing .{}", ext);
    }

    let json = std::fs::read_to_string(out_dir.join("my-packing-list.json")).unwrap();
    let reloaded: Checklist = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, sample_checklist());
}
