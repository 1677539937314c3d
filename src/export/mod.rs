use crate::cli::ExportFormat;
use crate::error::{PackwiseError, Result};
use packwise_common::export::excel_core::generate_checklist_buffer;
use packwise_common::export::markdown::render_markdown;
use packwise_common::{Checklist, PackingPlan};
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", file_stem(title), extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_all(output: &Path, title: &str) -> Vec<(ExportFormat, PathBuf)> {
    let (dir, stem) = if output.is_dir() || output.extension().is_none() {
        (output.to_path_buf(), file_stem(title))
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| file_stem(title));
        (parent, stem)
    };

    [ExportFormat::Json, ExportFormat::Markdown, ExportFormat::Excel]
        .into_iter()
        .filter_map(|f| f.extension().map(|ext| (f, dir.join(format!("{}.{}", stem, ext)))))
        .collect()
}

/// "My Packing List" → "my-packing-list"
fn file_stem(title: &str) -> String {
    let stem: String = title
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let stem = stem.split('-').filter(|s| !s.is_empty()).collect::<Vec<_>>().join("-");
    if stem.is_empty() { "checklist".to_string() } else { stem }
}

/// Write the checklist in `format`; returns the files written
pub fn export_checklist(
    checklist: &Checklist,
    plan: Option<&PackingPlan>,
    format: ExportFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    if output.extension().is_none() {
        std::fs::create_dir_all(output)?;
    }

    let targets = match format {
        ExportFormat::All => output_paths_for_all(output, title),
        single => {
            let ext = single.extension().unwrap_or("md");
            vec![(single, output_path_for_format(output, title, ext))]
        }
    };

    let mut written = Vec::new();
    for (format, path) in targets {
        write_one(checklist, plan, format, &path, title)?;
        println!("  ✔ {}", path.display());
        written.push(path);
    }
    Ok(written)
}

fn write_one(
    checklist: &Checklist,
    plan: Option<&PackingPlan>,
    format: ExportFormat,
    path: &Path,
    title: &str,
) -> Result<()> {
    match format {
        ExportFormat::Json => std::fs::write(path, serde_json::to_string_pretty(checklist)?)?,
        ExportFormat::Markdown => {
            let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");
            let body = format!("{}\n_Generated {}_\n", render_markdown(checklist, plan, title), generated);
            std::fs::write(path, body)?
        }
        ExportFormat::Excel => std::fs::write(path, generate_checklist_buffer(checklist, title)?)?,
        ExportFormat::All => {
            return Err(PackwiseError::Export("'all' must be expanded into single formats".into()))
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("My Packing List"), "my-packing-list");
        assert_eq!(file_stem("  Trip: Oslo!! "), "trip-oslo");
        assert_eq!(file_stem("***"), "checklist");
    }

    #[test]
    fn test_paths_for_all_from_file_name() {
        let paths = output_paths_for_all(Path::new("out/trip.json"), "ignored");
        let names: Vec<String> = paths.iter().map(|(_, p)| p.display().to_string()).collect();
        assert_eq!(names, vec!["out/trip.json", "out/trip.md", "out/trip.xlsx"]);
    }
}
