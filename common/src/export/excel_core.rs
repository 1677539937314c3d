//! Excel checklist (shared core)
//!
//! One sheet, one row per item, a totals row at the bottom.

use crate::checklist::Checklist;
use crate::error::{Error, Result};
use rust_xlsxwriter::*;

const HEADERS: &[&str] = &["Category", "Item", "Quantity", "Status"];

/// Build the workbook in memory
pub fn generate_checklist_buffer(checklist: &Checklist, title: &str) -> Result<Vec<u8>> {
    build_workbook(checklist, title).map_err(|e| Error::Export(e.to_string()))
}

fn build_workbook(checklist: &Checklist, title: &str) -> std::result::Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14.0);
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));
    let later_format = Format::new().set_font_color(Color::RGB(0xD32F2F));
    let total_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Checklist")?;
    worksheet.set_column_width(0, 18)?;
    worksheet.set_column_width(1, 32)?;
    worksheet.set_column_width(2, 10)?;
    worksheet.set_column_width(3, 10)?;

    worksheet.write_string_with_format(0, 0, title, &title_format)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(2, col as u16, *header, &header_format)?;
    }

    let summary = checklist.summary();
    let mut row: u32 = 3;
    for category in &summary.categories {
        for item in checklist.items_in(&category.name) {
            worksheet.write_string(row, 0, &item.category)?;
            worksheet.write_string(row, 1, &item.name)?;
            worksheet.write_number(row, 2, f64::from(item.quantity))?;
            if item.is_deferred() {
                worksheet.write_string_with_format(row, 3, "Later", &later_format)?;
            } else {
                worksheet.write_string(row, 3, "Packed")?;
            }
            row += 1;
        }
    }

    worksheet.write_string_with_format(row, 1, "Total", &total_format)?;
    worksheet.write_number_with_format(row, 2, summary.total_quantity as f64, &total_format)?;

    workbook.save_to_buffer()
}
