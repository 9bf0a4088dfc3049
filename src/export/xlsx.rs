// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::SHEET_NAME;
use crate::export::excel_date::to_excel_date;
use crate::export::model::get_headers;
use crate::models::Record;
use crate::utils::formatting::{format_hours, format_reading};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

/// Serialize `records`, in the given order, as a single-sheet workbook:
/// one header row, one row per record. Returned in memory, never written
/// to disk here.
pub fn export_spreadsheet(records: &[Record]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    for (row_index, r) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        let (date_format, serial) = to_excel_date(&r.date);
        let date_fmt = cell_format(band).set_num_format(date_format);
        worksheet
            .write_with_format(row, 0, serial, &date_fmt)
            .map_err(to_export_error)?;
        col_widths[0] = col_widths[0].max(date_format.len());

        write_text(worksheet, row, 1, &r.operator, band)?;
        write_text(worksheet, row, 2, &r.fleet, band)?;
        write_number(worksheet, row, 3, r.initial_reading, band)?;
        write_number(worksheet, row, 4, r.final_reading, band)?;
        write_number(worksheet, row, 5, r.worked_hours, band)?;

        let shown = [
            UnicodeWidthStr::width(r.operator.as_str()),
            UnicodeWidthStr::width(r.fleet.as_str()),
            format_reading(r.initial_reading).len(),
            format_reading(r.final_reading).len(),
            format_hours(r.worked_hours).len(),
        ];
        for (i, w) in shown.into_iter().enumerate() {
            col_widths[i + 1] = col_widths[i + 1].max(w);
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save_to_buffer().map_err(to_export_error)
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    ws.write_with_format(row, col, s, &cell_format(bg))
        .map_err(to_export_error)?;
    Ok(())
}

fn write_number(ws: &mut Worksheet, row: u32, col: u16, n: f64, bg: Color) -> AppResult<()> {
    let fmt = cell_format(bg)
        .set_num_format("0.00")
        .set_align(FormatAlign::Right);
    ws.write_with_format(row, col, n, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
