// src/logstore/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::logstore::excel_date::{
    date_to_serial, parse_date_text, serial_to_date, serial_to_time, time_to_serial,
};
use crate::models::{COLUMNS, SessionRecord};
use crate::utils::time::{parse_time, round2};
use calamine::{Data, Reader, Xlsx, XlsxError, open_workbook};
use chrono::{NaiveDate, NaiveTime};
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Time Log";

static EMPTY_CELL: Data = Data::Empty;

/// Read every session row from the first sheet of the workbook at `path`.
///
/// A sheet with no cells at all is an empty table. Otherwise the first row
/// must be exactly the log header.
pub(crate) fn read_xlsx(path: &Path) -> AppResult<Vec<SessionRecord>> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: XlsxError| AppError::persistence(path, e))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| AppError::persistence(path, e))?,
        None => return Err(AppError::persistence(path, "workbook has no worksheet")),
    };

    let mut rows = range.rows();

    let header = match rows.next() {
        Some(h) => h,
        None => return Ok(Vec::new()),
    };
    check_header(path, header)?;

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        // header is spreadsheet row 1
        let line = index + 2;
        records.push(row_to_record(row).ok_or_else(|| {
            AppError::persistence(path, format!("row {line} does not match the log schema"))
        })?);
    }

    Ok(records)
}

fn check_header(path: &Path, header: &[Data]) -> AppResult<()> {
    let mut names: Vec<String> = header
        .iter()
        .map(|c| match c {
            Data::String(s) => s.trim().to_string(),
            Data::Empty => String::new(),
            other => format!("{other:?}"),
        })
        .collect();

    while names.last().is_some_and(|n| n.is_empty()) {
        names.pop();
    }

    if names.iter().map(String::as_str).eq(COLUMNS.iter().copied()) {
        Ok(())
    } else {
        Err(AppError::persistence(
            path,
            format!(
                "unexpected columns [{}], expected [{}]",
                names.join(", "),
                COLUMNS.join(", ")
            ),
        ))
    }
}

/// `None` when a cell does not parse or a cell past the last column holds data.
fn row_to_record(row: &[Data]) -> Option<SessionRecord> {
    if row
        .iter()
        .skip(COLUMNS.len())
        .any(|c| !matches!(c, Data::Empty))
    {
        return None;
    }
    let cell = |i: usize| row.get(i).unwrap_or(&EMPTY_CELL);

    Some(SessionRecord {
        date: cell_to_date(cell(0))?,
        day: cell_to_text(cell(1))?,
        check_in: cell_to_time(cell(2))?,
        check_out: cell_to_time(cell(3))?,
        total_hours: cell_to_hours(cell(4))?,
        pause_hours: cell_to_hours(cell(5))?,
        working_hours: cell_to_hours(cell(6))?,
    })
}

fn cell_to_date(c: &Data) -> Option<NaiveDate> {
    match c {
        Data::DateTime(dt) => serial_to_date(dt.as_f64()),
        Data::Float(f) => serial_to_date(*f),
        Data::Int(i) => serial_to_date(*i as f64),
        Data::String(s) | Data::DateTimeIso(s) => parse_date_text(s),
        _ => None,
    }
}

fn cell_to_time(c: &Data) -> Option<NaiveTime> {
    match c {
        Data::DateTime(dt) => serial_to_time(dt.as_f64()),
        Data::Float(f) => serial_to_time(*f),
        Data::String(s) => parse_time(s),
        Data::DateTimeIso(s) => s.split('T').next_back().and_then(parse_time),
        _ => None,
    }
}

fn cell_to_text(c: &Data) -> Option<String> {
    match c {
        Data::String(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

fn cell_to_hours(c: &Data) -> Option<f64> {
    let value = match c {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then(|| round2(value))
}

/// Write the full table to `path`, replacing whatever was there.
pub(crate) fn write_xlsx(path: &Path, records: &[SessionRecord]) -> AppResult<()> {
    let to_err = |e: rust_xlsxwriter::XlsxError| AppError::persistence(path, e);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_err)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(to_err)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_err)?;

    let mut col_widths: Vec<usize> = COLUMNS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, record) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        write_record(worksheet, row, record, band).map_err(to_err)?;

        for (col, text) in record.to_row().iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(text.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_err)?;
    }

    workbook.save(path).map_err(to_err)?;
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_record(
    ws: &mut Worksheet,
    row: u32,
    r: &SessionRecord,
    bg: Color,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    let date_fmt = cell_format(bg).set_num_format("yyyy-mm-dd");
    let time_fmt = cell_format(bg).set_num_format("hh:mm:ss");
    let hours_fmt = cell_format(bg)
        .set_num_format("0.00")
        .set_align(FormatAlign::Right);
    let text_fmt = cell_format(bg);

    ws.write_number_with_format(row, 0, date_to_serial(r.date), &date_fmt)?;
    ws.write_string_with_format(row, 1, r.day.as_str(), &text_fmt)?;
    ws.write_number_with_format(row, 2, time_to_serial(r.check_in), &time_fmt)?;
    ws.write_number_with_format(row, 3, time_to_serial(r.check_out), &time_fmt)?;
    ws.write_number_with_format(row, 4, r.total_hours, &hours_fmt)?;
    ws.write_number_with_format(row, 5, r.pause_hours, &hours_fmt)?;
    ws.write_number_with_format(row, 6, r.working_hours, &hours_fmt)?;
    Ok(())
}
