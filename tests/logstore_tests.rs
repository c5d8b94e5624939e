mod common;
use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::{NaiveDate, NaiveTime};
use common::{sample_record, temp_out, unwritable_out};
use rtimetracker::logstore::{LogFormat, LogStore};
use rtimetracker::models::COLUMNS;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;

fn header_of(path: &Path) -> Vec<String> {
    let mut wb: Xlsx<_> = open_workbook(path).expect("open xlsx");
    let range = wb.worksheet_range_at(0).expect("sheet").expect("range");
    range
        .rows()
        .next()
        .expect("header row")
        .iter()
        .map(|c| match c {
            Data::String(s) => s.clone(),
            other => format!("{other:?}"),
        })
        .collect()
}

#[test]
fn test_append_to_missing_xlsx_creates_one_row() {
    let out = temp_out("append_missing_xlsx", "xlsx");
    let store = LogStore::new(&out);
    let record = sample_record(9, 17, 15);

    assert_eq!(store.append(&record).expect("append"), 1);

    assert!(out.exists());
    assert_eq!(header_of(&out), COLUMNS.to_vec());

    let rows = store.read_rows().expect("read back");
    assert_eq!(rows, vec![record]);
}

#[test]
fn test_append_twice_keeps_chronological_order() {
    let out = temp_out("append_twice_xlsx", "xlsx");
    let store = LogStore::new(&out);

    let first = sample_record(8, 12, 0);
    let second = sample_record(13, 18, 30);

    store.append(&first).unwrap();
    assert_eq!(store.append(&second).unwrap(), 2);

    let rows = store.read_rows().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], first);
    assert_eq!(rows[1], second);
    assert!(rows[1].check_in >= rows[0].check_out);
}

#[test]
fn test_read_rows_of_missing_file_is_empty() {
    let out = temp_out("read_missing", "xlsx");
    let store = LogStore::new(&out);

    assert!(store.read_rows().unwrap().is_empty());
    assert!(!out.exists());
}

#[test]
fn test_csv_log_round_trip() {
    let out = temp_out("append_csv", "csv");
    let store = LogStore::new(&out);

    store.append(&sample_record(9, 17, 15)).unwrap();
    store.append(&sample_record(18, 20, 0)).unwrap();

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(COLUMNS.join(",").as_str()));
    assert_eq!(
        lines.next(),
        Some("2025-01-06,Monday,09:00:00,17:00:00,8.00,0.25,7.75")
    );
    assert_eq!(
        lines.next(),
        Some("2025-01-06,Monday,18:00:00,20:00:00,2.00,0.00,2.00")
    );

    assert_eq!(store.read_rows().unwrap().len(), 2);
}

#[test]
fn test_empty_csv_file_is_an_empty_table() {
    let out = temp_out("append_empty_csv", "csv");
    fs::write(&out, "").unwrap();

    let store = LogStore::new(&out);
    assert_eq!(store.append(&sample_record(9, 10, 0)).unwrap(), 1);
}

#[test]
fn test_csv_with_other_columns_is_rejected() {
    let out = temp_out("append_bad_csv", "csv");
    let original = "date,hours\n2025-01-01,8\n";
    fs::write(&out, original).unwrap();

    let store = LogStore::new(&out);
    let err = store.append(&sample_record(9, 17, 0)).unwrap_err();

    assert!(err.is_persistence());
    assert!(err.to_string().contains("unexpected columns"));
    assert_eq!(fs::read_to_string(&out).unwrap(), original);
}

#[test]
fn test_csv_with_unparsable_row_is_rejected() {
    let out = temp_out("append_bad_row_csv", "csv");
    fs::write(
        &out,
        format!("{}\nyesterday,Monday,09:00:00,17:00:00,8,0,8\n", COLUMNS.join(",")),
    )
    .unwrap();

    let err = LogStore::new(&out)
        .append(&sample_record(9, 17, 0))
        .unwrap_err();
    assert!(err.is_persistence());
}

#[test]
fn test_file_that_is_not_a_workbook_is_rejected() {
    let out = temp_out("append_garbage", "xlsx");
    fs::write(&out, "this is not a spreadsheet").unwrap();

    let err = LogStore::new(&out)
        .append(&sample_record(9, 17, 0))
        .unwrap_err();
    assert!(err.is_persistence());
}

#[test]
fn test_workbook_with_other_columns_is_rejected() {
    let out = temp_out("append_other_schema", "xlsx");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.write(0, 0, "Name").unwrap();
    ws.write(0, 1, "Hours").unwrap();
    ws.write(1, 0, "someone").unwrap();
    ws.write(1, 1, 8.0).unwrap();
    wb.save(&out).unwrap();

    let err = LogStore::new(&out)
        .append(&sample_record(9, 17, 0))
        .unwrap_err();
    assert!(err.is_persistence());
    assert!(err.to_string().contains("unexpected columns"));
}

#[test]
fn test_workbook_with_text_dates_and_times_is_accepted() {
    let out = temp_out("append_text_cells", "xlsx");

    // dates and times as plain text, as other spreadsheet tools write them
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    for (col, h) in COLUMNS.iter().enumerate() {
        ws.write(0, col as u16, *h).unwrap();
    }
    ws.write(1, 0, "2024-12-31").unwrap();
    ws.write(1, 1, "Tuesday").unwrap();
    ws.write(1, 2, "08:30:00").unwrap();
    ws.write(1, 3, "12:00").unwrap();
    ws.write(1, 4, 3.5).unwrap();
    ws.write(1, 5, 0).unwrap();
    ws.write(1, 6, "3.5").unwrap();
    wb.save(&out).unwrap();

    let store = LogStore::new(&out);
    assert_eq!(store.append(&sample_record(9, 17, 15)).unwrap(), 2);

    let rows = store.read_rows().unwrap();
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    assert_eq!(rows[0].check_in, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    assert_eq!(rows[0].check_out, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    assert_eq!(rows[0].working_hours, 3.5);
    assert_eq!(rows[1].working_hours, 7.75);
}

#[test]
fn test_workbook_row_with_cells_past_the_schema_is_rejected() {
    let out = temp_out("append_extra_cells", "xlsx");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    for (col, h) in COLUMNS.iter().enumerate() {
        ws.write(0, col as u16, *h).unwrap();
    }
    ws.write(1, 0, "2024-12-31").unwrap();
    ws.write(1, 1, "Tuesday").unwrap();
    ws.write(1, 2, "08:30:00").unwrap();
    ws.write(1, 3, "12:00:00").unwrap();
    ws.write(1, 4, 3.5).unwrap();
    ws.write(1, 5, 0).unwrap();
    ws.write(1, 6, 3.5).unwrap();
    ws.write(1, 7, "client meeting").unwrap();
    wb.save(&out).unwrap();
    let before = fs::read(&out).unwrap();

    let err = LogStore::new(&out)
        .append(&sample_record(9, 17, 0))
        .unwrap_err();
    assert!(err.is_persistence());
    assert!(err.to_string().contains("row 2 does not match the log schema"));
    assert_eq!(fs::read(&out).unwrap(), before);
}

#[test]
fn test_unwritable_target_is_a_persistence_error() {
    let out = unwritable_out("append_unwritable", "xlsx");
    let err = LogStore::new(&out)
        .append(&sample_record(9, 17, 0))
        .unwrap_err();

    assert!(err.is_persistence());
    assert!(!out.exists());
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let out = temp_out("append_unsupported", "txt");
    let err = LogStore::new(&out)
        .append(&sample_record(9, 17, 0))
        .unwrap_err();

    assert!(err.is_persistence());
    assert!(err.to_string().contains("unsupported log format"));
    assert!(!out.exists());
}

#[test]
fn test_set_target_path_does_not_touch_files() {
    let first = temp_out("retarget_first", "xlsx");
    let second = temp_out("retarget_second", "csv");

    let mut store = LogStore::new(&first);
    store.set_target_path(&second);

    assert_eq!(store.target_path(), second.as_path());
    assert!(!first.exists());
    assert!(!second.exists());
    assert_eq!(LogFormat::from_path(store.target_path()).unwrap(), LogFormat::Csv);
}
