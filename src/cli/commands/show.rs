use crate::core::{Clock, TimeTracker};
use crate::errors::AppResult;
use crate::models::COLUMNS;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

/// Print every row of the log file.
pub fn handle<C: Clock>(app: &TimeTracker<C>) -> AppResult<()> {
    let path = app.store().target_path();
    let rows = app.store().read_rows()?;

    if rows.is_empty() {
        info(format!("No sessions logged in {} yet.", path.display()));
        return Ok(());
    }

    header(path.display());

    let mut table = Table::with_headers(&COLUMNS);
    for record in &rows {
        table.add_row(record.to_row());
    }
    print!("{}", table.render());

    let worked: f64 = rows.iter().map(|r| r.working_hours).sum();
    println!("\n{} session(s), {:.2} working hours", rows.len(), worked);
    Ok(())
}
