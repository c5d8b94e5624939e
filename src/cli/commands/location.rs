use crate::AppContext;
use crate::core::{Clock, TimeTracker};
use crate::errors::AppResult;
use crate::ui::messages::{info, notify, warning};

/// Change the save location and remember it in the config file.
pub fn handle<C: Clock>(
    app: &mut TimeTracker<C>,
    ctx: &mut AppContext,
    path: &[String],
) -> AppResult<()> {
    let raw = path.join(" ");

    let chosen = match app.set_save_location(Some(&raw)) {
        Some(p) => p.to_path_buf(),
        None => {
            info("Save location unchanged.");
            return Ok(());
        }
    };

    notify(
        "Save Location Set",
        format!("Logs will now be saved to: {}", chosen.display()),
    );

    ctx.cfg.save_location = chosen.to_string_lossy().to_string();
    if let Err(e) = ctx.cfg.save_to(&ctx.config_path) {
        warning(format!("Save location not remembered for next run: {}", e));
    }

    Ok(())
}
