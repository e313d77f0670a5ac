use crate::cli::GlobalArgs;
use crate::error::{Result, ResultExt};
use crate::ui;
use cefr_client::config::write_default_config;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::Path;

pub fn execute(global: &GlobalArgs, force: bool) -> Result<()> {
    let path = Path::new(&global.config);

    let written = write_config(path, force, || {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
            .default(false)
            .interact()
            .map_err(Into::into)
    })?;

    if written {
        ui::success_message(&format!("Created {}", path.display()));
        ui::info_message("Edit base_url to point at your classification service");
    } else {
        ui::warning_message(&format!("Kept existing {}", path.display()));
    }

    Ok(())
}

/// Write the template, asking `confirm` before replacing an existing file
fn write_config<F>(path: &Path, force: bool, confirm: F) -> Result<bool>
where
    F: FnOnce() -> Result<bool>,
{
    let overwrite = force || (path.exists() && confirm()?);
    write_default_config(path, overwrite)
        .with_context(|| format!("Failed to write {}", path.display()))
}
