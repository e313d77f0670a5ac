use crate::cli::GlobalArgs;
use crate::commands::{load_config, runtime};
use crate::error::{CliError, Result};
use crate::ui;
use cefr_client::workflow::gateway_message;
use cefr_client::{fetch_stats, CefrLevel, HttpGateway, StatsSummary};
use comfy_table::Table;

pub fn execute(global: &GlobalArgs, json: bool) -> Result<()> {
    let config = load_config(global)?;
    let locale = config.locale;
    let gateway = HttpGateway::new(config)?;
    let rt = runtime()?;

    let spinner = (!json).then(|| ui::spinner("Fetching statistics..."));
    let outcome = rt.block_on(fetch_stats(&gateway));
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let summary = outcome.map_err(|e| CliError::Service(gateway_message(&e, locale)))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    ui::section_header("Usage statistics");
    println!("Texts analysed: {}", summary.total_count);
    println!("Average length: {} characters", summary.avg_text_length_display());

    match level_table(&summary) {
        Some(table) => println!("{table}"),
        None => ui::info_message("No texts have been analysed yet"),
    }

    Ok(())
}

fn level_table(summary: &StatsSummary) -> Option<Table> {
    let levels = summary.levels_sorted();
    if levels.is_empty() {
        return None;
    }

    let mut table = ui::table(vec!["Level", "Description", "Texts", "Share"]);
    for level in levels {
        let description = CefrLevel::from_id(level.level_id)
            .map(CefrLevel::description)
            .unwrap_or("-");
        table.add_row(vec![
            level.level_label.clone(),
            description.to_string(),
            level.count.to_string(),
            level.share_percent(),
        ]);
    }
    Some(table)
}
