use crate::cli::{GlobalArgs, InputArgs};
use crate::commands::{load_config, read_input, runtime};
use crate::error::{CliError, Result};
use crate::ui;
use cefr_client::metrics::format_fixed;
use cefr_client::{HttpGateway, Locale, MetricRegistry, PredictionResult, PredictionWorkflow, RenderedMetric};
use colored::Colorize;
use comfy_table::Table;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    pub source: InputArgs,
    pub json: bool,
    pub metrics: bool,
    pub probabilities: bool,
}

/// JSON shape printed by `analyze --json`
#[derive(Serialize)]
struct AnalysisReport<'a> {
    #[serde(flatten)]
    result: &'a PredictionResult,
    description: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rendered_metrics: Vec<RenderedMetric>,
}

pub fn execute(global: &GlobalArgs, args: AnalyzeArgs) -> Result<()> {
    let config = load_config(global)?;
    let input = read_input(&args.source)?;
    let locale = config.locale;

    let workflow = PredictionWorkflow::new(HttpGateway::new(config)?, locale);
    let rt = runtime()?;

    let spinner = (!args.json).then(|| ui::spinner("Analysing text..."));
    let outcome = rt.block_on(workflow.analyze(input));
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            let message = workflow
                .error()
                .or_else(|| err.user_message(locale))
                .unwrap_or_else(|| err.to_string());
            return Err(CliError::Service(message));
        }
    };

    if args.json {
        let report = AnalysisReport {
            result: &result,
            description: result.level().map(|level| level.description()),
            rendered_metrics: MetricRegistry::render(&result, locale),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    ui::section_header("CEFR level");
    println!("{}", level_line(&result));

    if args.probabilities {
        match probability_table(&result) {
            Some(table) => {
                ui::section_header("Probabilities");
                println!("{table}");
            }
            None => ui::warning_message("The service did not report level probabilities"),
        }
    }

    if args.metrics {
        match metrics_table(&result, locale) {
            Some(table) => {
                ui::section_header("Metrics");
                println!("{table}");
            }
            None => ui::warning_message("The service did not report any known metrics"),
        }
    }

    Ok(())
}

fn level_line(result: &PredictionResult) -> String {
    match result.level() {
        Some(level) => format!(
            "{} {}",
            ui::level_badge(&result.level_label),
            level.description().bright_white()
        ),
        None => ui::level_badge(&result.level_label).to_string(),
    }
}

fn probability_table(result: &PredictionResult) -> Option<Table> {
    let ranked = result.ranked_probabilities();
    if ranked.is_empty() {
        return None;
    }

    let mut table = ui::table(vec!["Level", "Probability"]);
    for (label, probability) in ranked {
        table.add_row(vec![label.to_string(), format!("{}%", format_fixed(probability * 100.0, 1))]);
    }
    Some(table)
}

fn metrics_table(result: &PredictionResult, locale: Locale) -> Option<Table> {
    let rendered = MetricRegistry::render(result, locale);
    if rendered.is_empty() {
        return None;
    }

    let mut table = ui::table(vec!["Metric", "Group", "Value"]);
    for metric in rendered {
        table.add_row(vec![
            metric.label.to_string(),
            metric.group.to_string(),
            metric.display,
        ]);
    }
    Some(table)
}
