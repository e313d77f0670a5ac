use crate::cli::{GlobalArgs, InputArgs};
use crate::commands::{load_config, read_input};
use crate::error::Result;
use crate::ui;
use cefr_client::workflow::validate;
use cefr_client::{AnalysisInput, Locale, TextStats};
use serde::Serialize;

#[derive(Serialize)]
struct TextStatsReport {
    #[serde(flatten)]
    stats: TextStats,
    /// Why the text would be rejected by `analyze`, if it would
    problem: Option<String>,
}

pub fn execute(global: &GlobalArgs, source: InputArgs, json: bool) -> Result<()> {
    let locale = load_config(global)?.locale;
    let input = read_input(&source)?;
    let report = build_report(&input, locale);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    ui::section_header("Text statistics");
    println!("Characters: {}", report.stats.char_count);
    println!("Words:      {}", report.stats.word_count);
    println!("Sentences:  {}", report.stats.sentence_count);

    match &report.problem {
        Some(problem) => ui::warning_message(problem),
        None => ui::success_message("Ready for analysis"),
    }

    Ok(())
}

/// Counts for the text, or the decoded file when one was given
fn build_report(input: &AnalysisInput, locale: Locale) -> TextStatsReport {
    let stats = match &input.file {
        Some(file) => TextStats::compute(&String::from_utf8_lossy(&file.bytes)),
        None => TextStats::compute(&input.text),
    };

    TextStatsReport {
        stats,
        problem: validate(input)
            .err()
            .map(|invalid| invalid.message().render(locale)),
    }
}
