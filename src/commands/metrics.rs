use crate::cli::GlobalArgs;
use crate::commands::load_config;
use crate::error::Result;
use crate::ui;
use cefr_client::{Locale, MetricRegistry};
use comfy_table::Table;

pub fn execute(global: &GlobalArgs) -> Result<()> {
    let locale = load_config(global)?.locale;

    ui::section_header("Metrics reported by the classifier");
    println!("{}", catalogue_table(locale));
    Ok(())
}

fn catalogue_table(locale: Locale) -> Table {
    let mut table = ui::table(vec!["Key", "Metric", "Group", "Description"]);
    for metric in MetricRegistry::iter() {
        table.add_row(vec![
            metric.key,
            metric.label.get(locale),
            metric.group.as_str(),
            metric.description.get(locale),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_lists_every_metric() {
        let table = catalogue_table(Locale::En);
        assert_eq!(table.row_iter().count(), MetricRegistry::all().len());

        let rendered = table.to_string();
        assert!(rendered.contains("read_smog"));
        assert!(rendered.contains("readability"));
    }

    #[test]
    fn test_catalogue_is_localized() {
        let rendered = catalogue_table(Locale::Uk).to_string();
        assert!(rendered.contains("Іменники"));
    }
}
