//! Catalogue of the linguistic metrics returned with a prediction.
//!
//! The catalogue is a fixed, ordered table. Each row names a formatting rule
//! instead of carrying its own closure; [`format_value`] interprets the rule.

use crate::config::Locale;
use crate::messages::LocalizedText;
use crate::types::PredictionResult;
use serde::Serialize;
use std::fmt;

/// Family a metric belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricGroup {
    Lexical,
    Syntax,
    Pos,
    Tense,
    Readability,
}

impl MetricGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricGroup::Lexical => "lexical",
            MetricGroup::Syntax => "syntax",
            MetricGroup::Pos => "pos",
            MetricGroup::Tense => "tense",
            MetricGroup::Readability => "readability",
        }
    }
}

impl fmt::Display for MetricGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a raw metric value is turned into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// Fraction in [0, 1] shown as a percentage
    Percent { decimals: usize },
    /// Average word count, shown with a localized unit
    Words { decimals: usize },
    /// Plain continuous score
    Score { decimals: usize },
}

/// Static description of one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub key: &'static str,
    pub label: LocalizedText,
    pub group: MetricGroup,
    pub description: LocalizedText,
    pub rule: FormatRule,
}

impl MetricDescriptor {
    pub fn format(&self, value: f64, locale: Locale) -> String {
        format_value(self.rule, value, locale)
    }
}

/// A metric from a particular result, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMetric {
    pub key: &'static str,
    pub label: &'static str,
    pub group: MetricGroup,
    pub value: f64,
    pub display: String,
}

const WORDS_UNIT: LocalizedText = LocalizedText::new("words", "слів");

/// Round half away from zero to `decimals` places and format with exactly that many digits
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals, rounded)
}

/// Render `value` according to `rule`
pub fn format_value(rule: FormatRule, value: f64, locale: Locale) -> String {
    match rule {
        FormatRule::Percent { decimals } => format!("{}%", format_fixed(value * 100.0, decimals)),
        FormatRule::Words { decimals } => {
            format!("{} {}", format_fixed(value, decimals), WORDS_UNIT.get(locale))
        }
        FormatRule::Score { decimals } => format_fixed(value, decimals),
    }
}

static METRICS: [MetricDescriptor; 12] = [
    MetricDescriptor {
        key: "sem_share_rare_zipf_lt_4",
        label: LocalizedText::new("Rare words", "Рідкісні слова"),
        group: MetricGroup::Lexical,
        description: LocalizedText::new(
            "Share of words that are very rare in English.\nA higher value means a harder text.",
            "Частка слів, які дуже рідко зустрічаються в англійській мові. \nБільший показник = текст складніший.",
        ),
        rule: FormatRule::Percent { decimals: 1 },
    },
    MetricDescriptor {
        key: "syn_avg_sentence_length",
        label: LocalizedText::new("Average sentence length", "Середня довжина речення"),
        group: MetricGroup::Syntax,
        description: LocalizedText::new(
            "How many words one sentence contains on average.\nLonger sentences mean a harder text.",
            "Скільки слів у середньому міститься в одному реченні. \nДовші речення = вища складність тексту.",
        ),
        rule: FormatRule::Words { decimals: 1 },
    },
    MetricDescriptor {
        key: "syn_share_complex_sentences",
        label: LocalizedText::new("Complex sentences", "Складні речення"),
        group: MetricGroup::Syntax,
        description: LocalizedText::new(
            "Share of sentences with several subordinate clauses or a complex structure.\nMore complex sentences mean a higher CEFR level.",
            "Частка речень, що містять кілька підрядних або складну структуру.\nБільше складних речень = вищий рівень CEFR. ",
        ),
        rule: FormatRule::Percent { decimals: 0 },
    },
    MetricDescriptor {
        key: "morph_share_nouns",
        label: LocalizedText::new("Nouns", "Іменники"),
        group: MetricGroup::Pos,
        description: LocalizedText::new(
            "Percentage of nouns in the text.\nMany nouns are typical of descriptive or academic texts.",
            "Відсоток іменників у тексті.\nБагато іменників характерно для описових або академічних текстів. ",
        ),
        rule: FormatRule::Percent { decimals: 0 },
    },
    MetricDescriptor {
        key: "morph_share_verbs",
        label: LocalizedText::new("Verbs", "Дієслова"),
        group: MetricGroup::Pos,
        description: LocalizedText::new(
            "Percentage of verbs in the text.\nA high value means an active style with a lot of action.",
            "Відсоток дієслів у тексті.\n Високий показник означає активний стиль і дії в тексті.",
        ),
        rule: FormatRule::Percent { decimals: 0 },
    },
    MetricDescriptor {
        key: "morph_share_adj",
        label: LocalizedText::new("Adjectives", "Прикметники"),
        group: MetricGroup::Pos,
        description: LocalizedText::new(
            "Share of adjectives.\nMany adjectives make a text more detailed and descriptive.",
            "Частка прикметників.\nВелика кількість прикметників робить текст більш деталізованим та описовим. ",
        ),
        rule: FormatRule::Percent { decimals: 0 },
    },
    MetricDescriptor {
        key: "morph_tense_past_share",
        label: LocalizedText::new("Past tense", "Минулий час"),
        group: MetricGroup::Tense,
        description: LocalizedText::new(
            "Share of verbs in the past tense.\nTypical of narratives and stories.",
            "Частка дієслів у минулому часі.\nХарактерно для наративів та історій. ",
        ),
        rule: FormatRule::Percent { decimals: 0 },
    },
    MetricDescriptor {
        key: "morph_tense_present_share",
        label: LocalizedText::new("Present tense", "Теперішній час"),
        group: MetricGroup::Tense,
        description: LocalizedText::new(
            "Share of verbs in the present tense.\nTypical of general descriptions, instructions and facts.",
            "Частка дієслів у теперішньому часі.\nТипово для загальних описів, інструкцій, фактів. ",
        ),
        rule: FormatRule::Percent { decimals: 0 },
    },
    MetricDescriptor {
        key: "morph_share_perfect",
        label: LocalizedText::new("Perfect forms", "Перфектні форми"),
        group: MetricGroup::Tense,
        description: LocalizedText::new(
            "Share of constructions such as have done, has been.\nThey tend to signal a more advanced writer.",
            "Частка конструкцій типу have done, has been.\nЇхня поява частіше свідчить про вищий рівень грамотності. ",
        ),
        rule: FormatRule::Percent { decimals: 0 },
    },
    MetricDescriptor {
        key: "read_fkgl",
        label: LocalizedText::new("Flesch–Kincaid Grade Level", "Flesch–Kincaid Grade Level"),
        group: MetricGroup::Readability,
        description: LocalizedText::new(
            "Classic readability metric: the school grade needed to understand the text.\nA higher score means a harder text.",
            "Класична метрика читабельності: оцінює, який \"шкільний рівень\" потрібен, щоб зрозуміти текст.\nВищий бал = складніший текст. ",
        ),
        rule: FormatRule::Score { decimals: 1 },
    },
    MetricDescriptor {
        key: "read_fog",
        label: LocalizedText::new("Gunning Fog Index", "Gunning Fog Index"),
        group: MetricGroup::Readability,
        description: LocalizedText::new(
            "Difficulty estimate based on long sentences and complex words.\nValues above 12 often indicate a professional or academic style.",
            "Оцінка складності, що враховує довгі речення та складні слова.\nПоказник понад 12 часто вказує на професійний або академічний стиль. ",
        ),
        rule: FormatRule::Score { decimals: 1 },
    },
    MetricDescriptor {
        key: "read_smog",
        label: LocalizedText::new("SMOG Index", "SMOG Index"),
        group: MetricGroup::Readability,
        description: LocalizedText::new(
            "Estimates the reader maturity required from the number of complex words.\nWorks well for short texts.",
            "Метрика оцінки зрілості читача на основі кількості складних слів.\nДобре працює для коротких текстів. ",
        ),
        rule: FormatRule::Score { decimals: 1 },
    },
];

/// Read-only access to the metric catalogue
pub struct MetricRegistry;

impl MetricRegistry {
    /// All metrics in display order
    pub fn all() -> &'static [MetricDescriptor] {
        &METRICS
    }

    pub fn iter() -> impl Iterator<Item = &'static MetricDescriptor> {
        METRICS.iter()
    }

    pub fn get(key: &str) -> Option<&'static MetricDescriptor> {
        METRICS.iter().find(|metric| metric.key == key)
    }

    pub fn by_group(group: MetricGroup) -> impl Iterator<Item = &'static MetricDescriptor> {
        METRICS.iter().filter(move |metric| metric.group == group)
    }

    /// Render the catalogued metrics present in `result`, in catalogue order.
    ///
    /// Metrics missing from the result are skipped, as are result metrics the
    /// catalogue does not know.
    pub fn render(result: &PredictionResult, locale: Locale) -> Vec<RenderedMetric> {
        let Some(values) = result.metrics.as_ref() else {
            return Vec::new();
        };

        METRICS
            .iter()
            .filter_map(|metric| {
                values.get(metric.key).map(|&value| RenderedMetric {
                    key: metric.key,
                    label: metric.label.get(locale),
                    group: metric.group,
                    value,
                    display: metric.format(value, locale),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashSet};

    #[test]
    fn test_catalogue_keys_are_unique() {
        let keys: HashSet<&str> = MetricRegistry::iter().map(|m| m.key).collect();
        assert_eq!(keys.len(), MetricRegistry::all().len());
    }

    #[test]
    fn test_catalogue_order() {
        let all = MetricRegistry::all();
        assert_eq!(all.first().map(|m| m.key), Some("sem_share_rare_zipf_lt_4"));
        assert_eq!(all.last().map(|m| m.key), Some("read_smog"));
        assert_eq!(MetricRegistry::by_group(MetricGroup::Pos).count(), 3);
        assert_eq!(MetricRegistry::by_group(MetricGroup::Readability).count(), 3);
    }

    #[test]
    fn test_percent_formatting() {
        let rare = MetricRegistry::get("sem_share_rare_zipf_lt_4").unwrap();
        assert_eq!(rare.format(0.1234, Locale::En), "12.3%");

        let nouns = MetricRegistry::get("morph_share_nouns").unwrap();
        assert_eq!(nouns.format(0.284, Locale::En), "28%");
        // halves round away from zero
        assert_eq!(nouns.format(0.125, Locale::En), "13%");
    }

    #[test]
    fn test_words_formatting_is_localized() {
        let length = MetricRegistry::get("syn_avg_sentence_length").unwrap();
        assert_eq!(length.format(17.04, Locale::En), "17.0 words");
        assert_eq!(length.format(17.06, Locale::Uk), "17.1 слів");
    }

    #[test]
    fn test_score_formatting() {
        let fkgl = MetricRegistry::get("read_fkgl").unwrap();
        assert_eq!(fkgl.format(9.0, Locale::En), "9.0");
        assert_eq!(fkgl.format(11.96, Locale::En), "12.0");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(-2.5, 0), "-3");
        assert_eq!(format_fixed(0.005, 3), "0.005");
        assert_eq!(format_fixed(1.0, 2), "1.00");
    }

    #[test]
    fn test_render_skips_absent_metrics() {
        let mut metrics = BTreeMap::new();
        metrics.insert("read_smog".to_string(), 10.44);
        metrics.insert("morph_share_verbs".to_string(), 0.21);
        metrics.insert("sem_unknown_metric".to_string(), 1.0);

        let result = PredictionResult {
            metrics: Some(metrics),
            ..PredictionResult::new(4, "B2")
        };

        let rendered = MetricRegistry::render(&result, Locale::En);
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].key, "morph_share_verbs");
        assert_eq!(rendered[0].display, "21%");
        assert_eq!(rendered[1].label, "SMOG Index");
        assert_eq!(rendered[1].display, "10.4");
    }

    #[test]
    fn test_render_without_metrics() {
        let result = PredictionResult::new(1, "A1");
        assert!(MetricRegistry::render(&result, Locale::Uk).is_empty());
    }
}
