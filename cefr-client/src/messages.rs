//! User-facing message catalogue.

use crate::config::Locale;

/// A piece of static text available in every supported locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub uk: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, uk: &'static str) -> Self {
        Self { en, uk }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Uk => self.uk,
        }
    }
}

/// Messages the workflow can put into its error state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    EmptyInput,
    TooShort { min_chars: usize },
    TooLong { max_chars: usize },
    ServerError,
    Unreachable,
    Busy,
}

impl Message {
    pub fn render(self, locale: Locale) -> String {
        match (self, locale) {
            (Message::EmptyInput, Locale::En) => "Please enter text or upload a file.".to_string(),
            (Message::EmptyInput, Locale::Uk) => {
                "Будь ласка, введіть текст або завантажте файл.".to_string()
            }
            (Message::TooShort { min_chars }, Locale::En) => {
                format!("The text is too short. Minimum {} characters.", min_chars)
            }
            (Message::TooShort { min_chars }, Locale::Uk) => {
                format!("Текст занадто короткий. Мінімум {} символів.", min_chars)
            }
            (Message::TooLong { max_chars }, Locale::En) => {
                format!("The text is too long. Maximum {} characters.", max_chars)
            }
            (Message::TooLong { max_chars }, Locale::Uk) => {
                format!("Текст занадто довгий. Максимум {} символів.", max_chars)
            }
            (Message::ServerError, Locale::En) => {
                "Something went wrong on the server. Please try again.".to_string()
            }
            (Message::ServerError, Locale::Uk) => {
                "Сталася помилка на сервері. Спробуйте ще раз.".to_string()
            }
            (Message::Unreachable, Locale::En) => "Could not connect to the server.".to_string(),
            (Message::Unreachable, Locale::Uk) => "Не вдалося зʼєднатись із сервером.".to_string(),
            (Message::Busy, Locale::En) => {
                "An analysis is already running. Please wait for the result.".to_string()
            }
            (Message::Busy, Locale::Uk) => {
                "Аналіз уже виконується. Зачекайте на результат.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_are_interpolated() {
        assert_eq!(
            Message::TooShort { min_chars: 150 }.render(Locale::En),
            "The text is too short. Minimum 150 characters."
        );
        assert_eq!(
            Message::TooLong { max_chars: 8000 }.render(Locale::Uk),
            "Текст занадто довгий. Максимум 8000 символів."
        );
    }

    #[test]
    fn test_every_message_has_both_locales() {
        let all = [
            Message::EmptyInput,
            Message::TooShort { min_chars: 1 },
            Message::TooLong { max_chars: 2 },
            Message::ServerError,
            Message::Unreachable,
            Message::Busy,
        ];
        for message in all {
            let en = message.render(Locale::En);
            let uk = message.render(Locale::Uk);
            assert!(!en.is_empty());
            assert!(!uk.is_empty());
            assert_ne!(en, uk);
        }
    }

    #[test]
    fn test_localized_text() {
        let text = LocalizedText::new("Nouns", "Іменники");
        assert_eq!(text.get(Locale::En), "Nouns");
        assert_eq!(text.get(Locale::Uk), "Іменники");
    }
}
