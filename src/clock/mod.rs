use std::fmt::Display;

use chrono::{DateTime, Local, Locale, TimeZone};

pub const DEFAULT_LOCALE: Locale = Locale::tr_TR;

const TIME_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%d %b %Y";
const DAY_FORMAT: &str = "%A";

/// Text shown in the note header for one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    pub time: String,
    pub date: String,
    pub day: String,
}

impl ClockReading {
    /// Date above day name, as rendered under the clock.
    pub fn date_block(&self) -> String {
        format!("{}\n{}", self.date, self.day)
    }
}

/// Formats clock text in an explicit locale; process locale state is never touched.
#[derive(Debug, Clone, Copy)]
pub struct ClockFormatter {
    locale: Locale,
}

impl Default for ClockFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl ClockFormatter {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn from_locale_name(name: Option<&str>) -> Self {
        let Some(name) = name.map(str::trim).filter(|name| !name.is_empty()) else {
            return Self::default();
        };
        match Locale::try_from(name) {
            Ok(locale) => Self::new(locale),
            Err(_) => {
                tracing::warn!(
                    locale = name,
                    fallback = ?DEFAULT_LOCALE,
                    "unknown locale; using default"
                );
                Self::default()
            }
        }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub fn format<Tz>(&self, instant: &DateTime<Tz>) -> ClockReading
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let localized = |pattern: &str| instant.format_localized(pattern, self.locale).to_string();
        ClockReading {
            time: instant.format(TIME_FORMAT).to_string(),
            date: uppercase_for_locale(&localized(DATE_FORMAT), self.locale),
            day: uppercase_for_locale(&localized(DAY_FORMAT), self.locale),
        }
    }

    pub fn now(&self) -> ClockReading {
        self.format(&Local::now())
    }
}

/// Upper-cases `text`, keeping the dotted/dotless i distinction where the locale has one.
pub fn uppercase_for_locale(text: &str, locale: Locale) -> String {
    if !has_dotted_i(locale) {
        return text.to_uppercase();
    }
    text.chars()
        .map(|ch| match ch {
            'i' => "İ".to_string(),
            other => other.to_uppercase().collect(),
        })
        .collect()
}

fn has_dotted_i(locale: Locale) -> bool {
    matches!(locale, Locale::tr_TR | Locale::az_AZ)
}
