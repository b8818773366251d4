use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug)]
pub struct DateNormalizer {
    ordinal_suffix: Regex,
    date_candidate: Regex,
}

impl DateNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            ordinal_suffix: Regex::new(r"(\d+)(st|nd|rd|th)")
                .context("failed to compile ordinal suffix regex")?,
            date_candidate: Regex::new(r"\b(\d{1,2} [A-Z][a-z]+ \d{4})\b")
                .context("failed to compile date candidate regex")?,
        })
    }

    pub fn normalize(&self, raw: &str, context: &str) -> String {
        let cleaned = self.ordinal_suffix.replace_all(raw, "${1}");
        let selected = self.select_candidate(&cleaned);

        match parse_day_month_year(selected) {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => {
                if !selected.is_empty() {
                    debug!(value = %selected, context = %context, "date did not parse; keeping raw value");
                }
                selected.to_string()
            }
        }
    }

    // Heuristic: with two or more day-month-year phrases the second one is
    // taken, otherwise the whole text.
    fn select_candidate<'a>(&self, text: &'a str) -> &'a str {
        let mut candidates = self.date_candidate.find_iter(text);
        let first = candidates.next();
        match (first, candidates.next()) {
            (Some(_), Some(second)) => second.as_str(),
            _ => text,
        }
    }
}

// chrono's %B also accepts abbreviations; only full month names count here.
fn parse_day_month_year(text: &str) -> Option<NaiveDate> {
    let month = text.split_whitespace().nth(1)?;
    if !MONTH_NAMES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(month))
    {
        return None;
    }

    NaiveDate::parse_from_str(text, "%d %B %Y").ok()
}
