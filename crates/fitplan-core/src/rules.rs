//! Daily point cap extraction from the rules document.

use regex::Regex;
use std::path::Path;

/// Default daily cap when the rules document is missing or has no number.
pub const DEFAULT_DAILY_CAP: u32 = 18;

/// Extract the daily cap from rules text.
///
/// Prefers a "Daily … N" phrase; falls back to the first bare integer in the
/// document; defaults to [`DEFAULT_DAILY_CAP`].
pub fn parse_daily_cap(text: &str) -> u32 {
    let daily = Regex::new(r"(?i)Daily.*?(\d{1,3})").unwrap();
    if let Some(caps) = daily.captures(text) {
        if let Ok(n) = caps[1].parse() {
            return n;
        }
    }
    let any = Regex::new(r"(\d{1,3})").unwrap();
    if let Some(caps) = any.captures(text) {
        if let Ok(n) = caps[1].parse() {
            return n;
        }
    }
    DEFAULT_DAILY_CAP
}

/// Load the daily cap from a rules file, defaulting when the file is absent.
pub fn load_daily_cap(path: &Path) -> u32 {
    match std::fs::read_to_string(path) {
        Ok(text) => parse_daily_cap(&text),
        Err(_) => DEFAULT_DAILY_CAP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_total_phrase_wins() {
        let text = "Challenge runs 35 days.\nDaily Total (activity points): 18 max\n";
        assert_eq!(parse_daily_cap(text), 18);
    }

    #[test]
    fn falls_back_to_first_bare_integer() {
        assert_eq!(parse_daily_cap("cap is 20 per day"), 20);
    }

    #[test]
    fn defaults_when_no_number_present() {
        assert_eq!(parse_daily_cap("no numbers here"), DEFAULT_DAILY_CAP);
        assert_eq!(load_daily_cap(Path::new("/nonexistent/rules.txt")), DEFAULT_DAILY_CAP);
    }
}
