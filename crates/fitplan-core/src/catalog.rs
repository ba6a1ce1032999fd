//! Activity catalog parsing.
//!
//! The catalog is a free-text document, one activity per line, each carrying
//! an explicit point designator ("5 pt", "3 pts", "1 point"). Lines without
//! a designator are headings or prose and are skipped — a point value is
//! never invented for them.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One catalog activity with its point value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub name: String,
    pub points: u32,
}

/// Parsed activity catalog.
///
/// `entries` preserves source order (used as filler priority); `lookup` is
/// keyed by lowercase name, last occurrence winning on collision.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    pub entries: Vec<ActivityEntry>,
    lookup: HashMap<String, u32>,
}

impl ActivityCatalog {
    /// Parse a catalog from raw document text.
    pub fn parse(text: &str) -> Self {
        let designator = Regex::new(r"(?i)(\d+)\s*(?:pt|pts|point|points)\b").unwrap();
        let leading_markers = Regex::new(r"^[-*\u{2022}\s]*").unwrap();
        let header = Regex::new(r"(?i)^(ACTIVITY|DAILY TRACKER|WEEK)\b").unwrap();

        let mut entries = Vec::new();
        for line in text.lines() {
            let s = line.trim();
            if s.is_empty() || s.starts_with('#') {
                continue;
            }
            let caps = match designator.captures(s) {
                Some(caps) => caps,
                None => continue,
            };
            let points: u32 = match caps[1].parse() {
                Ok(p) => p,
                Err(_) => continue,
            };
            let name = leading_markers.replace(s, "");
            let name = designator.replace_all(&name, "");
            let name = name
                .trim_matches(|c: char| c.is_whitespace() || c == '-' || c == ':' || c == '\u{2014}')
                .to_string();
            if name.is_empty() || header.is_match(&name) {
                continue;
            }
            entries.push(ActivityEntry { name, points });
        }

        let lookup = entries
            .iter()
            .map(|e| (e.name.to_lowercase(), e.points))
            .collect();
        Self { entries, lookup }
    }

    /// Load a catalog from a file. A missing or unreadable file yields an
    /// empty catalog, never an error.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(_) => Self::default(),
        }
    }

    /// Exact lookup by lowercase name.
    pub fn points_for(&self, name: &str) -> Option<u32> {
        self.lookup.get(&name.to_lowercase()).copied()
    }

    /// First lookup entry whose key occurs as a substring of `text`
    /// (lowercased). Used as the classifier's catalog fallback.
    pub fn points_by_substring(&self, text: &str) -> Option<u32> {
        let lower = text.to_lowercase();
        // Walk entries rather than the map so the match is deterministic.
        self.entries
            .iter()
            .find(|e| lower.contains(&e.name.to_lowercase()))
            .and_then(|e| self.points_for(&e.name))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
