//! Event classification: reservation/event description → point value.
//!
//! An ordered rule table, first match wins. The order is positional
//! precedence, not a score: "Sunrise Yoga" hits the group-fitness rule (5)
//! before the bonus-event rule (3) because group fitness is listed first.
//! After the table, the activity catalog is consulted by substring, and the
//! final default is 1 point.

use regex::Regex;

use crate::catalog::ActivityCatalog;

/// How a matched rule turns an event into points.
enum PointRule {
    /// Fixed point value.
    Fixed(u32),
    /// One point per 15 minutes of duration, capped.
    PerQuarterHour { cap: u32 },
}

struct ClassRule {
    /// Tested against the lowercased event name.
    name: Option<Regex>,
    /// Tested against the lowercased location.
    location: Option<Regex>,
    rule: PointRule,
}

impl ClassRule {
    fn matches(&self, name: &str, location: &str) -> bool {
        self.name.as_ref().is_some_and(|re| re.is_match(name))
            || self.location.as_ref().is_some_and(|re| re.is_match(location))
    }
}

/// Ordered classifier over the fixed rule table plus a catalog fallback.
pub struct EventClassifier {
    rules: Vec<ClassRule>,
}

impl EventClassifier {
    pub fn new() -> Self {
        let name = |pat: &str| Some(Regex::new(pat).unwrap());
        let rules = vec![
            // Group fitness classes, line dancing included.
            ClassRule {
                name: name("yoga|strength|cycle|fitness class|power hour|line danc"),
                location: None,
                rule: PointRule::Fixed(5),
            },
            // Personal training / Pilates / physical therapy.
            ClassRule {
                name: name("personal train|pilates|physical therap"),
                location: None,
                rule: PointRule::Fixed(5),
            },
            // Court sports: 1 pt per 15 min, capped at 4 (60 min).
            ClassRule {
                name: name("pickle|pickleball|tennis|court sport"),
                location: name("court sports"),
                rule: PointRule::PerQuarterHour { cap: 4 },
            },
            ClassRule {
                name: name("golf range"),
                location: None,
                rule: PointRule::Fixed(1),
            },
            ClassRule {
                name: name("9 holes|nine holes"),
                location: None,
                rule: PointRule::Fixed(2),
            },
            ClassRule {
                name: name("18 holes|eighteen holes"),
                location: None,
                rule: PointRule::Fixed(4),
            },
            ClassRule {
                name: name("bocce"),
                location: None,
                rule: PointRule::Fixed(1),
            },
            // Bonus events.
            ClassRule {
                name: name("meditation|sunset yoga|sunrise yoga|foam roll|health fair|farmer"),
                location: None,
                rule: PointRule::Fixed(3),
            },
        ];
        Self { rules }
    }

    /// Assign points to an event described by name, location, and duration.
    pub fn classify(
        &self,
        name: &str,
        location: &str,
        duration_minutes: u32,
        catalog: &ActivityCatalog,
    ) -> u32 {
        let name_lower = name.to_lowercase();
        let loc_lower = location.to_lowercase();

        for rule in &self.rules {
            if rule.matches(&name_lower, &loc_lower) {
                return match rule.rule {
                    PointRule::Fixed(points) => points,
                    PointRule::PerQuarterHour { cap } => (duration_minutes / 15).min(cap),
                };
            }
        }
        if let Some(points) = catalog.points_by_substring(&name_lower) {
            return points;
        }
        1
    }
}

impl Default for EventClassifier {
    fn default() -> Self {
        Self::new()
    }
}
