//! Ordered vocabularies used by the formal-criteria scorer.
//!
//! Profile forms store these as free strings. Parsing is lenient (case and
//! separator insensitive) and returns `None` for anything outside the
//! vocabulary, which the scorer treats as "no ordinal match".

use serde::{Deserialize, Serialize};

/// Years-of-experience buckets, ordered from least to most experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceBucket {
    #[serde(rename = "0-1")]
    UpToOne,
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "2-4")]
    TwoToFour,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10+")]
    OverTen,
}

/// Requirement values that waive the experience criterion entirely.
const EXPERIENCE_WAIVERS: &[&str] = &["none", "no_experience", "not_required", "0"];

impl ExperienceBucket {
    pub fn parse(raw: &str) -> Option<Self> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.to_lowercase().as_str() {
            "0-1" | "<1" => Some(ExperienceBucket::UpToOne),
            "1-2" => Some(ExperienceBucket::OneToTwo),
            "2-4" => Some(ExperienceBucket::TwoToFour),
            "5-10" => Some(ExperienceBucket::FiveToTen),
            "10+" | ">10" => Some(ExperienceBucket::OverTen),
            _ => None,
        }
    }
}

pub fn is_experience_waiver(raw: &str) -> bool {
    let normalized = normalize(raw).replace(' ', "_");
    EXPERIENCE_WAIVERS.contains(&normalized.as_str())
}

/// Seniority ladder, ordered from most junior to most senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionLevel {
    Intern,
    Assistant,
    Junior,
    Specialist,
    Senior,
    TeamLeader,
    Manager,
    Director,
}

impl PositionLevel {
    /// Maps both ladder codes and the labels used in the profile forms
    /// ("Specialist", "Team Leader", "Head of Sales", ...) onto the ladder.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        let level = match normalized.as_str() {
            "intern" | "internship" | "trainee" => PositionLevel::Intern,
            "assistant" => PositionLevel::Assistant,
            "junior" | "junior specialist" => PositionLevel::Junior,
            "specialist" | "mid" | "regular" | "independent specialist" => {
                PositionLevel::Specialist
            }
            "senior" | "senior specialist" | "expert" => PositionLevel::Senior,
            "team leader" | "team lead" | "teamleader" | "coordinator" => {
                PositionLevel::TeamLeader
            }
            "manager" | "head" => PositionLevel::Manager,
            "director" | "executive" => PositionLevel::Director,
            s if s.starts_with("head of ") => PositionLevel::Manager,
            _ => return None,
        };
        Some(level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryChange {
    Yes,
    No,
    Open,
}

impl IndustryChange {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "yes" => Some(IndustryChange::Yes),
            "no" => Some(IndustryChange::No),
            "open" => Some(IndustryChange::Open),
            _ => None,
        }
    }

    pub fn accepts_change(self) -> bool {
        matches!(self, IndustryChange::Yes | IndustryChange::Open)
    }
}

/// Lowercases, maps `-`/`_` to spaces and collapses runs of whitespace.
fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .replace(&['-', '_'][..], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_buckets_are_ordered() {
        assert!(ExperienceBucket::UpToOne < ExperienceBucket::OneToTwo);
        assert!(ExperienceBucket::TwoToFour < ExperienceBucket::FiveToTen);
        assert!(ExperienceBucket::FiveToTen < ExperienceBucket::OverTen);
    }

    #[test]
    fn test_experience_parse_tolerates_spacing() {
        assert_eq!(
            ExperienceBucket::parse(" 2 - 4 "),
            Some(ExperienceBucket::TwoToFour)
        );
        assert_eq!(ExperienceBucket::parse("10+"), Some(ExperienceBucket::OverTen));
        assert_eq!(ExperienceBucket::parse("a lot"), None);
    }

    #[test]
    fn test_experience_waivers() {
        assert!(is_experience_waiver("none"));
        assert!(is_experience_waiver("No experience"));
        assert!(is_experience_waiver("not-required"));
        assert!(is_experience_waiver("0"));
        assert!(!is_experience_waiver("2-4"));
    }

    #[test]
    fn test_position_parse_form_vocabulary() {
        assert_eq!(
            PositionLevel::parse("Specialist"),
            Some(PositionLevel::Specialist)
        );
        assert_eq!(
            PositionLevel::parse("Team Leader"),
            Some(PositionLevel::TeamLeader)
        );
        assert_eq!(
            PositionLevel::parse("team_leader"),
            Some(PositionLevel::TeamLeader)
        );
        assert_eq!(
            PositionLevel::parse("Head of Sales"),
            Some(PositionLevel::Manager)
        );
        assert_eq!(PositionLevel::parse("Wizard"), None);
    }

    #[test]
    fn test_position_ladder_order() {
        assert!(PositionLevel::Intern < PositionLevel::Assistant);
        assert!(PositionLevel::Junior < PositionLevel::Specialist);
        assert!(PositionLevel::Manager < PositionLevel::Director);
    }

    #[test]
    fn test_industry_change_acceptance() {
        assert!(IndustryChange::parse("YES").unwrap().accepts_change());
        assert!(IndustryChange::parse("open").unwrap().accepts_change());
        assert!(!IndustryChange::parse("no").unwrap().accepts_change());
        assert_eq!(IndustryChange::parse("maybe"), None);
    }
}
