//! The closed set of moods a user can pick from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Work,
    Date,
    QuickBite,
    Budget,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Work, Mood::Date, Mood::QuickBite, Mood::Budget];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Mood::Work => "work",
            Mood::Date => "date",
            Mood::QuickBite => "quick_bite",
            Mood::Budget => "budget",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mood::Work => "Work",
            Mood::Date => "Date",
            Mood::QuickBite => "Quick Bite",
            Mood::Budget => "Budget",
        }
    }

    /// Maps a mood key to a [`Mood`], falling back to [`Mood::Work`] for
    /// anything outside the known set.
    ///
    /// Returns the mood together with a flag that is `true` when the
    /// fallback was taken, so callers can log it.
    #[must_use]
    pub fn from_key_or_work(key: &str) -> (Mood, bool) {
        match key.parse::<Mood>() {
            Ok(mood) => (mood, false),
            Err(_) => (Mood::Work, true),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Mood {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "work" => Ok(Mood::Work),
            "date" => Ok(Mood::Date),
            "quick_bite" | "quickbite" => Ok(Mood::QuickBite),
            "budget" => Ok(Mood::Budget),
            _ => Err(CoreError::UnknownMood(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for mood in Mood::ALL {
            assert_eq!(mood.key().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn from_str_accepts_hyphenated_and_mixed_case() {
        assert_eq!("Quick-Bite".parse::<Mood>().unwrap(), Mood::QuickBite);
        assert_eq!(" BUDGET ".parse::<Mood>().unwrap(), Mood::Budget);
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!(matches!(
            "romantic".parse::<Mood>(),
            Err(CoreError::UnknownMood(ref s)) if s == "romantic"
        ));
    }

    #[test]
    fn unknown_key_falls_back_to_work() {
        assert_eq!(Mood::from_key_or_work("brunch"), (Mood::Work, true));
        assert_eq!(Mood::from_key_or_work("date"), (Mood::Date, false));
    }

    #[test]
    fn serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&Mood::QuickBite).unwrap();
        assert_eq!(json, "\"quick_bite\"");
    }
}
