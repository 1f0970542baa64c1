//! Power ranking surveys
//!
//! A [`Week`] is one survey sheet turned into per-team statistics and a
//! consensus order. A [`Season`] is the run of weeks a chart is drawn from.

mod season;
mod table;
mod week;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{PowerRankError, Result};
use crate::io::csv::CsvLayout;

pub use self::season::Season;
pub use self::table::RankingTable;
pub use self::week::Week;

/// How the consensus order of a week is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Sum of rank positions (fine while every team has the same number of votes)
    Sum,
    /// Mean rank position
    Mean,
}

/// League a survey belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Nba,
    Nfl,
}

impl League {
    /// Number of teams every weekly sheet must contain
    pub fn team_count(&self) -> usize {
        match self {
            League::Nba => 30,
            League::Nfl => 32,
        }
    }

    pub fn csv_layout(&self) -> CsvLayout {
        match self {
            League::Nba => CsvLayout::nba(),
            League::Nfl => CsvLayout::nfl(),
        }
    }

    pub fn sort_key(&self) -> SortKey {
        match self {
            League::Nba => SortKey::Sum,
            League::Nfl => SortKey::Mean,
        }
    }

    /// Lowercase name used in output file names
    pub fn slug(&self) -> &'static str {
        match self {
            League::Nba => "nba",
            League::Nfl => "nfl",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            League::Nba => write!(f, "NBA"),
            League::Nfl => write!(f, "NFL"),
        }
    }
}

impl FromStr for League {
    type Err = PowerRankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nba" => Ok(League::Nba),
            "nfl" => Ok(League::Nfl),
            other => Err(PowerRankError::InvalidArgument(format!(
                "unknown league '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_properties() {
        assert_eq!(League::Nba.team_count(), 30);
        assert_eq!(League::Nfl.team_count(), 32);
        assert_eq!(League::Nba.sort_key(), SortKey::Sum);
        assert_eq!(League::Nfl.sort_key(), SortKey::Mean);
        assert_eq!(League::Nfl.csv_layout(), CsvLayout::TeamCells);
        assert_eq!(League::Nba.to_string(), "NBA");
    }

    #[test]
    fn test_league_parse() {
        assert_eq!("NFL".parse::<League>().unwrap(), League::Nfl);
        assert!("mlb".parse::<League>().is_err());
    }
}
