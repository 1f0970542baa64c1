use crate::config::RunConfig;
use crate::error::{PowerRankError, Result};
use crate::rankings::{League, Week};

/// Consecutive weeks of one league, ascending by week number
#[derive(Debug, Clone)]
pub struct Season {
    league: League,
    weeks: Vec<Week>,
}

impl Season {
    pub fn new(league: League, mut weeks: Vec<Week>) -> Result<Self> {
        if weeks.is_empty() {
            return Err(PowerRankError::EmptyData("a season needs at least one week".into()));
        }
        if let Some(other) = weeks.iter().find(|w| w.league() != league) {
            return Err(PowerRankError::InvalidArgument(format!(
                "week {} belongs to {}, not {}",
                other.week_no(),
                other.league(),
                league
            )));
        }

        weeks.sort_by_key(|w| w.week_no());
        Ok(Season { league, weeks })
    }

    /// Load every week from `first_week` to `current_week`
    pub fn load(config: &RunConfig) -> Result<Self> {
        let weeks = config
            .weeks()
            .map(|week_no| Week::load(week_no, config.league, config.csv_path(week_no)))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "loaded {} {} weeks ({}..={})",
            weeks.len(),
            config.league,
            config.first_week,
            config.current_week
        );
        Season::new(config.league, weeks)
    }

    pub fn league(&self) -> League {
        self.league
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// The most recent week
    pub fn current(&self) -> &Week {
        // new() では空のシーズンを作れない
        &self.weeks[self.weeks.len() - 1]
    }

    pub fn week(&self, week_no: u32) -> Option<&Week> {
        self.weeks.iter().find(|w| w.week_no() == week_no)
    }

    /// Number of loaded weeks, never zero
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Mean rank of `team` in each week, `None` where the team is absent
    pub fn mean_rank_history(&self, team: &str) -> Vec<Option<f64>> {
        self.weeks
            .iter()
            .map(|w| w.stats(team).map(|s| s.mean))
            .collect()
    }
}
