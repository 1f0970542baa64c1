use std::cmp::Ordering;
use std::fmt::Write as _;
use std::path::Path;

use crate::error::{PowerRankError, Result};
use crate::io::csv::read_rankings;
use crate::rankings::{League, RankingTable, SortKey};
use crate::stats::{rank_stats, TeamStats};

/// One week of power rankings
#[derive(Debug, Clone)]
pub struct Week {
    week_no: u32,
    league: League,
    source: String,
    table: RankingTable,
    /// Parallel to `table.teams()`
    stats: Vec<TeamStats>,
    /// Team names, best first
    power_rankings: Vec<String>,
}

impl Week {
    /// Build a week from an already parsed table.
    ///
    /// The table must contain exactly the league's number of teams.
    pub fn from_table(
        week_no: u32,
        league: League,
        table: RankingTable,
        source: impl Into<String>,
    ) -> Result<Self> {
        let source = source.into();

        if table.len() != league.team_count() {
            return Err(PowerRankError::TeamCount {
                source_name: source,
                expected: league.team_count(),
                found: table.len(),
            });
        }

        let stats = table
            .iter()
            .map(|(_, ranks)| rank_stats(ranks))
            .collect::<Result<Vec<_>>>()?;

        let power_rankings = consensus_order(&table, &stats, league.sort_key());

        Ok(Week {
            week_no,
            league,
            source,
            table,
            stats,
            power_rankings,
        })
    }

    /// Read a week's survey sheet using the league's layout
    pub fn load<P: AsRef<Path>>(week_no: u32, league: League, path: P) -> Result<Self> {
        let path = path.as_ref();
        let table = read_rankings(path, &league.csv_layout())?;
        Week::from_table(week_no, league, table, path.display().to_string())
    }

    pub fn week_no(&self) -> u32 {
        self.week_no
    }

    pub fn league(&self) -> League {
        self.league
    }

    /// Where the week was read from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn table(&self) -> &RankingTable {
        &self.table
    }

    pub fn ranks(&self, team: &str) -> Option<&[u32]> {
        self.table.ranks(team)
    }

    pub fn stats(&self, team: &str) -> Option<&TeamStats> {
        self.table.index_of(team).map(|idx| &self.stats[idx])
    }

    /// Team names in consensus order, best first
    pub fn power_rankings(&self) -> &[String] {
        &self.power_rankings
    }

    /// Consensus position of `team`, 1 for the top team
    pub fn rank_of(&self, team: &str) -> Option<usize> {
        self.power_rankings
            .iter()
            .position(|t| t == team)
            .map(|idx| idx + 1)
    }

    /// `"1 Cowboys\n2 Patriots\n..."`
    pub fn format_rankings(&self) -> String {
        let mut out = String::new();
        for (rank, team) in self.power_rankings.iter().enumerate() {
            let _ = writeln!(out, "{} {}", rank + 1, team);
        }
        out
    }
}

fn consensus_order(table: &RankingTable, stats: &[TeamStats], key: SortKey) -> Vec<String> {
    let mut order: Vec<usize> = (0..stats.len()).collect();
    let value = |idx: usize| match key {
        SortKey::Sum => stats[idx].sum,
        SortKey::Mean => stats[idx].mean,
    };

    // 安定ソートなので同点は初出順のまま
    order.sort_by(|&a, &b| value(a).partial_cmp(&value(b)).unwrap_or(Ordering::Equal));

    order
        .into_iter()
        .map(|idx| table.teams()[idx].clone())
        .collect()
}
