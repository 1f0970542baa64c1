//! Chart geometry computed from rankings, independent of any drawing backend

use std::path::{Path, PathBuf};

use crate::config::ChartFormat;
use crate::error::{PowerRankError, Result};
use crate::io::teams::{TeamColors, TeamNames, TeamPalette};
use crate::rankings::{League, Week};
use crate::stats::rank_stats;

/// Whiskers reach the furthest value within this many IQRs of the box
pub const WHISKER_IQR: f64 = 1.5;

/// Alpha of the oldest and newest week in a scatter chart
pub const ALPHA_RANGE: (f64, f64) = (0.2, 0.95);

/// Charts this crate draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    BoxPlot,
    Scatter,
}

impl ChartKind {
    fn slug(&self) -> &'static str {
        match self {
            ChartKind::BoxPlot => "boxplot",
            ChartKind::Scatter => "scatter",
        }
    }
}

/// `<dir>/<league>_power_rankings_<kind>_week<NN>.<ext>`
pub fn chart_path(
    dir: &Path,
    league: League,
    kind: ChartKind,
    week_no: u32,
    format: ChartFormat,
) -> PathBuf {
    dir.join(format!(
        "{}_power_rankings_{}_week{:02}.{}",
        league.slug(),
        kind.slug(),
        week_no,
        format.extension()
    ))
}

/// Box, whiskers and outliers of one team's rank positions
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGeometry {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub fliers: Vec<f64>,
}

impl BoxGeometry {
    pub fn from_ranks(ranks: &[u32]) -> Result<Self> {
        let stats = rank_stats(ranks)?;
        let iqr = stats.q3 - stats.q1;
        let low_limit = stats.q1 - WHISKER_IQR * iqr;
        let high_limit = stats.q3 + WHISKER_IQR * iqr;

        let mut whisker_low = stats.q1;
        let mut whisker_high = stats.q3;
        let mut fliers = Vec::new();

        for &rank in ranks {
            let value = rank as f64;
            if value < low_limit || value > high_limit {
                fliers.push(value);
                continue;
            }
            whisker_low = whisker_low.min(value);
            whisker_high = whisker_high.max(value);
        }
        fliers.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Ok(BoxGeometry {
            q1: stats.q1,
            median: stats.median,
            q3: stats.q3,
            whisker_low,
            whisker_high,
            fliers,
        })
    }
}

/// One horizontal row of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    /// Key in the ranking table
    pub team: String,
    /// Axis label, e.g. `"1. Warriors"`
    pub label: String,
    pub palette: TeamPalette,
}

/// Rows for the teams of `week`, worst team first so the best ends up on top
pub fn team_rows(week: &Week, colors: &TeamColors, names: &TeamNames) -> Vec<TeamRow> {
    let teams = week.power_rankings();
    let total = teams.len();

    teams
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, team)| {
            let display = names.display_name(team);
            TeamRow {
                team: team.clone(),
                label: format!("{}. {}", total - idx, display),
                palette: palette_for(colors, team, display),
            }
        })
        .collect()
}

// 色ファイルはニックネームでも元の名前でも引けるようにする
fn palette_for(colors: &TeamColors, team: &str, display: &str) -> TeamPalette {
    colors
        .get(display)
        .or_else(|| colors.get(team))
        .copied()
        .unwrap_or_default()
}

/// Teams of `week` without a nickname, and teams without colours, in consensus order.
/// A check is skipped when its file was not given.
pub fn unknown_teams(
    week: &Week,
    colors: &TeamColors,
    names: &TeamNames,
) -> (Vec<String>, Vec<String>) {
    let mut unnamed = Vec::new();
    let mut uncoloured = Vec::new();

    for team in week.power_rankings() {
        let nickname = names.nickname(team);
        if !names.is_empty() && nickname.is_none() {
            unnamed.push(team.clone());
        }
        let display = nickname.unwrap_or(team);
        if !colors.is_empty() && colors.get(display).is_none() && colors.get(team).is_none() {
            uncoloured.push(team.clone());
        }
    }

    (unnamed, uncoloured)
}

/// Box geometry for every row from [`team_rows`], same order
pub fn box_rows(week: &Week, rows: &[TeamRow]) -> Result<Vec<BoxGeometry>> {
    rows.iter()
        .map(|row| {
            let ranks = week.ranks(&row.team).ok_or_else(|| {
                PowerRankError::EmptyData(format!("no rankings for {}", row.team))
            })?;
            BoxGeometry::from_ranks(ranks)
        })
        .collect()
}

/// Alpha per week, ramping from faint (oldest) to nearly opaque (newest)
pub fn week_alphas(weeks: usize) -> Vec<f64> {
    let (low, high) = ALPHA_RANGE;
    match weeks {
        0 => Vec::new(),
        1 => vec![high],
        n => (0..n)
            .map(|x| low + x as f64 * (high - low) / (n - 1) as f64)
            .collect(),
    }
}

/// A dot of the scatter chart: mean rank of a row's team in one week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub mean_rank: f64,
    pub row: usize,
    pub alpha: f64,
}

/// Dots for `weeks`, rows laid out by the last week's consensus order.
/// Teams absent from a week get no dot for that week.
pub fn scatter_points(weeks: &[Week], rows: &[TeamRow]) -> Result<Vec<ScatterPoint>> {
    if weeks.is_empty() {
        return Err(PowerRankError::EmptyData("scatter chart needs at least one week".into()));
    }

    let alphas = week_alphas(weeks.len());
    let mut points = Vec::with_capacity(weeks.len() * rows.len());

    for (week, &alpha) in weeks.iter().zip(alphas.iter()) {
        for (row_idx, row) in rows.iter().enumerate() {
            match week.stats(&row.team) {
                Some(stats) => points.push(ScatterPoint {
                    mean_rank: stats.mean,
                    row: row_idx,
                    alpha,
                }),
                None => log::warn!("{} missing from week {}", row.team, week.week_no()),
            }
        }
    }

    Ok(points)
}
