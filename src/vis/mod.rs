//! Module providing power ranking charts
//!
//! - `layout`: rows, labels, box geometry and dot alphas, no drawing involved
//! - `charts`: plotters rendering of box plots and scatter charts (PNG or SVG),
//!   available with the `visualization` feature

pub mod config;
pub mod layout;

#[cfg(feature = "visualization")]
pub mod charts;

pub use self::config::PlotSettings;
pub use self::layout::{chart_path, unknown_teams, ChartKind};

#[cfg(feature = "visualization")]
pub use self::charts::{plot_season_scatter, plot_week_boxplot, BoxPlotChart, Chart, ScatterChart};

#[cfg(feature = "visualization")]
use std::path::PathBuf;

#[cfg(feature = "visualization")]
use crate::config::RunConfig;
#[cfg(feature = "visualization")]
use crate::error::Result;
#[cfg(feature = "visualization")]
use crate::io::teams::{TeamColors, TeamNames};
use crate::rankings::{League, Week};

/// Title of a week's box plot
pub fn boxplot_title(week: &Week) -> String {
    format!(
        "{} Reddit Power Rankings - Week {}",
        week.league(),
        week.week_no()
    )
}

/// Title of a scatter chart over `weeks`
pub fn scatter_title(league: League, weeks: &[Week]) -> String {
    match (weeks.first(), weeks.last()) {
        (Some(first), Some(last)) => format!(
            "Average (mean) Reddit Power Rankings of {} teams - weeks {} to {}",
            league,
            first.week_no(),
            last.week_no()
        ),
        _ => format!("Average (mean) Reddit Power Rankings of {} teams", league),
    }
}

/// Draws the charts of a loaded season into the directories of a run config
#[cfg(feature = "visualization")]
pub struct ChartWriter<'a> {
    config: &'a RunConfig,
    colors: &'a TeamColors,
    names: &'a TeamNames,
}

#[cfg(feature = "visualization")]
impl<'a> ChartWriter<'a> {
    pub fn new(config: &'a RunConfig, colors: &'a TeamColors, names: &'a TeamNames) -> Self {
        ChartWriter {
            config,
            colors,
            names,
        }
    }

    /// Box plot of one week
    pub fn boxplot(&self, week: &Week) -> Result<PathBuf> {
        let path = chart_path(
            &self.config.resolve(&self.config.boxplot_dir),
            week.league(),
            ChartKind::BoxPlot,
            week.week_no(),
            self.config.output,
        );
        let settings = PlotSettings::from_run_config(self.config)
            .with_title(boxplot_title(week))
            .with_y_label("Team Avg. Rank");
        plot_week_boxplot(week, self.colors, self.names, &path, &settings)?;
        Ok(path)
    }

    /// Scatter chart over `weeks`, named after the last one
    pub fn scatter(&self, weeks: &[Week]) -> Result<Option<PathBuf>> {
        let Some(last) = weeks.last() else {
            return Ok(None);
        };
        let path = chart_path(
            &self.config.resolve(&self.config.scatter_dir),
            last.league(),
            ChartKind::Scatter,
            last.week_no(),
            self.config.output,
        );
        let settings = PlotSettings::from_run_config(self.config)
            .with_title(scatter_title(last.league(), weeks));
        plot_season_scatter(weeks, self.colors, self.names, &path, &settings)?;
        Ok(Some(path))
    }

    // 名前や色の無いチームは一度だけ警告する
    fn warn_unknown_teams(&self, weeks: &[Week]) {
        let Some(last) = weeks.last() else {
            return;
        };
        let (unnamed, uncoloured) = unknown_teams(last, self.colors, self.names);
        if !unnamed.is_empty() {
            log::warn!("no nickname for {}, using the names as given", unnamed.join(", "));
        }
        if !uncoloured.is_empty() {
            log::warn!("no colours for {}, using the default palette", uncoloured.join(", "));
        }
    }

    /// Scatter over every week plus the box plot of the last one
    pub fn current_week(&self, weeks: &[Week]) -> Result<Vec<PathBuf>> {
        self.warn_unknown_teams(weeks);
        let mut written = Vec::new();
        if let Some(path) = self.scatter(weeks)? {
            written.push(path);
        }
        if let Some(last) = weeks.last() {
            written.push(self.boxplot(last)?);
        }
        Ok(written)
    }

    /// Box plot of every week, scatter of every run of two or more weeks
    pub fn all_weeks(&self, weeks: &[Week]) -> Result<Vec<PathBuf>> {
        self.warn_unknown_teams(weeks);
        let mut written = Vec::new();
        for (idx, week) in weeks.iter().enumerate() {
            if idx > 0 {
                if let Some(path) = self.scatter(&weeks[..=idx])? {
                    written.push(path);
                }
            }
            written.push(self.boxplot(week)?);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rankings::RankingTable;

    fn week(week_no: u32) -> Week {
        let mut table = RankingTable::new();
        for i in 0..32u32 {
            table.push(&format!("T{}", i), i + 1);
        }
        Week::from_table(week_no, League::Nfl, table, "fixture").unwrap()
    }

    #[test]
    fn test_titles() {
        let weeks = vec![week(1), week(12)];
        assert_eq!(
            boxplot_title(&weeks[1]),
            "NFL Reddit Power Rankings - Week 12"
        );
        assert_eq!(
            scatter_title(League::Nfl, &weeks),
            "Average (mean) Reddit Power Rankings of NFL teams - weeks 1 to 12"
        );
        assert_eq!(
            scatter_title(League::Nba, &[]),
            "Average (mean) Reddit Power Rankings of NBA teams"
        );
    }
}
