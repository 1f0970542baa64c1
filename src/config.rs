use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{PowerRankError, Result};
use crate::rankings::League;

/// Placeholder in `csv_pattern` replaced by the two digit week number
pub const WEEK_PLACEHOLDER: &str = "{week}";

/// Image format charts are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    #[default]
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ChartFormat {
    type Err = PowerRankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ChartFormat::Png),
            "svg" => Ok(ChartFormat::Svg),
            other => Err(PowerRankError::InvalidArgument(format!(
                "unknown chart format '{}'",
                other
            ))),
        }
    }
}

/// Everything needed to load a season and draw its charts
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub league: League,
    /// First week loaded into the season
    pub first_week: u32,
    /// Last week loaded; charts for "the current week" use this one
    pub current_week: u32,
    /// Survey sheet path with `{week}` standing for the zero padded week number
    pub csv_pattern: String,
    pub colors_file: Option<PathBuf>,
    pub team_names_file: Option<PathBuf>,
    pub boxplot_dir: PathBuf,
    pub scatter_dir: PathBuf,
    pub output: ChartFormat,
    pub width: u32,
    pub height: u32,
    /// Directory relative paths are resolved against
    pub base_dir: PathBuf,
}

impl RunConfig {
    /// Defaults matching each league's survey sheets
    pub fn for_league(league: League) -> Self {
        let (csv_pattern, colors_file, team_names_file) = match league {
            League::Nba => (
                "csv_data/2016_R{week}.csv",
                Some("team_color_codes.txt"),
                Some("team_list.txt"),
            ),
            League::Nfl => (
                "csv_data/nfl_power_rankings_week{week}.csv",
                Some("nfl_team_color_codes.txt"),
                None,
            ),
        };

        RunConfig {
            league,
            first_week: 1,
            current_week: 1,
            csv_pattern: csv_pattern.to_string(),
            colors_file: colors_file.map(PathBuf::from),
            team_names_file: team_names_file.map(PathBuf::from),
            boxplot_dir: PathBuf::from("boxplots"),
            scatter_dir: PathBuf::from("scatterplots"),
            output: ChartFormat::Png,
            width: 1500,
            height: 800,
            base_dir: PathBuf::from("."),
        }
    }

    /// Load a TOML config; relative paths resolve against the file's directory
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(PowerRankError::Io)?;
        let mut config = RunConfig::from_toml_str(&content)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                config.base_dir = parent.to_path_buf();
            }
        }

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(content)?;
        let mut config = RunConfig::for_league(file.league);
        config.apply_file(file);
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(v) = file.first_week {
            self.first_week = v;
        }
        if let Some(v) = file.current_week {
            self.current_week = v;
        }
        if let Some(v) = file.csv_pattern {
            self.csv_pattern = v;
        }
        if let Some(v) = file.colors_file {
            self.colors_file = Some(v);
        }
        if let Some(v) = file.team_names_file {
            self.team_names_file = Some(v);
        }
        if let Some(v) = file.boxplot_dir {
            self.boxplot_dir = v;
        }
        if let Some(v) = file.scatter_dir {
            self.scatter_dir = v;
        }
        if let Some(v) = file.output {
            self.output = v;
        }
        if let Some(v) = file.width {
            self.width = v;
        }
        if let Some(v) = file.height {
            self.height = v;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.first_week == 0 {
            return Err(PowerRankError::Config("first_week must be at least 1".into()));
        }
        if self.current_week < self.first_week {
            return Err(PowerRankError::Config(format!(
                "current_week ({}) is before first_week ({})",
                self.current_week, self.first_week
            )));
        }
        if !self.csv_pattern.contains(WEEK_PLACEHOLDER) {
            return Err(PowerRankError::Config(format!(
                "csv_pattern '{}' has no {} placeholder",
                self.csv_pattern, WEEK_PLACEHOLDER
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(PowerRankError::Config("chart size must be non-zero".into()));
        }
        Ok(())
    }

    /// Week numbers of the season, ascending
    pub fn weeks(&self) -> std::ops::RangeInclusive<u32> {
        self.first_week..=self.current_week
    }

    /// Survey sheet for `week`
    pub fn csv_path(&self, week: u32) -> PathBuf {
        let file = self
            .csv_pattern
            .replace(WEEK_PLACEHOLDER, &format!("{:02}", week));
        self.resolve(file)
    }

    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// Config as written in the TOML file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    league: League,
    first_week: Option<u32>,
    current_week: Option<u32>,
    csv_pattern: Option<String>,
    colors_file: Option<PathBuf>,
    team_names_file: Option<PathBuf>,
    boxplot_dir: Option<PathBuf>,
    scatter_dir: Option<PathBuf>,
    output: Option<ChartFormat>,
    width: Option<u32>,
    height: Option<u32>,
}
