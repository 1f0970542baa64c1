use crate::config::{ChartFormat, RunConfig};

/// Chart settings
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    /// Title
    pub title: String,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Output format
    pub output: ChartFormat,
    /// Draw the faint vertical grid
    pub show_grid: bool,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            title: "Plot".to_string(),
            x_label: "Rank".to_string(),
            y_label: "Team".to_string(),
            width: 1500,
            height: 800,
            output: ChartFormat::Png,
            show_grid: true,
        }
    }
}

impl PlotSettings {
    /// Size and format taken from a run config
    pub fn from_run_config(config: &RunConfig) -> Self {
        PlotSettings {
            width: config.width,
            height: config.height,
            output: config.output,
            ..PlotSettings::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_y_label(mut self, y_label: impl Into<String>) -> Self {
        self.y_label = y_label.into();
        self
    }
}
