use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{PowerRankError, Result};
use crate::io::teams::{TeamColors, TeamNames};
use crate::rankings::Week;
use crate::vis::charts::{grid_style, render, row_axis, row_label, to_color, Chart};
use crate::vis::config::PlotSettings;
use crate::vis::layout::{scatter_points, team_rows, ScatterPoint, TeamRow};

/// Dot radius in pixels
const DOT_SIZE: i32 = 5;

/// Mean rank of every team across a run of weeks. Older weeks are fainter.
#[derive(Debug, Clone)]
pub struct ScatterChart {
    rows: Vec<TeamRow>,
    points: Vec<ScatterPoint>,
    x_max: f64,
}

impl ScatterChart {
    /// Rows follow the consensus order of the last week in `weeks`
    pub fn new(weeks: &[Week], colors: &TeamColors, names: &TeamNames) -> Result<Self> {
        let current = weeks.last().ok_or_else(|| {
            PowerRankError::EmptyData("scatter chart needs at least one week".into())
        })?;
        let rows = team_rows(current, colors, names);
        let points = scatter_points(weeks, &rows)?;

        Ok(ScatterChart {
            rows,
            points,
            x_max: (current.league().team_count() + 1) as f64,
        })
    }

    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }
}

impl Chart for ScatterChart {
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        settings: &PlotSettings,
    ) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;

        let n = self.rows.len();
        let labels: Vec<String> = self.rows.iter().map(|r| r.label.clone()).collect();

        let mut chart = ChartBuilder::on(root)
            .caption(&settings.title, ("sans-serif", 24).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(170)
            .build_cartesian_2d(0f64..self.x_max, row_axis(n))?;

        let x_formatter = |x: &f64| format!("{:.0}", x);
        let y_formatter = |y: &f64| row_label(&labels, *y);

        let mut mesh = chart.configure_mesh();
        mesh.disable_y_mesh()
            .x_labels(self.x_max as usize + 1)
            .x_label_formatter(&x_formatter)
            .y_labels(n * 2)
            .y_label_formatter(&y_formatter)
            .x_desc(settings.x_label.as_str())
            .y_desc(settings.y_label.as_str())
            .bold_line_style(grid_style())
            .light_line_style(&WHITE);
        if !settings.show_grid {
            mesh.disable_x_mesh();
        }
        mesh.draw()?;

        chart.draw_series(self.points.iter().map(|point| {
            let color = to_color(self.rows[point.row].palette.primary);
            Circle::new(
                (point.mean_rank, point.row as f64),
                DOT_SIZE,
                color.mix(point.alpha).filled(),
            )
        }))?;

        Ok(())
    }
}

/// Write the scatter chart of `weeks` to `path`
pub fn plot_season_scatter<P: AsRef<Path>>(
    weeks: &[Week],
    colors: &TeamColors,
    names: &TeamNames,
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    let chart = ScatterChart::new(weeks, colors, names)?;
    render(&chart, path, settings)
}
