use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::Result;
use crate::io::teams::{TeamColors, TeamNames};
use crate::rankings::Week;
use crate::vis::charts::{grid_style, render, row_axis, row_label, to_color, Chart};
use crate::vis::config::PlotSettings;
use crate::vis::layout::{box_rows, team_rows, BoxGeometry, TeamRow};

/// Half the height of a box, in row units
const BOX_HALF_HEIGHT: f64 = 0.3;
const CAP_HALF_HEIGHT: f64 = 0.15;

/// Horizontal box plot of one week: a box per team, best team on top
#[derive(Debug, Clone)]
pub struct BoxPlotChart {
    rows: Vec<TeamRow>,
    boxes: Vec<BoxGeometry>,
    x_max: f64,
}

impl BoxPlotChart {
    pub fn new(week: &Week, colors: &TeamColors, names: &TeamNames) -> Result<Self> {
        let rows = team_rows(week, colors, names);
        let boxes = box_rows(week, &rows)?;
        Ok(BoxPlotChart {
            rows,
            boxes,
            x_max: (week.league().team_count() + 1) as f64,
        })
    }

    pub fn rows(&self) -> &[TeamRow] {
        &self.rows
    }
}

impl Chart for BoxPlotChart {
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
            .caption(&settings.title, ("sans-serif", 30).into_font())
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

        let whisker_style = RGBColor(128, 128, 128).mix(0.5).stroke_width(2);
        let cap_style = RGBColor(128, 128, 128).stroke_width(2);
        let flier_style = RGBColor(0xe7, 0x29, 0x8a).mix(0.2).filled();

        let mut whiskers = Vec::with_capacity(n * 4);
        let mut boxes = Vec::with_capacity(n * 2);
        let mut medians = Vec::with_capacity(n);
        let mut markers = Vec::with_capacity(n);

        for (idx, (row, geometry)) in self.rows.iter().zip(self.boxes.iter()).enumerate() {
            let y = idx as f64;
            let fill = to_color(row.palette.primary);
            let median_color = to_color(row.palette.secondary);

            // ひげと端のキャップ
            whiskers.push(PathElement::new(
                vec![(geometry.whisker_low, y), (geometry.q1, y)],
                whisker_style,
            ));
            whiskers.push(PathElement::new(
                vec![(geometry.q3, y), (geometry.whisker_high, y)],
                whisker_style,
            ));
            for x in [geometry.whisker_low, geometry.whisker_high] {
                whiskers.push(PathElement::new(
                    vec![(x, y - CAP_HALF_HEIGHT), (x, y + CAP_HALF_HEIGHT)],
                    cap_style,
                ));
            }

            // 箱: チームの主色で塗り、黒枠
            let corners = [
                (geometry.q1, y - BOX_HALF_HEIGHT),
                (geometry.q3, y + BOX_HALF_HEIGHT),
            ];
            boxes.push(Rectangle::new(corners, fill.mix(0.7).filled()));
            boxes.push(Rectangle::new(corners, BLACK.stroke_width(2)));

            medians.push(PathElement::new(
                vec![
                    (geometry.median, y - BOX_HALF_HEIGHT),
                    (geometry.median, y + BOX_HALF_HEIGHT),
                ],
                median_color.stroke_width(2),
            ));
            markers.push(Circle::new((geometry.median, y), 4, median_color.filled()));

            for &flier in &geometry.fliers {
                markers.push(Circle::new((flier, y), 4, flier_style));
            }
        }

        chart.draw_series(whiskers)?;
        chart.draw_series(boxes)?;
        chart.draw_series(medians)?;
        chart.draw_series(markers)?;

        Ok(())
    }
}

/// Write the box plot of `week` to `path`
pub fn plot_week_boxplot<P: AsRef<Path>>(
    week: &Week,
    colors: &TeamColors,
    names: &TeamNames,
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    let chart = BoxPlotChart::new(week, colors, names)?;
    render(&chart, path, settings)
}
