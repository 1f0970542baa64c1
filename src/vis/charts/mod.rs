//! Plottersを使用したチャート描画
//!
//! Each chart implements [`Chart`] once and is rendered to PNG or SVG by [`render`].

mod boxplot;
mod scatter;

use std::fs;
use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::ChartFormat;
use crate::error::{PowerRankError, Result};
use crate::io::teams::Rgb;
use crate::vis::config::PlotSettings;

pub use self::boxplot::{plot_week_boxplot, BoxPlotChart};
pub use self::scatter::{plot_season_scatter, ScatterChart};

/// Something that can draw itself onto any plotters backend
pub trait Chart {
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        settings: &PlotSettings,
    ) -> Result<()>
    where
        DB::ErrorType: 'static;
}

/// Draw `chart` into `path` in the format chosen by `settings`
pub fn render<C: Chart, P: AsRef<Path>>(chart: &C, path: P, settings: &PlotSettings) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(PowerRankError::Io)?;
        }
    }

    let size = (settings.width, settings.height);
    match settings.output {
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            chart.draw(&root, settings)?;
            root.present()?;
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            chart.draw(&root, settings)?;
            root.present()?;
        }
    }

    log::info!("wrote {}", path.display());
    Ok(())
}

pub(crate) fn to_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

/// Y range for `rows` team rows, one unit per row centred on the row index.
/// Asking for `2 * rows` labels puts a key point on every row index.
pub(crate) fn row_axis(rows: usize) -> Range<f64> {
    -0.5..(rows as f64 - 0.5)
}

/// Row label for a y coordinate; only exact row positions get one
pub(crate) fn row_label(labels: &[String], y: f64) -> String {
    let idx = y.round();
    if (y - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

// 縦方向の薄いグリッド線
pub(crate) fn grid_style() -> ShapeStyle {
    RGBColor(211, 211, 211).mix(0.7).stroke_width(1)
}
