use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use thiserror::Error;

use crate::model::series::PanelData;

pub mod labels;
pub mod legend;
pub mod panel;
pub mod style;
pub mod viewer;

use panel::draw_panel;
use style::ChartStyle;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported output format for {}: use .svg, .png, .jpg, .jpeg or .bmp", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("failed to launch a viewer for {}: {source}", path.display())]
    Viewer {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("viewer for {} exited with {status}", path.display())]
    ViewerExit {
        path: PathBuf,
        status: std::process::ExitStatus,
    },
}

pub(crate) fn draw_err<E: std::error::Error + Send + Sync>(
    err: DrawingAreaErrorKind<E>,
) -> RenderError {
    RenderError::Draw(err.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Bitmap,
}

impl OutputFormat {
    /// A path without an extension is written as PNG, see [`output_file`].
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("svg") => Ok(OutputFormat::Svg),
            None | Some("png") | Some("jpg") | Some("jpeg") | Some("bmp") => {
                Ok(OutputFormat::Bitmap)
            }
            _ => Err(RenderError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Where a figure for `path` ends up: `.png` is appended when the path has no
/// extension, any other path is used as given.
pub fn output_file(path: &Path) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension("png")
    } else {
        path.to_path_buf()
    }
}

#[derive(Debug, Clone)]
pub struct PanelSpec<'a> {
    pub data: &'a PanelData,
    pub title: String,
    pub show_xlabel: bool,
    pub show_legend: bool,
}

#[derive(Debug, Clone)]
pub struct Figure<'a> {
    pub title: &'a str,
    pub upper: PanelSpec<'a>,
    pub lower: PanelSpec<'a>,
}

/// Draws `figure` and writes it out. Returns the file actually written,
/// which differs from `path` only when an extension had to be added.
pub fn render_to_file(
    figure: &Figure<'_>,
    style: &ChartStyle,
    path: &Path,
) -> Result<PathBuf, RenderError> {
    let size = style.canvas_size();
    let format = OutputFormat::from_path(path)?;
    let target = output_file(path);
    match format {
        OutputFormat::Svg => {
            let root = SVGBackend::new(&target, size).into_drawing_area();
            draw_figure(&root, figure, style)?;
            root.present().map_err(draw_err)?;
        }
        OutputFormat::Bitmap => {
            let root = BitMapBackend::new(&target, size).into_drawing_area();
            draw_figure(&root, figure, style)?;
            root.present().map_err(draw_err)?;
        }
    }
    Ok(target)
}

pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure<'_>,
    style: &ChartStyle,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(draw_err)?;
    let body = root
        .titled(figure.title, style.font(style.figure_title_pt))
        .map_err(draw_err)?;

    // The lower panel also carries the x axis label and legend.
    let (_, h) = body.dim_in_pixel();
    let upper_h = (h as f64 * 0.42).round() as i32;
    let (upper, lower) = body.split_vertically(upper_h);

    draw_panel(&upper, &figure.upper, style)?;
    draw_panel(&lower, &figure.lower, style)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/mod.rs"]
mod tests;
