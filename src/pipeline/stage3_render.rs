use std::path::{Path, PathBuf};

use crate::model::series::PanelData;
use crate::render::style::{ChartStyle, FIGURE_TITLE, TextRenderer};
use crate::render::viewer::open_in_viewer;
use crate::render::{Figure, PanelSpec, RenderError, render_to_file};

#[derive(Debug, Clone)]
pub struct Stage3Input<'a> {
    pub with_vectors: &'a PanelData,
    pub without_vectors: &'a PanelData,
    pub subtitle: &'a str,
    pub output_path: Option<&'a Path>,
    pub show: bool,
    /// Program used by `show`; `None` picks the platform opener.
    pub viewer: Option<&'a Path>,
    pub text: TextRenderer,
}

/// Title of the lower panel: the subtitle with its condition negated.
pub fn without_title(subtitle: &str) -> String {
    match subtitle.strip_prefix("with ") {
        Some(rest) => format!("without {rest}"),
        None => format!("without {subtitle}"),
    }
}

pub fn build_figure<'a>(input: &Stage3Input<'a>) -> Figure<'a> {
    Figure {
        title: FIGURE_TITLE,
        upper: PanelSpec {
            data: input.with_vectors,
            title: input.subtitle.to_string(),
            show_xlabel: false,
            show_legend: false,
        },
        lower: PanelSpec {
            data: input.without_vectors,
            title: without_title(input.subtitle),
            show_xlabel: true,
            show_legend: true,
        },
    }
}

/// Temporary file for `show` without an output path. Each run overwrites it.
pub fn preview_path() -> PathBuf {
    std::env::temp_dir().join("embedplot-preview.png")
}

/// Returns the path the figure was written to, or `None` when there was
/// nowhere to send it.
pub fn run_stage3(input: &Stage3Input<'_>) -> Result<Option<PathBuf>, RenderError> {
    if input.output_path.is_none() && !input.show {
        tracing::warn!("no output path given and --show not set; nothing to render");
        return Ok(None);
    }

    if input.text == TextRenderer::Tex {
        tracing::info!("Rendering using LaTeX");
    }
    let style = ChartStyle::default().with_text(input.text);
    let figure = build_figure(input);

    let target = match input.output_path {
        Some(path) => render_to_file(&figure, &style, path)?,
        None => render_to_file(&figure, &style, &preview_path())?,
    };
    if input.output_path.is_some() {
        tracing::info!("Saved to {}", target.display());
    }

    if input.show {
        open_in_viewer(&target, input.viewer)?;
    }
    Ok(Some(target))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_render.rs"]
mod tests;
