use plotters::style::{FontDesc, FontFamily, FontStyle, TextStyle};

pub const FIGURE_TITLE: &str = "MultiHashEmbed vs. MultiEmbed";
pub const X_LABEL: &str = "Dataset";
pub const Y_LABEL: &str = "F1-score";
pub const Y_MAX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRenderer {
    Plain,
    /// Serif text in the style of LaTeX output. No TeX engine is involved.
    Tex,
}

/// Physical figure geometry and typography. Sizes are in points and converted
/// to pixels at `dpi`.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    pub bar_width: f64,
    pub text: TextRenderer,
    pub figure_title_pt: f64,
    pub title_pt: f64,
    pub axis_label_pt: f64,
    pub tick_pt: f64,
    pub bar_label_pt: f64,
    pub legend_pt: f64,
    pub label_offset_pt: f64,
    pub margin_pt: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            width_in: 12.0,
            height_in: 6.0,
            dpi: 300.0,
            bar_width: 0.30,
            text: TextRenderer::Plain,
            figure_title_pt: 17.28,
            title_pt: 14.4,
            axis_label_pt: 14.4,
            tick_pt: 12.0,
            bar_label_pt: 12.0,
            legend_pt: 14.4,
            label_offset_pt: 3.0,
            margin_pt: 6.0,
        }
    }
}

impl ChartStyle {
    pub fn with_text(mut self, text: TextRenderer) -> Self {
        self.text = text;
        self
    }

    pub fn family(&self) -> FontFamily<'static> {
        match self.text {
            TextRenderer::Plain => FontFamily::SansSerif,
            TextRenderer::Tex => FontFamily::Serif,
        }
    }

    pub fn px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }

    pub fn px_i32(&self, pt: f64) -> i32 {
        self.px(pt).round() as i32
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi).round() as u32,
            (self.height_in * self.dpi).round() as u32,
        )
    }

    pub fn font(&self, pt: f64) -> FontDesc<'static> {
        FontDesc::new(self.family(), self.px(pt), FontStyle::Normal)
    }

    pub fn text_style(&self, pt: f64) -> TextStyle<'static> {
        TextStyle::from(self.font(pt))
    }

    /// Horizontal offset of each bar's centre from its dataset tick.
    pub fn bar_offset(&self, slot: usize) -> f64 {
        if slot == 0 {
            -self.bar_width / 2.0
        } else {
            self.bar_width / 2.0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/style.rs"]
mod tests;
