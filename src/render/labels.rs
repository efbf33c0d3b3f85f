use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Which side of the bar centre a height label leans towards, so the labels
/// of a bar pair do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
}

impl LabelSide {
    pub fn for_slot(slot: usize) -> Self {
        if slot == 0 {
            LabelSide::Left
        } else {
            LabelSide::Right
        }
    }

    pub fn anchor(self) -> Pos {
        match self {
            LabelSide::Left => Pos::new(HPos::Right, VPos::Bottom),
            LabelSide::Right => Pos::new(HPos::Left, VPos::Bottom),
        }
    }

    /// Backend-pixel offset from the top centre of the bar. y grows downwards.
    pub fn offset(self, offset_px: i32) -> (i32, i32) {
        let dx = match self {
            LabelSide::Left => -offset_px,
            LabelSide::Right => offset_px,
        };
        (dx, -offset_px)
    }
}

pub fn format_height(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/labels.rs"]
mod tests;
