use plotters::style::RGBColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    MultiHashEmbed,
    MultiEmbed,
}

impl Strategy {
    /// Draw order within a dataset pair: left bar first.
    pub const ALL: [Strategy; 2] = [Strategy::MultiHashEmbed, Strategy::MultiEmbed];

    pub fn key(self) -> &'static str {
        match self {
            Strategy::MultiHashEmbed => "multihashembed",
            Strategy::MultiEmbed => "multiembed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::MultiHashEmbed => "MultiHashEmbed",
            Strategy::MultiEmbed => "MultiEmbed",
        }
    }

    pub fn color(self) -> RGBColor {
        match self {
            // spanish viridian
            Strategy::MultiHashEmbed => RGBColor(0x04, 0x7c, 0x5c),
            // rich electric blue
            Strategy::MultiEmbed => RGBColor(0x09, 0xa4, 0xd7),
        }
    }
}
