//! Typography regions and the font size classifier.

use std::fmt;

use serde::Serialize;

/// A typography tier of the type scale.
///
/// Declaration order is display order; generated resources are always
/// grouped in this order regardless of the order styles were seen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Region {
    Headline1,
    Headline2,
    Headline3,
    Headline4,
    Headline5,
    Headline6,
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    Caption,
}

impl Region {
    /// Number of regions.
    pub const COUNT: usize = 11;

    /// Every region in display order.
    pub const ALL: [Region; Region::COUNT] = [
        Region::Headline1,
        Region::Headline2,
        Region::Headline3,
        Region::Headline4,
        Region::Headline5,
        Region::Headline6,
        Region::Subtitle1,
        Region::Subtitle2,
        Region::Body1,
        Region::Body2,
        Region::Caption,
    ];

    /// Position in [`Region::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Headline1 => "Headline1",
            Self::Headline2 => "Headline2",
            Self::Headline3 => "Headline3",
            Self::Headline4 => "Headline4",
            Self::Headline5 => "Headline5",
            Self::Headline6 => "Headline6",
            Self::Subtitle1 => "Subtitle1",
            Self::Subtitle2 => "Subtitle2",
            Self::Body1 => "Body1",
            Self::Body2 => "Body2",
            Self::Caption => "Caption",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a font size into its typography region.
///
/// Headlines are matched by lower bound, from largest to smallest. Below 20
/// only the exact design-system sizes 16, 14, 12 and 11 get their own tier;
/// every other size, including NaN, lands in [`Region::Caption`]. Note that
/// 11 maps to `Body1` and 12 to `Body2`.
pub fn classify(font_size: f64) -> Region {
    if font_size >= 50.0 {
        Region::Headline1
    } else if font_size >= 40.0 {
        Region::Headline2
    } else if font_size >= 32.0 {
        Region::Headline3
    } else if font_size >= 28.0 {
        Region::Headline4
    } else if font_size >= 24.0 {
        Region::Headline5
    } else if font_size >= 20.0 {
        Region::Headline6
    } else if font_size == 16.0 {
        Region::Subtitle1
    } else if font_size == 14.0 {
        Region::Subtitle2
    } else if font_size == 12.0 {
        Region::Body2
    } else if font_size == 11.0 {
        Region::Body1
    } else {
        Region::Caption
    }
}
