//! Color names and their display palette.
//!
//! Every card is described by two `ColorName`s. The set is fixed at ten
//! names; `ColorName::ALL` lists them in canonical order.

use serde::{Deserialize, Serialize};

/// An RGB display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const DARK: Rgb = Rgb(40, 40, 40);
    pub const GREY: Rgb = Rgb(150, 150, 150);
    pub const YELLOW_BG: Rgb = Rgb(255, 210, 0);
}

/// One of the ten color names a card can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Black,
    Brown,
    Grey,
    Red,
    Orange,
    Yellow,
    Blue,
    Purple,
    Pink,
    Green,
}

impl ColorName {
    /// All color names in canonical order.
    pub const ALL: [ColorName; 10] = [
        ColorName::Black,
        ColorName::Brown,
        ColorName::Grey,
        ColorName::Red,
        ColorName::Orange,
        ColorName::Yellow,
        ColorName::Blue,
        ColorName::Purple,
        ColorName::Pink,
        ColorName::Green,
    ];

    /// Lowercase name, as printed on the card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::Brown => "brown",
            ColorName::Grey => "grey",
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Yellow => "yellow",
            ColorName::Blue => "blue",
            ColorName::Purple => "purple",
            ColorName::Pink => "pink",
            ColorName::Green => "green",
        }
    }

    /// Display color used when this name is the ink.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            ColorName::Black => Rgb(0, 0, 0),
            ColorName::Brown => Rgb(120, 72, 0),
            ColorName::Grey => Rgb(120, 120, 120),
            ColorName::Red => Rgb(220, 40, 40),
            ColorName::Orange => Rgb(255, 140, 0),
            ColorName::Yellow => Rgb(240, 210, 0),
            ColorName::Blue => Rgb(40, 100, 220),
            ColorName::Purple => Rgb(130, 60, 180),
            ColorName::Pink => Rgb(240, 120, 180),
            ColorName::Green => Rgb(40, 160, 80),
        }
    }
}

impl std::fmt::Display for ColorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_distinct_names() {
        let mut names: Vec<_> = ColorName::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_palette() {
        assert_eq!(ColorName::Blue.rgb(), Rgb(40, 100, 220));
        assert_eq!(ColorName::Brown.rgb(), Rgb(120, 72, 0));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ColorName::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
        let back: ColorName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorName::Purple);
    }
}
