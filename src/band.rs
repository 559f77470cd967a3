use std::fmt;
use std::str::FromStr;

use crate::error::PaletteError;

/// One of the eight fixed hue ranges pixels are bucketed into.
///
/// Hues use the 8-bit HSV convention: half-degree units in `0..=180`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

impl Band {
    /// Number of bands.
    pub const COUNT: usize = 8;

    /// Every band, in the fixed diagnostic order.
    pub const ALL: [Band; Band::COUNT] = [
        Band::Red,
        Band::Orange,
        Band::Yellow,
        Band::Green,
        Band::Cyan,
        Band::Blue,
        Band::Purple,
        Band::Pink,
    ];

    /// Position of the band in [`Band::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Band::Red => "red",
            Band::Orange => "orange",
            Band::Yellow => "yellow",
            Band::Green => "green",
            Band::Cyan => "cyan",
            Band::Blue => "blue",
            Band::Purple => "purple",
            Band::Pink => "pink",
        }
    }

    /// Whether `hue` falls inside this band.
    ///
    /// Hue `0` belongs to no band. Red starts again above `170`.
    #[inline]
    pub fn contains(self, hue: u8) -> bool {
        match self {
            Band::Red => (hue > 0 && hue < 9) || hue > 170,
            Band::Orange => (9..18).contains(&hue),
            Band::Yellow => (18..31).contains(&hue),
            Band::Green => (31..71).contains(&hue),
            Band::Cyan => (71..94).contains(&hue),
            Band::Blue => (94..123).contains(&hue),
            Band::Purple => (123..150).contains(&hue),
            Band::Pink => (150..=170).contains(&hue),
        }
    }

    /// Every band whose range contains `hue`.
    pub fn matching(hue: u8) -> impl Iterator<Item = Band> {
        Band::ALL.into_iter().filter(move |band| band.contains(hue))
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Band {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Band::ALL
            .into_iter()
            .find(|band| band.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PaletteError::UnknownBand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_zero_is_unclassified() {
        assert_eq!(Band::matching(0).count(), 0);
    }

    #[test]
    fn hue_170_is_pink_only() {
        let bands: Vec<Band> = Band::matching(170).collect();
        assert_eq!(bands, vec![Band::Pink]);
    }

    #[test]
    fn range_edges() {
        assert!(Band::Red.contains(1));
        assert!(Band::Red.contains(8));
        assert!(Band::Orange.contains(9));
        assert!(Band::Orange.contains(17));
        assert!(Band::Yellow.contains(18));
        assert!(Band::Green.contains(31));
        assert!(Band::Green.contains(70));
        assert!(Band::Cyan.contains(71));
        assert!(Band::Blue.contains(94));
        assert!(Band::Blue.contains(122));
        assert!(Band::Purple.contains(123));
        assert!(Band::Pink.contains(150));
        assert!(Band::Red.contains(171));
        assert!(Band::Red.contains(180));
        assert!(!Band::Pink.contains(171));
    }

    #[test]
    fn every_nonzero_hue_has_exactly_one_band() {
        for hue in 1..=180u8 {
            assert_eq!(Band::matching(hue).count(), 1, "hue {hue}");
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("BLUE".parse::<Band>().unwrap(), Band::Blue);
        assert_eq!(" pink ".parse::<Band>().unwrap(), Band::Pink);
        assert!(matches!(
            "magenta".parse::<Band>(),
            Err(PaletteError::UnknownBand(name)) if name == "magenta"
        ));
    }

    #[test]
    fn index_follows_fixed_order() {
        for (i, band) in Band::ALL.iter().enumerate() {
            assert_eq!(band.index(), i);
        }
    }
}
