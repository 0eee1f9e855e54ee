//! Length units used by DrawingML.
//!
//! All geometry in a PresentationML package is expressed in English Metric
//! Units (EMU). The helpers here convert the physical units slide sizes are
//! usually given in.

use std::fmt;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// A length in English Metric Units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Emu(i64);

impl Emu {
    /// Wrap a raw EMU value.
    #[inline]
    pub const fn new(emu: i64) -> Self {
        Self(emu)
    }

    /// Convert inches to EMU, rounding to the nearest unit.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self((inches * EMUS_PER_INCH as f64).round() as i64)
    }

    /// Convert centimetres to EMU, rounding to the nearest unit.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self((cm * EMUS_PER_CM as f64).round() as i64)
    }

    /// Convert points to EMU, rounding to the nearest unit.
    #[inline]
    pub fn from_pt(pt: f64) -> Self {
        Self((pt * EMUS_PER_PT as f64).round() as i64)
    }

    /// The raw EMU value.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn to_inches(self) -> f64 {
        self.0 as f64 / EMUS_PER_INCH as f64
    }
}

impl From<Emu> for i64 {
    #[inline]
    fn from(value: Emu) -> Self {
        value.0
    }
}

impl fmt::Display for Emu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_slide_size() {
        assert_eq!(Emu::from_inches(10.0).get(), 9_144_000);
        assert_eq!(Emu::from_inches(7.5).get(), 6_858_000);
    }

    #[test]
    fn test_other_units() {
        assert_eq!(Emu::from_pt(72.0), Emu::from_inches(1.0));
        assert_eq!(Emu::from_cm(2.54), Emu::from_inches(1.0));
        assert!((Emu::new(457_200).to_inches() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_is_raw_value() {
        assert_eq!(Emu::new(6_858_000).to_string(), "6858000");
    }
}
