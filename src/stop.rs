use crate::{Error, Result};

/// A color at a position of a gradient.
///
/// Positions are meaningful in \[0, 1\].  Two consecutive stops may
/// share a position to express a hard color transition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop<Color> {
    pub position: f64,
    pub color: Color,
}

impl<Color> Stop<Color> {
    #[inline]
    pub fn new(position: f64, color: Color) -> Self {
        Stop { position, color }
    }
}

impl<Color> From<(f64, Color)> for Stop<Color> {
    #[inline]
    fn from((position, color): (f64, Color)) -> Self {
        Stop { position, color }
    }
}

/// Fraction of the way `x` lies from `a` to `b`, in \[0, 1\].  An
/// empty or reversed interval gives `0.` so that no NaN leaks into
/// the colors.
#[inline]
pub(crate) fn ratio(x: f64, a: f64, b: f64) -> f64 {
    let span = b - a;
    if span > 0. { ((x - a) / span).clamp(0., 1.) } else { 0. }
}

/// Check that the positions are finite and non-decreasing.
pub(crate) fn check_sorted<Color>(stops: &[Stop<Color>]) -> Result<()> {
    let mut prev = f64::NEG_INFINITY;
    for (index, s) in stops.iter().enumerate() {
        if !s.position.is_finite() || s.position < prev {
            return Err(Error::StopsNotSorted { index })
        }
        prev = s.position;
    }
    Ok(())
}
