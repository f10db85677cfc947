use lazy_static::lazy_static;
use rgb::RGBA8;
use crate::{BandingOptions, ColorRange, Error, Result, Stop, Tween};
use crate::stop::{check_sorted, ratio};

lazy_static! {
    /// Stops of the default gradient, from light `#E6EBF5` to dark
    /// blue `#003399`.  See [`Gradient::default`].
    pub static ref DEFAULT_STOPS: Vec<Stop<RGBA8>> = vec![
        Stop::new(0., RGBA8::new(0xE6, 0xEB, 0xF5, 0xFF)),
        Stop::new(1., RGBA8::new(0x00, 0x33, 0x99, 0xFF)),
    ];
}

/// A gradient given by color stops.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use color_banding::{ColorRange, Gradient, Stop};
/// let g = Gradient::new(vec![Stop::new(0., RGB8::new(255, 0, 0)),
///                            Stop::new(0.5, RGB8::new(0, 255, 0)),
///                            Stop::new(1., RGB8::new(0, 0, 255))])?;
/// assert_eq!(g.rgb(0.25), RGB8::new(128, 128, 0));
/// # Ok::<(), color_banding::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient<Color> {
    stops: Vec<Stop<Color>>, // Invariant: non-empty, sorted, finite
}

impl<Color: Tween> Gradient<Color> {
    /// Create a gradient.  The positions of `stops` must be finite and
    /// non-decreasing and there must be at least one stop.
    pub fn new(stops: Vec<Stop<Color>>) -> Result<Self> {
        if stops.is_empty() { return Err(Error::TooFewStops) }
        check_sorted(&stops)?;
        Ok(Gradient { stops })
    }

    /// Return the gradient from `min` at 0 to `max` at 1.
    pub fn from_colors(min: Color, max: Color) -> Self {
        Gradient { stops: vec![Stop::new(0., min), Stop::new(1., max)] }
    }

    /// Return the stops of the gradient.
    #[inline]
    pub fn stops(&self) -> &[Stop<Color>] { &self.stops }

    /// Return the stops, consuming the gradient.
    pub fn into_stops(self) -> Vec<Stop<Color>> { self.stops }

    /// Return the gradient banded around the normalized `ticks`.
    /// See [`BandingOptions::remap`].
    pub fn banded(&self, ticks: &[f64], options: &BandingOptions)
                  -> Result<Self>
    where Color: PartialEq {
        Ok(Gradient { stops: options.remap(&self.stops, ticks)? })
    }
}

impl Default for Gradient<RGBA8> {
    /// The gradient of [`struct@DEFAULT_STOPS`].
    fn default() -> Self { Gradient { stops: DEFAULT_STOPS.clone() } }
}

impl<Color: Tween> ColorRange<Color> for Gradient<Color> {
    /// Returns the color at `t`.  Before the first stop (and after the
    /// last one), the color is the one of that stop.  At a hard
    /// transition, `t` equal to its position gives the left color.
    fn rgb(&self, t: f64) -> Color { color_at(&self.stops, t) }
}

/// Color at `t` of the gradient `stops`, assumed non-empty and sorted.
pub(crate) fn color_at<Color: Tween>(stops: &[Stop<Color>], t: f64) -> Color {
    let i = stops.partition_point(|s| s.position < t);
    let from = i.checked_sub(1).and_then(|j| stops.get(j));
    match (from, stops.get(i)) {
        (Some(s0), Some(s1)) =>
            s0.color.tween(&s1.color, ratio(t, s0.position, s1.position)),
        (Some(s), None) | (None, Some(s)) => s.color.clone(),
        (None, None) => unreachable!("gradients have at least one stop"),
    }
}
