use log::debug;
use crate::{BandingOptions, ColorRange, Gradient, Result, Stop, Tween};
use crate::gradient::color_at;

/// A gradient kept banded around ticks that change over time.
///
/// The drawing layer owning the ticks calls [`set_ticks`] whenever it
/// recomputes them and reads the banded [`stops`].  The returned flag
/// says whether the stops changed, so that whatever is colored by the
/// gradient can be redrawn.
///
/// [`set_ticks`]: BandedGradient::set_ticks
/// [`stops`]: BandedGradient::stops
///
/// # Example
///
/// ```
/// use color_banding::{BandedGradient, BandingOptions, Gradient};
/// let g = Gradient::from_colors(0., 100.);
/// let mut b = BandedGradient::new(g, BandingOptions::new().banding(1.));
/// assert!(b.set_ticks_with(&[0., 50., 100.], |v| v / 100.)?);
/// assert!(!b.set_ticks(&[0., 0.5, 1.])?);
/// assert_eq!(b.stops().len(), 4);
/// # Ok::<(), color_banding::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct BandedGradient<Color> {
    gradient: Gradient<Color>,
    options: BandingOptions,
    ticks: Vec<f64>,
    stops: Vec<Stop<Color>>, // banded stops of `gradient`
}

impl<Color> BandedGradient<Color>
where Color: Tween + PartialEq {
    /// Create a banded gradient without ticks (thus not banded yet).
    pub fn new(gradient: Gradient<Color>, options: BandingOptions) -> Self {
        let stops = gradient.stops().to_vec();
        BandedGradient { gradient, options, ticks: vec![], stops }
    }

    /// The gradient before banding.
    pub fn gradient(&self) -> &Gradient<Color> { &self.gradient }

    pub fn options(&self) -> &BandingOptions { &self.options }

    /// The current normalized ticks.
    pub fn ticks(&self) -> &[f64] { &self.ticks }

    /// The banded stops.
    pub fn stops(&self) -> &[Stop<Color>] { &self.stops }

    /// Band around the normalized `ticks`.  Return whether the banded
    /// stops changed.  On error, nothing is modified.
    pub fn set_ticks(&mut self, ticks: &[f64]) -> Result<bool> {
        let stops = self.options.remap(self.gradient.stops(), ticks)?;
        self.ticks = ticks.to_vec();
        Ok(self.replace(stops))
    }

    /// Same as [`set_ticks`](Self::set_ticks) for ticks given as data
    /// values, normalized to \[0, 1\] by `normalize`.  Ticks falling
    /// outside \[0, 1\] once normalized delimit nothing and are ignored.
    pub fn set_ticks_with<F>(&mut self, values: &[f64], normalize: F)
                             -> Result<bool>
    where F: Fn(f64) -> f64 {
        let ticks: Vec<f64> = values.iter().map(|&v| normalize(v))
            .filter(|t| (0. ..= 1.).contains(t))
            .collect();
        self.set_ticks(&ticks)
    }

    /// Change the banding options.  Return whether the banded stops
    /// changed.
    pub fn set_options(&mut self, options: BandingOptions) -> Result<bool> {
        let stops = options.remap(self.gradient.stops(), &self.ticks)?;
        self.options = options;
        Ok(self.replace(stops))
    }

    /// Change the underlying gradient.  Return whether the banded
    /// stops changed.
    pub fn set_gradient(&mut self, gradient: Gradient<Color>) -> Result<bool> {
        let stops = self.options.remap(gradient.stops(), &self.ticks)?;
        self.gradient = gradient;
        Ok(self.replace(stops))
    }

    fn replace(&mut self, stops: Vec<Stop<Color>>) -> bool {
        if stops == self.stops { return false }
        debug!("banded stops changed: {} -> {} stops",
               self.stops.len(), stops.len());
        self.stops = stops;
        true
    }
}

impl<Color: Tween> ColorRange<Color> for BandedGradient<Color> {
    fn rgb(&self, t: f64) -> Color { color_at(&self.stops, t) }
}
