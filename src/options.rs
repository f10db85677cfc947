use log::warn;

/// How tick positions delimit the bands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde",
           derive(serde::Serialize, serde::Deserialize),
           serde(rename_all = "lowercase"))]
pub enum BandLayout {
    /// The ticks split \[0, 1\] into segments.  Each segment is
    /// squeezed away from its ticks, leaving around every tick a band
    /// of the color the gradient has at that tick.  The ends 0 and 1
    /// stay in place.
    #[default]
    Segments,
    /// Flat bands sit between ticks (around their midpoints) and the
    /// color transitions are squeezed onto the ticks, as contour maps
    /// do.  With a banding of 1 every tick is a sharp transition.
    Contour,
}

/// Settings of the banding transformation.
///
/// The default (`banding == 0.`) leaves gradients untouched.
///
/// # Example
///
/// ```
/// use color_banding::{BandingOptions, BandLayout};
/// let opts = BandingOptions::new().banding(0.6).layout(BandLayout::Contour);
/// assert_eq!(opts.banding, 0.6);
/// assert!(opts.simplify);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde",
           derive(serde::Serialize, serde::Deserialize),
           serde(default))]
pub struct BandingOptions {
    /// Amount of banding: 0 = none, 1 = completely banded.  Values
    /// outside \[0, 1\] are clamped when used.
    pub banding: f64,
    pub layout: BandLayout,
    /// Drop stops that do not change the rendering after remapping.
    pub simplify: bool,
}

impl Default for BandingOptions {
    fn default() -> Self {
        BandingOptions { banding: 0., layout: BandLayout::Segments,
                         simplify: true }
    }
}

impl BandingOptions {
    pub fn new() -> Self { Self::default() }

    /// Set the amount of banding.
    pub fn banding(mut self, banding: f64) -> Self {
        self.banding = banding;
        self
    }

    /// Set how ticks delimit the bands.
    pub fn layout(mut self, layout: BandLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Whether to simplify the remapped stops.
    pub fn simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    /// The banding clamped to \[0, 1\].
    pub fn clamped_banding(&self) -> f64 { clamp_banding(self.banding) }
}

/// Clamp `banding` to \[0, 1\]; NaN means no banding.
pub(crate) fn clamp_banding(banding: f64) -> f64 {
    if banding.is_nan() {
        warn!("NaN banding, leaving the gradient unbanded");
        0.
    } else {
        banding.clamp(0., 1.)
    }
}
