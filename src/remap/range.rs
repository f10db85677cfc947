use crate::BandLayout;
use crate::options::clamp_banding;
use crate::stop::ratio;

/// A piece of \[0, 1\] and where it lands once banded.
///
/// Stops lying in \[`old_min`, `old_max`\] are moved linearly onto
/// \[`new_min`, `new_max`\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandRange {
    pub old_min: f64,
    pub old_max: f64,
    pub new_min: f64,
    pub new_max: f64,
}

impl BandRange {
    /// The range mapping \[`min`, `max`\] onto itself.
    pub fn identity(min: f64, max: f64) -> Self {
        BandRange { old_min: min, old_max: max, new_min: min, new_max: max }
    }

    /// Whether the source interval is empty.
    #[inline]
    pub fn is_degenerate(&self) -> bool { self.old_min >= self.old_max }

    /// Width of the target interval.
    #[inline]
    pub fn new_width(&self) -> f64 { self.new_max - self.new_min }

    /// Move the position `p` of \[`old_min`, `old_max`\] to the target
    /// interval.  The bounds map exactly onto the target bounds and a
    /// degenerate range collapses everything onto `new_min`.
    pub fn map(&self, p: f64) -> f64 {
        if self.is_degenerate() || p <= self.old_min { self.new_min }
        else if p >= self.old_max { self.new_max }
        else {
            self.new_min
                + ratio(p, self.old_min, self.old_max) * self.new_width()
        }
    }
}

/// Return the ranges of \[0, 1\] delimited by `ticks` together with
/// their banded targets, from left to right.
///
/// `ticks` are assumed to be strictly increasing in \[0, 1\] and
/// `banding` is clamped to \[0, 1\].
///
/// # Example
///
/// ```
/// use color_banding::{BandLayout, BandRange, remap::band_ranges};
/// let r = band_ranges(&[0.5], 0.5, BandLayout::Segments);
/// assert_eq!(r, vec![
///     BandRange { old_min: 0., old_max: 0.5, new_min: 0., new_max: 0.375 },
///     BandRange { old_min: 0.5, old_max: 1., new_min: 0.625, new_max: 1. }]);
/// ```
pub fn band_ranges(ticks: &[f64], banding: f64, layout: BandLayout)
                   -> Vec<BandRange> {
    let banding = clamp_banding(banding);
    match layout {
        BandLayout::Segments => segments(ticks, banding),
        BandLayout::Contour => contour(ticks, banding),
    }
}

/// `N` ticks give `N + 1` segments, each shrunk by `banding / 2` of
/// its width on every side that is a tick.
fn segments(ticks: &[f64], banding: f64) -> Vec<BandRange> {
    let n = ticks.len();
    (0 ..= n).map(|i| {
        let old_min = if i == 0 { 0. } else { ticks[i - 1] };
        let old_max = if i == n { 1. } else { ticks[i] };
        let shrink = banding / 2. * (old_max - old_min);
        let new_min = if old_min <= 0. { old_min } else { old_min + shrink };
        let new_max = if old_max >= 1. { old_max } else { old_max - shrink };
        // With full banding both ends meet; keep them ordered.
        BandRange { old_min, old_max, new_min, new_max: new_max.max(new_min) }
    }).collect()
}

/// Every tick gets a lower and an upper half band reaching to the
/// midpoints with its neighbours (or to 0 and 1).  Both are squeezed
/// towards the tick.
fn contour(ticks: &[f64], banding: f64) -> Vec<BandRange> {
    let n = ticks.len();
    if n == 0 { return vec![BandRange::identity(0., 1.)] }
    let mut ranges = Vec::with_capacity(2 * n);
    for (i, &t) in ticks.iter().enumerate() {
        let below = if i == 0 { 0. } else { (ticks[i - 1] + t) / 2. };
        let above = if i == n - 1 { 1. } else { (t + ticks[i + 1]) / 2. };
        ranges.push(BandRange {
            old_min: below, old_max: t,
            new_min: (below + banding * (t - below)).min(t), new_max: t });
        ranges.push(BandRange {
            old_min: t, old_max: above,
            new_min: t, new_max: (above + banding * (t - above)).max(t) });
    }
    ranges
}
