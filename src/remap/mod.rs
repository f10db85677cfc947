//! Remapping the stops of a gradient into bands.
//!
//! The interval \[0, 1\] is cut into [`BandRange`]s by the ticks
//! ([`band_ranges`]).  For each range, the stops determining its
//! colors are [`extract`]ed and [`rescale`]d onto the banded target
//! interval; the pieces are then concatenated from left to right.

use log::trace;
use crate::{BandingOptions, Error, Result, Stop, Tween, simplify_stops};
use crate::stop::check_sorted;

mod range;
mod extract;
mod rescale;

pub use range::{BandRange, band_ranges};
pub use extract::extract;
pub use rescale::rescale;

/// Band the gradient `stops` around the normalized `ticks`.
///
/// `ticks` must be strictly increasing in \[0, 1\] and the positions
/// of `stops` finite and non-decreasing.  `banding` is clamped to
/// \[0, 1\].  When `banding` is 0 or there are fewer than 2 ticks or
/// fewer than 2 stops, `stops` are returned unchanged.  The result is
/// simplified (see [`simplify_stops`]).  Use
/// [`BandingOptions::remap`] for other settings.
///
/// # Example
///
/// ```
/// use color_banding::{remap_stops, Stop};
/// let stops = [Stop::new(0., 0.), Stop::new(1., 100.)];
/// let banded = remap_stops(&stops, &[0.25, 0.75], 1.)?;
/// assert_eq!(banded, vec![
///     Stop::new(0., 0.), Stop::new(0.125, 25.),
///     Stop::new(0.5, 25.), Stop::new(0.5, 75.),
///     Stop::new(0.875, 75.), Stop::new(1., 100.)]);
/// # Ok::<(), color_banding::Error>(())
/// ```
pub fn remap_stops<Color>(stops: &[Stop<Color>], ticks: &[f64], banding: f64)
                          -> Result<Vec<Stop<Color>>>
where Color: Tween + PartialEq {
    BandingOptions::new().banding(banding).remap(stops, ticks)
}

/// Apply the `ranges` to `stops`, skipping degenerate ranges.
///
/// The colors at both ends of a band are held flat from the target
/// bounds out to the source bounds, so a tick on a hard transition
/// keeps a sharp edge with a flat color on each side.
///
/// Unlike [`remap_stops`], this neither checks its input nor
/// short-circuits the identity cases nor simplifies the result.
pub fn remap_ranges<Color>(stops: &[Stop<Color>], ranges: &[BandRange])
                           -> Vec<Stop<Color>>
where Color: Tween {
    let mut out = Vec::with_capacity(stops.len() + 4 * ranges.len());
    for r in ranges.iter().filter(|r| !r.is_degenerate()) {
        trace!("band [{}, {}] -> [{}, {}]",
               r.old_min, r.old_max, r.new_min, r.new_max);
        let band = rescale(extract(stops, r.old_min, r.old_max), r);
        // Target bounds lie within the source bounds.
        let head = band.first().filter(|_| r.new_min > r.old_min)
            .map(|s| Stop::new(r.old_min, s.color.clone()));
        let tail = band.last().filter(|_| r.new_max < r.old_max)
            .map(|s| Stop::new(r.old_max, s.color.clone()));
        out.extend(head);
        out.extend(band);
        out.extend(tail);
    }
    out
}

/// Check that the ticks lie in \[0, 1\] and are strictly increasing.
pub(crate) fn check_ticks(ticks: &[f64]) -> Result<()> {
    for (index, &value) in ticks.iter().enumerate() {
        if !(0. ..= 1.).contains(&value) {
            return Err(Error::TickOutOfRange { index, value })
        }
        if index > 0 && value <= ticks[index - 1] {
            return Err(Error::TicksNotIncreasing { index })
        }
    }
    Ok(())
}

impl BandingOptions {
    /// Band the gradient `stops` around the normalized `ticks`
    /// according to these options.  See [`remap_stops`].
    pub fn remap<Color>(&self, stops: &[Stop<Color>], ticks: &[f64])
                        -> Result<Vec<Stop<Color>>>
    where Color: Tween + PartialEq {
        check_sorted(stops)?;
        check_ticks(ticks)?;
        let banding = self.clamped_banding();
        if banding == 0. || ticks.len() < 2 || stops.len() < 2 {
            return Ok(stops.to_vec())
        }
        let stops1 = remap_ranges(stops,
                                  &band_ranges(ticks, banding, self.layout));
        Ok(if self.simplify { simplify_stops(&stops1) } else { stops1 })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BandLayout, ColorRange, Gradient};

    fn bw() -> Vec<Stop<f64>> { vec![Stop::new(0., 0.), Stop::new(1., 100.)] }

    #[test]
    fn identity_cases() {
        let stops = vec![Stop::new(0., 10.), Stop::new(0.5, 20.),
                         Stop::new(1., 30.)];
        assert_eq!(remap_stops(&stops, &[0.25, 0.5], 0.).unwrap(), stops);
        assert_eq!(remap_stops(&stops, &[0.5], 0.8).unwrap(), stops);
        assert_eq!(remap_stops(&stops, &[], 0.8).unwrap(), stops);
        assert_eq!(remap_stops(&stops, &[0.25, 0.5], -2.).unwrap(), stops);
        assert_eq!(remap_stops(&stops, &[0.25, 0.5], f64::NAN).unwrap(),
                   stops);
        let one = vec![Stop::new(0.3, 1.)];
        assert_eq!(remap_stops(&one, &[0.25, 0.5], 1.).unwrap(), one);
    }

    #[test]
    fn half_banding() {
        let b = remap_stops(&bw(), &[0.25, 0.75], 0.5).unwrap();
        assert_eq!(b, vec![
            Stop::new(0., 0.), Stop::new(0.1875, 25.),
            Stop::new(0.375, 25.), Stop::new(0.625, 75.),
            Stop::new(0.8125, 75.), Stop::new(1., 100.)]);
    }

    #[test]
    fn without_simplification() {
        let opts = BandingOptions::new().banding(1.).simplify(false);
        let b = opts.remap(&bw(), &[0., 0.5, 1.]).unwrap();
        assert_eq!(b, vec![Stop::new(0., 0.), Stop::new(0.25, 50.),
                           Stop::new(0.5, 50.), Stop::new(0.5, 50.),
                           Stop::new(0.75, 50.), Stop::new(1., 100.)]);
    }

    #[test]
    fn contour_layout_sharpens_ticks() {
        let opts = BandingOptions::new().banding(1.)
            .layout(BandLayout::Contour);
        let b = opts.remap(&bw(), &[0.25, 0.75]).unwrap();
        assert_eq!(b, vec![Stop::new(0., 0.), Stop::new(0.25, 0.),
                           Stop::new(0.25, 50.), Stop::new(0.75, 50.),
                           Stop::new(0.75, 100.), Stop::new(1., 100.)]);
    }

    #[test]
    fn ranges_with_a_single_tick() {
        let r = band_ranges(&[0.5], 1., BandLayout::Segments);
        assert_eq!(remap_ranges(&bw(), &r),
                   vec![Stop::new(0., 0.), Stop::new(0.25, 50.),
                        Stop::new(0.5, 50.), Stop::new(0.5, 50.),
                        Stop::new(0.75, 50.), Stop::new(1., 100.)]);
    }

    #[test]
    fn tick_on_hard_transition() {
        let stops = vec![Stop::new(0., 0.), Stop::new(0.5, 10.),
                         Stop::new(0.5, 90.), Stop::new(1., 100.)];
        let b = remap_stops(&stops, &[0.25, 0.5, 0.75], 1.).unwrap();
        assert_eq!(b, vec![
            Stop::new(0., 0.), Stop::new(0.125, 5.),
            Stop::new(0.375, 5.), Stop::new(0.375, 10.),
            Stop::new(0.5, 10.), Stop::new(0.5, 90.),
            Stop::new(0.625, 90.), Stop::new(0.625, 95.),
            Stop::new(0.875, 95.), Stop::new(1., 100.)]);
        let g = Gradient::new(stops).unwrap();
        let b = Gradient::new(b).unwrap();
        assert_eq!(b.rgb(0.5), g.rgb(0.5));
        // Flat on each side of the tick, sharp at it.
        for t in [0.38, 0.45, 0.49, 0.5] { assert_eq!(b.rgb(t), 10.); }
        for t in [0.51, 0.55, 0.62] { assert_eq!(b.rgb(t), 90.); }
    }

    #[test]
    fn tick_on_hard_transition_with_partial_banding() {
        let stops = vec![Stop::new(0., 0.), Stop::new(0.5, 10.),
                         Stop::new(0.5, 90.), Stop::new(1., 100.)];
        let b = Gradient::new(remap_stops(&stops, &[0.25, 0.5, 0.75], 0.5)
                              .unwrap()).unwrap();
        // The band around 0.5 spans [0.4375, 0.5625].
        for t in [0.44, 0.47, 0.5] { assert_eq!(b.rgb(t), 10.); }
        for t in [0.501, 0.53, 0.56] { assert_eq!(b.rgb(t), 90.); }
    }

    #[test]
    fn invalid_ticks() {
        assert_eq!(remap_stops(&bw(), &[0.5, 0.5], 0.5),
                   Err(Error::TicksNotIncreasing { index: 1 }));
        assert_eq!(remap_stops(&bw(), &[0.6, 0.2], 0.5),
                   Err(Error::TicksNotIncreasing { index: 1 }));
        assert_eq!(remap_stops(&bw(), &[0.2, 1.5], 0.5),
                   Err(Error::TickOutOfRange { index: 1, value: 1.5 }));
        assert!(matches!(remap_stops(&bw(), &[f64::NAN, 0.5], 0.),
                         Err(Error::TickOutOfRange { index: 0, .. })));
    }

    #[test]
    fn invalid_stops() {
        let stops = vec![Stop::new(0.5, 0.), Stop::new(0.25, 1.)];
        assert_eq!(remap_stops(&stops, &[0.2, 0.8], 0.5),
                   Err(Error::StopsNotSorted { index: 1 }));
    }
}
