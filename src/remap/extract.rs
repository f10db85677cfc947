use crate::{Stop, Tween};
use crate::stop::ratio;

/// Return the stops determining the colors of the gradient `stops` on
/// \[`min`, `max`\].
///
/// At most one stop is kept on each side of the interval; it is then
/// replaced by a stop at `min` (resp. `max`) carrying the interpolated
/// color.  If a single stop remains, the interval has a flat color and
/// that stop is returned, moved inside \[`min`, `max`\] if needed.
///
/// `stops` must be sorted by position.
///
/// # Example
///
/// ```
/// use color_banding::{Stop, remap::extract};
/// let stops = [Stop::new(0., 0.), Stop::new(1., 10.)];
/// assert_eq!(extract(&stops, 0.25, 0.5),
///            vec![Stop::new(0.25, 2.5), Stop::new(0.5, 5.)]);
/// ```
pub fn extract<Color>(stops: &[Stop<Color>], min: f64, max: f64)
                      -> Vec<Stop<Color>>
where Color: Tween {
    if stops.is_empty() { return vec![] }
    let len = stops.len();
    // Keep the last stop at or before `min` and the first one at or
    // after `max`, but at least one stop.
    let start = stops.partition_point(|s| s.position <= min).saturating_sub(1)
        .min(len - 1);
    let end = (stops.partition_point(|s| s.position < max) + 1)
        .max(start + 1).min(len);
    let mut sub = stops[start .. end].to_vec();
    let n = sub.len();
    if n == 1 {
        let s = &mut sub[0];
        s.position = s.position.max(min).min(max);
        return sub
    }
    if sub[0].position < min {
        let (s0, s1) = (&sub[0], &sub[1]);
        let color = s0.color.tween(&s1.color,
                                   ratio(min, s0.position, s1.position));
        sub[0] = Stop::new(min, color);
    }
    if sub[n - 1].position > max {
        let (s0, s1) = (&sub[n - 2], &sub[n - 1]);
        let color = s0.color.tween(&s1.color,
                                   ratio(max, s0.position, s1.position));
        sub[n - 1] = Stop::new(max, color);
    }
    sub
}
