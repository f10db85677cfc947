use log::debug;
use crate::Stop;

/// Remove stops that do not change the rendered gradient.
///
/// A stop is dropped when it repeats the previous one (same position
/// and color), or when it sits between two stops having its color or
/// between two stops at its position.  The stops are scanned once from
/// left to right; only the last two kept stops are looked at.  The
/// result is a fixed point: simplifying it again changes nothing.
///
/// # Example
///
/// ```
/// use color_banding::{simplify_stops, Stop};
/// let stops = [Stop::new(0., 'a'), Stop::new(0.3, 'a'), Stop::new(0.6, 'a'),
///              Stop::new(1., 'b'), Stop::new(1., 'b')];
/// assert_eq!(simplify_stops(&stops),
///            vec![Stop::new(0., 'a'), Stop::new(0.6, 'a'),
///                 Stop::new(1., 'b')]);
/// ```
pub fn simplify_stops<Color>(stops: &[Stop<Color>]) -> Vec<Stop<Color>>
where Color: Clone + PartialEq {
    let mut kept: Vec<Stop<Color>> = Vec::with_capacity(stops.len());
    for s in stops {
        while redundant(&kept, s) { kept.pop(); }
        kept.push(s.clone());
    }
    debug!("simplified {} -> {} stops", stops.len(), kept.len());
    kept
}

/// Whether the last kept stop is useless once `next` follows it.
fn redundant<Color: PartialEq>(kept: &[Stop<Color>], next: &Stop<Color>)
                               -> bool {
    match kept {
        [.., last] if last == next => true,
        [.., left, middle] =>
            (middle.position == left.position
             && middle.position == next.position)
            || (middle.color == left.color && middle.color == next.color),
        _ => false,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn s(position: f64, color: u8) -> Stop<u8> { Stop::new(position, color) }

    #[test]
    fn drops_exact_duplicates() {
        assert_eq!(simplify_stops(&[s(0., 1), s(0.5, 2), s(0.5, 2), s(1., 3)]),
                   vec![s(0., 1), s(0.5, 2), s(1., 3)]);
    }

    #[test]
    fn drops_color_runs() {
        assert_eq!(simplify_stops(&[s(0., 1), s(0.2, 1), s(0.4, 1), s(0.6, 1),
                                    s(1., 2)]),
                   vec![s(0., 1), s(0.6, 1), s(1., 2)]);
    }

    #[test]
    fn drops_inner_stops_of_same_position() {
        assert_eq!(simplify_stops(&[s(0., 1), s(0.5, 2), s(0.5, 3), s(0.5, 4),
                                    s(1., 5)]),
                   vec![s(0., 1), s(0.5, 2), s(0.5, 4), s(1., 5)]);
    }

    #[test]
    fn keeps_meaningful_stops() {
        let stops = [s(0., 1), s(0.25, 2), s(0.5, 2), s(0.5, 3), s(1., 4)];
        assert_eq!(simplify_stops(&stops), stops.to_vec());
        assert!(simplify_stops::<u8>(&[]).is_empty());
        assert_eq!(simplify_stops(&[s(0.5, 1)]), vec![s(0.5, 1)]);
    }

    #[test]
    fn cascading_removals_reach_a_fixed_point() {
        // Dropping (1, 2) makes (1, 1) repeat the kept stop before it.
        let stops = [s(0., 1), s(1., 1), s(1., 2), s(1., 1)];
        let once = simplify_stops(&stops);
        assert_eq!(once, vec![s(0., 1), s(1., 1)]);
        assert_eq!(simplify_stops(&once), once);
    }

    #[test]
    fn idempotent() {
        let stops = [s(0., 1), s(0., 1), s(0.1, 2), s(0.1, 2), s(0.1, 3),
                     s(0.3, 3), s(0.3, 3), s(0.5, 3), s(0.5, 4), s(0.5, 4),
                     s(0.5, 5), s(0.7, 5), s(0.9, 5), s(1., 6)];
        let once = simplify_stops(&stops);
        assert_eq!(simplify_stops(&once), once);
        assert_eq!(once, vec![s(0., 1), s(0.1, 2), s(0.1, 3), s(0.5, 3),
                              s(0.5, 5), s(0.9, 5), s(1., 6)]);
    }
}
