use crate::Stop;
use super::BandRange;

/// Move the positions of `stops` from the source interval of `range`
/// to its target interval.  Colors are left as they are.
pub fn rescale<Color>(stops: Vec<Stop<Color>>, range: &BandRange)
                      -> Vec<Stop<Color>> {
    stops.into_iter()
        .map(|s| Stop { position: range.map(s.position), ..s })
        .collect()
}
