use crate::weights::WeightModel;
use std::collections::HashSet;

/// Sum of the weights of a page's locations.
///
/// With a restriction only locations contained in it are counted.
pub fn page_score(
    locations: &[String],
    weights: &WeightModel,
    restriction: Option<&HashSet<String>>,
) -> f64 {
    locations
        .iter()
        .filter(|location| restriction.map_or(true, |set| set.contains(*location)))
        .map(|location| weights.get(location))
        .sum()
}
