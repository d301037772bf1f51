use crate::corpus::CorpusIndex;
use std::collections::{HashMap, HashSet};

/// Number of pages a location was observed on.
pub fn frequency(values: &[String]) -> usize {
    values.len()
}

/// `1 - F / (M * T)` with `F` the frequency, `M` the cluster size and `T` the
/// number of distinct values.
///
/// Locations repeating the same text on every page of the cluster (navigation,
/// footers) end up at 0. Without any values or pages there is nothing to
/// inform about and the result is 0.
pub fn informativeness(cluster_size: usize, values: &[String]) -> f64 {
    let distinct = values.iter().collect::<HashSet<_>>().len();
    if distinct == 0 || cluster_size == 0 {
        return 0.0;
    }

    1.0 - frequency(values) as f64 / (cluster_size * distinct) as f64
}

pub fn weight(cluster_size: usize, values: &[String]) -> f64 {
    frequency(values) as f64 * informativeness(cluster_size, values)
}

/// Weights of all locations of one corpus snapshot.
#[derive(Debug, Clone, Default)]
pub struct WeightModel {
    weights: HashMap<String, f64>,
}

impl WeightModel {
    pub fn from_index(index: &CorpusIndex) -> Self {
        let cluster_size = index.cluster_size();
        let weights = index
            .location_to_values()
            .iter()
            .map(|(location, values)| (location.clone(), weight(cluster_size, values)))
            .collect();

        Self { weights }
    }

    /// Unknown locations weigh nothing.
    pub fn get(&self, location: &str) -> f64 {
        self.weights.get(location).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(String, f64)> for WeightModel {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
