use crate::corpus::{CorpusIndex, IndexedPage};
use crate::scorer;
use crate::weights::WeightModel;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    /// Share of pages that are sampled or have no weighted location left uncovered.
    pub weight: f64,
    /// Share of all distinct locations that occur on a sampled page.
    pub location: f64,
}

/// Measures a sample against the untouched corpus snapshot.
pub struct CoverageReporter<'a> {
    index: &'a CorpusIndex,
    weights: &'a WeightModel,
    pages: HashMap<&'a str, &'a IndexedPage>,
}

impl<'a> CoverageReporter<'a> {
    pub fn new(index: &'a CorpusIndex, weights: &'a WeightModel) -> Self {
        let pages = index
            .pages()
            .iter()
            .map(|page| (page.url.as_str(), page))
            .collect();

        Self {
            index,
            weights,
            pages,
        }
    }

    pub fn report(&self, sample: &[String], candidates: &HashSet<String>) -> Coverage {
        Coverage {
            weight: self.weight_coverage(sample, candidates),
            location: self.location_coverage(sample),
        }
    }

    pub fn weight_coverage(&self, sample: &[String], candidates: &HashSet<String>) -> f64 {
        let cluster_size = self.index.cluster_size();
        if cluster_size == 0 {
            return 1.0;
        }

        let sampled: HashSet<&str> = sample.iter().map(String::as_str).collect();
        let covered = self
            .index
            .pages()
            .iter()
            .filter(|page| !sampled.contains(page.url.as_str()))
            .filter(|page| scorer::page_score(&page.locations, self.weights, Some(candidates)) == 0.0)
            .count();

        (sampled.len() + covered) as f64 / cluster_size as f64
    }

    pub fn location_coverage(&self, sample: &[String]) -> f64 {
        let total = self.index.distinct_locations().len();
        if total == 0 {
            return 1.0;
        }

        let seen: HashSet<&str> = sample
            .iter()
            .filter_map(|url| self.pages.get(url.as_str()))
            .flat_map(|page| page.locations.iter().map(String::as_str))
            .collect();

        seen.len() as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::CoverageReporter;
    use crate::corpus::{index_of, CorpusIndex};
    use crate::weights::WeightModel;
    use std::collections::HashSet;

    fn index() -> CorpusIndex {
        index_of(vec![
            ("a", vec![("/nav", "Home"), ("/title", "A"), ("/price", "1")]),
            ("b", vec![("/nav", "Home"), ("/title", "B")]),
            ("c", vec![("/nav", "Home"), ("/title", "C"), ("/review", "good")]),
            ("d", vec![]),
        ])
    }

    fn all_locations(index: &CorpusIndex) -> HashSet<String> {
        index.distinct_locations().iter().cloned().collect()
    }

    #[test]
    fn empty_sample() {
        let index = index();
        let weights = WeightModel::from_index(&index);
        let reporter = CoverageReporter::new(&index, &weights);

        let coverage = reporter.report(&[], &all_locations(&index));
        // only the page without locations has nothing left to contribute
        assert!((coverage.weight - 0.25).abs() < 1e-9);
        assert_eq!(coverage.location, 0.0);
    }

    #[test]
    fn partial_sample() {
        let index = index();
        let weights = WeightModel::from_index(&index);
        let reporter = CoverageReporter::new(&index, &weights);

        let sample = vec!["a".to_owned()];
        let mut candidates = all_locations(&index);
        for location in ["/nav", "/title", "/price"] {
            candidates.remove(location);
        }

        let coverage = reporter.report(&sample, &candidates);
        // a is sampled, b and d have nothing weighted left, c still has /review
        assert!((coverage.weight - 0.75).abs() < 1e-9);
        assert!((coverage.location - 0.75).abs() < 1e-9);
    }

    #[test]
    fn full_sample() {
        let index = index();
        let weights = WeightModel::from_index(&index);
        let reporter = CoverageReporter::new(&index, &weights);

        let sample = vec!["a".to_owned(), "c".to_owned()];
        let coverage = reporter.report(&sample, &HashSet::new());
        assert_eq!(coverage.weight, 1.0);
        assert_eq!(coverage.location, 1.0);
    }

    #[test]
    fn empty_cluster() {
        let index = CorpusIndex::default();
        let weights = WeightModel::from_index(&index);
        let reporter = CoverageReporter::new(&index, &weights);

        let coverage = reporter.report(&[], &HashSet::new());
        assert_eq!(coverage.weight, 1.0);
        assert_eq!(coverage.location, 1.0);
    }
}
