mod sample;
mod state;


pub use self::sample::{Round, Sample, Termination};

use self::state::SelectionState;
use crate::corpus::CorpusIndex;
use crate::coverage::CoverageReporter;
use crate::scorer;
use crate::weights::WeightModel;
use log::{debug, info};

/// Greedy weighted coverage: keep picking the page that adds the most
/// uncovered weight until the sample is full or nothing is left to gain.
pub struct GreedySelector<'a> {
    index: &'a CorpusIndex,
    weights: &'a WeightModel,
}

impl<'a> GreedySelector<'a> {
    pub fn new(index: &'a CorpusIndex, weights: &'a WeightModel) -> Self {
        Self { index, weights }
    }

    pub fn select(&self, sample_size: usize) -> Sample {
        let reporter = CoverageReporter::new(self.index, self.weights);
        let mut state = SelectionState::new(self.index);
        let mut rounds = Vec::new();

        let termination = loop {
            if state.sample.len() >= sample_size {
                break Termination::SampleFull;
            }

            if state.candidates.is_empty() {
                break Termination::CandidatesExhausted;
            }

            // a cluster of a single page gets that page, whatever it scores
            let pick = match Self::best_page(&state, self.weights) {
                Some(pick) => Some(pick),
                None if state.sample.is_empty() && state.active.len() == 1 => {
                    Self::first_uncovered_page(&state)
                }
                None => None,
            };

            let (position, score) = match pick {
                Some(pick) => pick,
                None => {
                    debug!(
                        "No remaining page scores above zero, {} locations stay uncovered",
                        state.candidates.len()
                    );
                    break Termination::NoPositiveScore;
                }
            };

            let page = state.commit(position);
            let coverage = reporter.report(&state.sample, &state.candidates);
            debug!(
                "Round {}: '{}' score {:.4} weight coverage {:.4} location coverage {:.4}",
                rounds.len(),
                page.url,
                score,
                coverage.weight,
                coverage.location
            );

            rounds.push(Round {
                iteration: rounds.len(),
                url: page.url,
                score,
                coverage,
            });
        };

        info!(
            "Selected {} of {} pages ({:?})",
            state.sample.len(),
            self.index.cluster_size(),
            termination
        );

        Sample {
            urls: state.sample,
            rounds,
            termination,
        }
    }

    /// Highest scoring active page. The first one in corpus order wins a tie,
    /// pages scoring zero never win.
    fn best_page(state: &SelectionState, weights: &WeightModel) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;

        for (position, page) in state.active.iter().enumerate() {
            let score = scorer::page_score(&page.locations, weights, Some(&state.candidates));
            let to_beat = best.map_or(0.0, |(_, best_score)| best_score);
            if score > to_beat {
                best = Some((position, score));
            }
        }

        best
    }

    fn first_uncovered_page(state: &SelectionState) -> Option<(usize, f64)> {
        state
            .active
            .iter()
            .position(|page| {
                page.locations
                    .iter()
                    .any(|location| state.candidates.contains(location))
            })
            .map(|position| (position, 0.0))
    }
}
