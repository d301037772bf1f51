use crate::coverage::Coverage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The requested number of pages was reached.
    SampleFull,
    /// Every location is covered.
    CandidatesExhausted,
    /// Locations are left, but no remaining page carries any weight on them.
    NoPositiveScore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub iteration: usize,
    pub url: String,
    pub score: f64,
    pub coverage: Coverage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Selected urls in the order they were picked.
    pub urls: Vec<String>,
    pub rounds: Vec<Round>,
    pub termination: Termination,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn coverage(&self) -> Option<Coverage> {
        self.rounds.last().map(|round| round.coverage)
    }
}
