//! Pick a handful of pages that together cover the structure of a cluster of
//! similar HTML pages.
//!
//! Every page is reduced to the XPaths of its text leaves. XPaths are weighted
//! by how often they occur and how much their text varies across the cluster,
//! then pages are picked greedily by the weight of the XPaths they still add.

pub mod config;
mod constants;
pub mod corpus;
pub mod coverage;
mod error;
pub mod extractor;
pub mod scorer;
pub mod selector;
mod util;
pub mod weights;


pub use config::SamplerConfig;
pub use corpus::{Corpus, CorpusIndex, CorpusSource, DirectorySource, MemorySource};
pub use coverage::Coverage;
pub use error::SamplerError;
pub use extractor::{Extraction, HtmlExtractor, StructureExtractor};
pub use selector::{GreedySelector, Round, Sample, Termination};
pub use weights::WeightModel;

use log::info;
use std::path::Path;

pub struct ClusterSampler {
    config: SamplerConfig,
    extractor: Box<dyn StructureExtractor>,
}

impl ClusterSampler {
    pub fn new(config: SamplerConfig) -> Self {
        let extractor = Box::new(HtmlExtractor::new(&config.ignore_tags));
        Self { config, extractor }
    }

    pub fn with_extractor(config: SamplerConfig, extractor: Box<dyn StructureExtractor>) -> Self {
        Self { config, extractor }
    }

    pub fn from_config_file(config_path: &Path) -> Result<Self, SamplerError> {
        let config = SamplerConfig::parse_path(config_path)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn sample(&self, source: &dyn CorpusSource) -> Result<Sample, SamplerError> {
        let corpus = source.load()?;
        Ok(self.sample_corpus(&corpus))
    }

    pub fn sample_corpus(&self, corpus: &Corpus) -> Sample {
        info!(
            "Sampling up to {} of {} pages",
            self.config.sample_size,
            corpus.len()
        );
        let index = self.index(corpus);
        self.sample_index(&index)
    }

    pub fn index(&self, corpus: &Corpus) -> CorpusIndex {
        CorpusIndex::build(corpus, self.extractor.as_ref())
    }

    pub fn sample_index(&self, index: &CorpusIndex) -> Sample {
        let weights = WeightModel::from_index(index);
        GreedySelector::new(index, &weights).select(self.config.sample_size)
    }
}

impl Default for ClusterSampler {
    fn default() -> Self {
        Self::new(SamplerConfig::default())
    }
}
