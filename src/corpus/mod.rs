mod source;


pub use self::source::{CorpusSource, DirectorySource, MemorySource};

use crate::error::SamplerError;
use crate::extractor::{Extraction, StructureExtractor};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub content: String,
}

/// All pages of one cluster in a stable order. Urls are unique.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pages: Vec<Page>,
    urls: HashSet<String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<U: Into<String>, C: Into<String>>(
        &mut self,
        url: U,
        content: C,
    ) -> Result<(), SamplerError> {
        let url = url.into();
        if !self.urls.insert(url.clone()) {
            return Err(SamplerError::DuplicateUrl(url));
        }

        self.pages.push(Page {
            url,
            content: content.into(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }
}

/// The distinct XPaths of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPage {
    pub url: String,
    pub locations: Vec<String>,
}

/// Page -> XPaths and XPath -> observed values for a whole cluster.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    pages: Vec<IndexedPage>,
    location_to_values: HashMap<String, Vec<String>>,
    distinct_locations: Vec<String>,
}

impl CorpusIndex {
    /// Pages that fail to parse stay in the index without any location.
    pub fn build(corpus: &Corpus, extractor: &dyn StructureExtractor) -> Self {
        let mut index = Self::default();

        for page in corpus.iter() {
            let extraction = match extractor.extract(&page.content) {
                Ok(extraction) => extraction,
                Err(error) => {
                    warn!("Failed to extract structure of '{}': {}", page.url, error);
                    Extraction::default()
                }
            };

            if extraction.is_empty() {
                debug!("Page '{}' has no text locations", page.url);
            }

            index.push_page(page.url.clone(), &extraction);
        }

        index
    }

    pub fn from_extractions<I>(pages: I) -> Result<Self, SamplerError>
    where
        I: IntoIterator<Item = (String, Extraction)>,
    {
        let mut index = Self::default();
        let mut urls = HashSet::new();

        for (url, extraction) in pages {
            if !urls.insert(url.clone()) {
                return Err(SamplerError::DuplicateUrl(url));
            }
            index.push_page(url, &extraction);
        }

        Ok(index)
    }

    fn push_page(&mut self, url: String, extraction: &Extraction) {
        let mut locations = Vec::with_capacity(extraction.len());

        for (location, value) in extraction.iter() {
            match self.location_to_values.get_mut(location) {
                Some(values) => values.push(value.to_owned()),
                None => {
                    self.distinct_locations.push(location.to_owned());
                    self.location_to_values
                        .insert(location.to_owned(), vec![value.to_owned()]);
                }
            }
            locations.push(location.to_owned());
        }

        self.pages.push(IndexedPage { url, locations });
    }

    /// Number of pages, including those without locations.
    pub fn cluster_size(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[IndexedPage] {
        &self.pages
    }

    pub fn values(&self, location: &str) -> Option<&[String]> {
        self.location_to_values.get(location).map(Vec::as_slice)
    }

    pub fn location_to_values(&self) -> &HashMap<String, Vec<String>> {
        &self.location_to_values
    }

    /// Every location of the cluster in first-seen order.
    pub fn distinct_locations(&self) -> &[String] {
        &self.distinct_locations
    }
}

#[cfg(test)]
pub(crate) fn index_of(pages: Vec<(&str, Vec<(&str, &str)>)>) -> CorpusIndex {
    CorpusIndex::from_extractions(pages.into_iter().map(|(url, entries)| {
        let extraction: Extraction = entries
            .into_iter()
            .map(|(location, value)| (location.to_owned(), value.to_owned()))
            .collect();
        (url.to_owned(), extraction)
    }))
    .expect("unique test urls")
}
