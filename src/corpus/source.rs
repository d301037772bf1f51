use super::Corpus;
use crate::constants;
use crate::error::SamplerError;
use crate::util::Util;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Anything that can hand out a cluster of pages.
///
/// Iteration order of the returned corpus has to be stable, it decides ties
/// during selection.
pub trait CorpusSource {
    fn load(&self) -> Result<Corpus, SamplerError>;
}

pub struct MemorySource {
    pages: Vec<(String, String)>,
}

impl MemorySource {
    pub fn new(pages: Vec<(String, String)>) -> Self {
        Self { pages }
    }
}

impl CorpusSource for MemorySource {
    fn load(&self) -> Result<Corpus, SamplerError> {
        let mut corpus = Corpus::new();
        for (url, content) in &self.pages {
            corpus.insert(url.as_str(), content.as_str())?;
        }
        Ok(corpus)
    }
}

/// Every `.html`/`.htm` file of a directory, ordered by file name.
pub struct DirectorySource {
    directory: PathBuf,
    base_url: Option<Url>,
}

impl DirectorySource {
    pub fn new(directory: &Path, base_url: Option<Url>) -> Self {
        Self {
            directory: directory.to_path_buf(),
            base_url,
        }
    }

    fn page_url(&self, file_name: &str) -> Result<String, SamplerError> {
        match &self.base_url {
            Some(base_url) => Ok(base_url.join(file_name)?.to_string()),
            None => Ok(file_name.to_owned()),
        }
    }
}

impl CorpusSource for DirectorySource {
    fn load(&self) -> Result<Corpus, SamplerError> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.directory)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && Util::check_extension(path, constants::HTML_EXTENSIONS))
            .collect();
        paths.sort();

        let mut corpus = Corpus::new();
        for path in paths {
            let file_name = match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => name,
                None => {
                    warn!("Skipping file with non utf-8 name {:?}", path);
                    continue;
                }
            };

            let content = match fs::read(&path) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(error) => {
                    warn!("Failed to read page {:?}: {}", path, error);
                    continue;
                }
            };

            let url = self.page_url(file_name)?;
            debug!("Loaded '{}' from {:?}", url, path);
            corpus.insert(url, content)?;
        }

        Ok(corpus)
    }
}
