use super::error::ConfigError;
use crate::constants;
use crate::util::Util;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct SamplerConfig {
    /// Upper bound on the number of pages in a sample.
    pub sample_size: usize,
    /// Elements whose text is left out of the structure of a page.
    pub ignore_tags: Vec<String>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_size: constants::DEFAULT_SAMPLE_SIZE,
            ignore_tags: constants::DEFAULT_IGNORED_TAGS
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
        }
    }
}

impl SamplerConfig {
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn parse_path(config_path: &Path) -> Result<SamplerConfig, ConfigError> {
        let file = File::open(config_path)?;
        Self::parse(BufReader::new(file))
    }

    pub fn parse_str(data: &str) -> Result<SamplerConfig, ConfigError> {
        Self::parse(BufReader::new(Cursor::new(data.as_bytes())))
    }

    fn parse<R: BufRead>(buffer: R) -> Result<SamplerConfig, ConfigError> {
        let mut sample_size: Option<usize> = None;
        let mut ignore_tags: Vec<String> = Vec::new();

        let sample = "sample_size:";
        let ignore = "ignore_tag:";

        for line in buffer.lines() {
            let line = line?;
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }

            extract_parsed_single!(line, sample, sample_size);
            extract_vec_multi!(line, ignore, ignore_tags);

            log::debug!("Ignoring unknown config line '{}'", line);
        }

        if let Some(tag) = ignore_tags
            .iter()
            .find(|tag| !constants::TAG_NAME.is_match(tag))
        {
            return Err(ConfigError::BadValue {
                key: "ignore_tag".into(),
                value: tag.clone(),
            });
        }

        let defaults = Self::default();
        let config = SamplerConfig {
            sample_size: sample_size.unwrap_or(defaults.sample_size),
            ignore_tags: if ignore_tags.is_empty() {
                defaults.ignore_tags
            } else {
                ignore_tags
            },
        };

        Ok(config)
    }
}
