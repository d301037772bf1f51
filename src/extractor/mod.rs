mod error;

#[cfg(test)]
mod tests;

pub use self::error::ExtractorError;

use crate::constants;
use crate::util::Util;
use libxml::parser::Parser;
use libxml::tree::Document;
use libxml::xpath::Context;
use log::{error, warn};
use std::collections::HashMap;

/// Text found at the leaf positions of one page, keyed by XPath.
///
/// Keys are unique and kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    entries: Vec<(String, String)>,
}

impl Extraction {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, xpath: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(location, _)| location == xpath)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(location, value)| (location.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for Extraction {
    /// Later duplicates of a location are dropped, empty values are skipped.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut seen = std::collections::HashSet::new();
        let entries = iter
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .filter(|(location, _)| seen.insert(location.clone()))
            .collect();
        Self { entries }
    }
}

pub trait StructureExtractor {
    fn extract(&self, content: &str) -> Result<Extraction, ExtractorError>;
}

/// Maps every visible text leaf of an HTML page to its XPath.
pub struct HtmlExtractor {
    text_xpath: String,
}

impl HtmlExtractor {
    /// Tag names that are not plain element names are skipped, they would end
    /// up verbatim inside the XPath query.
    pub fn new(ignore_tags: &[String]) -> Self {
        let filter = ignore_tags
            .iter()
            .filter(|tag| {
                let valid = constants::TAG_NAME.is_match(tag);
                if !valid {
                    warn!("Ignoring invalid tag name '{}'", tag);
                }
                valid
            })
            .map(|tag| format!("not(ancestor::{})", tag.to_lowercase()))
            .collect::<Vec<_>>()
            .join(" and ");

        let text_xpath = if filter.is_empty() {
            "//text()".to_owned()
        } else {
            format!("//text()[{filter}]")
        };

        Self { text_xpath }
    }

    fn parse_html(content: &str) -> Result<Document, ExtractorError> {
        let parser = Parser::default_html();
        parser.parse_string(content).map_err(|err| {
            error!("Parsing HTML failed {:?}", err);
            ExtractorError::Xml
        })
    }

    fn get_xpath_ctx(doc: &Document) -> Result<Context, ExtractorError> {
        Context::new(doc).map_err(|()| {
            error!("Creating xpath context failed for page");
            ExtractorError::Xml
        })
    }
}

impl StructureExtractor for HtmlExtractor {
    fn extract(&self, content: &str) -> Result<Extraction, ExtractorError> {
        let document = Self::parse_html(content)?;
        let xpath_ctx = Self::get_xpath_ctx(&document)?;
        let text_nodes = Util::evaluate_xpath(&xpath_ctx, &self.text_xpath)?;

        // all text fragments directly below one element form one value
        let mut fragments: Vec<(String, String)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for node in text_nodes {
            let parent = match node.get_parent() {
                Some(parent) if Util::is_element(&parent) => parent,
                _ => continue,
            };

            let location = format!("{}/text()", Util::element_path(&parent));
            let text = node.get_content();

            if let Some(&index) = positions.get(&location) {
                let value = &mut fragments[index].1;
                value.push(' ');
                value.push_str(&text);
            } else {
                positions.insert(location.clone(), fragments.len());
                fragments.push((location, text));
            }
        }

        Ok(fragments
            .into_iter()
            .map(|(location, text)| (location, Util::normalize_text(&text)))
            .collect())
    }
}
