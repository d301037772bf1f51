use std::path::Path;

use libxml::{
    tree::{Node, NodeType},
    xpath::Context,
};

use crate::{constants, extractor::ExtractorError};

pub struct Util;

impl Util {
    pub fn check_extension(path: &Path, extensions: &[&str]) -> bool {
        if let Some(ext) = path.extension() {
            ext.to_str()
                .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
                .unwrap_or(false)
        } else {
            false
        }
    }

    pub fn str_extract_value<'a>(identifier: &str, line: &'a str) -> &'a str {
        let value = &line[identifier.len()..];
        let value = value.trim();
        match value.find('#') {
            Some(pos) => &value[..pos],
            None => value,
        }
    }

    pub fn split_values(values: &str) -> Vec<&str> {
        values.split('|').map(|s| s.trim()).collect()
    }

    pub fn normalize_text(text: &str) -> String {
        constants::NORMALIZE.replace_all(text.trim(), " ").into_owned()
    }

    pub fn evaluate_xpath(xpath_ctx: &Context, xpath: &str) -> Result<Vec<Node>, ExtractorError> {
        let res = xpath_ctx.evaluate(xpath).map_err(|()| {
            log::debug!("Evaluation of xpath '{}' failed", xpath);
            ExtractorError::Xml
        })?;

        let node_vec = res.get_nodes_as_vec();

        if node_vec.is_empty() {
            log::debug!("Evaluation of xpath '{}' yielded no results", xpath);
        }

        Ok(node_vec)
    }

    /// Absolute path of an element, e.g. `/html/body/ul/li[2]`.
    ///
    /// A position is only added when the element has siblings with the same name,
    /// so pages with the same template produce the same path.
    pub fn element_path(node: &Node) -> String {
        let mut segments = Vec::new();
        let mut current = Some(node.clone());

        while let Some(element) = current {
            if !Self::is_element(&element) {
                break;
            }

            let name = element.get_name();
            let segment = match Self::sibling_position(&element, &name) {
                Some(position) => format!("{name}[{position}]"),
                None => name,
            };
            segments.push(segment);
            current = element.get_parent();
        }

        segments.reverse();
        format!("/{}", segments.join("/"))
    }

    fn sibling_position(node: &Node, name: &str) -> Option<usize> {
        let same_name = |n: &Node| Self::is_element(n) && n.get_name() == name;

        let mut preceding = 0;
        let mut sibling = node.get_prev_sibling();
        while let Some(s) = sibling {
            if same_name(&s) {
                preceding += 1;
            }
            sibling = s.get_prev_sibling();
        }

        let mut following = false;
        let mut sibling = node.get_next_sibling();
        while let Some(s) = sibling {
            if same_name(&s) {
                following = true;
                break;
            }
            sibling = s.get_next_sibling();
        }

        if preceding > 0 || following {
            Some(preceding + 1)
        } else {
            None
        }
    }

    pub fn is_element(node: &Node) -> bool {
        node.get_type()
            .map(|t| t == NodeType::ElementNode)
            .unwrap_or(false)
    }
}
