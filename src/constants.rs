use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// Containers whose text never counts as page structure.
pub const DEFAULT_IGNORED_TAGS: &[&str] = &["script", "noscript", "style"];

pub const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

pub static NORMALIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\s+"#).expect("NORMALIZE regex"));
pub static TAG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[A-Za-z][A-Za-z0-9_-]*$"#).expect("TAG_NAME regex"));
