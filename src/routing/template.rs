//! URL templates with named path variables.
//!
//! # Responsibilities
//! - Compile a template such as `/se/grid/session/{id}` once, at startup
//! - Match request paths against it, capturing variable segments
//!
//! # Design Decisions
//! - Segment-based matching, no regex in the hot path
//! - A variable spans exactly one non-empty segment
//! - Literal segments are case-sensitive and byte-exact
//! - Captured values are returned raw (no percent-decoding)

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) if !name.is_empty() => Segment::Variable(name.to_string()),
            _ => Segment::Literal(raw.to_string()),
        }
    }
}

/// An immutable, compiled URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl UrlTemplate {
    /// Compile a template. Segments written as `{name}` become variables.
    pub fn new(template: impl Into<String>) -> Self {
        let source = template.into();
        let segments = source.split('/').map(Segment::parse).collect();
        Self { source, segments }
    }

    /// The template as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Names of the variables in template order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Variable(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a request path, returning the captured variables on success.
    pub fn matches(&self, path: &str) -> Option<UrlMatch> {
        let mut parameters = HashMap::new();
        let mut parts = path.split('/');

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Variable(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    parameters.insert(name.clone(), part.to_string());
                }
            }
        }

        // Extra trailing segments (including a trailing slash) never match.
        if parts.next().is_some() {
            return None;
        }

        Some(UrlMatch {
            url: path.to_string(),
            parameters,
        })
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Result of a successful template match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatch {
    url: String,
    parameters: HashMap<String, String>,
}

impl UrlMatch {
    /// The matched path.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up a captured variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn parameters(&self) -> &HashMap<String, String> {
        &self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_template_matches_exact_path_only() {
        let template = UrlTemplate::new("/se/grid/session");

        let m = template.matches("/se/grid/session").unwrap();
        assert_eq!(m.url(), "/se/grid/session");
        assert!(m.parameters().is_empty());

        assert!(template.matches("/se/grid/session/").is_none());
        assert!(template.matches("/se/grid/session/abc").is_none());
        assert!(template.matches("/se/grid").is_none());
        assert!(template.matches("/se/grid/sessions").is_none());
        assert!(template.matches("/SE/grid/session").is_none()); // Case sensitive
        assert!(template.matches("").is_none());
    }

    #[test]
    fn test_variables_are_captured() {
        let template = UrlTemplate::new("/se/grid/session/{sessionId}/node/{nodeId}");
        assert_eq!(template.variables().collect::<Vec<_>>(), vec!["sessionId", "nodeId"]);

        let m = template.matches("/se/grid/session/abc123/node/n1").unwrap();
        assert_eq!(m.get("sessionId"), Some("abc123"));
        assert_eq!(m.get("nodeId"), Some("n1"));
        assert_eq!(m.get("missing"), None);
    }

    #[test]
    fn test_variable_requires_non_empty_segment() {
        let template = UrlTemplate::new("/session/{id}");
        assert!(template.matches("/session/").is_none());
        assert!(template.matches("/session").is_none());
        assert!(template.matches("/session/a/b").is_none());
    }

    #[test]
    fn test_malformed_braces_are_literals() {
        let template = UrlTemplate::new("/session/{}/x{y}");
        assert_eq!(template.variables().count(), 0);
        assert!(template.matches("/session/{}/x{y}").is_some());
        assert!(template.matches("/session/a/xy").is_none());
    }

    #[test]
    fn test_display_shows_source() {
        let template = UrlTemplate::new("/a/{b}");
        assert_eq!(template.to_string(), "/a/{b}");
        assert_eq!(template.as_str(), "/a/{b}");
    }
}
