//! Reserved-prefix matching.

/// The reserved path prefix that selects proxying over static file serving.
#[derive(Debug, Clone)]
pub struct PrefixRoute {
    prefix: String,
}

impl PrefixRoute {
    /// Create a new prefix route.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Strip the reserved prefix from a request's path-and-query.
    ///
    /// Returns the remainder when the string starts with the prefix, which
    /// may be empty or begin with `/` or `?`. The prefix is removed exactly
    /// once; a second occurrence stays in the suffix untouched.
    pub fn strip<'a>(&self, path_and_query: &'a str) -> Option<&'a str> {
        path_and_query.strip_prefix(&self.prefix)
    }

    /// The literal prefix string.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_keeps_query_verbatim() {
        let route = PrefixRoute::new("/api_proxy");
        assert_eq!(
            route.strip("/api_proxy/search?query=x"),
            Some("/search?query=x")
        );
    }

    #[test]
    fn bare_prefix_leaves_an_empty_suffix() {
        let route = PrefixRoute::new("/api_proxy");
        assert_eq!(route.strip("/api_proxy"), Some(""));
    }

    #[test]
    fn non_matching_paths_are_not_proxied() {
        let route = PrefixRoute::new("/api_proxy");
        assert_eq!(route.strip("/index.html"), None);
        assert_eq!(route.strip("/api"), None);
        assert_eq!(route.strip("/"), None);
    }

    #[test]
    fn match_is_literal_not_segment_based() {
        let route = PrefixRoute::new("/api_proxy");
        assert_eq!(route.strip("/api_proxyfoo"), Some("foo"));
    }

    #[test]
    fn strips_at_most_once() {
        let route = PrefixRoute::new("/api_proxy");
        assert_eq!(
            route.strip("/api_proxy/api_proxy/x"),
            Some("/api_proxy/x")
        );
    }

    #[test]
    fn query_only_suffix_survives() {
        let route = PrefixRoute::new("/api_proxy");
        assert_eq!(route.strip("/api_proxy?rows=10"), Some("?rows=10"));
    }
}
