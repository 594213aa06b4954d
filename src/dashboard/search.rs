//! Search box: query to provider URL, submitted on Shift+Enter

use crate::error::Result;
use url::Url;

const DEFAULT_PROVIDER: &str = "https://duckduckgo.com/";

/// A single key event as seen by the search input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub enter: bool,
    pub shift: bool,
}

/// Search form with a configurable provider
#[derive(Debug, Clone)]
pub struct SearchForm {
    provider: String,
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
        }
    }

    pub fn with_provider<S: Into<String>>(provider: S) -> Self {
        Self {
            provider: provider.into(),
        }
    }

    /// Submission fires only on Shift+Enter; plain Enter inserts a newline
    pub fn should_submit(&self, key: KeyPress) -> bool {
        key.enter && key.shift
    }

    /// Build the provider URL for a query
    pub fn query_url(&self, query: &str) -> Result<Url> {
        let mut url = Url::parse(&self.provider)?;
        url.query_pairs_mut().append_pair("q", query.trim());
        Ok(url)
    }
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_requires_shift_enter() {
        let form = SearchForm::new();
        assert!(form.should_submit(KeyPress { enter: true, shift: true }));
        assert!(!form.should_submit(KeyPress { enter: true, shift: false }));
        assert!(!form.should_submit(KeyPress { enter: false, shift: true }));
    }

    #[test]
    fn test_query_url_encodes_query() {
        let form = SearchForm::new();
        let url = form.query_url("rust async streams").unwrap();
        assert!(url.as_str().starts_with("https://duckduckgo.com/?q="));
        assert!(url.as_str().contains("rust+async+streams"));
    }

    #[test]
    fn test_query_trimmed() {
        let form = SearchForm::new();
        let url = form.query_url("  hello  ").unwrap();
        assert_eq!(url.query(), Some("q=hello"));
    }

    #[test]
    fn test_custom_provider() {
        let form = SearchForm::with_provider("https://www.startpage.com/sp/search");
        let url = form.query_url("bandwidth").unwrap();
        assert!(url.as_str().starts_with("https://www.startpage.com/"));
    }
}
