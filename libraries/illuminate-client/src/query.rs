//! Query-string assembly for endpoint wrappers.

use crate::error::{ApiError, Result};
use crate::types::{FeedQuery, Page, DEFAULT_BASE_URL};
use url::Url;

/// Ordered list of query parameters.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub(crate) fn push_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    pub(crate) fn page(self, page: Page) -> Self {
        self.push("page", page.page).push("per_page", page.per_page)
    }

    /// Append the encoded query to `path`.
    pub(crate) fn to_path(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }

        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish();

        format!("{}?{}", path, encoded)
    }
}

/// Join `segments` into an absolute path, percent-encoding each one.
pub(crate) fn segments_path(segments: &[&str]) -> Result<String> {
    let mut url = Url::parse(DEFAULT_BASE_URL).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidUrl("base URL cannot carry a path".into()))?
        .clear()
        .extend(segments);
    Ok(url.path().to_string())
}

impl FeedQuery {
    pub(crate) fn to_query(&self) -> Query {
        let languages = if self.languages.is_empty() {
            None
        } else {
            Some(self.languages.join(","))
        };

        Query::new()
            .page(self.page)
            .push_opt("languages", languages)
            .push_opt("difficulty", self.difficulty.map(|d| d as u8))
            .push_opt("category", self.category.as_deref())
    }
}
