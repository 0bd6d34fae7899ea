//! Illuminate Catalog
//!
//! A static, read-only catalog of curated open-source repositories grouped
//! into categories, with the distinct languages and tags across all
//! entries precomputed on first use.
//!
//! # Example
//!
//! ```
//! use illuminate_catalog::{all_languages, category, CatalogFilter};
//!
//! let rust = category("rust").expect("rust category exists");
//! assert!(!rust.repos.is_empty());
//!
//! assert!(all_languages().contains(&"Rust"));
//!
//! let hits = CatalogFilter::default().language("Rust").apply();
//! assert!(hits.iter().all(|(_, repo)| repo.language == "Rust"));
//! ```

mod data;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeSet;

/// A curated repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AwesomeRepo {
    pub owner: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Display string such as `"48k"`, not a number.
    pub stars: &'static str,
    pub language: &'static str,
    pub tags: &'static [&'static str],
}

impl AwesomeRepo {
    /// `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    pub fn url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

/// A named group of curated repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub repos: &'static [AwesomeRepo],
}

static ALL_LANGUAGES: Lazy<Vec<&'static str>> =
    Lazy::new(|| distinct_sorted(repos().map(|r| r.language)));

static ALL_TAGS: Lazy<Vec<&'static str>> =
    Lazy::new(|| distinct_sorted(repos().flat_map(|r| r.tags.iter().copied())));

fn distinct_sorted(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

/// Every category, in display order.
pub fn categories() -> &'static [Category] {
    data::CATEGORIES
}

/// Look up a category by its id.
pub fn category(id: &str) -> Option<&'static Category> {
    data::CATEGORIES.iter().find(|c| c.id == id)
}

/// Every repository across all categories, in display order.
///
/// A repository listed under several categories is yielded once per
/// category.
pub fn repos() -> impl Iterator<Item = &'static AwesomeRepo> {
    data::CATEGORIES.iter().flat_map(|c| c.repos.iter())
}

/// Distinct primary languages, sorted by byte order.
pub fn all_languages() -> &'static [&'static str] {
    &ALL_LANGUAGES
}

/// Distinct tags, sorted by byte order.
pub fn all_tags() -> &'static [&'static str] {
    &ALL_TAGS
}

/// Narrow the catalog by language, tag or free text.
///
/// Unset criteria match everything. Text matching is case-insensitive
/// over the full name and description.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub language: Option<String>,
    pub tag: Option<String>,
    pub text: Option<String>,
}

impl CatalogFilter {
    pub fn category(mut self, id: impl Into<String>) -> Self {
        self.category = Some(id.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn matches(&self, category: &Category, repo: &AwesomeRepo) -> bool {
        if let Some(id) = &self.category {
            if category.id != id.as_str() {
                return false;
            }
        }
        if let Some(language) = &self.language {
            if !repo.language.eq_ignore_ascii_case(language) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !repo.has_tag(tag) {
                return false;
            }
        }
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let haystack = format!("{} {}", repo.full_name(), repo.description).to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Matching repositories paired with the category they appear under.
    pub fn apply(&self) -> Vec<(&'static Category, &'static AwesomeRepo)> {
        data::CATEGORIES
            .iter()
            .flat_map(|c| c.repos.iter().map(move |r| (c, r)))
            .filter(|(c, r)| self.matches(c, r))
            .collect()
    }
}
