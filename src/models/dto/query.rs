use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::content::ContentType;

/// Content-type facet of the library view. `Ugc` selects the user-submitted
/// collection; a `Curated` type restricts the curated collection and
/// excludes submissions entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    All,
    Ugc,
    Curated(ContentType),
}

impl TypeFilter {
    /// Filters come from a closed UI vocabulary, so unknown strings fall
    /// back to `All` instead of failing.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "all" => TypeFilter::All,
            "ugc" => TypeFilter::Ugc,
            other => ContentType::parse(other)
                .map(TypeFilter::Curated)
                .unwrap_or(TypeFilter::All),
        }
    }
}

impl Default for TypeFilter {
    fn default() -> Self {
        TypeFilter::All
    }
}

/// One library query, rebuilt from scratch on every search-term or filter
/// change. Empty facet sets mean "unrestricted".
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContentQuery {
    pub search_term: String,
    pub category_ids: HashSet<String>,
    pub goal_relevance_ids: HashSet<String>,
    pub type_filter: TypeFilter,
}

impl ContentQuery {
    pub fn with_term(term: &str) -> Self {
        Self {
            search_term: term.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitContentRequest {
    pub author_id: String,

    #[validate(length(min = 1, max = 100))]
    pub author_name: String,

    pub content_type: ContentType,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[validate(length(max = 20))]
    pub tags: Vec<String>,
}
