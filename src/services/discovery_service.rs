use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::domain::{
    LearningContent, LearningPath, ModerationStatus, UserGeneratedContent,
};
use crate::models::dto::query::{ContentQuery, SubmitContentRequest, TypeFilter};
use crate::models::dto::response::{SearchHit, SearchSuggestion, SuggestionKind};
use crate::repositories::LearningRepository;
use crate::services::snippet::generate_snippet;

const PATH_SUGGESTIONS: usize = 2;
const CONTENT_SUGGESTIONS: usize = 2;
const UGC_SUGGESTIONS: usize = 1;

/// Faceted search over the library's three collections: learning paths,
/// curated content, and approved user submissions. Queries are recomputed
/// from scratch on every filter or keystroke change; nothing here mutates
/// the collections.
pub struct DiscoveryService {
    repository: Arc<dyn LearningRepository>,
    snippet_context_chars: usize,
    suggestion_limit: usize,
}

impl DiscoveryService {
    pub fn new(repository: Arc<dyn LearningRepository>, config: &Config) -> Self {
        Self {
            repository,
            snippet_context_chars: config.snippet_context_chars,
            suggestion_limit: config.suggestion_limit,
        }
    }

    /// Learning paths matching the search/category/goal facets. The content
    /// type facet does not apply to paths.
    pub fn filter_paths(&self, query: &ContentQuery) -> AppResult<Vec<LearningPath>> {
        let term = query.search_term.trim().to_lowercase();
        let paths = self
            .repository
            .learning_paths()?
            .into_iter()
            .filter(|p| {
                matches_search(&term, &p.title, &p.description, &[])
                    && intersects(&query.category_ids, &p.category_ids)
                    && intersects(&query.goal_relevance_ids, &p.goal_relevance_ids)
            })
            .collect();
        Ok(paths)
    }

    /// Library items matching all active facets, with a description snippet
    /// when the search term matched there.
    pub fn search_library(&self, query: &ContentQuery) -> AppResult<Vec<SearchHit>> {
        let term = query.search_term.trim().to_lowercase();
        let hits = self
            .compose_collection(query.type_filter)?
            .into_iter()
            .filter(|item| {
                matches_search(&term, &item.title, &item.description, &item.tags)
                    && intersects(&query.category_ids, &item.category_ids)
                    && intersects(&query.goal_relevance_ids, &item.goal_relevance_ids)
            })
            .map(|item| {
                let snippet = if term.is_empty() {
                    None
                } else {
                    generate_snippet(
                        &item.description,
                        query.search_term.trim(),
                        self.snippet_context_chars,
                    )
                };
                SearchHit { item, snippet }
            })
            .collect();
        Ok(hits)
    }

    /// Which items the type facet puts on the table, before the other
    /// facets run. Submissions only ever appear once approved.
    fn compose_collection(&self, filter: TypeFilter) -> AppResult<Vec<LearningContent>> {
        match filter {
            TypeFilter::Ugc => Ok(self.approved_submissions()?),
            TypeFilter::All => {
                let mut items = self.repository.learning_content()?;
                items.extend(self.approved_submissions()?);
                Ok(items)
            }
            TypeFilter::Curated(content_type) => Ok(self
                .repository
                .learning_content()?
                .into_iter()
                .filter(|c| c.content_type == content_type)
                .collect()),
        }
    }

    fn approved_submissions(&self) -> AppResult<Vec<LearningContent>> {
        Ok(self
            .repository
            .user_generated_content()?
            .iter()
            .filter(|u| u.status == ModerationStatus::Approved)
            .map(UserGeneratedContent::to_library_item)
            .collect())
    }

    /// Typeahead suggestions for a non-empty term: up to two paths, two
    /// curated items, and one approved submission, in that order.
    pub fn suggestions(&self, term: &str) -> AppResult<Vec<SearchSuggestion>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(vec![]);
        }

        let mut suggestions: Vec<SearchSuggestion> = Vec::new();
        suggestions.extend(
            self.repository
                .learning_paths()?
                .into_iter()
                .filter(|p| p.title.to_lowercase().contains(&needle))
                .take(PATH_SUGGESTIONS)
                .map(|p| SearchSuggestion {
                    id: p.id,
                    title: p.title,
                    kind: SuggestionKind::Path,
                }),
        );
        suggestions.extend(
            self.repository
                .learning_content()?
                .into_iter()
                .filter(|c| c.title.to_lowercase().contains(&needle))
                .take(CONTENT_SUGGESTIONS)
                .map(|c| SearchSuggestion {
                    id: c.id,
                    title: c.title,
                    kind: SuggestionKind::Content,
                }),
        );
        suggestions.extend(
            self.repository
                .user_generated_content()?
                .into_iter()
                .filter(|u| {
                    u.status == ModerationStatus::Approved
                        && u.title.to_lowercase().contains(&needle)
                })
                .take(UGC_SUGGESTIONS)
                .map(|u| SearchSuggestion {
                    id: u.id,
                    title: u.title,
                    kind: SuggestionKind::Ugc,
                }),
        );

        suggestions.truncate(self.suggestion_limit);
        Ok(suggestions)
    }

    /// Records a new submission awaiting moderation.
    pub fn submit_content(
        &self,
        request: SubmitContentRequest,
    ) -> AppResult<UserGeneratedContent> {
        request.validate()?;

        let submission = UserGeneratedContent {
            id: Uuid::new_v4().to_string(),
            author_id: request.author_id,
            author_name: request.author_name,
            content_type: request.content_type,
            title: request.title,
            description: request.description,
            content: request.content,
            tags: request.tags,
            submission_date: Utc::now(),
            status: ModerationStatus::PendingApproval,
        };
        log::info!("submission '{}' received for moderation", submission.id);
        self.repository.insert_user_content(submission)
    }

    /// Applies a moderation decision to a pending submission.
    pub fn moderate_content(
        &self,
        id: &str,
        status: ModerationStatus,
    ) -> AppResult<UserGeneratedContent> {
        self.repository.update_user_content_status(id, status)
    }
}

/// Empty term matches everything; otherwise a case-insensitive substring
/// match on title, description, or any tag. `term` is pre-lowercased.
fn matches_search(term: &str, title: &str, description: &str, tags: &[String]) -> bool {
    term.is_empty()
        || title.to_lowercase().contains(term)
        || description.to_lowercase().contains(term)
        || tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Empty facet set means unrestricted; otherwise the item must share at
/// least one id with the filter.
fn intersects(filter: &HashSet<String>, ids: &[String]) -> bool {
    filter.is_empty() || ids.iter().any(|id| filter.contains(id))
}
