pub mod query;
pub mod response;

pub use query::{ContentQuery, SubmitContentRequest, TypeFilter};
pub use response::{PointAward, QuizOutcome, SearchHit, SearchSuggestion, SuggestionKind};
