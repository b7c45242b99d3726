use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    /// Fraction of correct answers required before module points are awarded.
    pub pass_threshold: f64,
    /// Characters of context kept on each side of a search-term match.
    pub snippet_context_chars: usize,
    /// Overall cap on search suggestions returned for a term.
    pub suggestion_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            pass_threshold: env::var("PASS_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.70),
            snippet_context_chars: env::var("SNIPPET_CONTEXT_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            suggestion_limit: env::var("SUGGESTION_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            pass_threshold: 0.70,
            snippet_context_chars: 30,
            suggestion_limit: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
