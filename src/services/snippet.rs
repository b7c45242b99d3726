use regex::Regex;

/// Extracts an excerpt around the first case-insensitive occurrence of
/// `term` in `text`, keeping `context_chars` characters on each side and
/// marking truncation with an ellipsis. Returns `None` when the term does
/// not occur; the caller falls back to the plain description.
///
/// Offsets are measured in characters, not bytes; most library content is
/// Persian and byte windows would split UTF-8 sequences.
pub fn generate_snippet(text: &str, term: &str, context_chars: usize) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = term.chars().collect();
    let at = find_case_insensitive(&chars, &needle)?;

    let start = at.saturating_sub(context_chars);
    let end = (at + needle.len() + context_chars).min(chars.len());

    let mut snippet = String::new();
    if start > 0 {
        snippet.push('…');
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push('…');
    }
    Some(snippet)
}

fn find_case_insensitive(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| {
        haystack[i..i + needle.len()]
            .iter()
            .zip(needle)
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
    })
}

/// Wraps every case-insensitive occurrence of `term` in `<mark>` tags,
/// preserving the casing of the source text. Presentation concern layered
/// over the computed snippet or title string.
pub fn highlight_term(text: &str, term: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }
    match Regex::new(&format!("(?i){}", regex::escape(term))) {
        Ok(re) => re.replace_all(text, "<mark>$0</mark>").into_owned(),
        // An escaped literal always compiles; keep the text untouched if not
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_returned_whole() {
        let snippet = generate_snippet("The quick brown fox", "brown", 30);
        assert_eq!(snippet.as_deref(), Some("The quick brown fox"));
    }

    #[test]
    fn missing_term_produces_no_snippet() {
        assert_eq!(generate_snippet("The quick brown fox", "wolf", 30), None);
        assert_eq!(generate_snippet("anything", "", 30), None);
    }

    #[test]
    fn match_is_case_insensitive() {
        let snippet = generate_snippet("The Quick Brown Fox", "brown", 30);
        assert_eq!(snippet.as_deref(), Some("The Quick Brown Fox"));
    }

    #[test]
    fn late_match_truncates_the_front() {
        // 60 chars, match starts at index 50
        let text = "a".repeat(50) + "needle0123";
        let snippet = generate_snippet(&text, "needle", 30).expect("term occurs");

        assert!(snippet.starts_with('…'));
        assert!(!snippet.ends_with('…'));
        // window + at most two ellipsis characters
        assert!(snippet.chars().count() <= 30 + "needle".len() + 30 + 2);
    }

    #[test]
    fn early_match_in_long_text_truncates_the_back() {
        let text = "needle ".to_string() + &"b".repeat(100);
        let snippet = generate_snippet(&text, "needle", 30).expect("term occurs");

        assert!(!snippet.starts_with('…'));
        assert!(snippet.ends_with('…'));
    }

    #[test]
    fn interior_match_truncates_both_sides() {
        let text = "x".repeat(50) + "needle" + &"y".repeat(50);
        let snippet = generate_snippet(&text, "needle", 30).expect("term occurs");

        assert!(snippet.starts_with('…'));
        assert!(snippet.ends_with('…'));
        assert!(snippet.contains("needle"));
    }

    #[test]
    fn window_is_measured_in_characters_for_persian_text() {
        let text = "مدیریت بودجه ماهانه برای خانواده‌ها و روش‌های پس‌انداز هدفمند";
        let snippet = generate_snippet(text, "پس‌انداز", 10).expect("term occurs");
        assert!(snippet.contains("پس‌انداز"));
    }

    #[test]
    fn highlight_preserves_source_casing() {
        let highlighted = highlight_term("The Quick brown fox", "quick");
        assert_eq!(highlighted, "The <mark>Quick</mark> brown fox");
    }

    #[test]
    fn highlight_wraps_every_occurrence() {
        let highlighted = highlight_term("saving and Saving", "saving");
        assert_eq!(highlighted, "<mark>saving</mark> and <mark>Saving</mark>");
    }

    #[test]
    fn highlight_escapes_regex_metacharacters() {
        let highlighted = highlight_term("what? yes", "what?");
        assert_eq!(highlighted, "<mark>what?</mark> yes");
    }
}
