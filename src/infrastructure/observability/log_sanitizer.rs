const MAX_VISIBLE_LENGTH: usize = 300;

const REDACTED: &str = "[REDACTED]";

/// Sanitizes upstream error text for safe logging.
///
/// Collaborator errors can echo the rejected credential back
/// ("Incorrect API key provided: sk-..."), so keys and tokens are masked.
pub fn sanitize_log_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = redact_sensitive_patterns(trimmed);

    if redacted.chars().count() > MAX_VISIBLE_LENGTH {
        let visible: String = redacted.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", visible, redacted.chars().count())
    } else {
        redacted
    }
}

fn redact_sensitive_patterns(text: &str) -> String {
    let prefixes = ["Bearer ", "api_key=", "api-key=", "token=", "sk-"];

    let mut result = text.to_string();
    for prefix in prefixes {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(prefix) {
            let prefix_start = search_from + found;
            let value_start = prefix_start + prefix.len();

            let glued_to_word = result[..prefix_start]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
            if glued_to_word {
                search_from = value_start;
                continue;
            }

            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\'' | ',' | '.'))
                .map(|i| value_start + i)
                .unwrap_or(result.len());

            if value_end == value_start {
                search_from = value_start;
                continue;
            }

            result.replace_range(value_start..value_end, REDACTED);
            search_from = value_start + REDACTED.len();
        }
    }

    result
}
