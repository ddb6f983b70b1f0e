use unicode_width::UnicodeWidthStr;

pub(crate) const MESSAGE_MAX_LENGTH: usize = 500;

/// Truncate a message to [`MESSAGE_MAX_LENGTH`] characters, replacing the
/// tail with an ellipsis. Display-only; the caller's string is untouched.
pub(crate) fn truncate_message(message: &str) -> String {
    if message.chars().count() <= MESSAGE_MAX_LENGTH {
        return message.to_string();
    }
    let mut truncated: String = message.chars().take(MESSAGE_MAX_LENGTH - 3).collect();
    truncated.push_str("...");
    truncated
}

/// Greedy word wrap to a column budget. Words wider than the budget are
/// placed on their own line rather than split.
pub(crate) fn wrap_lines(message: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw_line in message.lines() {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            if current.width() + 1 + word.width() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
