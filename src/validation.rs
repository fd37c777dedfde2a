//! Hunter name validation.
//!
//! Names are shown back to the player on every menu and written to the log, so
//! they are trimmed, length-limited and stripped of anything that would break a
//! single terminal line.

/// Name validation errors with helpful messages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Name is empty")]
    Empty,

    #[error("Name is too long (maximum {max} characters)")]
    TooLong { max: usize },

    #[error("Name contains invalid characters: {chars}")]
    InvalidCharacters { chars: String },
}

/// Longest name accepted, counted in characters.
pub const MAX_NAME_CHARS: usize = 24;

/// Validate a hunter name, returning the trimmed form.
pub fn validate_hunter_name(name: &str) -> Result<String, NameError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if trimmed.chars().count() > MAX_NAME_CHARS {
        return Err(NameError::TooLong {
            max: MAX_NAME_CHARS,
        });
    }

    if trimmed.chars().any(|c| c.is_control()) {
        let control_chars: String = trimmed
            .chars()
            .filter(|c| c.is_control())
            .map(|c| format!("\\u{{{:04x}}}", c as u32))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(NameError::InvalidCharacters {
            chars: control_chars,
        });
    }

    Ok(trimmed.to_string())
}

/// Normalise a free-text answer (menu choice, item name, y/n) for matching.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}
