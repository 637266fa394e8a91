pub mod documents;
pub mod gallery;
pub mod profiles;

use crate::errors::AppError;

/// Maximum length of short text fields (name, title).
pub const MAX_SHORT_TEXT: usize = 200;

const DEFAULT_SCAN_LIMIT: i64 = 50;

pub(crate) fn require_short_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    if value.chars().count() > MAX_SHORT_TEXT {
        return Err(AppError::Validation(format!(
            "{} exceeds {} characters",
            field, MAX_SHORT_TEXT
        )));
    }
    Ok(())
}

pub(crate) fn require_file_ref(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must reference a stored file", field)));
    }
    Ok(())
}

pub(crate) fn scan_window(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    (limit.unwrap_or(DEFAULT_SCAN_LIMIT).max(0), offset.unwrap_or(0).max(0))
}

/// Build a `%term%` LIKE pattern with `%`, `_` and `\` escaped so the
/// search term matches literally. Pair with `ESCAPE '\'`.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
        assert_eq!(like_pattern("Plain"), "%plain%");
    }
}
