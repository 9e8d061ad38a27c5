//! Kite field rules shared by the persistence and HTTP layers.

use crate::error::CoreError;

/// Entity label used in not-found errors and log fields.
pub const KITE_ENTITY: &str = "Kite";

/// Fields a new kite must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "design", "size", "thread_type"];

/// Check that every required field is present and non-empty.
///
/// `values` holds the submitted value of each entry of [`REQUIRED_FIELDS`],
/// position for position (`None` when the key was missing or `null`). The
/// first offending field in that order is reported.
///
/// Only the empty string counts as empty; whitespace is left to the client.
pub fn validate_required(
    values: [Option<&str>; REQUIRED_FIELDS.len()],
) -> Result<(), CoreError> {
    for (name, value) in REQUIRED_FIELDS.into_iter().zip(values) {
        if value.map_or(true, str::is_empty) {
            return Err(CoreError::Validation(format!(
                "Field '{name}' is required"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn fields<'a>(
        name: Option<&'a str>,
        design: Option<&'a str>,
        size: Option<&'a str>,
        thread_type: Option<&'a str>,
    ) -> [Option<&'a str>; 4] {
        [name, design, size, thread_type]
    }

    #[test]
    fn all_present_passes() {
        let input = fields(Some("Estrella Roja"), Some("Estrella"), Some("1m"), Some("10"));
        assert!(validate_required(input).is_ok());
    }

    #[test]
    fn missing_field_is_named() {
        let input = fields(Some("Estrella Roja"), None, Some("1m"), Some("10"));
        let err = validate_required(input).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg == "Field 'design' is required");
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let input = fields(Some("Estrella Roja"), Some("Estrella"), Some(""), Some("10"));
        let err = validate_required(input).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg.contains("'size'"));
    }

    #[test]
    fn first_offending_field_wins() {
        let input = fields(None, None, None, Some(""));
        let err = validate_required(input).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg.contains("'name'"));
    }

    #[test]
    fn whitespace_is_not_empty() {
        let input = fields(Some(" "), Some("Estrella"), Some("1m"), Some("10"));
        assert!(validate_required(input).is_ok());
    }
}
