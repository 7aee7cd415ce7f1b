//! Filename parsing for the `NNN-name` ordering convention.
//!
//! Photos that should appear in a deliberate order carry a numeric prefix
//! separated from the rest of the name by the first dash:
//!
//! - `010-harbour.jpg` → key `10`
//! - `3-a.jpg` → key `3`
//! - `7.jpg` → no dash, the whole name `7.jpg` is the prefix → error
//! - `abc-x.jpg` → error
//!
//! Unlike a lenient parser, a missing or non-numeric prefix is an error:
//! numeric ordering is opt-in, and a file that doesn't follow the
//! convention would otherwise land in an arbitrary position.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NamingError {
    #[error("File name {name:?} has no numeric prefix (expected NNN-name, found {prefix:?})")]
    NotNumeric { name: String, prefix: String },
}

/// Split a base name at its first dash, returning the prefix part.
///
/// Names without a dash return the whole name.
pub fn prefix_of(name: &str) -> &str {
    match name.find('-') {
        Some(dash_pos) => &name[..dash_pos],
        None => name,
    }
}

/// Parse the numeric sort key from a base name like `010-harbour.jpg`.
pub fn parse_numeric_prefix(name: &str) -> Result<u64, NamingError> {
    let prefix = prefix_of(name);
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NamingError::NotNumeric {
            name: name.to_string(),
            prefix: prefix.to_string(),
        });
    }
    prefix.parse::<u64>().map_err(|_| NamingError::NotNumeric {
        name: name.to_string(),
        prefix: prefix.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_with_name() {
        assert_eq!(parse_numeric_prefix("010-harbour.jpg"), Ok(10));
    }

    #[test]
    fn multiple_dashes_split_on_first() {
        assert_eq!(parse_numeric_prefix("3-my-best-photo.jpg"), Ok(3));
        assert_eq!(prefix_of("3-my-best-photo.jpg"), "3");
    }

    #[test]
    fn zero_prefix() {
        assert_eq!(parse_numeric_prefix("000-first.png"), Ok(0));
    }

    #[test]
    fn large_prefix() {
        assert_eq!(parse_numeric_prefix("20240517-pier.jpg"), Ok(20240517));
    }

    #[test]
    fn alphabetic_prefix_is_error() {
        let err = parse_numeric_prefix("abc-x.jpg").unwrap_err();
        assert_eq!(
            err,
            NamingError::NotNumeric {
                name: "abc-x.jpg".to_string(),
                prefix: "abc".to_string(),
            }
        );
    }

    #[test]
    fn no_dash_uses_whole_name() {
        assert_eq!(prefix_of("7.jpg"), "7.jpg");
        assert!(parse_numeric_prefix("7.jpg").is_err());
    }

    #[test]
    fn empty_prefix_is_error() {
        assert!(parse_numeric_prefix("-leading-dash.jpg").is_err());
    }

    #[test]
    fn signed_prefix_is_error() {
        assert!(parse_numeric_prefix("+5-plus.jpg").is_err());
    }

    #[test]
    fn overflowing_prefix_is_error() {
        assert!(parse_numeric_prefix("99999999999999999999999-huge.jpg").is_err());
    }

    #[test]
    fn error_message_names_the_file() {
        let err = parse_numeric_prefix("cover-shot.jpg").unwrap_err();
        assert!(err.to_string().contains("cover-shot.jpg"));
    }
}
