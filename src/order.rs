//! Display ordering of gallery records.
//!
//! Two modes, picked by [`SortMode`]:
//!
//! - **Insertion**: keep the scan order (file names ascending).
//! - **Numeric**: highest `NNN-` prefix first, via
//!   [`naming::parse_numeric_prefix`](crate::naming::parse_numeric_prefix).
//!   `10-b.jpg` sorts before `3-a.jpg`, which a plain string sort gets wrong.
//!
//! The sort is stable, so photos sharing a number keep their scan order.
//! Keys are parsed for every record before anything moves: one bad name
//! fails the whole ordering instead of producing a partial result.
//! [`validate_names`] runs the same parse straight after scanning, so a bad
//! name stops a build before any image is decoded.

use crate::config::SortMode;
use crate::naming::{NamingError, parse_numeric_prefix};
use crate::types::ImageRecord;
use std::cmp::Reverse;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    #[error("Cannot sort numerically: {0}")]
    Naming(#[from] NamingError),
}

/// Return `records` in display order.
pub fn order_records(
    records: Vec<ImageRecord>,
    mode: SortMode,
) -> Result<Vec<ImageRecord>, OrderError> {
    match mode {
        SortMode::Insertion => Ok(records),
        SortMode::Numeric => sort_numeric_desc(records),
    }
}

/// Check that every name can be ordered under `mode`, without ordering.
pub fn validate_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
    mode: SortMode,
) -> Result<(), OrderError> {
    if mode == SortMode::Numeric {
        for name in names {
            parse_numeric_prefix(name)?;
        }
    }
    Ok(())
}

fn sort_numeric_desc(records: Vec<ImageRecord>) -> Result<Vec<ImageRecord>, OrderError> {
    let mut keyed = records
        .into_iter()
        .map(|record| Ok((parse_numeric_prefix(&record.name)?, record)))
        .collect::<Result<Vec<_>, NamingError>>()?;

    keyed.sort_by_key(|(key, _)| Reverse(*key));

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;

    fn records(names: &[&str]) -> Vec<ImageRecord> {
        names
            .iter()
            .map(|name| ImageRecord {
                name: name.to_string(),
                orientation: Orientation::Vertical,
            })
            .collect()
    }

    fn names(records: &[ImageRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn insertion_keeps_input_order() {
        let input = records(&["b.jpg", "a.jpg", "c.jpg"]);
        let ordered = order_records(input, SortMode::Insertion).unwrap();
        assert_eq!(names(&ordered), vec!["b.jpg", "a.jpg", "c.jpg"]);
    }

    #[test]
    fn insertion_ignores_non_numeric_names() {
        let input = records(&["abc-x.jpg"]);
        assert!(order_records(input, SortMode::Insertion).is_ok());
    }

    #[test]
    fn numeric_sorts_descending_not_lexicographic() {
        let input = records(&["3-a.jpg", "10-b.jpg", "1-c.jpg"]);
        let ordered = order_records(input, SortMode::Numeric).unwrap();
        assert_eq!(names(&ordered), vec!["10-b.jpg", "3-a.jpg", "1-c.jpg"]);
    }

    #[test]
    fn numeric_is_stable_for_equal_prefixes() {
        let input = records(&["5-first.jpg", "9-top.jpg", "5-second.jpg", "5-third.jpg"]);
        let ordered = order_records(input, SortMode::Numeric).unwrap();
        assert_eq!(
            names(&ordered),
            vec!["9-top.jpg", "5-first.jpg", "5-second.jpg", "5-third.jpg"]
        );
    }

    #[test]
    fn numeric_leading_zeros_compare_by_value() {
        let input = records(&["007-a.jpg", "10-b.jpg", "0100-c.jpg"]);
        let ordered = order_records(input, SortMode::Numeric).unwrap();
        assert_eq!(names(&ordered), vec!["0100-c.jpg", "10-b.jpg", "007-a.jpg"]);
    }

    #[test]
    fn numeric_rejects_non_numeric_prefix() {
        let input = records(&["1-ok.jpg", "abc-x.jpg"]);
        let err = order_records(input, SortMode::Numeric).unwrap_err();
        assert!(err.to_string().contains("abc-x.jpg"));
    }

    #[test]
    fn numeric_rejects_name_without_dash() {
        let input = records(&["cover.jpg"]);
        assert!(order_records(input, SortMode::Numeric).is_err());
    }

    #[test]
    fn validate_names_numeric_reports_first_bad_name() {
        let err = validate_names(["1-ok.jpg", "cover.jpg", "abc-x.jpg"], SortMode::Numeric)
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::Naming(NamingError::NotNumeric {
                name: "cover.jpg".to_string(),
                prefix: "cover.jpg".to_string(),
            })
        );
    }

    #[test]
    fn validate_names_insertion_accepts_anything() {
        assert!(validate_names(["cover.jpg", "abc-x.jpg"], SortMode::Insertion).is_ok());
        assert!(validate_names(["3-a.jpg", "10-b.jpg"], SortMode::Numeric).is_ok());
    }

    #[test]
    fn numeric_empty_list() {
        let ordered = order_records(Vec::new(), SortMode::Numeric).unwrap();
        assert!(ordered.is_empty());
    }
}
