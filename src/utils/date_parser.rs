//! Strict `YYYY-MM-DD` date parsing for request payloads.

use crate::error::AppError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Wire format for every date the service accepts or returns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Four-digit year, two-digit month and day. `chrono` alone accepts
/// unpadded fields and signed years, which the API does not.
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Parses a calendar date in strict `YYYY-MM-DD` form.
///
/// `field` is only used to label the error.
///
/// # Errors
///
/// Returns [`AppError::InvalidDateFormat`] if the string does not have the
/// `YYYY-MM-DD` shape or names a day that does not exist.
///
/// # Examples
///
/// ```ignore
/// assert!(parse_date("start_date", "2018-09-11").is_ok());
/// assert!(parse_date("start_date", "11-09-2018").is_err());
/// assert!(parse_date("start_date", "2019-02-29").is_err());
/// ```
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    if !DATE_REGEX.is_match(value) {
        return Err(AppError::invalid_date_format(field, value));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AppError::invalid_date_format(field, value))
}

/// Parses an optional date, leaving `None` untouched.
pub fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    value.map(|v| parse_date(field, v)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_date("start_date", "2018-09-11").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2018, 9, 11).unwrap());
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(parse_date("start_date", "2020-02-29").is_ok());
        assert!(parse_date("start_date", "2019-02-29").is_err());
    }

    #[test]
    fn test_rejects_day_month_year() {
        let result = parse_date("start_date", "11-09-2011");
        assert!(matches!(result, Err(AppError::InvalidDateFormat { .. })));
    }

    #[test]
    fn test_rejects_month_year_day() {
        let result = parse_date("end_date", "09-2012-01");
        assert!(matches!(result, Err(AppError::InvalidDateFormat { .. })));
    }

    #[test]
    fn test_rejects_unpadded_fields() {
        assert!(parse_date("start_date", "2018-9-11").is_err());
        assert!(parse_date("start_date", "2018-09-1").is_err());
    }

    #[test]
    fn test_rejects_other_separators_and_noise() {
        assert!(parse_date("start_date", "2018/09/11").is_err());
        assert!(parse_date("start_date", "2018-09-11T00:00:00").is_err());
        assert!(parse_date("start_date", " 2018-09-11").is_err());
        assert!(parse_date("start_date", "").is_err());
        assert!(parse_date("start_date", "+2018-09-11").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_components() {
        assert!(parse_date("start_date", "2018-13-01").is_err());
        assert!(parse_date("start_date", "2018-00-10").is_err());
        assert!(parse_date("start_date", "2018-04-31").is_err());
    }

    #[test]
    fn test_error_details_name_the_field() {
        let err = parse_date("end_date", "bad").unwrap_err();
        let info = err.to_error_info();
        assert_eq!(info.details["field"], "end_date");
        assert_eq!(info.details["value"], "bad");
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date("start_date", None).unwrap(), None);
        assert!(
            parse_optional_date("start_date", Some("2021-09-15"))
                .unwrap()
                .is_some()
        );
        assert!(parse_optional_date("start_date", Some("15-09-2021")).is_err());
    }
}
