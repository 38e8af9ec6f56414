use std::borrow::Cow;

use chrono::NaiveDate;
use gutcheck_core::domain::common::entities::app_errors::FieldViolation;
use validator::ValidationError;

use super::api_error::ApiError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `validator` rule for `YYYY-MM-DD` strings.
pub fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| {
            ValidationError::new("invalid_date")
                .with_message(Cow::from("must be a valid date (YYYY-MM-DD)"))
        })
}

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ApiError::ValidationError(vec![FieldViolation::new(
            field,
            "must be a valid date (YYYY-MM-DD)",
        )])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_calendar_dates_are_accepted() {
        assert!(validate_iso_date("2026-02-28").is_ok());
        assert!(validate_iso_date("2026-02-30").is_err());
        assert!(validate_iso_date("28/02/2026").is_err());
        assert!(validate_iso_date("").is_err());
    }

    #[test]
    fn parse_failure_names_the_field() {
        let Err(ApiError::ValidationError(details)) = parse_date("end_date", "soon") else {
            panic!("expected validation error");
        };
        assert_eq!(details[0].field, "end_date");
    }
}
