use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::application::http::server::api_entities::dates::validate_iso_date;

#[derive(Debug, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetTriggersQuery {
    /// First day of the analysis window (inclusive).
    #[validate(custom(function = "validate_iso_date"))]
    #[param(example = "2026-01-01")]
    pub start_date: String,

    /// Last day of the analysis window (inclusive).
    #[validate(custom(function = "validate_iso_date"))]
    #[param(example = "2026-01-31")]
    pub end_date: String,

    /// Number of triggers to return, 10 when omitted.
    #[validate(range(min = 1, max = 50, message = "must be between 1 and 50"))]
    pub limit: Option<u32>,

    /// Adds the raw ingredient/symptom rows behind the returned triggers.
    pub detailed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_is_parsed_and_checked() {
        let query: GetTriggersQuery =
            serde_urlencoded::from_str("start_date=2026-01-01&end_date=2026-01-31&detailed=true")
                .unwrap();
        assert!(query.validate().is_ok());
        assert_eq!(query.limit, None);
        assert_eq!(query.detailed, Some(true));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let query = GetTriggersQuery {
            start_date: "2026-01-01".to_string(),
            end_date: "2026-01-31".to_string(),
            limit: Some(0),
            detailed: None,
        };
        assert!(query.validate().is_err());
    }
}
