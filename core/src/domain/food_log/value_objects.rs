use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_NOTES_LENGTH: usize = 1000;
pub const MAX_INGREDIENTS_PER_LOG: usize = 50;
pub const MAX_SYMPTOMS_PER_LOG: usize = 20;
pub const MAX_INGREDIENT_LENGTH: usize = 100;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

/// Symptom severity on the 1–5 integer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Severity(u8);

impl Severity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::invalid_field(
                "severity",
                format!("must be between {} and {}", Self::MIN, Self::MAX),
            ))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Severity {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SymptomEntryInput {
    pub symptom_id: Uuid,
    pub severity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFoodLogInput {
    pub log_date: NaiveDate,
    pub notes: Option<String>,
    pub ingredients: Vec<String>,
    pub symptoms: Vec<SymptomEntryInput>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFoodLogsFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for GetFoodLogsFilter {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl GetFoodLogsFilter {
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * self.per_page as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page as u64)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_accepts_scale_bounds() {
        assert_eq!(Severity::new(1).unwrap().get(), 1);
        assert_eq!(Severity::new(5).unwrap().get(), 5);
        assert!(Severity::new(0).is_err());
        assert!(Severity::new(6).is_err());
    }

    #[test]
    fn severity_deserializes_through_range_check() {
        assert_eq!(
            serde_json::from_str::<Severity>("3").unwrap(),
            Severity::new(3).unwrap()
        );
        assert!(serde_json::from_str::<Severity>("9").is_err());
        assert_eq!(serde_json::to_string(&Severity::new(4).unwrap()).unwrap(), "4");
    }

    #[test]
    fn pagination_rounds_pages_up() {
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
        assert_eq!(Pagination::new(1, 10, 10).total_pages, 1);
        assert_eq!(Pagination::new(2, 10, 11).total_pages, 2);
    }

    #[test]
    fn filter_offset_starts_at_zero() {
        let filter = GetFoodLogsFilter {
            page: 3,
            per_page: 25,
            ..Default::default()
        };
        assert_eq!(GetFoodLogsFilter::default().offset(), 0);
        assert_eq!(filter.offset(), 50);
    }
}
