//! sea-orm models for the Postgres schema in `core/migrations`.

pub mod prelude;

pub mod ingredient_aliases;
pub mod ingredients;
pub mod log_ingredients;
pub mod log_symptoms;
pub mod logs;
pub mod symptoms;
