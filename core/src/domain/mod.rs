pub mod authentication;
pub mod catalog;
pub mod common;
pub mod food_log;
pub mod health;
pub mod ingredient_normalization;
pub mod trigger_analysis;
