pub mod food_log;
pub mod health;
pub mod ingredient;
pub mod server;
pub mod symptom;
pub mod trigger_analysis;
