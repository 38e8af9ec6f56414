pub mod get_triggers;
