pub mod get_symptoms;
