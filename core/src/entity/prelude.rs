pub use super::ingredient_aliases::Entity as IngredientAliases;
pub use super::ingredients::Entity as Ingredients;
pub use super::log_ingredients::Entity as LogIngredients;
pub use super::log_symptoms::Entity as LogSymptoms;
pub use super::logs::Entity as Logs;
pub use super::symptoms::Entity as Symptoms;
