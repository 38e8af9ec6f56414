pub mod get_ingredients;
pub mod normalize_ingredient;
