use crate::{
    domain::catalog::entities::{Ingredient, Symptom},
    entity::{ingredient_aliases, ingredients, symptoms},
};

impl From<symptoms::Model> for Symptom {
    fn from(model: symptoms::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

pub fn map_ingredient(
    model: ingredients::Model,
    aliases: Vec<ingredient_aliases::Model>,
) -> Ingredient {
    let mut aliases: Vec<String> = aliases.into_iter().map(|a| a.alias).collect();
    aliases.sort();

    Ingredient {
        id: model.id,
        name: model.name,
        aliases,
        created_at: model.created_at.to_utc(),
    }
}
