pub mod get_recipe;
pub mod get_recipes;
