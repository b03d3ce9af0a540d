pub mod classifier;
pub mod recipe;
