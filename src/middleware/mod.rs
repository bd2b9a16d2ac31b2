//! Request extractors shared by the recipe handlers.

pub mod recipe_form;
pub mod recipe_id;

pub use recipe_form::{RecipeForm, lenient_prep_time};
pub use recipe_id::RecipeId;
