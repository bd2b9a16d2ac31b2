//! HTML rendering for the home page and the htmx fragments.
//!
//! All templates are compiled once into a shared registry. Handlebars
//! HTML-escapes every `{{value}}`, so stored recipe text is always shown
//! as text and never interpreted as markup.

pub mod view;

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::db::Recipe;
use crate::error::ScoopError;
pub use view::{RecipeView, content_lines};

pub const PAGE_TITLE: &str = "Ice Cream Recipe Book";

const TEMPLATES: [(&str, &str); 5] = [
    ("base", include_str!("../../templates/base.hbs")),
    ("home", include_str!("../../templates/home.hbs")),
    ("recipe_grid", include_str!("../../templates/recipe_grid.hbs")),
    ("recipe_detail", include_str!("../../templates/recipe_detail.hbs")),
    ("recipe_form", include_str!("../../templates/recipe_form.hbs")),
];

/// Modal hidden by the grid fragment once a mutation has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CloseModal {
    #[serde(rename = "#recipe-modal")]
    AddForm,
    #[serde(rename = "#recipe-detail")]
    Detail,
}

pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, ScoopError> {
        let mut registry = Handlebars::new();
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, source)?;
        }
        Ok(Self { registry })
    }

    /// Full document: `home` wrapped in `base`.
    pub fn home(&self, recipes: &[Recipe]) -> Result<String, ScoopError> {
        let data = json!({
            "title": PAGE_TITLE,
            "recipes": views(recipes),
        });
        Ok(self.registry.render("home", &data)?)
    }

    /// The `#recipe-list` grid returned after every mutation.
    pub fn recipe_grid(&self, recipes: &[Recipe], close: CloseModal) -> Result<String, ScoopError> {
        let data = json!({
            "recipes": views(recipes),
            "close_modal": close,
        });
        Ok(self.registry.render("recipe_grid", &data)?)
    }

    pub fn recipe_detail(&self, recipe: &Recipe) -> Result<String, ScoopError> {
        let data = json!({ "recipe": RecipeView::from(recipe) });
        Ok(self.registry.render("recipe_detail", &data)?)
    }

    /// Blank creation form.
    pub fn new_recipe_form(&self) -> Result<String, ScoopError> {
        Ok(self.registry.render("recipe_form", &json!({}))?)
    }

    /// Edit form pre-filled with the stored values.
    pub fn edit_recipe_form(&self, recipe: &Recipe) -> Result<String, ScoopError> {
        let data = json!({ "recipe": RecipeView::from(recipe) });
        Ok(self.registry.render("recipe_form", &data)?)
    }
}

fn views(recipes: &[Recipe]) -> Vec<RecipeView> {
    recipes.iter().map(RecipeView::from).collect()
}
