use serde::Serialize;

use crate::db::Recipe;

/// Display format for `created_at`, e.g. "March 5, 2024".
pub const CREATED_FORMAT: &str = "%B %-d, %Y";

/// Template-facing projection of a [`Recipe`].
#[derive(Debug, Clone, Serialize)]
pub struct RecipeView {
    pub id: i64,
    pub name: String,
    pub prep_time: i64,
    pub ingredients: String,
    pub instructions: String,
    pub ingredient_lines: Vec<String>,
    pub instruction_lines: Vec<String>,
    pub created_display: String,
}

impl From<&Recipe> for RecipeView {
    fn from(r: &Recipe) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            prep_time: r.prep_time,
            ingredients: r.ingredients.clone(),
            instructions: r.instructions.clone(),
            ingredient_lines: content_lines(&r.ingredients),
            instruction_lines: content_lines(&r.instructions),
            created_display: r.created_at.format(CREATED_FORMAT).to_string(),
        }
    }
}

/// Split newline-delimited text into trimmed, non-blank lines.
pub fn content_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
