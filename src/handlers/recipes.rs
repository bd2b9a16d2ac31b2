use axum::{extract::State, response::Html};
use tracing::info;

use crate::middleware::{RecipeForm, RecipeId};
use crate::render::CloseModal;
use crate::{ScoopError, router::ScoopState};

/// GET / -> full page with every recipe.
pub async fn home(State(state): State<ScoopState>) -> Result<Html<String>, ScoopError> {
    let recipes = state.storage.list().await?;
    Ok(Html(state.renderer.home(&recipes)?))
}

/// GET /recipe/{id} -> detail fragment.
pub async fn recipe_detail(
    State(state): State<ScoopState>,
    RecipeId(id): RecipeId,
) -> Result<Html<String>, ScoopError> {
    let recipe = state.storage.get_by_id(id).await?;
    Ok(Html(state.renderer.recipe_detail(&recipe)?))
}

/// GET /add-recipe -> empty creation form.
pub async fn add_recipe_form(State(state): State<ScoopState>) -> Result<Html<String>, ScoopError> {
    Ok(Html(state.renderer.new_recipe_form()?))
}

/// POST /add-recipe -> insert, then the refreshed grid.
pub async fn add_recipe(
    State(state): State<ScoopState>,
    RecipeForm(recipe): RecipeForm,
) -> Result<Html<String>, ScoopError> {
    info!(name = %recipe.name, "adding recipe");
    state.storage.insert(recipe).await?;
    render_grid(&state, CloseModal::AddForm).await
}

/// GET /edit-recipe/{id} -> edit form pre-filled with stored values.
pub async fn edit_recipe_form(
    State(state): State<ScoopState>,
    RecipeId(id): RecipeId,
) -> Result<Html<String>, ScoopError> {
    let recipe = state.storage.get_by_id(id).await?;
    Ok(Html(state.renderer.edit_recipe_form(&recipe)?))
}

/// PUT /edit-recipe/{id} -> overwrite fields, then the refreshed grid.
pub async fn update_recipe(
    State(state): State<ScoopState>,
    RecipeId(id): RecipeId,
    RecipeForm(recipe): RecipeForm,
) -> Result<Html<String>, ScoopError> {
    info!(id, name = %recipe.name, "updating recipe");
    state.storage.update(id, recipe).await?;
    render_grid(&state, CloseModal::Detail).await
}

/// DELETE /delete-recipe/{id} -> remove, then the refreshed grid.
pub async fn delete_recipe(
    State(state): State<ScoopState>,
    RecipeId(id): RecipeId,
) -> Result<Html<String>, ScoopError> {
    info!(id, "deleting recipe");
    state.storage.delete(id).await?;
    render_grid(&state, CloseModal::Detail).await
}

/// Fallback for any method a route does not serve.
pub async fn method_not_allowed() -> ScoopError {
    ScoopError::MethodNotAllowed
}

async fn render_grid(state: &ScoopState, close: CloseModal) -> Result<Html<String>, ScoopError> {
    let recipes = state.storage.list().await?;
    Ok(Html(state.renderer.recipe_grid(&recipes, close)?))
}
