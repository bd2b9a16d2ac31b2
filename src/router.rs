use axum::{
    Router,
    routing::{MethodRouter, delete, get},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::db::RecipeStorage;
use crate::handlers::recipes;
use crate::render::Renderer;

/// Shared handler state: the storage pool and the compiled templates.
#[derive(Clone)]
pub struct ScoopState {
    pub storage: RecipeStorage,
    pub renderer: Arc<Renderer>,
}

impl ScoopState {
    pub fn new(storage: RecipeStorage, renderer: Renderer) -> Self {
        Self {
            storage,
            renderer: Arc::new(renderer),
        }
    }
}

fn with_405(route: MethodRouter<ScoopState>) -> MethodRouter<ScoopState> {
    route.fallback(recipes::method_not_allowed)
}

pub fn scoop_router(state: ScoopState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", with_405(get(recipes::home)))
        .route("/recipe/{id}", with_405(get(recipes::recipe_detail)))
        .route(
            "/add-recipe",
            with_405(get(recipes::add_recipe_form).post(recipes::add_recipe)),
        )
        .route(
            "/edit-recipe/{id}",
            with_405(get(recipes::edit_recipe_form).put(recipes::update_recipe)),
        )
        .route(
            "/delete-recipe/{id}",
            with_405(delete(recipes::delete_recipe)),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
