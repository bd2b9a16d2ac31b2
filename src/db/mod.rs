//! Database module: recipe model, schema and storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and form input
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `samples.rs`: rows inserted into an empty table at startup
//! - `sqlite.rs`: `RecipeStorage`, the parameterized query layer

pub mod models;
pub mod samples;
pub mod schema;
pub mod sqlite;

pub use models::{NewRecipe, Recipe};
pub use schema::SQLITE_INIT;
pub use sqlite::{RecipeStorage, SqlitePool};
