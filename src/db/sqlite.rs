use crate::db::models::{NewRecipe, Recipe};
use crate::db::samples::sample_recipes;
use crate::db::schema::SQLITE_INIT;
use crate::error::ScoopError;
use chrono::NaiveDateTime;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

const SELECT_COLUMNS: &str =
    "SELECT id, name, ingredients, instructions, prep_time, created_at FROM recipes";

/// Parameterized query layer over the `recipes` table.
///
/// Cloning is cheap; every clone shares the same pool.
#[derive(Clone)]
pub struct RecipeStorage {
    pool: SqlitePool,
}

impl RecipeStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if absent) a pool for `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, ScoopError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(connect_opts)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL. Idempotent, never seeds.
    pub async fn init_schema(&self) -> Result<(), ScoopError> {
        // execute multiple statements one by one (sqlx::query runs a single statement)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the sample recipes when the table is empty. Returns how many were inserted.
    pub async fn seed_if_empty(&self) -> Result<usize, ScoopError> {
        if self.count().await? > 0 {
            return Ok(0);
        }
        let samples = sample_recipes();
        let inserted = samples.len();
        for recipe in samples {
            self.insert(recipe).await?;
        }
        info!(count = inserted, "seeded sample recipes");
        Ok(inserted)
    }

    pub async fn count(&self) -> Result<i64, ScoopError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// All recipes, newest first. Rows created within the same second fall back to id order.
    pub async fn list(&self) -> Result<Vec<Recipe>, ScoopError> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Recipe, ScoopError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => ScoopError::NotFound,
                other => ScoopError::DatabaseError(other),
            })?;
        Self::row_to_model(row)
    }

    /// Insert a recipe; SQLite assigns `id` and `created_at`.
    pub async fn insert(&self, recipe: NewRecipe) -> Result<(), ScoopError> {
        sqlx::query(
            "INSERT INTO recipes (name, ingredients, instructions, prep_time) VALUES (?, ?, ?, ?)",
        )
        .bind(recipe.name)
        .bind(recipe.ingredients)
        .bind(recipe.instructions)
        .bind(recipe.prep_time)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Overwrite every editable field of `id`. An unknown id affects no rows and is not an error.
    pub async fn update(&self, id: i64, recipe: NewRecipe) -> Result<(), ScoopError> {
        let result = sqlx::query(
            r#"UPDATE recipes SET
                name = ?,
                ingredients = ?,
                instructions = ?,
                prep_time = ?
              WHERE id = ?"#,
        )
        .bind(recipe.name)
        .bind(recipe.ingredients)
        .bind(recipe.instructions)
        .bind(recipe.prep_time)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            debug!(id, "update matched no recipe");
        }
        Ok(())
    }

    /// Hard delete. An unknown id affects no rows and is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), ScoopError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            debug!(id, "delete matched no recipe");
        }
        Ok(())
    }

    fn row_to_model(row: SqliteRow) -> Result<Recipe, ScoopError> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let ingredients: String = row.try_get("ingredients")?;
        let instructions: String = row.try_get("instructions")?;
        let prep_time: Option<i64> = row.try_get("prep_time")?;
        let created_at: NaiveDateTime = row.try_get("created_at")?;

        Ok(Recipe {
            id,
            name,
            ingredients,
            instructions,
            prep_time: prep_time.unwrap_or(0),
            created_at,
        })
    }
}
