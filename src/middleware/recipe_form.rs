use axum::{
    Form,
    extract::{FromRequest, Request},
};
use serde::Deserialize;

use crate::db::NewRecipe;
use crate::error::ScoopError;

/// Wire shape of the add/edit form. `prep_time` stays raw text so that
/// [`lenient_prep_time`] decides how to read it.
#[derive(Debug, Deserialize)]
struct RawRecipeForm {
    name: String,
    ingredients: String,
    instructions: String,
    #[serde(default)]
    prep_time: Option<String>,
}

/// Prep-time leniency policy: any value that is absent, blank or not a
/// whole number of minutes is stored as 0 instead of rejecting the form.
pub fn lenient_prep_time(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(0)
}

/// Urlencoded recipe form decoded into a [`NewRecipe`].
///
/// Missing `name`/`ingredients`/`instructions` fields, a blank name or a
/// repeated field are rejected with 400.
#[derive(Debug)]
pub struct RecipeForm(pub NewRecipe);

impl<S> FromRequest<S> for RecipeForm
where
    S: Send + Sync,
{
    type Rejection = ScoopError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(raw) = Form::<RawRecipeForm>::from_request(req, state)
            .await
            .map_err(|rejection| ScoopError::InvalidForm(rejection.body_text()))?;

        if raw.name.trim().is_empty() {
            return Err(ScoopError::InvalidForm(
                "recipe name must not be empty".to_string(),
            ));
        }

        let prep_time = lenient_prep_time(raw.prep_time.as_deref());
        Ok(RecipeForm(NewRecipe {
            name: raw.name,
            ingredients: raw.ingredients,
            instructions: raw.instructions,
            prep_time,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, header};

    fn form_request(body: &'static str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .uri("/add-recipe")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("build request")
    }

    #[test]
    fn prep_time_policy_falls_back_to_zero() {
        assert_eq!(lenient_prep_time(Some("20")), 20);
        assert_eq!(lenient_prep_time(Some(" 15 ")), 15);
        assert_eq!(lenient_prep_time(Some("")), 0);
        assert_eq!(lenient_prep_time(Some("twenty")), 0);
        assert_eq!(lenient_prep_time(Some("1.5")), 0);
        assert_eq!(lenient_prep_time(Some("99999999999999999999999")), 0);
        assert_eq!(lenient_prep_time(None), 0);
    }

    #[tokio::test]
    async fn decodes_multiline_fields() {
        let req = form_request(
            "name=Sorbet&ingredients=fruit%0Asugar&instructions=blend%0Afreeze&prep_time=20",
        );
        let RecipeForm(recipe) = RecipeForm::from_request(req, &()).await.unwrap();
        assert_eq!(recipe.name, "Sorbet");
        assert_eq!(recipe.ingredients, "fruit\nsugar");
        assert_eq!(recipe.instructions, "blend\nfreeze");
        assert_eq!(recipe.prep_time, 20);
    }

    #[tokio::test]
    async fn bad_prep_time_is_not_an_error() {
        let req = form_request("name=Sorbet&ingredients=fruit&instructions=blend&prep_time=soon");
        let RecipeForm(recipe) = RecipeForm::from_request(req, &()).await.unwrap();
        assert_eq!(recipe.prep_time, 0);
    }

    #[tokio::test]
    async fn missing_or_blank_name_is_rejected() {
        let req = form_request("ingredients=fruit&instructions=blend");
        assert!(matches!(
            RecipeForm::from_request(req, &()).await,
            Err(ScoopError::InvalidForm(_))
        ));

        let req = form_request("name=+++&ingredients=fruit&instructions=blend");
        assert!(matches!(
            RecipeForm::from_request(req, &()).await,
            Err(ScoopError::InvalidForm(_))
        ));
    }

    #[tokio::test]
    async fn repeated_field_is_rejected() {
        let req = form_request("name=A&name=B&ingredients=x&instructions=y");
        match RecipeForm::from_request(req, &()).await {
            Err(ScoopError::InvalidForm(reason)) => assert!(reason.contains("duplicate field")),
            other => panic!("expected InvalidForm, got {other:?}"),
        }
    }
}
