//! Caller-side state of the write screens.
//!
//! A form is validated before anything is sent, and submission only borrows it:
//! whatever the outcome, the entered values stay in place for another attempt.

use crate::model::{FoodStatusCreate, RecipeCreate, Visibility};
use api_framework::ApiError;
use thiserror::Error;

/// Why a write did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Required fields were blank; nothing was sent.
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// The request was sent and failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// The "publish recipe" screen. `title`, `ingredients` and `instructions` are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub prep_time: String,
    pub instructions: String,
    pub image_url: String,
    pub visibility: Visibility,
}

impl RecipeForm {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("ingredients", &self.ingredients),
            ("instructions", &self.instructions),
        ]
        .into_iter()
        .filter(|(_, value)| blank(value))
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubmitError::MissingFields(missing))
        }
    }

    /// The creation payload. Blank optional fields are left out.
    pub fn to_payload(&self) -> RecipeCreate {
        RecipeCreate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            ingredients: self.ingredients.trim().to_string(),
            prep_time: optional(&self.prep_time),
            instructions: self.instructions.trim().to_string(),
            image_url: optional(&self.image_url),
            visibility: Some(self.visibility),
        }
    }
}

/// The "new food status" screen. Only `content` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusForm {
    pub content: String,
    pub image_url: String,
    pub visibility: Visibility,
}

impl StatusForm {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        if blank(&self.content) {
            vec!["content"]
        } else {
            Vec::new()
        }
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubmitError::MissingFields(missing))
        }
    }

    pub fn to_payload(&self) -> FoodStatusCreate {
        FoodStatusCreate {
            content: self.content.trim().to_string(),
            image_url: optional(&self.image_url),
            visibility: Some(self.visibility),
            expires_at: None,
        }
    }
}
