use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidateUrl, ValidationError};

use crate::prelude::{BoardError, Result};

/// A job posting as stored by the backend. Every instance held in memory is a
/// canonical record, i.e. the row the backend returned after its last write.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub apply_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn posted_on(&self) -> String {
        self.created_at.format("%d/%m/%Y").to_string()
    }

    /// Rows written before the apply target was checked may hold anything,
    /// so only a link that passes the same check is rendered.
    pub fn has_apply_url(&self) -> bool {
        !self.apply_url.is_empty() && validate_apply_url(&self.apply_url).is_ok()
    }

    pub fn to_draft(&self) -> JobDraft {
        JobDraft {
            title: self.title.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            apply_url: self.apply_url.clone(),
        }
    }
}

/// The editable part of a job, as typed into the admin form.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, Default, PartialEq)]
pub struct JobDraft {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub location: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub category: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "validate_apply_url"))]
    pub apply_url: String,
}

/// Empty, or an absolute http(s) link.
fn validate_apply_url(value: &str) -> std::result::Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let lower = value.to_ascii_lowercase();
    let web = lower.starts_with("https://") || lower.starts_with("http://");
    if web && value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("Must be an http(s) link".into()))
    }
}

impl JobDraft {
    pub fn trimmed(&self) -> Self {
        JobDraft {
            title: self.title.trim().to_string(),
            location: self.location.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            apply_url: self.apply_url.trim().to_string(),
        }
    }

    /// Fails with the sorted names of every empty required field and of a
    /// malformed apply link.
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(|errs| {
            let mut fields: Vec<String> = errs
                .field_errors()
                .keys()
                .map(|k| k.to_string())
                .collect();
            fields.sort();
            BoardError::Validation(fields)
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == JobDraft::default()
    }
}
