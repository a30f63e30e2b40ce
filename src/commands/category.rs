//! Category Commands
//!
//! Triage categories are global to the user and independent of buckets.

use crate::models::{Category, ProtoCategory};
use crate::store::Action;
use super::{Api, Result};

impl Api {
    pub async fn list_categories(&self) -> Result<Action> {
        let categories: Vec<Category> = self.get("categories").await?;
        Ok(Action::SetCategories { categories })
    }

    /// The server answers with the full, updated category list
    pub async fn create_category(&self, title: &str) -> Result<Action> {
        let categories: Vec<Category> = self.post("categories", &ProtoCategory { title }).await?;
        Ok(Action::SetCategories { categories })
    }

    pub async fn delete_category(&self, category: Category) -> Result<Action> {
        self.delete(&format!("categories/{}", category.id)).await?;
        Ok(Action::CategoryDeleted { deleted_category: category })
    }
}
