// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Category lookup. Every mutation returns a fresh registry and leaves the
//! receiver untouched, so views computed from an older snapshot stay valid.

use crate::error::StoreError;
use crate::models::{Category, TransactionType};
use crate::validation::{CategoryDraft, validate_category};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

/// Label shown wherever a transaction points at a category that no longer exists.
pub const UNKNOWN_CATEGORY: &str = "Desconhecido";

pub const DEFAULT_ICON: &str = "tag";

/// Resolves a category id to a display name. Never fails.
pub trait CategoryResolver {
    fn category_name(&self, id: &str) -> &str;
}

#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Arc<[Category]>,
}

impl CategoryRegistry {
    pub fn new(categories: Vec<Category>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for c in &categories {
            if !seen.insert(c.id.as_str()) {
                return Err(StoreError::DuplicateId(c.id.clone()));
            }
        }
        Ok(CategoryRegistry {
            categories: categories.into(),
        })
    }

    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn of_type(&self, t: TransactionType) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(move |c| c.r#type == t)
    }

    pub fn name_of(&self, id: &str) -> &str {
        self.get(id).map(|c| c.name.as_str()).unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Validates the draft, assigns a fresh id and appends it.
    pub fn add(&self, draft: &CategoryDraft) -> Result<(Self, Category), StoreError> {
        let fields = validate_category(draft)?;
        let category = Category {
            id: format!("cat-{}", Uuid::new_v4().simple()),
            name: fields.name,
            r#type: fields.r#type,
            icon: Some(fields.icon.unwrap_or_else(|| DEFAULT_ICON.to_string())),
        };
        let next = self.with_added(category.clone())?;
        tracing::debug!(id = %category.id, name = %category.name, "category added");
        Ok((next, category))
    }

    /// Replaces name and type in place; the icon is kept unless the draft sets one.
    pub fn edit(&self, id: &str, draft: &CategoryDraft) -> Result<(Self, Category), StoreError> {
        let current = self
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let fields = validate_category(draft)?;
        let updated = Category {
            id: current.id.clone(),
            name: fields.name,
            r#type: fields.r#type,
            icon: fields.icon.or_else(|| current.icon.clone()),
        };
        let next = self.with_replaced(updated.clone())?;
        tracing::debug!(id = %updated.id, "category edited");
        Ok((next, updated))
    }

    pub fn with_added(&self, category: Category) -> Result<Self, StoreError> {
        if self.get(&category.id).is_some() {
            return Err(StoreError::DuplicateId(category.id));
        }
        let mut next = self.categories.to_vec();
        next.push(category);
        Ok(CategoryRegistry {
            categories: next.into(),
        })
    }

    pub fn with_replaced(&self, category: Category) -> Result<Self, StoreError> {
        let idx = self
            .categories
            .iter()
            .position(|c| c.id == category.id)
            .ok_or_else(|| StoreError::NotFound(category.id.clone()))?;
        let mut next = self.categories.to_vec();
        next[idx] = category;
        Ok(CategoryRegistry {
            categories: next.into(),
        })
    }

    /// Removes the category. Transactions that still reference it are not
    /// touched and will resolve to [`UNKNOWN_CATEGORY`].
    pub fn without(&self, id: &str) -> Result<Self, StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let next: Vec<Category> = self
            .categories
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        tracing::debug!(id, "category deleted");
        Ok(CategoryRegistry {
            categories: next.into(),
        })
    }
}

impl CategoryResolver for CategoryRegistry {
    fn category_name(&self, id: &str) -> &str {
        self.name_of(id)
    }
}

impl CategoryResolver for HashMap<String, String> {
    fn category_name(&self, id: &str) -> &str {
        self.get(id).map(String::as_str).unwrap_or(UNKNOWN_CATEGORY)
    }
}
