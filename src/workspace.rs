// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregation::summarize;
use crate::config::Settings;
use crate::error::StoreError;
use crate::models::{Category, FinancialSummary, Transaction, TransactionType};
use crate::registry::CategoryRegistry;
use crate::seed;
use crate::store::TransactionStore;
use crate::validation::{CategoryDraft, TransactionDraft, check_amount};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk shape of a data file passed with `--data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub pending_payments: Option<Decimal>,
}

impl Dataset {
    pub fn sample() -> Self {
        Dataset {
            categories: seed::categories(),
            transactions: seed::transactions(),
            pending_payments: Some(Decimal::from(seed::PENDING_PAYMENTS)),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Read data file {}", path.display()))?;
        let ds: Dataset = serde_json::from_str(&data)
            .with_context(|| format!("Parse data file {}", path.display()))?;
        ds.check()
            .with_context(|| format!("Invalid data file {}", path.display()))?;
        Ok(ds)
    }

    /// Serde already enforces the closed enums; this covers the value rules.
    fn check(&self) -> Result<()> {
        for tx in &self.transactions {
            if let Err(msg) = check_amount(tx.amount) {
                bail!("transaction '{}': {} (got {})", tx.id, msg, tx.amount);
            }
            if tx.description.trim().is_empty() {
                bail!("transaction '{}' has an empty description", tx.id);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    TypeMismatch {
        transaction_id: String,
        category_id: String,
        transaction_type: TransactionType,
        category_type: TransactionType,
    },
    UnknownCategory {
        transaction_id: String,
        category_id: String,
    },
}

/// Registry, store and settings for one session.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub settings: Settings,
    registry: CategoryRegistry,
    store: TransactionStore,
    dataset_pending: Option<Decimal>,
}

impl Workspace {
    pub fn from_dataset(ds: Dataset, settings: Settings) -> Result<Self, StoreError> {
        Ok(Workspace {
            settings,
            registry: CategoryRegistry::new(ds.categories)?,
            store: TransactionStore::new(ds.transactions)?,
            dataset_pending: ds.pending_payments,
        })
    }

    pub fn sample(settings: Settings) -> Result<Self, StoreError> {
        Self::from_dataset(Dataset::sample(), settings)
    }

    /// Loads `data` if given, otherwise the built-in sample.
    pub fn open(data: Option<&Path>, settings: Settings) -> Result<Self> {
        let ds = match data {
            Some(p) => Dataset::from_path(p)?,
            None => Dataset::sample(),
        };
        let ws = Self::from_dataset(ds, settings).context("Build workspace")?;
        tracing::debug!(
            categories = ws.registry.len(),
            transactions = ws.store.len(),
            "workspace opened"
        );
        Ok(ws)
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.all()
    }

    pub fn pending_payments(&self) -> Decimal {
        self.settings
            .pending_payments
            .or(self.dataset_pending)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn summary(&self) -> FinancialSummary {
        summarize(self.store.all()).with_pending(self.pending_payments())
    }

    pub fn add_transaction(&mut self, draft: &TransactionDraft) -> Result<Transaction, StoreError> {
        let (next, tx) = self
            .store
            .add(draft, &self.registry, self.settings.policy(), Utc::now())?;
        self.store = next;
        Ok(tx)
    }

    pub fn edit_transaction(
        &mut self,
        id: &str,
        draft: &TransactionDraft,
    ) -> Result<Transaction, StoreError> {
        let (next, tx) =
            self.store
                .edit(id, draft, &self.registry, self.settings.policy(), Utc::now())?;
        self.store = next;
        Ok(tx)
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<(), StoreError> {
        self.store = self.store.delete(id)?;
        Ok(())
    }

    pub fn add_category(&mut self, draft: &CategoryDraft) -> Result<Category, StoreError> {
        let (next, category) = self.registry.add(draft)?;
        self.registry = next;
        Ok(category)
    }

    pub fn edit_category(&mut self, id: &str, draft: &CategoryDraft) -> Result<Category, StoreError> {
        let (next, category) = self.registry.edit(id, draft)?;
        self.registry = next;
        Ok(category)
    }

    /// Deletes without cascading. Returns how many transactions now point at
    /// a missing category.
    pub fn delete_category(&mut self, id: &str) -> Result<usize, StoreError> {
        self.registry = self.registry.without(id)?;
        let orphaned = self.store.referencing(id);
        if orphaned > 0 {
            tracing::warn!(id, orphaned, "deleted category is still referenced by transactions");
        }
        Ok(orphaned)
    }

    /// Transactions that disagree with, or point outside, the registry.
    pub fn consistency_issues(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        for tx in self.store.all() {
            match self.registry.get(&tx.category) {
                None => issues.push(Issue::UnknownCategory {
                    transaction_id: tx.id.clone(),
                    category_id: tx.category.clone(),
                }),
                Some(c) if c.r#type != tx.r#type => issues.push(Issue::TypeMismatch {
                    transaction_id: tx.id.clone(),
                    category_id: c.id.clone(),
                    transaction_type: tx.r#type,
                    category_type: c.r#type,
                }),
                Some(_) => {}
            }
        }
        issues
    }
}
