// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::StoreError;
use crate::models::Transaction;
use crate::registry::CategoryRegistry;
use crate::validation::{Policy, TransactionDraft, TransactionFields, validate_transaction};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Canonical, ordered transaction list. Mutations hand back a new snapshot.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Arc<[Transaction]>,
}

impl TransactionStore {
    pub fn new(transactions: Vec<Transaction>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for t in &transactions {
            if !seen.insert(t.id.as_str()) {
                return Err(StoreError::DuplicateId(t.id.clone()));
            }
        }
        Ok(TransactionStore {
            transactions: transactions.into(),
        })
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn add(
        &self,
        draft: &TransactionDraft,
        registry: &CategoryRegistry,
        policy: Policy,
        now: DateTime<Utc>,
    ) -> Result<(Self, Transaction), StoreError> {
        let fields = validate_transaction(draft, registry, policy)?;
        warn_on_type_mismatch(&fields, registry);
        let tx = build(format!("t-{}", Uuid::new_v4().simple()), fields, now, now);

        let mut next = self.transactions.to_vec();
        next.push(tx.clone());
        tracing::debug!(id = %tx.id, amount = %tx.amount, "transaction added");
        Ok((
            TransactionStore {
                transactions: next.into(),
            },
            tx,
        ))
    }

    /// Full replace by id. `created_at` is carried over, `updated_at` becomes `now`.
    pub fn edit(
        &self,
        id: &str,
        draft: &TransactionDraft,
        registry: &CategoryRegistry,
        policy: Policy,
        now: DateTime<Utc>,
    ) -> Result<(Self, Transaction), StoreError> {
        let idx = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let fields = validate_transaction(draft, registry, policy)?;
        warn_on_type_mismatch(&fields, registry);
        let created_at = self.transactions[idx].created_at;
        let tx = build(id.to_string(), fields, created_at, now);

        let mut next = self.transactions.to_vec();
        next[idx] = tx.clone();
        tracing::debug!(id, "transaction edited");
        Ok((
            TransactionStore {
                transactions: next.into(),
            },
            tx,
        ))
    }

    pub fn delete(&self, id: &str) -> Result<Self, StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let next: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        tracing::debug!(id, "transaction deleted");
        Ok(TransactionStore {
            transactions: next.into(),
        })
    }

    pub fn referencing(&self, category_id: &str) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.category == category_id)
            .count()
    }
}

fn build(
    id: String,
    f: TransactionFields,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id,
        amount: f.amount,
        description: f.description,
        date: f.date,
        r#type: f.r#type,
        category: f.category,
        payment_method: f.payment_method,
        note: f.note,
        created_at,
        updated_at,
    }
}

fn warn_on_type_mismatch(fields: &TransactionFields, registry: &CategoryRegistry) {
    if let Some(c) = registry.get(&fields.category) {
        if c.r#type != fields.r#type {
            tracing::warn!(
                category = %c.id,
                category_type = %c.r#type,
                transaction_type = %fields.r#type,
                "transaction type differs from its category's type"
            );
        }
    }
}
