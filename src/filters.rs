// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Predicate filters and ordering over transaction slices. Every function is
//! pure: the input is never reordered and the output is a new vector, so any
//! combination of filters gives the same result regardless of order.

use crate::models::{
    ReportFilter, SortField, SortOrder, Transaction, TransactionType, TypeFilter,
};
use crate::registry::CategoryResolver;
use crate::utils::collate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

fn keep(transactions: &[Transaction], pred: impl Fn(&Transaction) -> bool) -> Vec<Transaction> {
    transactions.iter().filter(|&t| pred(t)).cloned().collect()
}

pub fn filter_by_type(transactions: &[Transaction], t: TransactionType) -> Vec<Transaction> {
    keep(transactions, |tx| tx.r#type == t)
}

/// Inclusive on both bounds.
pub fn filter_by_date_range(
    transactions: &[Transaction],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<Transaction> {
    keep(transactions, |tx| tx.date >= from && tx.date <= to)
}

/// An empty id set passes everything through.
pub fn filter_by_categories(
    transactions: &[Transaction],
    category_ids: &BTreeSet<String>,
) -> Vec<Transaction> {
    if category_ids.is_empty() {
        return transactions.to_vec();
    }
    keep(transactions, |tx| category_ids.contains(&tx.category))
}

pub fn matches_text(tx: &Transaction, needle_lower: &str, resolver: &impl CategoryResolver) -> bool {
    tx.description.to_lowercase().contains(needle_lower)
        || resolver
            .category_name(&tx.category)
            .to_lowercase()
            .contains(needle_lower)
}

/// Case-insensitive substring match on the description or the resolved
/// category name. An empty query passes everything through.
pub fn filter_by_text(
    transactions: &[Transaction],
    query: &str,
    resolver: &impl CategoryResolver,
) -> Vec<Transaction> {
    if query.is_empty() {
        return transactions.to_vec();
    }
    let needle = query.to_lowercase();
    keep(transactions, |tx| matches_text(tx, &needle, resolver))
}

pub fn compare_by(a: &Transaction, b: &Transaction, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Amount => a.amount.cmp(&b.amount),
        SortField::Description => collate(&a.description, &b.description),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

/// Stable sort. `Desc` flips the comparator, so equal keys keep their
/// incoming relative order in both directions.
pub fn sort_by(transactions: &[Transaction], field: SortField, order: SortOrder) -> Vec<Transaction> {
    let mut out = transactions.to_vec();
    out.sort_by(|a, b| {
        let ord = compare_by(a, b, field);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    out
}

/// The `n` most recent transactions, newest first.
pub fn recent(transactions: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut out = sort_by(transactions, SortField::Date, SortOrder::Desc);
    out.truncate(n);
    out
}

/// AND of every active part of the report filter in a single pass.
pub fn apply_report_filter(transactions: &[Transaction], filter: &ReportFilter) -> Vec<Transaction> {
    keep(transactions, |tx| {
        filter.date_range.contains(tx.date)
            && filter.transaction_type.matches(tx.r#type)
            && (filter.categories.is_empty() || filter.categories.contains(&tx.category))
    })
}

/// Column sort state of the transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortState {
    /// Clicking the active column flips direction; a new column starts descending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            SortState {
                field,
                order: self.order.flipped(),
            }
        } else {
            SortState {
                field,
                order: SortOrder::Desc,
            }
        }
    }
}

/// Everything the transaction list applies: type, search, then sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub type_filter: TypeFilter,
    pub search: String,
    pub sort: SortState,
}

impl ListQuery {
    pub fn apply(&self, transactions: &[Transaction], resolver: &impl CategoryResolver) -> Vec<Transaction> {
        let needle = self.search.to_lowercase();
        let filtered = keep(transactions, |tx| {
            self.type_filter.matches(tx.r#type)
                && (needle.is_empty() || matches_text(tx, &needle, resolver))
        });
        sort_by(&filtered, self.sort.field, self.sort.order)
    }
}
