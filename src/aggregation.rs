// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{ChartDataPoint, FinancialSummary, Transaction, TransactionType};
use crate::registry::CategoryResolver;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category_id: String,
    pub total: Decimal,
}

/// Per-category sums keyed by id, kept in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    pub fn get(&self, category_id: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|e| e.category_id == category_id)
            .map(|e| e.total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.total))
    }
}

pub fn category_totals(transactions: &[Transaction], t: TransactionType) -> CategoryTotals {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<CategoryTotal> = Vec::new();
    for tx in transactions.iter().filter(|tx| tx.r#type == t) {
        match index.get(tx.category.as_str()) {
            Some(&i) => entries[i].total = entries[i].total.saturating_add(tx.amount),
            None => {
                index.insert(tx.category.as_str(), entries.len());
                entries.push(CategoryTotal {
                    category_id: tx.category.clone(),
                    total: tx.amount,
                });
            }
        }
    }
    CategoryTotals { entries }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub category_id: String,
    pub category_name: String,
    pub income_total: Decimal,
    pub expense_total: Decimal,
}

impl ComparisonRow {
    pub fn combined(&self) -> Decimal {
        self.income_total.saturating_add(self.expense_total)
    }
}

/// Income against expense per category. Ids seen on either side are merged
/// (income ids first), the missing side is zero, and rows are ordered by
/// combined total, largest first, ties in encounter order.
pub fn comparison_series(
    transactions: &[Transaction],
    resolver: &impl CategoryResolver,
) -> Vec<ComparisonRow> {
    let income = category_totals(transactions, TransactionType::Income);
    let expense = category_totals(transactions, TransactionType::Expense);

    let mut rows: Vec<ComparisonRow> = Vec::with_capacity(income.len() + expense.len());
    for id in income.iter().chain(expense.iter()).map(|e| &e.category_id) {
        if rows.iter().any(|r| &r.category_id == id) {
            continue;
        }
        rows.push(ComparisonRow {
            category_id: id.clone(),
            category_name: resolver.category_name(id).to_string(),
            income_total: income.get(id).unwrap_or(Decimal::ZERO),
            expense_total: expense.get(id).unwrap_or(Decimal::ZERO),
        });
    }
    rows.sort_by(|a, b| b.combined().cmp(&a.combined()));
    rows
}

/// Totals and balance. `pending_payments` is left at zero; attach the
/// externally known value with [`FinancialSummary::with_pending`].
pub fn summarize(transactions: &[Transaction]) -> FinancialSummary {
    let (total_income, total_expense) =
        transactions
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), tx| match tx.r#type {
                TransactionType::Income => (inc.saturating_add(tx.amount), exp),
                TransactionType::Expense => (inc, exp.saturating_add(tx.amount)),
            });
    FinancialSummary {
        balance: total_income.saturating_sub(total_expense),
        total_income,
        total_expense,
        pending_payments: Decimal::ZERO,
    }
}

/// `part / whole * 100`, or `None` when `whole` is zero or the result overflows.
pub fn percentage(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }
    part.checked_mul(Decimal::ONE_HUNDRED)?.checked_div(whole)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub category_id: String,
    pub category_name: String,
    pub total: Decimal,
    /// Percentage of the type's grand total.
    pub share: Option<Decimal>,
}

/// One type's totals joined with names, largest first.
pub fn category_breakdown(
    transactions: &[Transaction],
    t: TransactionType,
    resolver: &impl CategoryResolver,
) -> Vec<CategorySlice> {
    let totals = category_totals(transactions, t);
    let grand = totals.sum();
    let mut slices: Vec<CategorySlice> = totals
        .iter()
        .map(|e| CategorySlice {
            category_id: e.category_id.clone(),
            category_name: resolver.category_name(&e.category_id).to_string(),
            total: e.total,
            share: percentage(e.total, grand),
        })
        .collect();
    slices.sort_by(|a, b| b.total.cmp(&a.total));
    slices
}

/// One point per calendar day that has activity, oldest first, labelled `dd/mm`.
pub fn daily_series(transactions: &[Transaction]) -> Vec<ChartDataPoint> {
    let mut days: BTreeMap<chrono::NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for tx in transactions {
        let entry = days.entry(tx.date).or_insert((Decimal::ZERO, Decimal::ZERO));
        match tx.r#type {
            TransactionType::Income => entry.0 = entry.0.saturating_add(tx.amount),
            TransactionType::Expense => entry.1 = entry.1.saturating_add(tx.amount),
        }
    }
    days.into_iter()
        .map(|(date, (income, expense))| ChartDataPoint {
            date: date.format("%d/%m").to_string(),
            income,
            expense,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeriesTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

/// Sums a chart series, whichever bucketing produced it.
pub fn series_totals(points: &[ChartDataPoint]) -> SeriesTotals {
    points.iter().fold(SeriesTotals::default(), |acc, p| SeriesTotals {
        income: acc.income.saturating_add(p.income),
        expense: acc.expense.saturating_add(p.expense),
    })
}
