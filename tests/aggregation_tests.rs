// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use louvorzao::aggregation::{
    category_breakdown, category_totals, comparison_series, daily_series, percentage,
    series_totals, summarize,
};
use louvorzao::models::{PaymentMethod, Transaction, TransactionType};
use louvorzao::registry::{CategoryRegistry, UNKNOWN_CATEGORY};
use louvorzao::seed;
use rust_decimal::Decimal;
use std::str::FromStr;

fn tx(id: &str, amount: i64, t: TransactionType, category: &str, day: u32) -> Transaction {
    let date = NaiveDate::from_ymd_opt(2023, 11, day).unwrap();
    let stamp = Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap());
    Transaction {
        id: id.into(),
        amount: Decimal::from(amount),
        description: format!("tx {}", id),
        date,
        r#type: t,
        category: category.into(),
        payment_method: PaymentMethod::Pix,
        note: None,
        created_at: stamp,
        updated_at: stamp,
    }
}

fn registry() -> CategoryRegistry {
    CategoryRegistry::new(seed::categories()).unwrap()
}

#[test]
fn summary_of_two_records() {
    let txs = vec![
        tx("a", 100, TransactionType::Income, "cat1", 1),
        tx("b", 40, TransactionType::Expense, "cat5", 2),
    ];
    let s = summarize(&txs);
    assert_eq!(s.total_income, Decimal::from(100));
    assert_eq!(s.total_expense, Decimal::from(40));
    assert_eq!(s.balance, Decimal::from(60));
    assert_eq!(s.pending_payments, Decimal::ZERO);
}

#[test]
fn summary_of_sample_balances() {
    let s = summarize(&seed::transactions());
    assert_eq!(s.total_income, Decimal::from(48000));
    assert_eq!(s.total_expense, Decimal::from(37000));
    assert_eq!(s.balance, s.total_income - s.total_expense);
}

#[test]
fn summary_of_nothing_is_zero() {
    let s = summarize(&[]).with_pending(Decimal::from(5000));
    assert_eq!(s.balance, Decimal::ZERO);
    assert_eq!(s.pending_payments, Decimal::from(5000));
    assert_eq!(s.income_to_expense_ratio(), None);
    assert_eq!(s.expense_to_income_ratio(), None);
}

#[test]
fn ratios_guard_zero_denominator() {
    let s = summarize(&[tx("a", 250, TransactionType::Income, "cat1", 3)]);
    assert_eq!(s.income_to_expense_ratio(), None);
    assert_eq!(s.expense_to_income_ratio(), Some(Decimal::ZERO));
    assert_eq!(
        percentage(Decimal::from(1), Decimal::from(4)),
        Some(Decimal::from(25))
    );
    assert_eq!(percentage(Decimal::from(7), Decimal::ZERO), None);
}

#[test]
fn category_totals_sum_per_type_in_encounter_order() {
    let mut txs = seed::transactions();
    txs.push(tx("extra", 500, TransactionType::Expense, "cat6", 2));
    let totals = category_totals(&txs, TransactionType::Expense);
    let ids: Vec<&str> = totals.iter().map(|e| e.category_id.as_str()).collect();
    assert_eq!(ids, ["cat6", "cat7", "cat8", "cat9", "cat5"]);
    assert_eq!(totals.get("cat6"), Some(Decimal::from(12500)));
    assert_eq!(totals.get("cat1"), None);
    assert_eq!(totals.sum(), Decimal::from(37500));

    assert!(category_totals(&[], TransactionType::Income).is_empty());
}

#[test]
fn comparison_orders_by_combined_total_with_stable_ties() {
    let rows = comparison_series(&seed::transactions(), &registry());
    let ids: Vec<&str> = rows.iter().map(|r| r.category_id.as_str()).collect();
    // cat3 and cat8 both total 5000; cat3 is met first (income side).
    assert_eq!(
        ids,
        ["cat1", "cat2", "cat6", "cat9", "cat7", "cat3", "cat8", "cat4", "cat5"]
    );
    let sound = rows.iter().find(|r| r.category_id == "cat7").unwrap();
    assert_eq!(sound.category_name, "Equipamento de Som");
    assert_eq!(sound.income_total, Decimal::ZERO);
    assert_eq!(sound.expense_total, Decimal::from(8000));
}

#[test]
fn comparison_merges_both_sides_of_one_category() {
    let txs = vec![
        tx("a", 300, TransactionType::Income, "shared", 1),
        tx("b", 200, TransactionType::Expense, "shared", 2),
        tx("c", 400, TransactionType::Expense, "cat5", 3),
    ];
    let rows = comparison_series(&txs, &registry());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category_id, "shared");
    assert_eq!(rows[0].category_name, UNKNOWN_CATEGORY);
    assert_eq!(rows[0].income_total, Decimal::from(300));
    assert_eq!(rows[0].expense_total, Decimal::from(200));
    assert_eq!(rows[1].category_name, "Alimentação");
}

#[test]
fn breakdown_sorts_descending_with_shares() {
    let txs = vec![
        tx("a", 25, TransactionType::Income, "cat3", 1),
        tx("b", 75, TransactionType::Income, "cat1", 2),
        tx("c", 999, TransactionType::Expense, "cat5", 3),
    ];
    let slices = category_breakdown(&txs, TransactionType::Income, &registry());
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].category_name, "Ingressos");
    assert_eq!(slices[0].share, Some(Decimal::from(75)));
    assert_eq!(slices[1].category_name, "Doações");
    assert_eq!(slices[1].share, Some(Decimal::from(25)));
}

#[test]
fn breakdown_of_zero_amounts_has_no_share() {
    let txs = vec![tx("a", 0, TransactionType::Expense, "cat5", 1)];
    let slices = category_breakdown(&txs, TransactionType::Expense, &registry());
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].share, None);
}

#[test]
fn daily_series_buckets_by_day() {
    let txs = seed::transactions();
    let series = daily_series(&txs);
    let labels: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(
        labels,
        ["01/11", "05/11", "10/11", "15/11", "20/11", "25/11", "27/11", "28/11"]
    );
    let last = series.last().unwrap();
    assert_eq!(last.income, Decimal::from(3000));
    assert_eq!(last.expense, Decimal::from(2000));

    let totals = series_totals(&series);
    let s = summarize(&txs);
    assert_eq!(totals.income, s.total_income);
    assert_eq!(totals.expense, s.total_expense);
}

#[test]
fn fractional_amounts_add_exactly() {
    let mut a = tx("a", 0, TransactionType::Income, "cat1", 1);
    a.amount = Decimal::from_str("0.10").unwrap();
    let mut b = tx("b", 0, TransactionType::Income, "cat1", 1);
    b.amount = Decimal::from_str("0.20").unwrap();
    let s = summarize(&[a, b]);
    assert_eq!(s.total_income, Decimal::from_str("0.30").unwrap());
}

#[test]
fn huge_totals_saturate_instead_of_panicking() {
    let mut a = tx("a", 0, TransactionType::Income, "cat1", 1);
    a.amount = Decimal::MAX;
    let mut b = tx("b", 0, TransactionType::Income, "cat1", 2);
    b.amount = Decimal::MAX;
    let mut c = tx("c", 0, TransactionType::Expense, "cat6", 2);
    c.amount = Decimal::MAX;
    let all = [a, b, c];

    let s = summarize(&all);
    assert_eq!(s.total_income, Decimal::MAX);
    assert_eq!(s.balance, Decimal::ZERO);
    assert_eq!(category_totals(&all, TransactionType::Income).get("cat1"), Some(Decimal::MAX));
    assert_eq!(comparison_series(&all, &registry())[0].combined(), Decimal::MAX);
    assert_eq!(series_totals(&daily_series(&all)).income, Decimal::MAX);
}
