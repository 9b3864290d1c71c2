// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use louvorzao::filters::{
    ListQuery, SortState, apply_report_filter, filter_by_categories, filter_by_date_range,
    filter_by_text, filter_by_type, recent, sort_by,
};
use louvorzao::models::{
    DateRange, PaymentMethod, ReportFilter, SortField, SortOrder, Transaction, TransactionType,
    TypeFilter,
};
use louvorzao::registry::CategoryRegistry;
use louvorzao::seed;
use std::collections::BTreeSet;

fn ids(txs: &[Transaction]) -> Vec<&str> {
    txs.iter().map(|t| t.id.as_str()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx_on(id: &str, on: NaiveDate, description: &str) -> Transaction {
    let stamp = Utc.from_utc_datetime(&on.and_hms_opt(9, 0, 0).unwrap());
    Transaction {
        id: id.into(),
        amount: 10.into(),
        description: description.into(),
        date: on,
        r#type: TransactionType::Expense,
        category: "cat10".into(),
        payment_method: PaymentMethod::Cash,
        note: None,
        created_at: stamp,
        updated_at: stamp,
    }
}

fn registry() -> CategoryRegistry {
    CategoryRegistry::new(seed::categories()).unwrap()
}

#[test]
fn type_filter_keeps_income_in_order() {
    let txs = seed::transactions();
    let income = filter_by_type(&txs, TransactionType::Income);
    assert_eq!(ids(&income), ["t1", "t2", "t3", "t8"]);
    let expense = filter_by_type(&txs, TransactionType::Expense);
    assert_eq!(ids(&expense), ["t4", "t5", "t6", "t7", "t9"]);
}

#[test]
fn date_range_is_inclusive_on_both_ends() {
    let txs = vec![
        tx_on("before", date(2023, 10, 31), "a"),
        tx_on("first", date(2023, 11, 1), "b"),
        tx_on("mid", date(2023, 11, 15), "c"),
        tx_on("last", date(2023, 11, 30), "d"),
        tx_on("after", date(2023, 12, 1), "e"),
    ];
    let kept = filter_by_date_range(&txs, date(2023, 11, 1), date(2023, 11, 30));
    assert_eq!(ids(&kept), ["first", "mid", "last"]);
}

#[test]
fn empty_category_set_is_pass_through() {
    let txs = seed::transactions();
    assert_eq!(filter_by_categories(&txs, &BTreeSet::new()), txs);

    let wanted: BTreeSet<String> = ["cat9".to_string(), "cat1".to_string()].into();
    assert_eq!(ids(&filter_by_categories(&txs, &wanted)), ["t1", "t7"]);
}

#[test]
fn text_search_matches_description_or_category_name() {
    let txs = seed::transactions();
    let reg = registry();
    assert_eq!(ids(&filter_by_text(&txs, "SOM", &reg)), ["t2", "t5"]);
    // "Merchandise" is only the category name of t8.
    assert_eq!(ids(&filter_by_text(&txs, "merchandise", &reg)), ["t8"]);
    assert_eq!(filter_by_text(&txs, "", &reg).len(), txs.len());
    assert!(filter_by_text(&txs, "inexistente", &reg).is_empty());
}

#[test]
fn text_search_sees_fallback_label_for_dangling_category() {
    let mut orphan = tx_on("o", date(2023, 11, 2), "Conta de luz");
    orphan.category = "gone".into();
    let txs = vec![orphan];
    assert_eq!(ids(&filter_by_text(&txs, "desconhecido", &registry())), ["o"]);
}

#[test]
fn amount_sort_is_stable_in_both_directions() {
    let txs = seed::transactions();
    let asc = sort_by(&txs, SortField::Amount, SortOrder::Asc);
    assert_eq!(
        ids(&asc),
        ["t9", "t8", "t3", "t6", "t5", "t7", "t4", "t2", "t1"]
    );
    let desc = sort_by(&txs, SortField::Amount, SortOrder::Desc);
    assert_eq!(
        ids(&desc),
        ["t1", "t2", "t4", "t7", "t5", "t3", "t6", "t8", "t9"]
    );
    // input untouched
    assert_eq!(ids(&txs)[0], "t1");
}

#[test]
fn descending_date_sort_reverses_ascending_without_ties() {
    let txs = vec![
        tx_on("c", date(2023, 11, 3), "c"),
        tx_on("a", date(2023, 11, 1), "a"),
        tx_on("d", date(2023, 11, 4), "d"),
        tx_on("b", date(2023, 11, 2), "b"),
    ];
    let asc = sort_by(&txs, SortField::Date, SortOrder::Asc);
    let desc = sort_by(&asc, SortField::Date, SortOrder::Desc);
    let mut reversed = asc.clone();
    reversed.reverse();
    assert_eq!(desc, reversed);
    assert_eq!(desc.len(), txs.len());
}

#[test]
fn description_sort_ignores_case_and_accents() {
    let txs = vec![
        tx_on("1", date(2023, 11, 1), "banana"),
        tx_on("2", date(2023, 11, 1), "Zebra"),
        tx_on("3", date(2023, 11, 1), "Água"),
        tx_on("4", date(2023, 11, 1), "abacaxi"),
    ];
    let asc = sort_by(&txs, SortField::Description, SortOrder::Asc);
    assert_eq!(ids(&asc), ["4", "3", "1", "2"]);
}

#[test]
fn description_sort_folds_decomposed_accents() {
    let txs = vec![
        tx_on("1", date(2023, 11, 1), "Azul"),
        tx_on("2", date(2023, 11, 1), "A\u{301}gua"),
        tx_on("3", date(2023, 11, 1), "Ångström"),
    ];
    let asc = sort_by(&txs, SortField::Description, SortOrder::Asc);
    assert_eq!(ids(&asc), ["2", "3", "1"]);
}

#[test]
fn recent_takes_newest_first() {
    let txs = seed::transactions();
    assert_eq!(ids(&recent(&txs, 5)), ["t8", "t9", "t7", "t3", "t2"]);
    assert!(recent(&[], 5).is_empty());
}

#[test]
fn report_filter_matches_chained_filters_in_any_order() {
    let txs = seed::transactions();
    let cats: BTreeSet<String> = ["cat6", "cat7", "cat1"].iter().map(|s| s.to_string()).collect();
    let filter = ReportFilter {
        date_range: DateRange::new(date(2023, 11, 1), date(2023, 11, 15)),
        categories: cats.clone(),
        transaction_type: TypeFilter::Expense,
    };
    let combined = apply_report_filter(&txs, &filter);
    assert_eq!(ids(&combined), ["t4", "t5"]);

    let a = filter_by_categories(
        &filter_by_type(
            &filter_by_date_range(&txs, date(2023, 11, 1), date(2023, 11, 15)),
            TransactionType::Expense,
        ),
        &cats,
    );
    let b = filter_by_date_range(
        &filter_by_type(&filter_by_categories(&txs, &cats), TransactionType::Expense),
        date(2023, 11, 1),
        date(2023, 11, 15),
    );
    assert_eq!(a, combined);
    assert_eq!(b, combined);
}

#[test]
fn default_report_filter_keeps_everything() {
    let txs = seed::transactions();
    assert_eq!(apply_report_filter(&txs, &ReportFilter::default()), txs);

    let open_start = ReportFilter {
        date_range: DateRange {
            from: None,
            to: Some(date(2023, 11, 5)),
        },
        ..ReportFilter::default()
    };
    assert_eq!(ids(&apply_report_filter(&txs, &open_start)), ["t4", "t5"]);
}

#[test]
fn sort_toggle_flips_same_column_and_resets_new_one() {
    let s = SortState::default();
    assert_eq!(s.field, SortField::Date);
    assert_eq!(s.order, SortOrder::Desc);
    let s = s.toggle(SortField::Date);
    assert_eq!(s.order, SortOrder::Asc);
    let s = s.toggle(SortField::Amount);
    assert_eq!((s.field, s.order), (SortField::Amount, SortOrder::Desc));
}

#[test]
fn list_query_filters_then_sorts() {
    let txs = seed::transactions();
    let q = ListQuery {
        type_filter: TypeFilter::Income,
        search: "venda".into(),
        sort: SortState {
            field: SortField::Amount,
            order: SortOrder::Asc,
        },
    };
    assert_eq!(ids(&q.apply(&txs, &registry())), ["t8", "t1"]);
}
