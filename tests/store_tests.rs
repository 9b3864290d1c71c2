// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use louvorzao::config::Settings;
use louvorzao::error::{Field, StoreError};
use louvorzao::models::{PaymentMethod, TransactionType};
use louvorzao::registry::{CategoryRegistry, DEFAULT_ICON, UNKNOWN_CATEGORY};
use louvorzao::seed;
use louvorzao::store::TransactionStore;
use louvorzao::validation::{CategoryDraft, Policy, TransactionDraft};
use louvorzao::workspace::{Issue, Workspace};
use rust_decimal::Decimal;
use std::str::FromStr;

fn draft() -> TransactionDraft {
    TransactionDraft {
        amount: "1.234,56".into(),
        description: "Cordas para violão".into(),
        date: "29/11/2023".into(),
        r#type: "expense".into(),
        category: "cat7".into(),
        payment_method: "pix".into(),
        note: Some("  ".into()),
    }
}

fn parts() -> (CategoryRegistry, TransactionStore) {
    (
        CategoryRegistry::new(seed::categories()).unwrap(),
        TransactionStore::new(seed::transactions()).unwrap(),
    )
}

#[test]
fn add_returns_new_snapshot_and_keeps_old() {
    let (reg, store) = parts();
    let now = Utc.with_ymd_and_hms(2023, 11, 29, 10, 0, 0).unwrap();
    let (next, tx) = store.add(&draft(), &reg, Policy::default(), now).unwrap();

    assert_eq!(store.len(), 9);
    assert_eq!(next.len(), 10);
    assert!(tx.id.starts_with("t-"));
    assert_eq!(tx.amount, Decimal::from_str("1234.56").unwrap());
    assert_eq!(tx.payment_method, PaymentMethod::Pix);
    assert_eq!(tx.note, None);
    assert_eq!(tx.created_at, now);
    assert_eq!(tx.updated_at, now);
    assert_eq!(next.all().last(), Some(&tx));
}

#[test]
fn invalid_draft_reports_every_field_and_changes_nothing() {
    let mut ws = Workspace::sample(Settings::default()).unwrap();
    let bad = TransactionDraft {
        amount: "".into(),
        description: "ab".into(),
        date: "".into(),
        r#type: "income".into(),
        category: "".into(),
        payment_method: "".into(),
        note: None,
    };
    let err = ws.add_transaction(&bad).unwrap_err();
    let StoreError::Invalid(errors) = err else {
        panic!("expected validation errors");
    };
    for f in [
        Field::Amount,
        Field::Description,
        Field::Date,
        Field::Category,
        Field::PaymentMethod,
    ] {
        assert!(errors.has(f), "missing error for {}", f);
    }
    assert!(!errors.has(Field::Type));
    assert_eq!(ws.store().len(), 9);
}

#[test]
fn negative_or_garbled_amounts_are_rejected() {
    let (reg, store) = parts();
    for amount in ["-5", "doze", "1.000.000.000.000.001", "99999999999999999"] {
        let d = TransactionDraft {
            amount: amount.into(),
            ..draft()
        };
        let err = store.add(&d, &reg, Policy::default(), Utc::now()).unwrap_err();
        match err {
            StoreError::Invalid(e) => assert!(e.has(Field::Amount)),
            other => panic!("unexpected {:?}", other),
        }
    }
}

#[test]
fn unknown_category_and_method_are_rejected() {
    let (reg, store) = parts();
    let d = TransactionDraft {
        category: "cat99".into(),
        payment_method: "cheque".into(),
        ..draft()
    };
    let StoreError::Invalid(e) = store.add(&d, &reg, Policy::default(), Utc::now()).unwrap_err()
    else {
        panic!("expected validation errors");
    };
    assert!(e.for_field(Field::Category).unwrap().contains("cat99"));
    assert!(e.has(Field::PaymentMethod));
}

#[test]
fn edit_replaces_but_keeps_creation_time() {
    let (reg, store) = parts();
    let original = store.get("t5").unwrap().clone();
    let now = Utc.with_ymd_and_hms(2023, 12, 1, 8, 30, 0).unwrap();
    let (next, edited) = store.edit("t5", &draft(), &reg, Policy::default(), now).unwrap();

    assert_eq!(edited.id, "t5");
    assert_eq!(edited.created_at, original.created_at);
    assert_eq!(edited.updated_at, now);
    assert_eq!(edited.description, "Cordas para violão");
    assert_eq!(next.len(), store.len());
    assert_eq!(next.all()[4], edited);
    assert_eq!(store.get("t5"), Some(&original));

    assert!(matches!(
        store.edit("nope", &draft(), &reg, Policy::default(), now),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn delete_removes_by_id() {
    let (_, store) = parts();
    let next = store.delete("t1").unwrap();
    assert_eq!(next.len(), 8);
    assert!(next.get("t1").is_none());
    assert!(matches!(store.delete("t42"), Err(StoreError::NotFound(_))));
}

#[test]
fn duplicate_ids_are_refused() {
    let mut txs = seed::transactions();
    txs.push(txs[0].clone());
    assert!(matches!(
        TransactionStore::new(txs),
        Err(StoreError::DuplicateId(id)) if id == "t1"
    ));
}

#[test]
fn type_mismatch_is_allowed_by_default_and_flagged() {
    let mut ws = Workspace::sample(Settings::default()).unwrap();
    let income_under_expense = TransactionDraft {
        r#type: "income".into(),
        ..draft()
    };
    let tx = ws.add_transaction(&income_under_expense).unwrap();
    assert_eq!(tx.r#type, TransactionType::Income);
    assert_eq!(
        ws.consistency_issues(),
        vec![Issue::TypeMismatch {
            transaction_id: tx.id.clone(),
            category_id: "cat7".into(),
            transaction_type: TransactionType::Income,
            category_type: TransactionType::Expense,
        }]
    );
}

#[test]
fn strict_policy_rejects_type_mismatch() {
    let settings = Settings {
        strict_category_types: true,
        ..Settings::default()
    };
    let mut ws = Workspace::sample(settings).unwrap();
    let d = TransactionDraft {
        r#type: "income".into(),
        ..draft()
    };
    let StoreError::Invalid(e) = ws.add_transaction(&d).unwrap_err() else {
        panic!("expected validation errors");
    };
    assert!(e.has(Field::Category));
    assert_eq!(ws.store().len(), 9);
}

#[test]
fn category_add_edit_delete() {
    let mut ws = Workspace::sample(Settings::default()).unwrap();

    let added = ws
        .add_category(&CategoryDraft {
            name: "Transporte".into(),
            r#type: "expense".into(),
            icon: None,
        })
        .unwrap();
    assert!(added.id.starts_with("cat-"));
    assert_eq!(added.icon.as_deref(), Some(DEFAULT_ICON));
    assert_eq!(ws.registry().len(), 11);

    let edited = ws
        .edit_category(
            "cat9",
            &CategoryDraft {
                name: "Músicos".into(),
                r#type: "expense".into(),
                icon: None,
            },
        )
        .unwrap();
    assert_eq!(edited.icon.as_deref(), Some("music"));
    assert_eq!(ws.registry().name_of("cat9"), "Músicos");

    let orphaned = ws.delete_category("cat9").unwrap();
    assert_eq!(orphaned, 1);
    assert_eq!(ws.registry().name_of("cat9"), UNKNOWN_CATEGORY);
    assert_eq!(ws.store().len(), 9);
    assert!(ws.consistency_issues().contains(&Issue::UnknownCategory {
        transaction_id: "t7".into(),
        category_id: "cat9".into(),
    }));
}

#[test]
fn category_name_needs_two_characters() {
    let (reg, _) = parts();
    let err = reg
        .add(&CategoryDraft {
            name: " x ".into(),
            r#type: "bogus".into(),
            icon: None,
        })
        .unwrap_err();
    let StoreError::Invalid(e) = err else {
        panic!("expected validation errors");
    };
    assert!(e.has(Field::Name));
    assert!(e.has(Field::Type));
    assert!(matches!(reg.without("cat404"), Err(StoreError::NotFound(_))));
}

#[test]
fn workspace_edit_and_delete_move_the_summary() {
    let mut ws = Workspace::sample(Settings::default()).unwrap();
    let d = TransactionDraft {
        amount: "20000".into(),
        description: "Venda de ingressos antecipados".into(),
        date: "2023-11-15".into(),
        r#type: "income".into(),
        category: "cat1".into(),
        payment_method: "pix".into(),
        note: None,
    };
    ws.edit_transaction("t1", &d).unwrap();
    assert_eq!(ws.summary().total_income, Decimal::from(43000));

    ws.delete_transaction("t4").unwrap();
    assert_eq!(ws.store().len(), 8);
    assert!(matches!(
        ws.delete_transaction("t4"),
        Err(StoreError::NotFound(_))
    ));
}
