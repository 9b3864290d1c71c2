// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Boundary checks for raw form input. Nothing reaches the registry or the
//! store until it has passed through here.

use crate::error::{Field, FieldError, ValidationErrors};
use crate::models::{PaymentMethod, TransactionType};
use crate::registry::CategoryRegistry;
use crate::utils::{parse_amount, parse_date};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

pub const MIN_DESCRIPTION_CHARS: usize = 3;
pub const MIN_CATEGORY_NAME_CHARS: usize = 2;
/// Largest accepted amount. Keeps every sum far inside `Decimal` range.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Rejects negative and oversized amounts.
pub fn check_amount(amount: Decimal) -> Result<(), String> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err("amount must not be negative".into());
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(format!("amount must not exceed {}", MAX_AMOUNT));
    }
    Ok(())
}

/// Raw transaction form. Every field is text as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionDraft {
    pub amount: String,
    pub description: String,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub payment_method: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFields {
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub r#type: TransactionType,
    pub category: String,
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Policy {
    /// Reject transactions whose type differs from their category's type.
    pub strict_category_types: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryDraft {
    pub name: String,
    pub r#type: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFields {
    pub name: String,
    pub r#type: TransactionType,
    pub icon: Option<String>,
}

struct Collector(Vec<FieldError>);

impl Collector {
    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.0.is_empty() {
            Ok(value())
        } else {
            Err(ValidationErrors(self.0))
        }
    }
}

fn non_blank(s: &Option<String>) -> Option<String> {
    s.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn validate_transaction(
    draft: &TransactionDraft,
    registry: &CategoryRegistry,
    policy: Policy,
) -> Result<TransactionFields, ValidationErrors> {
    let mut errs = Collector(Vec::new());

    let amount = if draft.amount.trim().is_empty() {
        errs.push(Field::Amount, "amount is required");
        None
    } else {
        match parse_amount(&draft.amount) {
            Ok(a) => match check_amount(a) {
                Ok(()) => Some(a),
                Err(msg) => {
                    errs.push(Field::Amount, msg);
                    None
                }
            },
            Err(e) => {
                errs.push(Field::Amount, e.to_string());
                None
            }
        }
    };

    let description = draft.description.trim().to_string();
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        errs.push(
            Field::Description,
            format!("description must be at least {} characters", MIN_DESCRIPTION_CHARS),
        );
    }

    let date = if draft.date.trim().is_empty() {
        errs.push(Field::Date, "date is required");
        None
    } else {
        match parse_date(&draft.date) {
            Ok(d) => Some(d),
            Err(e) => {
                errs.push(Field::Date, e.to_string());
                None
            }
        }
    };

    let r#type = match draft.r#type.parse::<TransactionType>() {
        Ok(t) => Some(t),
        Err(e) => {
            errs.push(Field::Type, e.to_string());
            None
        }
    };

    let category = draft.category.trim().to_string();
    if category.is_empty() {
        errs.push(Field::Category, "category is required");
    } else {
        match (registry.get(&category), r#type) {
            (None, _) => errs.push(Field::Category, format!("unknown category '{}'", category)),
            (Some(c), Some(t)) if policy.strict_category_types && c.r#type != t => errs.push(
                Field::Category,
                format!("category '{}' only accepts {} transactions", c.name, c.r#type),
            ),
            _ => {}
        }
    }

    let payment_method = if draft.payment_method.trim().is_empty() {
        errs.push(Field::PaymentMethod, "payment method is required");
        None
    } else {
        match draft.payment_method.parse::<PaymentMethod>() {
            Ok(m) => Some(m),
            Err(e) => {
                errs.push(Field::PaymentMethod, e.to_string());
                None
            }
        }
    };

    let note = non_blank(&draft.note);

    match (amount, date, r#type, payment_method) {
        (Some(amount), Some(date), Some(r#type), Some(payment_method)) => errs.finish(|| {
            TransactionFields {
                amount,
                description,
                date,
                r#type,
                category,
                payment_method,
                note,
            }
        }),
        _ => Err(ValidationErrors(errs.0)),
    }
}

pub fn validate_category(draft: &CategoryDraft) -> Result<CategoryFields, ValidationErrors> {
    let mut errs = Collector(Vec::new());

    let name = draft.name.trim().to_string();
    if name.chars().count() < MIN_CATEGORY_NAME_CHARS {
        errs.push(
            Field::Name,
            format!("name must be at least {} characters", MIN_CATEGORY_NAME_CHARS),
        );
    }

    let r#type = match draft.r#type.parse::<TransactionType>() {
        Ok(t) => Some(t),
        Err(e) => {
            errs.push(Field::Type, e.to_string());
            None
        }
    };

    let icon = non_blank(&draft.icon);
    match r#type {
        Some(r#type) => errs.finish(|| CategoryFields { name, r#type, icon }),
        None => Err(ValidationErrors(errs.0)),
    }
}
