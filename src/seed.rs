// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Built-in sample data for the Louvorzão event, used when no data file is given.

use crate::models::{Category, PaymentMethod, Transaction, TransactionType};
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

fn category(id: &str, name: &str, t: TransactionType, icon: &str) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        r#type: t,
        icon: Some(icon.into()),
    }
}

pub fn categories() -> Vec<Category> {
    use TransactionType::{Expense, Income};
    vec![
        category("cat1", "Ingressos", Income, "ticket"),
        category("cat2", "Patrocínios", Income, "briefcase"),
        category("cat3", "Doações", Income, "heart"),
        category("cat4", "Merchandise", Income, "shirt"),
        category("cat5", "Alimentação", Expense, "utensils"),
        category("cat6", "Local do Evento", Expense, "building"),
        category("cat7", "Equipamento de Som", Expense, "speaker"),
        category("cat8", "Marketing", Expense, "megaphone"),
        category("cat9", "Bandas", Expense, "music"),
        category("cat10", "Outros", Expense, "more-horizontal"),
    ]
}

fn transaction(
    id: &str,
    amount: i64,
    description: &str,
    day: u32,
    t: TransactionType,
    category: &str,
    method: PaymentMethod,
) -> Transaction {
    let date = NaiveDate::from_ymd_opt(2023, 11, day).unwrap_or_default();
    let stamp = Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN));
    Transaction {
        id: id.into(),
        amount: Decimal::from(amount),
        description: description.into(),
        date,
        r#type: t,
        category: category.into(),
        payment_method: method,
        note: None,
        created_at: stamp,
        updated_at: stamp,
    }
}

pub fn transactions() -> Vec<Transaction> {
    use PaymentMethod::*;
    use TransactionType::{Expense, Income};
    vec![
        transaction("t1", 25000, "Venda de ingressos antecipados", 15, Income, "cat1", Pix),
        transaction("t2", 15000, "Patrocínio - Empresa de Som", 20, Income, "cat2", BankTransfer),
        transaction("t3", 5000, "Doações online", 25, Income, "cat3", Pix),
        transaction("t4", 12000, "Aluguel do local do evento", 1, Expense, "cat6", BankTransfer),
        transaction("t5", 8000, "Equipamento de som", 5, Expense, "cat7", CreditCard),
        transaction("t6", 5000, "Despesas com marketing", 10, Expense, "cat8", CreditCard),
        transaction("t7", 10000, "Cachê das bandas", 27, Expense, "cat9", BankTransfer),
        transaction("t8", 3000, "Venda de mercadorias", 28, Income, "cat4", Cash),
        transaction("t9", 2000, "Alimentação para equipe", 28, Expense, "cat5", DebitCard),
    ]
}

/// Pending payments figure shown on the sample dashboard.
pub const PENDING_PAYMENTS: i64 = 5000;
