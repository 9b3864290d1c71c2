// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::report_filter;
use crate::filters::{ListQuery, SortState, apply_report_filter, recent};
use crate::models::{SortField, SortOrder, Transaction};
use crate::registry::CategoryRegistry;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::validation::TransactionDraft;
use crate::workspace::Workspace;
use anyhow::Result;
use serde::Serialize;

pub fn handle(ws: &mut Workspace, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(ws, sub)?,
        Some(("recent", sub)) => recent_list(ws, sub)?,
        Some(("add", sub)) => add(ws, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub r#type: String,
    pub payment_method: String,
    pub amount: String,
    pub note: String,
}

fn to_row(tx: &Transaction, registry: &CategoryRegistry, ccy: &str) -> TransactionRow {
    TransactionRow {
        id: tx.id.clone(),
        date: tx.date.format("%d/%m/%Y").to_string(),
        description: tx.description.clone(),
        category: registry.name_of(&tx.category).to_string(),
        r#type: tx.r#type.label().to_string(),
        payment_method: tx.payment_method.label().to_string(),
        amount: fmt_money(&tx.amount, ccy),
        note: tx.note.clone().unwrap_or_default(),
    }
}

fn print_rows(rows: &[TransactionRow]) {
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.description.clone(),
                r.category.clone(),
                r.r#type.clone(),
                r.payment_method.clone(),
                r.amount.clone(),
                r.note.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Data", "Descrição", "Categoria", "Tipo", "Pagamento", "Valor", "Nota"],
            data,
        )
    );
}

/// Report filter first, then the list's search and sort, then the limit.
pub fn query(ws: &Workspace, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let filter = report_filter(sub)?;
    let narrowed = apply_report_filter(ws.transactions(), &filter);
    let field = match sub.get_one::<String>("sort") {
        Some(s) => s.parse::<SortField>()?,
        None => SortField::default(),
    };
    let order = match sub.get_one::<String>("order") {
        Some(s) => s.parse::<SortOrder>()?,
        None => SortOrder::default(),
    };
    let list = ListQuery {
        search: sub.get_one::<String>("search").cloned().unwrap_or_default(),
        sort: SortState { field, order },
        ..ListQuery::default()
    };
    let mut out = list.apply(&narrowed, ws.registry());
    if let Some(limit) = sub.get_one::<usize>("limit") {
        out.truncate(*limit);
    }
    Ok(out)
}

pub fn query_rows(ws: &Workspace, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let ccy = ws.settings.currency_symbol.as_str();
    Ok(query(ws, sub)?
        .iter()
        .map(|tx| to_row(tx, ws.registry(), ccy))
        .collect())
}

fn list(ws: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(ws, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        print_rows(&data);
    }
    Ok(())
}

fn recent_list(ws: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(ws.settings.recent_limit);
    let ccy = ws.settings.currency_symbol.as_str();
    let data: Vec<TransactionRow> = recent(ws.transactions(), limit)
        .iter()
        .map(|tx| to_row(tx, ws.registry(), ccy))
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        print_rows(&data);
    }
    Ok(())
}

pub fn draft_from(sub: &clap::ArgMatches) -> TransactionDraft {
    let text = |name: &str| sub.get_one::<String>(name).cloned().unwrap_or_default();
    TransactionDraft {
        amount: text("amount"),
        description: text("description"),
        date: text("date"),
        r#type: text("type"),
        category: text("category"),
        payment_method: text("method"),
        note: sub.get_one::<String>("note").cloned(),
    }
}

fn add(ws: &mut Workspace, sub: &clap::ArgMatches) -> Result<()> {
    let tx = ws.add_transaction(&draft_from(sub))?;
    let ccy = ws.settings.currency_symbol.clone();
    println!(
        "Recorded {} {} on {} ('{}'); session only, nothing was saved",
        tx.r#type.label(),
        fmt_money(&tx.amount, &ccy),
        tx.date.format("%d/%m/%Y"),
        tx.description
    );
    let s = ws.summary();
    println!(
        "Balance now {} ({} transactions)",
        fmt_money(&s.balance, &ccy),
        ws.store().len()
    );
    Ok(())
}
