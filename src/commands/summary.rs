// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::FinancialSummary;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, parse_amount, pretty_table};
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    #[serde(flatten)]
    pub summary: FinancialSummary,
    pub income_to_expense_pct: Option<Decimal>,
    pub expense_to_income_pct: Option<Decimal>,
}

pub fn build(ws: &Workspace, sub: &clap::ArgMatches) -> Result<SummaryView> {
    let mut summary = ws.summary();
    if let Some(raw) = sub.get_one::<String>("pending") {
        let pending = parse_amount(raw).context("Invalid --pending")?;
        summary = summary.with_pending(pending);
    }
    Ok(SummaryView {
        summary,
        income_to_expense_pct: summary.income_to_expense_ratio(),
        expense_to_income_pct: summary.expense_to_income_ratio(),
    })
}

pub fn handle(ws: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    let view = build(ws, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view)? {
        return Ok(());
    }
    let ccy = ws.settings.currency_symbol.as_str();
    let s = &view.summary;
    let pending_note = if s.pending_payments > Decimal::ZERO {
        "Atenção".to_string()
    } else {
        String::new()
    };
    let rows = vec![
        vec!["Saldo Atual".into(), fmt_money(&s.balance, ccy), String::new()],
        vec![
            "Receitas".into(),
            fmt_money(&s.total_income, ccy),
            format!("+{}", fmt_percent(view.income_to_expense_pct)),
        ],
        vec![
            "Despesas".into(),
            fmt_money(&s.total_expense, ccy),
            fmt_percent(view.expense_to_income_pct),
        ],
        vec![
            "Pagamentos Pendentes".into(),
            fmt_money(&s.pending_payments, ccy),
            pending_note,
        ],
    ];
    println!("{}", pretty_table(&["", "Valor", ""], rows));
    Ok(())
}
