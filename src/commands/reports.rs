// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregation::{
    CategorySlice, category_breakdown, comparison_series, daily_series, series_totals,
};
use crate::commands::report_filter;
use crate::filters::apply_report_filter;
use crate::models::{Transaction, TransactionType, TypeFilter};
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use crate::workspace::Workspace;
use anyhow::Result;
use serde::Serialize;

pub fn handle(ws: &Workspace, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => by_category(ws, sub)?,
        Some(("comparison", sub)) => comparison(ws, sub)?,
        Some(("chart", sub)) => chart(ws, sub)?,
        _ => {}
    }
    Ok(())
}

fn filtered(ws: &Workspace, sub: &clap::ArgMatches) -> Result<(Vec<Transaction>, TypeFilter)> {
    let filter = report_filter(sub)?;
    Ok((
        apply_report_filter(ws.transactions(), &filter),
        filter.transaction_type,
    ))
}

#[derive(Serialize)]
pub struct Breakdown {
    pub r#type: TransactionType,
    pub slices: Vec<CategorySlice>,
}

/// One breakdown per type the filter lets through.
pub fn breakdowns(ws: &Workspace, sub: &clap::ArgMatches) -> Result<Vec<Breakdown>> {
    let (txs, type_filter) = filtered(ws, sub)?;
    Ok([TransactionType::Income, TransactionType::Expense]
        .into_iter()
        .filter(|t| type_filter.matches(*t))
        .map(|t| Breakdown {
            r#type: t,
            slices: category_breakdown(&txs, t, ws.registry()),
        })
        .collect())
}

fn by_category(ws: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    let data = breakdowns(ws, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let ccy = ws.settings.currency_symbol.as_str();
    for b in data {
        let rows = b
            .slices
            .iter()
            .map(|s| {
                vec![
                    s.category_name.clone(),
                    fmt_money(&s.total, ccy),
                    fmt_percent(s.share),
                ]
            })
            .collect();
        println!("{}", b.r#type.label());
        println!("{}", pretty_table(&["Categoria", "Total", "%"], rows));
    }
    Ok(())
}

fn comparison(ws: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    let (txs, _) = filtered(ws, sub)?;
    let data = comparison_series(&txs, ws.registry());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let ccy = ws.settings.currency_symbol.as_str();
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.category_name.clone(),
                    fmt_money(&r.income_total, ccy),
                    fmt_money(&r.expense_total, ccy),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Categoria", "Receita", "Despesa"], rows)
        );
    }
    Ok(())
}

fn chart(ws: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    let (txs, _) = filtered(ws, sub)?;
    let data = daily_series(&txs);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let ccy = ws.settings.currency_symbol.as_str();
        let totals = series_totals(&data);
        let mut rows: Vec<Vec<String>> = data
            .iter()
            .map(|p| {
                vec![
                    p.date.clone(),
                    fmt_money(&p.income, ccy),
                    fmt_money(&p.expense, ccy),
                ]
            })
            .collect();
        rows.push(vec![
            "Total".into(),
            fmt_money(&totals.income, ccy),
            fmt_money(&totals.expense, ccy),
        ]);
        println!("{}", pretty_table(&["Dia", "Receita", "Despesa"], rows));
    }
    Ok(())
}
