// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::sync::Once;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber once. `RUST_LOG` wins over `default_filter`.
/// Output goes to stderr so reports and CSV on stdout stay clean.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

/// Accepts ISO `YYYY-MM-DD` and the pt-BR `dd/mm/yyyy` form.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD or DD/MM/YYYY", s))
}

// 1.234.567,89 or 1234,5 (pt-BR grouping with decimal comma)
static BR_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(\d{1,3}(\.\d{3})+(,\d+)?|\d+,\d+)$").expect("pt-BR amount pattern compiles")
});

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Parses a user-entered amount. Strips an optional `R$` prefix, then reads
/// either pt-BR (`1.234,56`) or plain (`1234.56`) notation.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let raw = s.trim();
    let raw = raw.strip_prefix("R$").unwrap_or(raw).trim();
    if raw.is_empty() {
        return Err(anyhow!("Amount is empty"));
    }
    if BR_AMOUNT.is_match(raw) {
        let normalized = raw.replace('.', "").replace(',', ".");
        return parse_decimal(&normalized).with_context(|| format!("Invalid amount '{}'", s));
    }
    parse_decimal(raw).with_context(|| format!("Invalid amount '{}'", s))
}

/// Two decimals, `.` thousands separator, `,` decimal separator.
pub fn format_decimal_br(d: &Decimal) -> String {
    let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{},{}", sign, grouped, frac_part)
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{} {}", symbol, format_decimal_br(d))
}

/// Whole-number percentage; an undefined ratio renders as `0%`.
pub fn fmt_percent(p: Option<Decimal>) -> String {
    let p = p.unwrap_or(Decimal::ZERO);
    format!(
        "{}%",
        p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Lowercased compatibility decomposition with combining marks dropped, so
/// `Água`, `A\u{301}gua` and `agua` fold to the same key.
pub fn fold_for_collation(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-insensitive, accent-aware ordering. Accents only break ties.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold_for_collation(a)
        .cmp(&fold_for_collation(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
