// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ExportError;
use crate::models::Transaction;
use crate::registry::CategoryResolver;
use crate::utils::format_decimal_br;
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const HEADERS: [&str; 7] = [
    "Date",
    "Description",
    "Category",
    "Type",
    "Payment Method",
    "Amount",
    "Note",
];

const TMP_SUFFIX: &str = "tmp";

pub fn export_file_name(today: NaiveDate) -> String {
    format!("relatorio-financeiro-{}.csv", today.format("%d-%m-%Y"))
}

/// Encodes rows in the given order. Every field is quoted with embedded quotes
/// doubled; the amount uses a decimal comma, which the quoting keeps intact.
pub fn encode_csv(
    transactions: &[Transaction],
    resolver: &impl CategoryResolver,
) -> Result<String, ExportError> {
    if transactions.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());
    wtr.write_record(HEADERS)?;
    for tx in transactions {
        wtr.write_record([
            tx.date.format("%d/%m/%Y").to_string().as_str(),
            tx.description.as_str(),
            resolver.category_name(&tx.category),
            tx.r#type.label(),
            tx.payment_method.label(),
            format_decimal_br(&tx.amount).as_str(),
            tx.note.as_deref().unwrap_or_default(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|_| ExportError::Utf8)
}

/// Encodes first, then writes through a temp file and renames it into place,
/// so a failure never leaves a partial export behind.
pub fn write_export(
    dir: &Path,
    transactions: &[Transaction],
    resolver: &impl CategoryResolver,
    today: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let body = encode_csv(transactions, resolver)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(today));
    let tmp = path.with_extension(format!("csv.{}", TMP_SUFFIX));

    let written = write_tmp(&tmp, &body).and_then(|_| fs::rename(&tmp, &path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    tracing::info!(path = %path.display(), rows = transactions.len(), "export written");
    Ok(path)
}

fn write_tmp(path: &Path, data: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()
}
