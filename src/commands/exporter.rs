// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::report_filter;
use crate::error::ExportError;
use crate::export::write_export;
use crate::filters::apply_report_filter;
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    NothingToExport,
}

pub fn handle(ws: &Workspace, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => {
            match export_csv(ws, sub, Local::now().date_naive())? {
                ExportOutcome::Written(path) => {
                    println!("Exported transactions to {}", path.display())
                }
                ExportOutcome::NothingToExport => {
                    eprintln!("Nothing to export: no transactions match the filters")
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Writes the filtered selection in store order.
pub fn export_csv(ws: &Workspace, sub: &clap::ArgMatches, today: NaiveDate) -> Result<ExportOutcome> {
    let filter = report_filter(sub)?;
    let rows = apply_report_filter(ws.transactions(), &filter);
    let dir = sub
        .get_one::<String>("out_dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| ws.settings.export_dir());

    match write_export(&dir, &rows, ws.registry(), today) {
        Ok(path) => Ok(ExportOutcome::Written(path)),
        Err(ExportError::NothingToExport) => Ok(ExportOutcome::NothingToExport),
        Err(e) => Err(e).with_context(|| format!("Export to {}", dir.display())),
    }
}
