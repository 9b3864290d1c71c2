// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod summary;
pub mod transactions;
pub mod categories;
pub mod reports;
pub mod exporter;
pub mod doctor;

use crate::models::{DateRange, ReportFilter, TypeFilter};
use crate::utils::parse_date;
use anyhow::Result;

/// Builds a [`ReportFilter`] from the shared `--from/--to/--type/--category` args.
pub fn report_filter(sub: &clap::ArgMatches) -> Result<ReportFilter> {
    let from = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let to = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;
    let transaction_type = match sub.get_one::<String>("type") {
        Some(t) => t.parse::<TypeFilter>()?,
        None => TypeFilter::All,
    };
    let categories = sub
        .get_many::<String>("category")
        .map(|ids| ids.map(|s| s.trim().to_string()).collect())
        .unwrap_or_default();
    Ok(ReportFilter {
        date_range: DateRange { from, to },
        categories,
        transaction_type,
    })
}
