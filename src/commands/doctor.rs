// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use crate::workspace::{Issue, Workspace};
use anyhow::Result;

pub fn handle(ws: &Workspace) -> Result<()> {
    let mut rows = Vec::new();

    for issue in ws.consistency_issues() {
        match issue {
            // 1) Transactions whose category was deleted or never existed
            Issue::UnknownCategory {
                transaction_id,
                category_id,
            } => rows.push(vec![
                "unknown_category".into(),
                format!("{} -> {}", transaction_id, category_id),
            ]),
            // 2) Income booked under an expense category, or the reverse
            Issue::TypeMismatch {
                transaction_id,
                category_id,
                transaction_type,
                category_type,
            } => rows.push(vec![
                "type_mismatch".into(),
                format!(
                    "{} is {} but {} is {}",
                    transaction_id, transaction_type, category_id, category_type
                ),
            ]),
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
