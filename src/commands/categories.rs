// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, TransactionType};
use crate::utils::{maybe_print_json, pretty_table};
use crate::validation::CategoryDraft;
use crate::workspace::Workspace;
use anyhow::Result;

pub fn handle(ws: &mut Workspace, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let data = list(ws, sub)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data
                    .into_iter()
                    .map(|c| {
                        vec![
                            c.id,
                            c.name,
                            c.r#type.label().to_string(),
                            c.icon.unwrap_or_default(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["ID", "Nome", "Tipo", "Ícone"], rows));
            }
        }
        Some(("add", sub)) => {
            let draft = CategoryDraft {
                name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
                r#type: sub.get_one::<String>("type").cloned().unwrap_or_default(),
                icon: sub.get_one::<String>("icon").cloned(),
            };
            let c = ws.add_category(&draft)?;
            println!(
                "Added category '{}' ({}) as {}; session only, nothing was saved",
                c.name,
                c.r#type.label(),
                c.id
            );
        }
        _ => {}
    }
    Ok(())
}

pub fn list(ws: &Workspace, sub: &clap::ArgMatches) -> Result<Vec<Category>> {
    let wanted = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionType>())
        .transpose()?;
    Ok(match wanted {
        Some(t) => ws.registry().of_type(t).cloned().collect(),
        None => ws.registry().all().to_vec(),
    })
}
