// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use louvorzao::{cli, commands, config, utils, workspace::Workspace};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let settings = config::load(config_path.as_deref())?;
    utils::init_tracing(&settings.log_filter);

    let data_path = matches.get_one::<String>("data").map(PathBuf::from);
    let mut ws = Workspace::open(data_path.as_deref(), settings)?;

    match matches.subcommand() {
        Some(("summary", sub)) => commands::summary::handle(&ws, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut ws, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut ws, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ws, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ws, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&ws)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
