// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    ]
}

/// Report filter: inclusive date range, type, and any number of categories.
fn filter_args() -> [Arg; 4] {
    [
        Arg::new("from")
            .long("from")
            .value_name("DATE")
            .help("First day included (YYYY-MM-DD or DD/MM/YYYY)"),
        Arg::new("to")
            .long("to")
            .value_name("DATE")
            .help("Last day included (YYYY-MM-DD or DD/MM/YYYY)"),
        Arg::new("type")
            .long("type")
            .value_parser(["income", "expense", "all"])
            .default_value("all"),
        Arg::new("category")
            .long("category")
            .value_name("ID")
            .action(ArgAction::Append)
            .help("Restrict to this category id (repeatable)"),
    ]
}

fn draft_args() -> [Arg; 7] {
    [
        Arg::new("amount").long("amount").required(true),
        Arg::new("description").long("description").required(true),
        Arg::new("date").long("date").required(true),
        Arg::new("type")
            .long("type")
            .value_parser(["income", "expense"])
            .required(true),
        Arg::new("category").long("category").value_name("ID").required(true),
        Arg::new("method")
            .long("method")
            .value_parser([
                "cash",
                "credit_card",
                "debit_card",
                "pix",
                "bank_transfer",
                "other",
            ])
            .required(true),
        Arg::new("note").long("note"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("louvorzao")
        .about("Louvorzão event cash flow: summaries, category reports, CSV export")
        .version(clap::crate_version!())
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Settings file (defaults to the platform config dir)"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .value_name("PATH")
                .global(true)
                .help("JSON data set to load instead of the built-in sample"),
        )
        .subcommand(
            Command::new("summary")
                .about("Balance, totals and pending payments")
                .arg(
                    Arg::new("pending")
                        .long("pending")
                        .value_name("AMOUNT")
                        .help("Pending payments figure to show"),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("list")
                        .args(filter_args())
                        .arg(Arg::new("search").long("search").short('s').default_value(""))
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_parser([
                                    "date",
                                    "amount",
                                    "description",
                                    "created_at",
                                    "updated_at",
                                ])
                                .default_value("date"),
                        )
                        .arg(
                            Arg::new("order")
                                .long("order")
                                .value_parser(["asc", "desc"])
                                .default_value("desc"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("recent")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("add")
                        .about("Validate and add a transaction to this session")
                        .args(draft_args()),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Categories")
                .subcommand(
                    Command::new("list")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"]),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("add")
                        .about("Validate and add a category to this session")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"])
                                .required(true),
                        )
                        .arg(Arg::new("icon").long("icon")),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views")
                .subcommand(
                    Command::new("by-category")
                        .about("Totals per category with share of the type total")
                        .args(filter_args())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("comparison")
                        .about("Income against expense per category")
                        .args(filter_args())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("chart")
                        .about("Daily income and expense series")
                        .args(filter_args())
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export transactions")
                .subcommand(
                    Command::new("csv")
                        .args(filter_args())
                        .arg(
                            Arg::new("out_dir")
                                .long("out-dir")
                                .value_name("DIR")
                                .help("Directory for the export file"),
                        ),
                ),
        )
        .subcommand(Command::new("doctor").about("Check transactions against categories"))
}
