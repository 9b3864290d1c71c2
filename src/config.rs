// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("org.louvorzao", "Louvorzao", "louvorzao"));

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub currency_symbol: String,
    /// Shown as-is in the summary; nothing derives it from transactions.
    /// Overrides the figure carried by the data set when set.
    pub pending_payments: Option<Decimal>,
    pub export_dir: Option<PathBuf>,
    pub recent_limit: usize,
    pub strict_category_types: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".into(),
            pending_payments: None,
            export_dir: None,
            recent_limit: 5,
            strict_category_types: false,
            log_filter: "warn".into(),
        }
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join(SETTINGS_FILE))
}

/// Reads settings from `path`, or from the platform config dir when `None`.
/// A missing file means defaults.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => settings_path()?,
    };
    if !path.exists() {
        return Ok(Settings::default());
    }
    let data =
        fs::read_to_string(&path).with_context(|| format!("Read settings at {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&data)
        .with_context(|| format!("Parse settings at {}", path.display()))?;
    Ok(settings)
}

impl Settings {
    pub fn policy(&self) -> crate::validation::Policy {
        crate::validation::Policy {
            strict_category_types: self.strict_category_types,
        }
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
