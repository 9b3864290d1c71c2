// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod filters;
pub mod models;
pub mod registry;
pub mod seed;
pub mod store;
pub mod utils;
pub mod validation;
pub mod workspace;
