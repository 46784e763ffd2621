// envinject: Stage-aware .env injection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |             show / resolve
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  HostConfig, custom.dotenv|
//!              '-------------+-------------'
//!                            v
//!                         inject
//!                  EnvInjector + LogSink
//!                            |
//!                            v
//!                         dotenv
//!        stage / paths / parser / filter / vars
//!
//!   +-----------------------------------------+
//!   |  foundation        error, logging       |
//!   +-----------------------------------------+
//! ```
//!
//! # Embedding
//!
//! ```no_run
//! use std::collections::BTreeMap;
//! use envinject::config::settings::PluginSettings;
//! use envinject::dotenv::environment;
//! use envinject::inject::{EnvInjector, sink::TracingSink};
//!
//! let settings = PluginSettings::builder()
//!     .include(vec!["API_URL".to_string()])
//!     .build();
//! let mut environment_map: BTreeMap<String, String> = BTreeMap::new();
//! let stage = environment::resolve(Some("staging"));
//! EnvInjector::new(settings, TracingSink).run(&stage, &mut environment_map);
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod dotenv;
pub mod error;
pub mod inject;
pub mod logging;
