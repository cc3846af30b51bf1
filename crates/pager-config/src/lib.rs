// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration loading for the paginator.
//!
//! Options are layered from built-in defaults, an optional TOML file and
//! `PAGER_*` environment variables, then turned into a ready
//! [`Paginator`].
//!
//! ```ignore
//! use pager_config::load_config;
//!
//! let paginator = load_config()?;
//! let set = paginator.build(1, 20);
//! ```

pub mod error;
pub mod layer;
pub mod sources;

pub use error::ConfigError;
pub use layer::PaginatorConfigLayer;
pub use sources::{
	load_from_lookup, ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource,
	SYSTEM_CONFIG_PATH,
};

use std::path::PathBuf;

use pager_core::Paginator;
use tracing::{debug, info};

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`PAGER_*`)
/// 2. Config file (`/etc/pager/pager.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<Paginator, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<Paginator, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_sources(sources)
}

/// Load configuration from environment only.
pub fn load_config_from_env() -> Result<Paginator, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(DefaultsSource), Box::new(EnvSource)];
	load_sources(sources)
}

/// Merge the given sources in precedence order and build the paginator.
pub fn load_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<Paginator, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = PaginatorConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	let options = merged.finalize();
	info!(
		default_per_page = options.default_per_page,
		max_per_page = options.max_per_page,
		window_width = options.window_width,
		page_param = %options.page_param,
		per_page_param = %options.per_page_param,
		allow_unbounded = options.allow_unbounded,
		"Paginator configuration loaded"
	);

	Ok(Paginator::new(options))
}
