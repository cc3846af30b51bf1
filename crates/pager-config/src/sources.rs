// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, a TOML file, and environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::PaginatorConfigLayer;

/// Default location of the config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/pager/pager.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<PaginatorConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<PaginatorConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(PaginatorConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is skipped.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<PaginatorConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(PaginatorConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: PaginatorConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `PAGER_<FIELD>`, e.g. `PAGER_MAX_PER_PAGE`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<PaginatorConfigLayer, ConfigError> {
		debug!("loading environment variables");
		load_from_lookup(|name| std::env::var(name).ok())
	}
}

/// Build a layer from an arbitrary variable lookup. Empty values count as unset.
pub fn load_from_lookup<F>(lookup: F) -> Result<PaginatorConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

	Ok(PaginatorConfigLayer {
		default_per_page: parse_var(&var, "PAGER_DEFAULT_PER_PAGE")?,
		max_per_page: parse_var(&var, "PAGER_MAX_PER_PAGE")?,
		window_width: parse_var(&var, "PAGER_WINDOW_WIDTH")?,
		page_param: var("PAGER_PAGE_PARAM"),
		per_page_param: var("PAGER_PER_PAGE_PARAM"),
		allow_unbounded: var("PAGER_ALLOW_UNBOUNDED")
			.map(|v| v.eq_ignore_ascii_case("true") || v == "1"),
		unbounded_param_value: var("PAGER_UNBOUNDED_PARAM_VALUE"),
	})
}

fn parse_var<T, F>(var: &F, name: &str) -> Result<Option<T>, ConfigError>
where
	T: FromStr,
	T::Err: std::fmt::Display,
	F: Fn(&str) -> Option<String>,
{
	match var(name) {
		Some(v) => v
			.trim()
			.parse()
			.map(Some)
			.map_err(|e: T::Err| ConfigError::invalid_value(name, e.to_string())),
		None => Ok(None),
	}
}
