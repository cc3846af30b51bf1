// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial paginator configuration merged across sources.

use pager_core::PaginatorOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginatorConfigLayer {
	pub default_per_page: Option<i64>,
	pub max_per_page: Option<i64>,
	pub window_width: Option<u32>,
	pub page_param: Option<String>,
	pub per_page_param: Option<String>,
	pub allow_unbounded: Option<bool>,
	pub unbounded_param_value: Option<String>,
}

impl PaginatorConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_per_page.is_some() {
			self.default_per_page = other.default_per_page;
		}
		if other.max_per_page.is_some() {
			self.max_per_page = other.max_per_page;
		}
		if other.window_width.is_some() {
			self.window_width = other.window_width;
		}
		if other.page_param.is_some() {
			self.page_param = other.page_param;
		}
		if other.per_page_param.is_some() {
			self.per_page_param = other.per_page_param;
		}
		if other.allow_unbounded.is_some() {
			self.allow_unbounded = other.allow_unbounded;
		}
		if other.unbounded_param_value.is_some() {
			self.unbounded_param_value = other.unbounded_param_value;
		}
	}

	pub fn finalize(self) -> PaginatorOptions {
		let defaults = PaginatorOptions::default();
		PaginatorOptions {
			default_per_page: self.default_per_page.unwrap_or(defaults.default_per_page),
			max_per_page: self.max_per_page.unwrap_or(defaults.max_per_page),
			window_width: self.window_width.unwrap_or(defaults.window_width),
			page_param: self.page_param.unwrap_or(defaults.page_param),
			per_page_param: self.per_page_param.unwrap_or(defaults.per_page_param),
			allow_unbounded: self.allow_unbounded.unwrap_or(defaults.allow_unbounded),
			unbounded_param_value: self
				.unbounded_param_value
				.unwrap_or(defaults.unbounded_param_value),
		}
	}
}
