// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Paginator options and the immutable [`Paginator`] built from them.

use serde::{Deserialize, Serialize};

/// Per-page value that requests every row when unbounded pages are allowed.
pub const DEFAULT_UNBOUNDED_PARAM_VALUE: &str = "all";

/// Tunables for sanitizing pagination requests.
///
/// Values are taken as given. A `max_per_page` of 0 with unbounded pages
/// disabled is accepted and yields empty pages; sane values are the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorOptions {
	/// Page size used when the request omits one or sends something below 1.
	pub default_per_page: i64,

	/// Upper bound on the page size. Not enforced when `allow_unbounded` is set.
	pub max_per_page: i64,

	/// How many page numbers to show around the current page.
	pub window_width: u32,

	/// Query key holding the page number.
	pub page_param: String,

	/// Query key holding the page size.
	pub per_page_param: String,

	/// Allow `per_page=<unbounded_param_value>`, which produces a limit of 0
	/// (no limit). Also lifts the `max_per_page` clamp for explicit sizes.
	pub allow_unbounded: bool,

	/// Per-page value that requests every row. Empty means
	/// [`DEFAULT_UNBOUNDED_PARAM_VALUE`].
	pub unbounded_param_value: String,
}

impl Default for PaginatorOptions {
	fn default() -> Self {
		Self {
			default_per_page: 10,
			max_per_page: 50,
			window_width: 10,
			page_param: "page".to_string(),
			per_page_param: "per_page".to_string(),
			allow_unbounded: false,
			unbounded_param_value: DEFAULT_UNBOUNDED_PARAM_VALUE.to_string(),
		}
	}
}

/// Read-only pagination configuration, shared by reference across requests.
///
/// All request-scoped work happens on [`PageSet`](crate::PageSet) values; the
/// paginator itself is never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paginator {
	opts: PaginatorOptions,
}

impl Paginator {
	pub fn new(mut opts: PaginatorOptions) -> Self {
		if opts.unbounded_param_value.is_empty() {
			opts.unbounded_param_value = DEFAULT_UNBOUNDED_PARAM_VALUE.to_string();
		}
		Self { opts }
	}

	pub fn options(&self) -> &PaginatorOptions {
		&self.opts
	}
}

impl From<PaginatorOptions> for Paginator {
	fn from(opts: PaginatorOptions) -> Self {
		Self::new(opts)
	}
}
