// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request sanitization: page / per-page values to offset and limit.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::options::Paginator;
use crate::query::QueryParams;

/// Internal per-page value meaning "every row was requested".
pub const UNBOUNDED_REQUEST: i64 = -1;

/// Pagination values for a single request.
///
/// Created by [`Paginator::build`], completed by
/// [`Paginator::apply_total`] once the row count is known. Only `page`,
/// `per_page`, `total_pages`, `total` and `params` are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSet {
	pub page: i64,
	/// Rows per page; 0 means unbounded.
	pub per_page: i64,
	pub total_pages: i64,
	pub total: i64,
	#[serde(default, skip_serializing_if = "QueryParams::is_empty")]
	pub params: QueryParams,

	#[serde(skip)]
	pub offset: i64,
	#[serde(skip)]
	pub limit: i64,

	#[serde(skip)]
	pub pinned_first: bool,
	#[serde(skip)]
	pub pinned_last: bool,
	#[serde(skip)]
	pub page_numbers: Vec<i64>,
}

impl PageSet {
	/// Attach extra query parameters to carry along with the set.
	pub fn set_params(&mut self, params: QueryParams) {
		self.params = params;
	}

	/// Whether a page-number window was generated.
	pub fn has_pages(&self) -> bool {
		!self.page_numbers.is_empty()
	}

	pub fn is_unbounded(&self) -> bool {
		self.per_page == 0
	}
}

impl Paginator {
	/// Sanitize a raw page / per-page pair. Never fails; out-of-range values
	/// are clamped.
	pub fn build(&self, page: i64, per_page: i64) -> PageSet {
		let opts = self.options();
		let requested = per_page;

		let per_page = if per_page < 0 && opts.allow_unbounded {
			0
		} else if per_page < 1 {
			opts.default_per_page
		} else if !opts.allow_unbounded && per_page > opts.max_per_page {
			opts.max_per_page
		} else {
			per_page
		};
		if per_page != requested {
			trace!(requested, per_page, "per_page sanitized");
		}

		let page = if page < 1 {
			trace!(requested = page, "page below 1, using first page");
			1
		} else {
			page
		};

		PageSet {
			page,
			per_page,
			offset: offset_for(page, per_page),
			limit: per_page,
			..Default::default()
		}
	}

	/// Sanitize the page / per-page values found in query parameters.
	///
	/// Missing or non-numeric values count as 0 and fall back to defaults. A
	/// per-page value equal to the configured unbounded marker requests every
	/// row.
	pub fn build_from_query(&self, params: &QueryParams) -> PageSet {
		let opts = self.options();
		let raw_per_page = params.get(&opts.per_page_param).unwrap_or_default();
		let page = parse_int(params.get(&opts.page_param).unwrap_or_default());

		let per_page = if raw_per_page == opts.unbounded_param_value {
			UNBOUNDED_REQUEST
		} else {
			parse_int(raw_per_page)
		};

		self.build(page, per_page)
	}
}

/// Parse a decimal integer leniently.
///
/// Unparsable input yields 0; out-of-range numbers saturate.
pub fn parse_int(raw: &str) -> i64 {
	match raw.parse::<i64>() {
		Ok(n) => n,
		Err(e) => match e.kind() {
			IntErrorKind::PosOverflow => i64::MAX,
			IntErrorKind::NegOverflow => i64::MIN,
			_ => 0,
		},
	}
}

pub(crate) fn offset_for(page: i64, per_page: i64) -> i64 {
	page.saturating_sub(1).saturating_mul(per_page)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::PaginatorOptions;
	use proptest::prelude::*;

	fn unbounded() -> Paginator {
		Paginator::new(PaginatorOptions {
			allow_unbounded: true,
			..Default::default()
		})
	}

	#[test]
	fn test_build_clamps_page() {
		let p = Paginator::default();
		for page in [0, -1, i64::MIN] {
			let set = p.build(page, 5);
			assert_eq!(set.page, 1);
			assert_eq!(set.per_page, 5);
			assert_eq!(set.offset, 0);
			assert_eq!(set.limit, 5);
		}
	}

	#[test]
	fn test_build_offset_limit() {
		let set = Paginator::default().build(10, 5);
		assert_eq!(set.page, 10);
		assert_eq!(set.offset, 45);
		assert_eq!(set.limit, 5);
		assert_eq!(set.total, 0);
		assert_eq!(set.total_pages, 0);
		assert!(!set.has_pages());
	}

	#[test]
	fn test_build_per_page_defaults_and_max() {
		let p = Paginator::default();
		assert_eq!(p.build(1, 0).per_page, 10);
		assert_eq!(p.build(1, -1).per_page, 10);
		assert_eq!(p.build(1, 500).per_page, 50);
		assert_eq!(p.build(1, 50).per_page, 50);
	}

	#[test]
	fn test_build_unbounded_allowed() {
		let p = unbounded();
		let set = p.build(1, UNBOUNDED_REQUEST);
		assert_eq!(set.per_page, 0);
		assert_eq!(set.limit, 0);
		assert!(set.is_unbounded());

		// max_per_page is not enforced at all once unbounded pages are allowed.
		assert_eq!(p.build(1, 500).per_page, 500);
		// Zero is still "unset", not "unbounded".
		assert_eq!(p.build(1, 0).per_page, 10);
	}

	#[test]
	fn test_build_saturates_offset() {
		let set = Paginator::default().build(i64::MAX, 50);
		assert_eq!(set.page, i64::MAX);
		assert_eq!(set.offset, i64::MAX);
	}

	#[test]
	fn test_zero_max_per_page_propagates() {
		let p = Paginator::new(PaginatorOptions {
			max_per_page: 0,
			..Default::default()
		});
		let set = p.build(3, 20);
		assert_eq!(set.per_page, 0);
		assert_eq!(set.offset, 0);
	}

	#[test]
	fn test_build_from_query() {
		let p = Paginator::default();
		let set = p.build_from_query(&QueryParams::parse("page=3&per_page=20"));
		assert_eq!(set.page, 3);
		assert_eq!(set.per_page, 20);
		assert_eq!(set.offset, 40);

		let set = p.build_from_query(&QueryParams::parse("page=1&per_page=500"));
		assert_eq!(set.page, 1);
		assert_eq!(set.per_page, 50);
	}

	#[test]
	fn test_build_from_query_garbage_is_default() {
		let p = Paginator::default();
		for query in ["", "page=abc&per_page=xyz", "page=&per_page=", "page=1.5&per_page=2e3"] {
			let set = p.build_from_query(&QueryParams::parse(query));
			assert_eq!(set.page, 1, "query {query:?}");
			assert_eq!(set.per_page, 10, "query {query:?}");
		}
	}

	#[test]
	fn test_build_from_query_unbounded() {
		let query = QueryParams::parse("page=1&per_page=all");

		let set = unbounded().build_from_query(&query);
		assert_eq!(set.page, 1);
		assert_eq!(set.per_page, 0);

		// Not allowed: the marker is just an unset per-page.
		let set = Paginator::default().build_from_query(&query);
		assert_eq!(set.per_page, 10);

		let set = unbounded().build_from_query(&QueryParams::parse("per_page=500"));
		assert_eq!(set.per_page, 500);
	}

	#[test]
	fn test_build_from_query_custom_names() {
		let p = Paginator::new(PaginatorOptions {
			page_param: "p".to_string(),
			per_page_param: "size".to_string(),
			allow_unbounded: true,
			unbounded_param_value: "*".to_string(),
			..Default::default()
		});
		let set = p.build_from_query(&QueryParams::parse("p=4&size=25&page=9"));
		assert_eq!(set.page, 4);
		assert_eq!(set.per_page, 25);

		let set = p.build_from_query(&QueryParams::parse("p=4&size=*"));
		assert_eq!(set.per_page, 0);
		assert_eq!(set.offset, 0);
	}

	#[test]
	fn test_parse_int() {
		assert_eq!(parse_int("42"), 42);
		assert_eq!(parse_int("+7"), 7);
		assert_eq!(parse_int("-3"), -3);
		assert_eq!(parse_int(""), 0);
		assert_eq!(parse_int(" 5"), 0);
		assert_eq!(parse_int("all"), 0);
		assert_eq!(parse_int("99999999999999999999"), i64::MAX);
		assert_eq!(parse_int("-99999999999999999999"), i64::MIN);
	}

	#[test]
	fn test_serialized_fields() {
		let mut set = Paginator::default().build(2, 5);
		let json = serde_json::to_value(&set).unwrap();
		assert_eq!(
			json,
			serde_json::json!({"page": 2, "per_page": 5, "total_pages": 0, "total": 0})
		);

		set.set_params(QueryParams::parse("q=rust"));
		let json = serde_json::to_value(&set).unwrap();
		assert_eq!(json["params"], serde_json::json!({"q": ["rust"]}));
	}

	proptest! {
		/// In-range requests map straight to offset and limit.
		#[test]
		fn in_range_offset_limit(page in 1i64..100_000, per_page in 1i64..=50) {
			let set = Paginator::default().build(page, per_page);
			prop_assert_eq!(set.page, page);
			prop_assert_eq!(set.per_page, per_page);
			prop_assert_eq!(set.offset, (page - 1) * per_page);
			prop_assert_eq!(set.limit, per_page);
		}

		#[test]
		fn non_positive_page_is_first(page in i64::MIN..=0, per_page in any::<i64>()) {
			prop_assert_eq!(Paginator::default().build(page, per_page).page, 1);
		}

		#[test]
		fn non_positive_per_page_is_default(per_page in i64::MIN..=0) {
			prop_assert_eq!(Paginator::default().build(1, per_page).per_page, 10);
		}

		#[test]
		fn oversized_per_page_is_max(per_page in 51i64..) {
			prop_assert_eq!(Paginator::default().build(1, per_page).per_page, 50);
		}

		#[test]
		fn unbounded_never_clamps_to_max(per_page in 1i64..) {
			prop_assert_eq!(unbounded().build(1, per_page).per_page, per_page);
		}

		/// Arbitrary query text never panics and always yields a usable set.
		#[test]
		fn arbitrary_query_is_sanitized(page in ".*", per_page in ".*") {
			let mut query = QueryParams::new();
			query.set("page", page);
			query.set("per_page", per_page);
			let set = Paginator::default().build_from_query(&query);
			prop_assert!(set.page >= 1);
			prop_assert!((1..=50).contains(&set.per_page));
			prop_assert!(set.offset >= 0);
		}
	}
}
