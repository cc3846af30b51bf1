// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Pagination primitives for listing endpoints.
//!
//! Turns untrusted `page` / `per_page` query values into a safe offset/limit
//! pair and, once the caller knows the total row count, picks a sliding
//! window of page numbers to link to.
//!
//! ```
//! use pager_core::{Paginator, QueryParams};
//!
//! let paginator = Paginator::default();
//! let query = QueryParams::parse("page=3&per_page=20");
//!
//! let mut set = paginator.build_from_query(&query);
//! assert_eq!((set.offset, set.limit), (40, 20));
//!
//! // ... run the query with offset/limit, count the rows ...
//! paginator.apply_total(&mut set, 240);
//! assert_eq!(set.total_pages, 12);
//!
//! let html = paginator.render(&set, "/things", &QueryParams::new());
//! assert!(html.contains(r#"class="pg-page pg-page-selected""#));
//! ```
//!
//! Nothing here can fail: every malformed input is clamped to a usable value.

pub mod options;
pub mod page;
pub mod query;
pub mod render;
pub mod window;

pub use options::{Paginator, PaginatorOptions, DEFAULT_UNBOUNDED_PARAM_VALUE};
pub use page::{parse_int, PageSet, UNBOUNDED_REQUEST};
pub use query::QueryParams;
