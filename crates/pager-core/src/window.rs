// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Sliding window of page numbers around the current page.

use tracing::debug;

use crate::options::Paginator;
use crate::page::{offset_for, PageSet};

impl Paginator {
	/// Record the total row count and compute the page-number window.
	///
	/// A set whose rows all fit on one page (including unbounded sets) is
	/// reset to the first page with no window. A page past the end is pulled
	/// back to the last page. Near either edge the window is widened so it
	/// keeps roughly `window_width` entries; the first and last page are
	/// pinned when they fall outside it.
	pub fn apply_total(&self, set: &mut PageSet, total: i64) {
		set.total = total;
		set.total_pages = 0;
		set.pinned_first = false;
		set.pinned_last = false;
		set.page_numbers.clear();

		if total <= set.per_page || set.per_page <= 0 {
			set.offset = 0;
			set.page = 1;
			return;
		}

		// Both operands are positive here.
		let total_pages = total / set.per_page + i64::from(total % set.per_page != 0);
		set.total_pages = total_pages;

		let width = i64::from(self.options().window_width);
		let half = width / 2;

		if set.page > total_pages {
			set.page = total_pages;
			set.offset = offset_for(total_pages, set.per_page);
		}

		// Page and total may sit at the edges of i64.
		let page = set.page;
		let mut first = page.saturating_sub(half).max(1);
		let mut last = page.saturating_add(half).min(total_pages);

		if total_pages > width {
			if last < total_pages && page <= half {
				last = first.saturating_add(width - 1);
			}
			if page > total_pages.saturating_sub(half) {
				first = last.saturating_sub(width);
			}
		}

		set.pinned_first = first != 1;
		set.pinned_last = last != total_pages;
		set.page_numbers = (first..=last).collect();

		debug!(
			page,
			total,
			total_pages,
			first,
			last,
			pinned_first = set.pinned_first,
			pinned_last = set.pinned_last,
			"computed page window"
		);
	}
}
