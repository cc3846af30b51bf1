// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTML anchors for a computed page window.

use crate::options::Paginator;
use crate::page::PageSet;
use crate::query::QueryParams;

impl Paginator {
	/// Render page links for `set` as concatenated `<a>` / `<span>` fragments.
	///
	/// Every link points at `url` with `extra` as its query string and the
	/// page parameter set to the linked page. `extra` is left untouched.
	/// Nothing is rendered for a set without a window.
	pub fn render(&self, set: &PageSet, url: &str, extra: &QueryParams) -> String {
		let page_param = self.options().page_param.as_str();
		let mut query = extra.clone();
		let mut href = |page: i64| {
			query.set(page_param, page.to_string());
			format!("{url}?{}", query.encode())
		};

		let mut out = String::new();
		if set.pinned_first {
			out.push_str(&format!(
				r#"<a class="pg-page-first" href="{}">1</a> <span class="pg-page-ellipsis-first">...</span> "#,
				href(1)
			));
		}

		for &page in &set.page_numbers {
			let class = if page == set.page {
				"pg-page pg-page-selected"
			} else {
				"pg-page"
			};
			out.push_str(&format!(r#"<a class="{class}" href="{}">{page}</a> "#, href(page)));
		}

		if set.pinned_last {
			out.push_str(&format!(
				r#"<span class="pg-page-ellipsis-last">...</span> <a class="pg-page-last" href="{}">{}</a> "#,
				href(set.total_pages),
				set.total_pages
			));
		}

		out
	}

	/// Render using the parameters stored on the set with
	/// [`PageSet::set_params`].
	pub fn render_with_params(&self, set: &PageSet, url: &str) -> String {
		self.render(set, url, &set.params)
	}
}
