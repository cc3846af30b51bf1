// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `pager` - evaluate one pagination request from the command line.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use pager_core::{PageSet, Paginator, QueryParams};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Compute offset/limit and page links for a listing request.
#[derive(Parser, Debug)]
#[command(name = "pager", about = "Compute pagination values and page links", version)]
struct Args {
	/// Config file (TOML). Defaults to /etc/pager/pager.toml when present.
	#[arg(long, env = "PAGER_CONFIG")]
	config: Option<PathBuf>,

	/// Raw query string, e.g. "page=2&per_page=20&q=rust"
	#[arg(long, default_value = "")]
	query: String,

	/// Page number, overriding the one in --query
	#[arg(long, allow_hyphen_values = true)]
	page: Option<String>,

	/// Page size or the unbounded marker, overriding the one in --query
	#[arg(long, allow_hyphen_values = true)]
	per_page: Option<String>,

	/// Total row count; enables the page-number window
	#[arg(long, allow_hyphen_values = true)]
	total: Option<i64>,

	/// Link target for rendered pages
	#[arg(long, default_value = "/")]
	url: String,

	/// Extra query parameter carried on every link (repeatable)
	#[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
	params: Vec<(String, String)>,

	#[arg(long, value_enum, default_value_t = Format::Json)]
	format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
	Json,
	Html,
	Both,
}

#[derive(Serialize)]
struct Report<'a> {
	pagination: &'a PageSet,
	offset: i64,
	limit: i64,
	page_numbers: &'a [i64],
	pinned_first: bool,
	pinned_last: bool,
}

impl<'a> From<&'a PageSet> for Report<'a> {
	fn from(set: &'a PageSet) -> Self {
		Self {
			pagination: set,
			offset: set.offset,
			limit: set.limit,
			page_numbers: &set.page_numbers,
			pinned_first: set.pinned_first,
			pinned_last: set.pinned_last,
		}
	}
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
	raw
		.split_once('=')
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.filter(|(k, _)| !k.is_empty())
		.ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))
}

fn evaluate(paginator: &Paginator, args: &Args) -> PageSet {
	let opts = paginator.options();
	let mut query = QueryParams::parse(&args.query);
	if let Some(page) = &args.page {
		query.set(opts.page_param.clone(), page.clone());
	}
	if let Some(per_page) = &args.per_page {
		query.set(opts.per_page_param.clone(), per_page.clone());
	}

	let mut set = paginator.build_from_query(&query);
	if !args.params.is_empty() {
		set.set_params(args.params.iter().cloned().collect());
	}
	if let Some(total) = args.total {
		paginator.apply_total(&mut set, total);
	}

	tracing::debug!(
		page = set.page,
		per_page = set.per_page,
		offset = set.offset,
		limit = set.limit,
		total_pages = set.total_pages,
		"evaluated request"
	);
	set
}

fn render_output(paginator: &Paginator, set: &PageSet, args: &Args) -> anyhow::Result<String> {
	let mut out = Vec::new();
	if matches!(args.format, Format::Json | Format::Both) {
		out.push(serde_json::to_string_pretty(&Report::from(set)).context("serializing report")?);
	}
	if matches!(args.format, Format::Html | Format::Both) {
		out.push(paginator.render_with_params(set, &args.url));
	}
	Ok(out.join("\n"))
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let paginator = match &args.config {
		Some(path) => pager_config::load_config_with_file(path)
			.with_context(|| format!("loading config from {}", path.display()))?,
		None => pager_config::load_config().context("loading config")?,
	};

	let set = evaluate(&paginator, &args);
	println!("{}", render_output(&paginator, &set, &args)?);
	Ok(())
}
