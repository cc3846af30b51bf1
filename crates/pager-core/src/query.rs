// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Multi-valued query parameters with deterministic encoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Query-string parameters, keyed in ascending order.
///
/// A key may carry several values (`tag=a&tag=b`); lookups return the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, Vec<String>>);

impl QueryParams {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse an `application/x-www-form-urlencoded` string. A leading `?` is
	/// ignored and malformed escapes are decoded lossily.
	pub fn parse(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		form_urlencoded::parse(query.as_bytes()).collect()
	}

	/// First value for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self
			.0
			.get(key)
			.and_then(|values| values.first())
			.map(String::as_str)
	}

	pub fn get_all(&self, key: &str) -> &[String] {
		self.0.get(key).map(Vec::as_slice).unwrap_or_default()
	}

	/// Replace every value for `key` with `value`.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.insert(key.into(), vec![value.into()]);
	}

	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.entry(key.into()).or_default().push(value.into());
	}

	pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
		self.0.remove(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Iterate `(key, value)` pairs in encoding order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self
			.0
			.iter()
			.flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
	}

	/// Form-encode as `k=v&k=v`, keys sorted, spaces as `+`.
	pub fn encode(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.iter())
			.finish()
	}
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = Self::new();
		params.extend(iter);
		params
	}
}

impl<K, V> Extend<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (k, v) in iter {
			self.append(k, v);
		}
	}
}
