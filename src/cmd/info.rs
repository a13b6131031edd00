use std::path::PathBuf;

use assetblob::blob::{BlobFile, BlobStats, DecodeLibrary, Result, Value, find_library, scan_stats};

use crate::cmd::util::{decode_options, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	/// Drop unknown decode library keys instead of failing.
	#[arg(long)]
	pub lenient: bool,
}

/// Print blob size and value census.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, lenient } = args;

	let blob = BlobFile::open(&path)?;
	let value = blob.decode(&decode_options(lenient))?;
	let stats = scan_stats(&value);
	let library = find_library(&value).map(summarize_library);

	if json {
		return emit_json(&InfoJson {
			path: path.display().to_string(),
			bytes: blob.bytes().len(),
			top_level: value.kind_name().to_owned(),
			stats: StatsJson::from(&stats),
			library,
		});
	}

	println!("path: {}", path.display());
	println!("bytes: {}", blob.bytes().len());
	println!("top_level: {}", value.kind_name());
	println!("values: {}", stats.values);
	println!("max_depth: {}", stats.max_depth);
	println!("buffer_bytes: {}", stats.buffer_bytes);
	println!("text_bytes: {}", stats.text_bytes);
	println!("kinds:");
	for (label, count) in kind_counts(&stats) {
		if count > 0 {
			println!("  {label}: {count}");
		}
	}

	match library {
		Some(lib) => {
			println!("library:");
			println!("  name: {}", lib.name.as_deref().unwrap_or("-"));
			println!("  populated_fields: {}/{}", lib.populated_fields, DecodeLibrary::FIELDS.len());
			println!("  materials: {}", lib.materials);
			println!("  geometries: {}", lib.geometries);
		}
		None => println!("library: none"),
	}

	Ok(())
}

fn kind_counts(stats: &BlobStats) -> [(&'static str, usize); 11] {
	[
		("null", stats.nulls),
		("unset", stats.unsets),
		("bool", stats.bools),
		("number", stats.numbers),
		("bigint", stats.big_integers),
		("text", stats.texts),
		("sequence", stats.sequences),
		("mapping", stats.mappings),
		("library", stats.libraries),
		("numeric_buffer", stats.numeric_buffers),
		("raw_buffer", stats.raw_buffers),
	]
}

fn summarize_library(lib: &DecodeLibrary) -> LibraryJson {
	let entries = |slot: &Option<Value>| slot.as_ref().and_then(Value::as_mapping).map_or(0, |map| map.len());
	LibraryJson {
		name: lib.name.as_ref().and_then(Value::as_str).map(str::to_owned),
		populated_fields: lib.populated(),
		materials: entries(&lib.materials),
		geometries: entries(&lib.geometries),
	}
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	bytes: usize,
	top_level: String,
	stats: StatsJson,
	#[serde(skip_serializing_if = "Option::is_none")]
	library: Option<LibraryJson>,
}

#[derive(serde::Serialize)]
struct StatsJson {
	values: usize,
	max_depth: usize,
	buffer_bytes: usize,
	text_bytes: usize,
	kinds: std::collections::BTreeMap<&'static str, usize>,
}

impl From<&BlobStats> for StatsJson {
	fn from(stats: &BlobStats) -> Self {
		Self {
			values: stats.values,
			max_depth: stats.max_depth,
			buffer_bytes: stats.buffer_bytes,
			text_bytes: stats.text_bytes,
			kinds: kind_counts(stats).into_iter().filter(|(_, count)| *count > 0).collect(),
		}
	}
}

#[derive(serde::Serialize)]
struct LibraryJson {
	#[serde(skip_serializing_if = "Option::is_none")]
	name: Option<String>,
	populated_fields: usize,
	materials: usize,
	geometries: usize,
}
