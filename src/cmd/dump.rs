use std::path::PathBuf;

use assetblob::blob::{BlobFile, Result, Value};

use crate::cmd::util::{decode_options, hex_preview, truncate};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long, default_value_t = PrintOptions::default().max_print_depth)]
	pub max_depth: u32,
	#[arg(long, default_value_t = PrintOptions::default().max_items)]
	pub max_items: usize,
	#[arg(long, default_value_t = PrintOptions::default().max_string_len)]
	pub max_string_len: usize,
	/// Drop unknown decode library keys instead of failing.
	#[arg(long)]
	pub lenient: bool,
}

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed per sequence or mapping.
	pub max_items: usize,
	/// Maximum number of Unicode scalar values printed for text.
	pub max_string_len: usize,
	/// Maximum number of leading bytes previewed for buffers.
	pub max_buffer_preview: usize,
	/// Maximum recursive print depth for nested containers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_items: 16,
			max_string_len: 200,
			max_buffer_preview: 8,
			max_print_depth: 6,
		}
	}
}

/// Decode a blob and print its value tree.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		max_depth,
		max_items,
		max_string_len,
		lenient,
	} = args;
	let options = PrintOptions {
		max_items,
		max_string_len,
		max_print_depth: max_depth,
		..PrintOptions::default()
	};

	let blob = BlobFile::open(&path)?;
	let value = blob.decode(&decode_options(lenient))?;

	println!("path: {}", path.display());
	println!("bytes: {}", blob.bytes().len());
	println!("value:");
	for line in render_value(&value, options) {
		println!("{line}");
	}

	Ok(())
}

/// Render a value tree into indented lines.
pub fn render_value(value: &Value, options: PrintOptions) -> Vec<String> {
	let mut lines = Vec::new();
	render(value, "", 0, 0, options, &mut lines);
	lines
}

fn render(value: &Value, label: &str, indent: usize, depth: u32, options: PrintOptions, lines: &mut Vec<String>) {
	let pad = " ".repeat(indent);
	match value {
		Value::Sequence(items) => {
			if depth >= options.max_print_depth {
				lines.push(format!("{pad}{label}[... {} items]", items.len()));
				return;
			}
			lines.push(format!("{pad}{label}["));
			for item in items.iter().take(options.max_items) {
				render(item, "", indent + 2, depth + 1, options, lines);
			}
			if items.len() > options.max_items {
				lines.push(format!("{pad}  ... {} more", items.len() - options.max_items));
			}
			lines.push(format!("{pad}]"));
		}
		Value::Mapping(map) => {
			if depth >= options.max_print_depth {
				lines.push(format!("{pad}{label}Object {{ ... {} entries }}", map.len()));
				return;
			}
			lines.push(format!("{pad}{label}Object {{"));
			for (key, item) in map.iter().take(options.max_items) {
				render(item, &format!("{key} = "), indent + 2, depth + 1, options, lines);
			}
			if map.len() > options.max_items {
				lines.push(format!("{pad}  ... {} more entries", map.len() - options.max_items));
			}
			lines.push(format!("{pad}}}"));
		}
		Value::Library(lib) => {
			if depth >= options.max_print_depth {
				lines.push(format!("{pad}{label}DecodeLibrary {{ ... }}"));
				return;
			}
			lines.push(format!("{pad}{label}DecodeLibrary {{"));
			for (key, slot) in lib.fields() {
				match slot {
					Some(item) => render(item, &format!("{key} = "), indent + 2, depth + 1, options, lines),
					None => lines.push(format!("{pad}  {key} = unset")),
				}
			}
			lines.push(format!("{pad}}}"));
		}
		scalar => lines.push(format!("{pad}{label}{}", render_scalar(scalar, options))),
	}
}

fn render_scalar(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Unset => "unset".to_owned(),
		Value::Bool(v) => v.to_string(),
		Value::Number(v) => v.to_string(),
		Value::BigInteger(v) => format!("{v}n"),
		Value::Text(v) => format!("\"{}\"", truncate(v, options.max_string_len)),
		Value::NumericBuffer(buf) => format!(
			"{}[{}] <{}>",
			buf.kind().type_name(),
			buf.len(),
			hex_preview(buf.bytes(), options.max_buffer_preview)
		),
		Value::RawBuffer(bytes) => format!("ArrayBuffer({} bytes) <{}>", bytes.len(), hex_preview(bytes, options.max_buffer_preview)),
		Value::Sequence(items) => format!("[{} items]", items.len()),
		Value::Mapping(map) => format!("Object {{ {} entries }}", map.len()),
		Value::Library(_) => "DecodeLibrary { ... }".to_owned(),
	}
}
