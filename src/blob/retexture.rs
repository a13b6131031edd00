//! Batch replacement of material texture buffers inside a decode library.

use std::fs;
use std::process::Command;

use crate::blob::{BlobError, DecodeLibrary, ElementKind, Result, Value};

/// Source and target texture format markers.
#[derive(Debug, Clone)]
pub struct RetextureOptions {
	/// `textureType` value selecting materials to convert.
	pub from_format: String,
	/// `textureType` value written after conversion.
	pub to_format: String,
}

impl Default for RetextureOptions {
	fn default() -> Self {
		Self {
			from_format: "dds".to_owned(),
			to_format: "png".to_owned(),
		}
	}
}

/// Replaces one texture buffer with another.
pub trait TextureConverter {
	/// Convert `bytes` from `from` format to `to` format.
	fn convert(&mut self, material: &str, bytes: &[u8], from: &str, to: &str) -> Result<Vec<u8>>;
}

/// Runs `program <input> <output>` on files in a scratch directory.
#[derive(Debug, Clone)]
pub struct ExternalConverter {
	/// Executable name or path.
	pub program: String,
}

impl ExternalConverter {
	/// Converter backed by `program`.
	pub fn new(program: impl Into<String>) -> Self {
		Self { program: program.into() }
	}

	fn failed(&self, material: &str, reason: String) -> BlobError {
		BlobError::ConversionFailed {
			material: material.to_owned(),
			reason: format!("{}: {reason}", self.program),
		}
	}
}

impl TextureConverter for ExternalConverter {
	fn convert(&mut self, material: &str, bytes: &[u8], from: &str, to: &str) -> Result<Vec<u8>> {
		let dir = tempfile::tempdir()?;
		let input = dir.path().join(format!("texture.{from}"));
		let output = dir.path().join(format!("texture.{to}"));
		fs::write(&input, bytes)?;

		let status = Command::new(&self.program)
			.arg(&input)
			.arg(&output)
			.status()
			.map_err(|err| self.failed(material, format!("failed to start: {err}")))?;
		if !status.success() {
			return Err(self.failed(material, format!("exited with {status}")));
		}

		fs::read(&output).map_err(|err| self.failed(material, format!("no output at {}: {err}", output.display())))
	}
}

/// Outcome of a retexture pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetextureReport {
	/// Material names converted, in mapping order.
	pub converted: Vec<String>,
	/// Materials left untouched because their format did not match.
	pub skipped: usize,
}

/// Locate the decode library at the top level or under the top-level `lib` key.
pub fn find_library(root: &Value) -> Option<&DecodeLibrary> {
	match root {
		Value::Library(lib) => Some(&**lib),
		Value::Mapping(map) => map.get("lib").and_then(Value::as_library),
		_ => None,
	}
}

/// Mutable counterpart of [`find_library`].
pub fn find_library_mut(root: &mut Value) -> Option<&mut DecodeLibrary> {
	match root {
		Value::Library(lib) => Some(&mut **lib),
		Value::Mapping(map) => map.get_mut("lib").and_then(Value::as_library_mut),
		_ => None,
	}
}

/// Convert every material whose `textureType` equals `opt.from_format`.
///
/// Each matching material must carry a `buffer` holding raw bytes or a
/// `Uint8Array`; the buffer is replaced by the converter output and the
/// format marker is updated. The first failure aborts the pass.
pub fn retexture_materials<C: TextureConverter + ?Sized>(lib: &mut DecodeLibrary, opt: &RetextureOptions, converter: &mut C) -> Result<RetextureReport> {
	let mut report = RetextureReport::default();
	let Some(materials) = lib.materials.as_mut().and_then(Value::as_mapping_mut) else {
		return Ok(report);
	};

	for (name, material) in materials.iter_mut() {
		let Some(material) = material.as_mapping_mut() else {
			report.skipped += 1;
			continue;
		};
		if material.get("textureType").and_then(Value::as_str) != Some(opt.from_format.as_str()) {
			report.skipped += 1;
			continue;
		}

		let bytes = match material.get("buffer") {
			Some(Value::RawBuffer(bytes)) => bytes.as_slice(),
			Some(Value::NumericBuffer(buf)) if buf.kind() == ElementKind::U8 => buf.bytes(),
			other => {
				return Err(BlobError::ConversionFailed {
					material: name.to_owned(),
					reason: format!("buffer is {}, expected bytes", other.map_or("missing", Value::kind_name)),
				});
			}
		};

		let original_len = bytes.len();
		let converted = converter.convert(name, bytes, &opt.from_format, &opt.to_format)?;
		tracing::debug!(material = name, from = %opt.from_format, to = %opt.to_format, original_len, converted_len = converted.len(), "converted texture");

		material.insert("buffer", Value::RawBuffer(converted));
		material.insert("textureType", Value::from(opt.to_format.as_str()));
		report.converted.push(name.to_owned());
	}

	Ok(report)
}
