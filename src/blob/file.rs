use std::fs;
use std::path::Path;

use crate::blob::{DecodeOptions, Result, Value, decode_blob, encode};

/// Whole blob loaded into memory.
pub struct BlobFile {
	bytes: Vec<u8>,
}

impl BlobFile {
	/// Read a blob file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Ok(Self::from_bytes(bytes))
	}

	/// Wrap in-memory file contents.
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}

	/// Encoded value bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Decode the single top-level value.
	pub fn decode(&self, opt: &DecodeOptions) -> Result<Value> {
		decode_blob(&self.bytes, opt)
	}
}

/// Encode `value` and write it to `path`, returning the bytes written.
pub fn write_blob(path: impl AsRef<Path>, value: &Value) -> Result<usize> {
	let blob = encode(value)?;
	fs::write(path, &blob)?;
	Ok(blob.len())
}

#[cfg(test)]
mod tests;
