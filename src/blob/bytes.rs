use crate::blob::{BlobError, Result};

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor at an arbitrary offset.
	pub fn at(bytes: &'a [u8], pos: usize) -> Self {
		Self { bytes, pos }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(BlobError::TruncatedBuffer {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_le_bytes(buf))
	}

	/// Read a little-endian `f64`.
	pub fn read_f64_le(&mut self) -> Result<f64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Ok(f64::from_le_bytes(buf))
	}

	/// Read a `u32` length header widened to `usize`.
	pub fn read_len(&mut self) -> Result<usize> {
		let len = self.read_u32_le()?;
		usize::try_from(len).map_err(|_| BlobError::LengthOverflow { len: usize::MAX })
	}

	/// Read a length-prefixed byte run.
	pub fn read_prefixed(&mut self) -> Result<&'a [u8]> {
		let len = self.read_len()?;
		self.read_exact(len)
	}

	/// Read a length-prefixed UTF-8 string.
	pub fn read_str(&mut self) -> Result<&'a str> {
		let len = self.read_len()?;
		let at = self.pos;
		let raw = self.read_exact(len)?;
		std::str::from_utf8(raw).map_err(|_| BlobError::InvalidUtf8 { at })
	}
}

/// Destination for encoded byte chunks.
pub trait ByteSink {
	/// Append one chunk; chunk order is output order.
	fn push(&mut self, chunk: &[u8]);
}

impl ByteSink for Vec<u8> {
	fn push(&mut self, chunk: &[u8]) {
		self.extend_from_slice(chunk);
	}
}

/// Sink that keeps every pushed chunk separate.
#[derive(Debug, Default)]
pub struct ChunkSink {
	chunks: Vec<Vec<u8>>,
}

impl ChunkSink {
	/// Create an empty sink.
	pub fn new() -> Self {
		Self::default()
	}

	/// Total byte count across all chunks.
	pub fn byte_len(&self) -> usize {
		self.chunks.iter().map(Vec::len).sum()
	}

	/// Consume the sink, returning chunks in push order.
	pub fn into_chunks(self) -> Vec<Vec<u8>> {
		self.chunks
	}
}

impl ByteSink for ChunkSink {
	fn push(&mut self, chunk: &[u8]) {
		self.chunks.push(chunk.to_vec());
	}
}

/// Convert a length or count into its 32-bit wire header.
pub(crate) fn len_header(len: usize) -> Result<[u8; 4]> {
	let len = u32::try_from(len).map_err(|_| BlobError::LengthOverflow { len })?;
	Ok(len.to_le_bytes())
}
