use crate::blob::bytes::{ByteSink, ChunkSink, len_header};
use crate::blob::{AbsentKind, BlobError, DecodeLibrary, ObjectKind, Result, Value, WireTag};

/// Runtime limits for encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Maximum container nesting depth.
	pub max_depth: u32,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self { max_depth: 128 }
	}
}

/// Encode a value into one contiguous blob.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	encode_into(value, &mut out, &EncodeOptions::default())?;
	Ok(out)
}

/// Encode a value into ordered chunks whose concatenation is the blob.
pub fn encode_chunks(value: &Value) -> Result<Vec<Vec<u8>>> {
	let mut sink = ChunkSink::new();
	encode_into(value, &mut sink, &EncodeOptions::default())?;
	Ok(sink.into_chunks())
}

/// Encode a value into any byte sink.
///
/// On error the sink may already hold a prefix of the output.
pub fn encode_into<S: ByteSink>(value: &Value, sink: &mut S, opt: &EncodeOptions) -> Result<()> {
	encode_impl(value, sink, opt, 0)
}

fn encode_impl<S: ByteSink>(value: &Value, sink: &mut S, opt: &EncodeOptions, depth: u32) -> Result<()> {
	if depth >= opt.max_depth {
		return Err(BlobError::DepthExceeded { max_depth: opt.max_depth });
	}

	match value {
		Value::Null => put_absent(sink, AbsentKind::Null),
		Value::Unset => put_absent(sink, AbsentKind::Unset),
		Value::Bool(v) => sink.push(&[WireTag::Bool.byte(), u8::from(*v)]),
		Value::Number(v) => {
			sink.push(&[WireTag::Number.byte()]);
			sink.push(&v.to_le_bytes());
		}
		Value::BigInteger(v) => {
			sink.push(&[WireTag::BigInt.byte()]);
			put_prefixed(sink, v.to_string().as_bytes())?;
		}
		Value::Text(v) => {
			sink.push(&[WireTag::Text.byte()]);
			put_prefixed(sink, v.as_bytes())?;
		}
		Value::Sequence(items) => {
			put_object_header(sink, ObjectKind::Array)?;
			sink.push(&len_header(items.len())?);
			for item in items {
				encode_impl(item, sink, opt, depth + 1)?;
			}
		}
		Value::Mapping(map) => {
			put_object_header(sink, ObjectKind::Object)?;
			sink.push(&len_header(map.len())?);
			for (key, item) in map.iter() {
				put_prefixed(sink, key.as_bytes())?;
				encode_impl(item, sink, opt, depth + 1)?;
			}
		}
		Value::Library(lib) => {
			put_object_header(sink, ObjectKind::DecodeLibrary)?;
			sink.push(&len_header(DecodeLibrary::FIELDS.len())?);
			for (key, slot) in lib.fields() {
				put_prefixed(sink, key.as_bytes())?;
				match slot {
					Some(item) => encode_impl(item, sink, opt, depth + 1)?,
					None => put_absent(sink, AbsentKind::Unset),
				}
			}
		}
		Value::NumericBuffer(buf) => {
			put_object_header(sink, ObjectKind::Numeric(buf.kind()))?;
			put_prefixed(sink, buf.bytes())?;
		}
		Value::RawBuffer(bytes) => {
			put_object_header(sink, ObjectKind::ArrayBuffer)?;
			put_prefixed(sink, bytes)?;
		}
	}

	Ok(())
}

fn put_absent<S: ByteSink>(sink: &mut S, kind: AbsentKind) {
	sink.push(&[WireTag::Absent.byte(), kind.byte()]);
}

fn put_object_header<S: ByteSink>(sink: &mut S, kind: ObjectKind) -> Result<()> {
	sink.push(&[WireTag::Object.byte()]);
	put_prefixed(sink, kind.type_name().as_bytes())
}

fn put_prefixed<S: ByteSink>(sink: &mut S, bytes: &[u8]) -> Result<()> {
	sink.push(&len_header(bytes.len())?);
	sink.push(bytes);
	Ok(())
}

#[cfg(test)]
mod tests;
