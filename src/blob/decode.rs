use num_bigint::BigInt;

use crate::blob::bytes::Cursor;
use crate::blob::{AbsentKind, BlobError, DecodeLibrary, Mapping, NumericBuffer, ObjectKind, Result, Value, WireTag};

/// Smallest encoded item: a tag byte plus one payload byte.
const MIN_ITEM_LEN: usize = 2;
/// Smallest mapping entry: empty key header plus the smallest item.
const MIN_ENTRY_LEN: usize = 4 + MIN_ITEM_LEN;

/// Handling of decode library keys outside the fixed field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeyPolicy {
	/// Fail with [`BlobError::UnknownLibraryField`].
	#[default]
	Reject,
	/// Decode the entry value, then drop it.
	Ignore,
}

/// Runtime limits and behavior switches for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum container nesting depth.
	pub max_depth: u32,
	/// What to do with unrecognized decode library keys.
	pub unknown_library_keys: UnknownKeyPolicy,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			unknown_library_keys: UnknownKeyPolicy::Reject,
		}
	}
}

impl DecodeOptions {
	/// Preset that drops unknown library keys instead of failing.
	pub fn lenient() -> Self {
		Self {
			unknown_library_keys: UnknownKeyPolicy::Ignore,
			..Self::default()
		}
	}
}

/// Decode one value starting at `*cursor` with default options.
pub fn decode(buffer: &[u8], cursor: &mut usize) -> Result<Value> {
	decode_with(buffer, cursor, &DecodeOptions::default())
}

/// Decode one value starting at `*cursor`.
///
/// On success the cursor points just past the value. On failure it is left
/// where it was and nothing is returned.
pub fn decode_with(buffer: &[u8], cursor: &mut usize, opt: &DecodeOptions) -> Result<Value> {
	let mut cur = Cursor::at(buffer, *cursor);
	let value = decode_impl(&mut cur, opt, 0)?;
	*cursor = cur.pos();
	Ok(value)
}

/// Decode a self-contained blob that must hold exactly one value.
pub fn decode_blob(buffer: &[u8], opt: &DecodeOptions) -> Result<Value> {
	let mut pos = 0;
	let value = decode_with(buffer, &mut pos, opt)?;
	if pos != buffer.len() {
		return Err(BlobError::TrailingBytes {
			consumed: pos,
			len: buffer.len(),
		});
	}
	Ok(value)
}

fn decode_impl(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	if depth >= opt.max_depth {
		return Err(BlobError::DepthExceeded { max_depth: opt.max_depth });
	}

	let at = cursor.pos();
	let byte = cursor.read_u8()?;
	let tag = WireTag::from_byte(byte).ok_or(BlobError::UnknownTypeTag { tag: byte, at })?;

	match tag {
		WireTag::Absent => {
			let at = cursor.pos();
			let variant = cursor.read_u8()?;
			match AbsentKind::from_byte(variant) {
				Some(AbsentKind::Null) => Ok(Value::Null),
				Some(AbsentKind::Unset) => Ok(Value::Unset),
				None => Err(BlobError::UnknownAbsentVariant { variant, at }),
			}
		}
		WireTag::Bool => Ok(Value::Bool(cursor.read_u8()? != 0)),
		WireTag::Number => Ok(Value::Number(cursor.read_f64_le()?)),
		WireTag::BigInt => {
			let text = cursor.read_str()?;
			parse_big_integer(text).map(Value::BigInteger)
		}
		WireTag::Text => Ok(Value::Text(cursor.read_str()?.to_owned())),
		WireTag::Object => decode_object(cursor, opt, depth),
	}
}

fn decode_object(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let at = cursor.pos();
	let name = cursor.read_str()?;
	let kind = ObjectKind::from_type_name(name).ok_or_else(|| BlobError::UnknownObjectType { name: name.to_owned(), at })?;

	match kind {
		ObjectKind::Array => {
			let count = cursor.read_len()?;
			let mut items = Vec::with_capacity(capacity_hint(cursor, count, MIN_ITEM_LEN));
			for _ in 0..count {
				items.push(decode_impl(cursor, opt, depth + 1)?);
			}
			Ok(Value::Sequence(items))
		}
		ObjectKind::Object => {
			let count = cursor.read_len()?;
			let mut map = Mapping::with_capacity(capacity_hint(cursor, count, MIN_ENTRY_LEN));
			for _ in 0..count {
				let key = cursor.read_str()?;
				let value = decode_impl(cursor, opt, depth + 1)?;
				map.insert(key, value);
			}
			Ok(Value::Mapping(map))
		}
		ObjectKind::DecodeLibrary => decode_library(cursor, opt, depth),
		ObjectKind::Numeric(element) => {
			let bytes = cursor.read_prefixed()?;
			Ok(Value::NumericBuffer(NumericBuffer::from_bytes(element, bytes.to_vec())?))
		}
		ObjectKind::ArrayBuffer => Ok(Value::RawBuffer(cursor.read_prefixed()?.to_vec())),
	}
}

fn decode_library(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let count = cursor.read_len()?;
	let mut lib = DecodeLibrary::default();

	for _ in 0..count {
		let key = cursor.read_str()?;
		if lib.field(key).is_none() && opt.unknown_library_keys == UnknownKeyPolicy::Reject {
			return Err(BlobError::UnknownLibraryField { name: key.to_owned() });
		}

		let value = decode_impl(cursor, opt, depth + 1)?;
		if let Some(slot) = lib.field_mut(key) {
			*slot = match value {
				Value::Unset => None,
				other => Some(other),
			};
		}
	}

	Ok(Value::Library(Box::new(lib)))
}

/// Parse an optional `-` followed by ASCII decimal digits.
fn parse_big_integer(text: &str) -> Result<BigInt> {
	let invalid = || BlobError::InvalidBigInt { text: text.to_owned() };
	let digits = text.strip_prefix('-').unwrap_or(text);
	if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
		return Err(invalid());
	}
	text.parse().map_err(|_| invalid())
}

/// Cap preallocation by what the remaining bytes could actually hold.
fn capacity_hint(cursor: &Cursor<'_>, count: usize, min_len: usize) -> usize {
	count.min(cursor.remaining() / min_len)
}
