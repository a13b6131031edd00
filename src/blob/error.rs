use std::fmt::Display;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BlobError>;

/// Errors produced while encoding, decoding, and rewriting blobs.
#[derive(Debug, Error)]
pub enum BlobError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Runtime value has no representation in the closed value set.
	#[error("unsupported value kind: {kind}")]
	UnsupportedValueKind {
		/// Description of the rejected runtime kind.
		kind: String,
	},
	/// Leading tag byte is not registered.
	#[error("unknown type tag 0x{tag:02x} at offset {at}")]
	UnknownTypeTag {
		/// Offending tag byte.
		tag: u8,
		/// Offset of the tag byte.
		at: usize,
	},
	/// Object type-name string is not registered.
	#[error("unknown object type {name:?} at offset {at}")]
	UnknownObjectType {
		/// Decoded type name.
		name: String,
		/// Offset of the type-name length header.
		at: usize,
	},
	/// Sub-byte following an absent tag is neither null nor unset.
	#[error("unknown absent variant {variant} at offset {at}")]
	UnknownAbsentVariant {
		/// Offending sub-byte.
		variant: u8,
		/// Offset of the sub-byte.
		at: usize,
	},
	/// Not enough bytes remained for a requested read.
	#[error("truncated buffer at offset {at}, need {need} bytes, remaining {rem}")]
	TruncatedBuffer {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Length-prefixed text was not valid UTF-8.
	#[error("invalid utf-8 string at offset {at}")]
	InvalidUtf8 {
		/// Offset of the first string byte.
		at: usize,
	},
	/// Big integer payload was not a decimal integer literal.
	#[error("invalid big integer literal {text:?}")]
	InvalidBigInt {
		/// Decoded literal text.
		text: String,
	},
	/// Numeric buffer byte length is not a multiple of its element width.
	#[error("numeric buffer {kind} has byte length {len}, not a multiple of {width}")]
	MisalignedNumericBuffer {
		/// Registered element type name.
		kind: &'static str,
		/// Payload byte length.
		len: usize,
		/// Element width in bytes.
		width: usize,
	},
	/// Length or count does not fit the 32-bit wire header.
	#[error("length {len} exceeds u32 wire header")]
	LengthOverflow {
		/// Offending length or count.
		len: usize,
	},
	/// Value nesting exceeded configured limit.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Decode library entry uses a key outside the fixed field set.
	#[error("unknown decode library field {name:?}")]
	UnknownLibraryField {
		/// Offending key.
		name: String,
	},
	/// Top-level value ended before the end of the blob.
	#[error("trailing bytes after top-level value: consumed={consumed}, len={len}")]
	TrailingBytes {
		/// Bytes consumed by the top-level value.
		consumed: usize,
		/// Total blob length.
		len: usize,
	},
	/// Blob holds no decode library at the top level or under `lib`.
	#[error("decode library not found")]
	LibraryNotFound,
	/// External texture conversion failed.
	#[error("texture conversion failed for {material}: {reason}")]
	ConversionFailed {
		/// Material entry being converted.
		material: String,
		/// Failure description.
		reason: String,
	},
	/// Re-encoding a decoded blob produced different bytes.
	#[error("round trip mismatch: first difference at offset {at} (original={original_len}, reencoded={reencoded_len})")]
	RoundTripMismatch {
		/// First differing byte offset.
		at: usize,
		/// Original blob length.
		original_len: usize,
		/// Re-encoded blob length.
		reencoded_len: usize,
	},
	/// Free-form error raised through the serde bridge.
	#[error("{0}")]
	Custom(String),
}

impl serde::ser::Error for BlobError {
	fn custom<T: Display>(msg: T) -> Self {
		Self::Custom(msg.to_string())
	}
}
