//! Closed wire registries: tag bytes, absent sub-variants, and object type names.

/// Leading byte of every encoded item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireTag {
	/// Null or unset, followed by one sub-variant byte.
	Absent,
	/// Container or buffer, followed by a type-name string.
	Object,
	/// Arbitrary-precision integer as decimal text.
	BigInt,
	/// Little-endian `f64`.
	Number,
	/// One byte, zero or one.
	Bool,
	/// Length-prefixed UTF-8.
	Text,
}

impl WireTag {
	/// Every registered tag.
	pub const ALL: [WireTag; 6] = [Self::Absent, Self::Object, Self::BigInt, Self::Number, Self::Bool, Self::Text];

	/// Wire byte for this tag.
	pub fn byte(self) -> u8 {
		match self {
			Self::Absent => b'0',
			Self::Object => b'O',
			Self::BigInt => b'q',
			Self::Number => b'n',
			Self::Bool => b'?',
			Self::Text => b's',
		}
	}

	/// Resolve a wire byte, `None` when unregistered.
	pub fn from_byte(byte: u8) -> Option<Self> {
		match byte {
			b'0' => Some(Self::Absent),
			b'O' => Some(Self::Object),
			b'q' => Some(Self::BigInt),
			b'n' => Some(Self::Number),
			b'?' => Some(Self::Bool),
			b's' => Some(Self::Text),
			_ => None,
		}
	}
}

/// Sub-variant byte written after [`WireTag::Absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsentKind {
	/// Explicit null.
	Null,
	/// Never-assigned value.
	Unset,
}

impl AbsentKind {
	/// Wire byte for this sub-variant.
	pub fn byte(self) -> u8 {
		match self {
			Self::Null => 0,
			Self::Unset => 1,
		}
	}

	/// Resolve a sub-variant byte.
	pub fn from_byte(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Null),
			1 => Some(Self::Unset),
			_ => None,
		}
	}
}

/// Element type of a numeric buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
	/// Signed 8-bit integers.
	I8,
	/// Signed 16-bit integers.
	I16,
	/// Signed 32-bit integers.
	I32,
	/// Signed 64-bit integers.
	I64,
	/// Unsigned 8-bit integers.
	U8,
	/// Unsigned 16-bit integers.
	U16,
	/// Unsigned 32-bit integers.
	U32,
	/// Unsigned 64-bit integers.
	U64,
	/// 32-bit floats.
	F32,
	/// 64-bit floats.
	F64,
}

impl ElementKind {
	/// Every registered element kind.
	pub const ALL: [ElementKind; 10] = [
		Self::I8,
		Self::I16,
		Self::I32,
		Self::I64,
		Self::U8,
		Self::U16,
		Self::U32,
		Self::U64,
		Self::F32,
		Self::F64,
	];

	/// Element width in bytes.
	pub fn width(self) -> usize {
		match self {
			Self::I8 | Self::U8 => 1,
			Self::I16 | Self::U16 => 2,
			Self::I32 | Self::U32 | Self::F32 => 4,
			Self::I64 | Self::U64 | Self::F64 => 8,
		}
	}

	/// Wire type name.
	pub fn type_name(self) -> &'static str {
		match self {
			Self::I8 => "Int8Array",
			Self::I16 => "Int16Array",
			Self::I32 => "Int32Array",
			Self::I64 => "Int64Array",
			Self::U8 => "Uint8Array",
			Self::U16 => "Uint16Array",
			Self::U32 => "Uint32Array",
			Self::U64 => "Uint64Array",
			Self::F32 => "Float32Array",
			Self::F64 => "Float64Array",
		}
	}
}

/// Secondary discriminant carried by [`WireTag::Object`] items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
	/// Ordered list of values.
	Array,
	/// Open string-keyed mapping.
	Object,
	/// Fixed-shape decode library record.
	DecodeLibrary,
	/// Typed numeric buffer.
	Numeric(ElementKind),
	/// Untyped byte buffer.
	ArrayBuffer,
}

impl ObjectKind {
	/// Wire type name.
	pub fn type_name(self) -> &'static str {
		match self {
			Self::Array => "Array",
			Self::Object => "Object",
			Self::DecodeLibrary => "DecodeLibrary",
			Self::Numeric(kind) => kind.type_name(),
			Self::ArrayBuffer => "ArrayBuffer",
		}
	}

	/// Resolve a wire type name, `None` when unregistered.
	pub fn from_type_name(name: &str) -> Option<Self> {
		let kind = match name {
			"Array" => Self::Array,
			"Object" => Self::Object,
			"DecodeLibrary" => Self::DecodeLibrary,
			"ArrayBuffer" => Self::ArrayBuffer,
			"Int8Array" => Self::Numeric(ElementKind::I8),
			"Int16Array" => Self::Numeric(ElementKind::I16),
			"Int32Array" => Self::Numeric(ElementKind::I32),
			"Int64Array" => Self::Numeric(ElementKind::I64),
			"Uint8Array" => Self::Numeric(ElementKind::U8),
			"Uint16Array" => Self::Numeric(ElementKind::U16),
			"Uint32Array" => Self::Numeric(ElementKind::U32),
			"Uint64Array" => Self::Numeric(ElementKind::U64),
			"Float32Array" => Self::Numeric(ElementKind::F32),
			"Float64Array" => Self::Numeric(ElementKind::F64),
			_ => return None,
		};
		Some(kind)
	}
}
