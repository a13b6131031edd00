//! Conversion from any [`serde::Serialize`] type into a [`Value`] graph.
//!
//! Only shapes with a direct counterpart in the closed value set are
//! accepted. Enum variants carrying data and maps with non-scalar keys fail
//! with [`BlobError::UnsupportedValueKind`].

use num_bigint::BigInt;
use serde::Serialize;
use serde::ser::{self, Impossible};

use crate::blob::{BlobError, DecodeLibrary, Mapping, Result, Value};

/// Largest integer magnitude an `f64` holds exactly.
const MAX_SAFE_INTEGER: u128 = (1 << 53) - 1;

/// Convert a serializable value into a blob value.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
	value.serialize(ValueSerializer)
}

/// Serializer whose output is a [`Value`].
pub struct ValueSerializer;

fn unsupported(kind: String) -> BlobError {
	BlobError::UnsupportedValueKind { kind }
}

fn integer(v: i128) -> Value {
	if v.unsigned_abs() <= MAX_SAFE_INTEGER {
		Value::Number(v as f64)
	} else {
		Value::BigInteger(BigInt::from(v))
	}
}

impl ser::Serializer for ValueSerializer {
	type Ok = Value;
	type Error = BlobError;
	type SerializeSeq = SerializeVec;
	type SerializeTuple = SerializeVec;
	type SerializeTupleStruct = SerializeVec;
	type SerializeTupleVariant = Impossible<Value, BlobError>;
	type SerializeMap = SerializeMap;
	type SerializeStruct = SerializeRecord;
	type SerializeStructVariant = Impossible<Value, BlobError>;

	fn serialize_bool(self, v: bool) -> Result<Value> {
		Ok(Value::Bool(v))
	}

	fn serialize_i8(self, v: i8) -> Result<Value> {
		Ok(Value::Number(f64::from(v)))
	}

	fn serialize_i16(self, v: i16) -> Result<Value> {
		Ok(Value::Number(f64::from(v)))
	}

	fn serialize_i32(self, v: i32) -> Result<Value> {
		Ok(Value::Number(f64::from(v)))
	}

	fn serialize_i64(self, v: i64) -> Result<Value> {
		Ok(integer(i128::from(v)))
	}

	fn serialize_i128(self, v: i128) -> Result<Value> {
		Ok(integer(v))
	}

	fn serialize_u8(self, v: u8) -> Result<Value> {
		Ok(Value::Number(f64::from(v)))
	}

	fn serialize_u16(self, v: u16) -> Result<Value> {
		Ok(Value::Number(f64::from(v)))
	}

	fn serialize_u32(self, v: u32) -> Result<Value> {
		Ok(Value::Number(f64::from(v)))
	}

	fn serialize_u64(self, v: u64) -> Result<Value> {
		Ok(integer(i128::from(v)))
	}

	fn serialize_u128(self, v: u128) -> Result<Value> {
		if v <= MAX_SAFE_INTEGER {
			Ok(Value::Number(v as f64))
		} else {
			Ok(Value::BigInteger(BigInt::from(v)))
		}
	}

	fn serialize_f32(self, v: f32) -> Result<Value> {
		Ok(Value::Number(f64::from(v)))
	}

	fn serialize_f64(self, v: f64) -> Result<Value> {
		Ok(Value::Number(v))
	}

	fn serialize_char(self, v: char) -> Result<Value> {
		Ok(Value::Text(v.to_string()))
	}

	fn serialize_str(self, v: &str) -> Result<Value> {
		Ok(Value::Text(v.to_owned()))
	}

	fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
		Ok(Value::RawBuffer(v.to_vec()))
	}

	fn serialize_none(self) -> Result<Value> {
		Ok(Value::Null)
	}

	fn serialize_some<T>(self, value: &T) -> Result<Value>
	where
		T: ?Sized + Serialize,
	{
		value.serialize(self)
	}

	fn serialize_unit(self) -> Result<Value> {
		Ok(Value::Null)
	}

	fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
		Ok(Value::Null)
	}

	fn serialize_unit_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str) -> Result<Value> {
		Ok(Value::Text(variant.to_owned()))
	}

	fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
	where
		T: ?Sized + Serialize,
	{
		value.serialize(self)
	}

	fn serialize_newtype_variant<T>(self, name: &'static str, _variant_index: u32, variant: &'static str, _value: &T) -> Result<Value>
	where
		T: ?Sized + Serialize,
	{
		Err(unsupported(format!("newtype variant {name}::{variant}")))
	}

	fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
		Ok(SerializeVec {
			items: Vec::with_capacity(len.unwrap_or(0)),
		})
	}

	fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_variant(self, name: &'static str, _variant_index: u32, variant: &'static str, _len: usize) -> Result<Self::SerializeTupleVariant> {
		Err(unsupported(format!("tuple variant {name}::{variant}")))
	}

	fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
		Ok(SerializeMap {
			map: Mapping::with_capacity(len.unwrap_or(0)),
			next_key: None,
		})
	}

	fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeRecord> {
		Ok(SerializeRecord {
			library: name == "DecodeLibrary",
			map: Mapping::with_capacity(len),
		})
	}

	fn serialize_struct_variant(self, name: &'static str, _variant_index: u32, variant: &'static str, _len: usize) -> Result<Self::SerializeStructVariant> {
		Err(unsupported(format!("struct variant {name}::{variant}")))
	}
}

/// Collects sequence and tuple elements.
pub struct SerializeVec {
	items: Vec<Value>,
}

impl ser::SerializeSeq for SerializeVec {
	type Ok = Value;
	type Error = BlobError;

	fn serialize_element<T>(&mut self, value: &T) -> Result<()>
	where
		T: ?Sized + Serialize,
	{
		self.items.push(to_value(value)?);
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Sequence(self.items))
	}
}

impl ser::SerializeTuple for SerializeVec {
	type Ok = Value;
	type Error = BlobError;

	fn serialize_element<T>(&mut self, value: &T) -> Result<()>
	where
		T: ?Sized + Serialize,
	{
		ser::SerializeSeq::serialize_element(self, value)
	}

	fn end(self) -> Result<Value> {
		ser::SerializeSeq::end(self)
	}
}

impl ser::SerializeTupleStruct for SerializeVec {
	type Ok = Value;
	type Error = BlobError;

	fn serialize_field<T>(&mut self, value: &T) -> Result<()>
	where
		T: ?Sized + Serialize,
	{
		ser::SerializeSeq::serialize_element(self, value)
	}

	fn end(self) -> Result<Value> {
		ser::SerializeSeq::end(self)
	}
}

/// Collects map entries; keys must be text or integral numbers.
pub struct SerializeMap {
	map: Mapping,
	next_key: Option<String>,
}

impl ser::SerializeMap for SerializeMap {
	type Ok = Value;
	type Error = BlobError;

	fn serialize_key<T>(&mut self, key: &T) -> Result<()>
	where
		T: ?Sized + Serialize,
	{
		let key = match to_value(key)? {
			Value::Text(text) => text,
			Value::Number(n) if n.is_finite() && n.fract() == 0.0 => format!("{n}"),
			Value::BigInteger(n) => n.to_string(),
			other => return Err(unsupported(format!("map key of kind {}", other.kind_name()))),
		};
		self.next_key = Some(key);
		Ok(())
	}

	fn serialize_value<T>(&mut self, value: &T) -> Result<()>
	where
		T: ?Sized + Serialize,
	{
		let key = self
			.next_key
			.take()
			.ok_or_else(|| BlobError::Custom("map value serialized before its key".to_owned()))?;
		self.map.insert(key, to_value(value)?);
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Mapping(self.map))
	}
}

/// Collects struct fields into a mapping or, for `DecodeLibrary`, the fixed record.
pub struct SerializeRecord {
	library: bool,
	map: Mapping,
}

impl ser::SerializeStruct for SerializeRecord {
	type Ok = Value;
	type Error = BlobError;

	fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
	where
		T: ?Sized + Serialize,
	{
		self.map.insert(key, to_value(value)?);
		Ok(())
	}

	fn end(self) -> Result<Value> {
		if !self.library {
			return Ok(Value::Mapping(self.map));
		}

		let mut lib = DecodeLibrary::default();
		for (key, value) in self.map {
			let slot = lib.field_mut(&key).ok_or_else(|| BlobError::UnknownLibraryField { name: key.clone() })?;
			*slot = match value {
				Value::Unset => None,
				other => Some(other),
			};
		}
		Ok(Value::Library(Box::new(lib)))
	}
}
