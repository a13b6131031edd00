use num_bigint::BigInt;

use super::{EncodeOptions, encode, encode_chunks, encode_into};
use crate::blob::{BlobError, DecodeLibrary, Mapping, NumericBuffer, Value};

fn object_prefix(name: &str) -> Vec<u8> {
	let mut out = vec![b'O'];
	out.extend_from_slice(&(name.len() as u32).to_le_bytes());
	out.extend_from_slice(name.as_bytes());
	out
}

#[test]
fn scalars_use_registered_tags() {
	assert_eq!(encode(&Value::Null).expect("encodes"), vec![b'0', 0]);
	assert_eq!(encode(&Value::Unset).expect("encodes"), vec![b'0', 1]);
	assert_eq!(encode(&Value::Bool(true)).expect("encodes"), vec![b'?', 1]);
	assert_eq!(encode(&Value::Bool(false)).expect("encodes"), vec![b'?', 0]);

	let mut number = vec![b'n'];
	number.extend_from_slice(&1.0_f64.to_le_bytes());
	assert_eq!(encode(&Value::Number(1.0)).expect("encodes"), number);
}

#[test]
fn text_is_length_prefixed_by_bytes() {
	let bytes = encode(&Value::from("hé")).expect("encodes");
	assert_eq!(bytes, vec![b's', 3, 0, 0, 0, b'h', 0xC3, 0xA9]);
}

#[test]
fn big_integer_is_decimal_text() {
	let value: BigInt = "-123456789012345678901234567890".parse().expect("literal parses");
	let bytes = encode(&Value::BigInteger(value)).expect("encodes");

	let mut expected = vec![b'q', 31, 0, 0, 0];
	expected.extend_from_slice(b"-123456789012345678901234567890");
	assert_eq!(bytes, expected);
}

#[test]
fn sequence_writes_count_then_elements() {
	let bytes = encode(&Value::from(vec![Value::Null, Value::Bool(true)])).expect("encodes");

	let mut expected = object_prefix("Array");
	expected.extend_from_slice(&2_u32.to_le_bytes());
	expected.extend_from_slice(&[b'0', 0, b'?', 1]);
	assert_eq!(bytes, expected);
}

#[test]
fn mapping_writes_entries_in_insertion_order() {
	let map: Mapping = [("z", Value::Null), ("a", Value::Unset)].into_iter().collect();
	let bytes = encode(&Value::Mapping(map)).expect("encodes");

	let mut expected = object_prefix("Object");
	expected.extend_from_slice(&2_u32.to_le_bytes());
	expected.extend_from_slice(&[1, 0, 0, 0, b'z', b'0', 0]);
	expected.extend_from_slice(&[1, 0, 0, 0, b'a', b'0', 1]);
	assert_eq!(bytes, expected);
}

#[test]
fn numeric_buffer_payload_is_host_native() {
	let buf = NumericBuffer::from_slice(&[0x0102_u16, 0x0304]);
	let bytes = encode(&Value::NumericBuffer(buf)).expect("encodes");

	let mut expected = object_prefix("Uint16Array");
	expected.extend_from_slice(&4_u32.to_le_bytes());
	expected.extend_from_slice(&0x0102_u16.to_ne_bytes());
	expected.extend_from_slice(&0x0304_u16.to_ne_bytes());
	assert_eq!(bytes, expected);
}

#[test]
fn raw_buffer_uses_array_buffer_name() {
	let bytes = encode(&Value::RawBuffer(vec![9, 8])).expect("encodes");

	let mut expected = object_prefix("ArrayBuffer");
	expected.extend_from_slice(&[2, 0, 0, 0, 9, 8]);
	assert_eq!(bytes, expected);
}

#[test]
fn library_writes_all_fields_with_unset_defaults() {
	let lib = DecodeLibrary {
		name: Some(Value::from("x")),
		..DecodeLibrary::default()
	};
	let bytes = encode(&Value::from(lib)).expect("encodes");

	let mut expected = object_prefix("DecodeLibrary");
	expected.extend_from_slice(&15_u32.to_le_bytes());
	for key in DecodeLibrary::FIELDS {
		expected.extend_from_slice(&(key.len() as u32).to_le_bytes());
		expected.extend_from_slice(key.as_bytes());
		if key == "name" {
			expected.extend_from_slice(&[b's', 1, 0, 0, 0, b'x']);
		} else {
			expected.extend_from_slice(&[b'0', 1]);
		}
	}
	assert_eq!(bytes, expected);
}

#[test]
fn chunks_concatenate_to_contiguous_output() {
	let value = Value::from(vec![Value::from("abc"), Value::Number(2.0), Value::RawBuffer(vec![1, 2, 3])]);
	let chunks = encode_chunks(&value).expect("encodes");
	assert!(chunks.len() > 1, "expected several chunks");
	assert_eq!(chunks.concat(), encode(&value).expect("encodes"));
}

#[test]
fn encoding_is_deterministic() {
	let map: Mapping = [("k", Value::from(vec![Value::from(1), Value::from("v")]))].into_iter().collect();
	let value = Value::Mapping(map);
	assert_eq!(encode(&value).expect("encodes"), encode(&value).expect("encodes"));
}

#[test]
fn nesting_beyond_limit_fails() {
	let mut value = Value::Null;
	for _ in 0..4 {
		value = Value::Sequence(vec![value]);
	}

	let mut out = Vec::new();
	let err = encode_into(&value, &mut out, &EncodeOptions { max_depth: 3 }).expect_err("depth should fail");
	assert!(matches!(err, BlobError::DepthExceeded { max_depth: 3 }));

	let mut out = Vec::new();
	encode_into(&value, &mut out, &EncodeOptions { max_depth: 5 }).expect("depth 5 fits");
}
