#![allow(missing_docs)]

use assetblob::blob::{BlobError, DecodeLibrary, DecodeOptions, Mapping, NumericBuffer, Value, decode, decode_blob, encode, encode_chunks};
use num_bigint::BigInt;

fn every_kind() -> Value {
	let big: BigInt = "123456789012345678901234567890".parse().expect("literal parses");
	let geometry: Mapping = [
		("positions", Value::NumericBuffer(NumericBuffer::from_slice(&[0.0_f32, 1.0, 2.0, -3.5]))),
		("indices", Value::NumericBuffer(NumericBuffer::from_slice(&[0_u16, 1, 2]))),
		("bounds", Value::from(vec![Value::Number(-1.0), Value::Number(f64::MAX)])),
	]
	.into_iter()
	.collect();
	let material: Mapping = [
		("textureType", Value::from("dds")),
		("buffer", Value::RawBuffer(b"DDS |raw".to_vec())),
		("flags", Value::Unset),
		("parent", Value::Null),
	]
	.into_iter()
	.collect();

	let lib = DecodeLibrary {
		name: Some(Value::from("antharas")),
		load_mipmaps: Some(Value::Bool(true)),
		anisotropy: Some(Value::Number(-1.0)),
		supports_dds: Some(Value::Bool(false)),
		sector: Some(Value::from(vec![Value::from(20), Value::from(22)])),
		geometries: Some(Value::Mapping([("rock", Value::Mapping(geometry))].into_iter().collect())),
		materials: Some(Value::Mapping([("stone", Value::Mapping(material))].into_iter().collect())),
		geometry_instances: Some(Value::Mapping(Mapping::new())),
		..DecodeLibrary::default()
	};

	Value::Mapping(
		[
			("lib", Value::from(lib)),
			("checksum", Value::BigInteger(big)),
			("notes", Value::from("ünïcode ✓")),
			("empty", Value::Sequence(Vec::new())),
		]
		.into_iter()
		.collect(),
	)
}

#[test]
fn full_graph_round_trips_with_exact_cursor() {
	let value = every_kind();
	let bytes = encode(&value).expect("graph encodes");

	let mut cursor = 0;
	let decoded = decode(&bytes, &mut cursor).expect("graph decodes");
	assert_eq!(cursor, bytes.len());
	assert_eq!(decoded, value);
}

#[test]
fn chunked_and_contiguous_encodings_agree() {
	let value = every_kind();
	assert_eq!(encode_chunks(&value).expect("chunks encode").concat(), encode(&value).expect("graph encodes"));
}

#[test]
fn reencoding_a_decoded_blob_is_byte_identical() {
	let bytes = encode(&every_kind()).expect("graph encodes");
	let decoded = decode_blob(&bytes, &DecodeOptions::default()).expect("graph decodes");
	assert_eq!(encode(&decoded).expect("graph re-encodes"), bytes);
}

#[test]
fn hand_crafted_bad_tag_fails_without_value() {
	let mut cursor = 0;
	let result = decode(&[0xFF], &mut cursor);
	assert!(matches!(result, Err(BlobError::UnknownTypeTag { tag: 0xFF, .. })));
}

#[test]
fn truncated_blob_is_rejected_at_every_cut() {
	let bytes = encode(&every_kind()).expect("graph encodes");
	for cut in [0, 1, 5, bytes.len() / 2, bytes.len() - 1] {
		let err = decode_blob(&bytes[..cut], &DecodeOptions::default()).expect_err("truncated blob should fail");
		assert!(matches!(err, BlobError::TruncatedBuffer { .. }), "cut={cut}: {err}");
	}
}
