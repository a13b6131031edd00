use super::scan_stats;
use crate::blob::{DecodeLibrary, Mapping, NumericBuffer, Value};

#[test]
fn scalar_has_depth_one() {
	let stats = scan_stats(&Value::Number(1.0));
	assert_eq!(stats.values, 1);
	assert_eq!(stats.numbers, 1);
	assert_eq!(stats.max_depth, 1);
}

#[test]
fn counts_nested_kinds_and_buffer_volume() {
	let material: Mapping = [
		("textureType", Value::from("dds")),
		("buffer", Value::RawBuffer(vec![0; 10])),
		("uv", Value::NumericBuffer(NumericBuffer::from_slice(&[0.0_f32; 4]))),
	]
	.into_iter()
	.collect();
	let lib = DecodeLibrary {
		name: Some(Value::from("lib")),
		materials: Some(Value::Mapping([("stone", Value::Mapping(material))].into_iter().collect())),
		..DecodeLibrary::default()
	};
	let root = Value::Sequence(vec![Value::from(lib), Value::Null, Value::Unset]);

	let stats = scan_stats(&root);
	assert_eq!(stats.sequences, 1);
	assert_eq!(stats.libraries, 1);
	assert_eq!(stats.mappings, 2);
	assert_eq!(stats.texts, 2);
	assert_eq!(stats.text_bytes, 6);
	assert_eq!(stats.raw_buffers, 1);
	assert_eq!(stats.numeric_buffers, 1);
	assert_eq!(stats.buffer_bytes, 26);
	assert_eq!(stats.nulls, 1);
	assert_eq!(stats.unsets, 1);
	assert_eq!(stats.max_depth, 5);
	assert_eq!(stats.values, 10);
}
