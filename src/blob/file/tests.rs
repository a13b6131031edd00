use super::{BlobFile, write_blob};
use crate::blob::{BlobError, DecodeOptions, Mapping, Value, encode};

fn sample() -> Value {
	let map: Mapping = [("name", Value::from("antharas")), ("buffer", Value::RawBuffer(vec![0; 64]))].into_iter().collect();
	Value::Mapping(map)
}

#[test]
fn writes_and_reopens_blob() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("plain.blob");
	let written = write_blob(&path, &sample()).expect("blob writes");

	let blob = BlobFile::open(&path).expect("blob opens");
	assert_eq!(blob.bytes().len(), written);
	assert_eq!(blob.decode(&DecodeOptions::default()).expect("blob decodes"), sample());
}

#[test]
fn file_bytes_are_the_bare_encoding() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("bare.blob");
	write_blob(&path, &sample()).expect("blob writes");

	assert_eq!(std::fs::read(&path).expect("file reads"), encode(&sample()).expect("sample encodes"));
}

#[test]
fn framed_input_is_not_unwrapped() {
	// zstd frame magic; the leading byte is not a registered tag.
	let blob = BlobFile::from_bytes(vec![0x28, 0xB5, 0x2F, 0xFD, 0x00]);
	let err = blob.decode(&DecodeOptions::default()).expect_err("framed bytes should fail");
	assert!(matches!(err, BlobError::UnknownTypeTag { tag: 0x28, at: 0 }));
}

#[test]
fn missing_file_is_io_error() {
	let dir = tempfile::tempdir().expect("tempdir");
	let err = BlobFile::open(dir.path().join("absent.blob")).err().expect("open should fail");
	assert!(matches!(err, BlobError::Io(_)));
}
