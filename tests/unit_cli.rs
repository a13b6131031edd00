#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use assetblob::blob::{BlobFile, DecodeLibrary, DecodeOptions, Mapping, Value, find_library, write_blob};

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_assetblob")).args(args).output().expect("command executes")
}

fn run_ok(args: &[&str]) -> String {
	let output = run(args);
	assert!(
		output.status.success(),
		"assetblob failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

fn sample_library() -> Value {
	let material = |texture_type: &str, bytes: &[u8]| {
		Value::Mapping([("textureType", Value::from(texture_type)), ("buffer", Value::RawBuffer(bytes.to_vec()))].into_iter().collect())
	};
	let materials: Mapping = [("stone", material("dds", b"DDS stone")), ("grass", material("png", b"PNG grass"))].into_iter().collect();
	let lib = DecodeLibrary {
		name: Some(Value::from("antharas")),
		materials: Some(Value::Mapping(materials)),
		..DecodeLibrary::default()
	};
	Value::Mapping([("lib", Value::from(lib))].into_iter().collect())
}

fn write_sample(dir: &Path, name: &str) -> PathBuf {
	let path = dir.join(name);
	write_blob(&path, &sample_library()).expect("sample blob writes");
	path
}

#[test]
fn info_json_reports_library_summary() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_sample(dir.path(), "sample.blob");
	let stdout = run_ok(&["info", path.to_str().expect("utf-8 path"), "--json"]);
	let json: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be valid json");

	assert_eq!(json["bytes"], std::fs::metadata(&path).expect("blob exists").len());
	assert_eq!(json["top_level"], "mapping");
	assert_eq!(json["library"]["name"], "antharas");
	assert_eq!(json["library"]["materials"], 2);
	assert_eq!(json["stats"]["kinds"]["raw_buffer"], 2);
}

#[test]
fn verify_accepts_canonical_blob() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_sample(dir.path(), "sample.blob");
	let stdout = run_ok(&["verify", path.to_str().expect("utf-8 path")]);
	assert!(stdout.contains("round_trip: ok"));
}

#[test]
fn verify_rejects_non_canonical_bool_byte() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("bool.blob");
	std::fs::write(&path, [b'?', 7]).expect("blob writes");

	let output = run(&["verify", path.to_str().expect("utf-8 path")]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("round trip mismatch"));
}

#[test]
fn dump_prints_value_tree() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_sample(dir.path(), "sample.blob");
	let stdout = run_ok(&["dump", path.to_str().expect("utf-8 path"), "--max-items", "1"]);

	assert!(stdout.contains("lib = DecodeLibrary {"));
	assert!(stdout.contains("name = \"antharas\""));
	assert!(stdout.contains("... 1 more entries"));
}

#[test]
fn bad_tag_exits_with_error() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("bad.blob");
	std::fs::write(&path, [0xFF]).expect("blob writes");

	let output = run(&["info", path.to_str().expect("utf-8 path")]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: unknown type tag 0xff"));
}

#[test]
fn missing_input_exits_with_error() {
	let dir = tempfile::tempdir().expect("tempdir");
	let missing = dir.path().join("missing.blob");
	let output = run(&["retexture", missing.to_str().expect("utf-8 path"), "out.blob"]);
	assert_eq!(output.status.code(), Some(1));
}

#[cfg(unix)]
#[test]
fn retexture_rewrites_matching_materials() {
	let dir = tempfile::tempdir().expect("tempdir");
	let input = write_sample(dir.path(), "in.blob");
	let output = dir.path().join("out.blob");

	let stdout = run_ok(&[
		"retexture",
		input.to_str().expect("utf-8 path"),
		output.to_str().expect("utf-8 path"),
		"--program",
		"cp",
	]);
	assert!(stdout.contains("converted: 1"));
	assert!(stdout.contains("skipped: 1"));

	let blob = BlobFile::open(&output).expect("output opens");
	assert_eq!(blob.bytes().first(), Some(&b'O'), "output should be a bare blob");
	let value = blob.decode(&DecodeOptions::default()).expect("output decodes");
	let materials = find_library(&value)
		.and_then(|lib| lib.materials.as_ref())
		.and_then(Value::as_mapping)
		.expect("materials survive");
	let stone = materials.get("stone").and_then(Value::as_mapping).expect("stone survives");
	assert_eq!(stone.get("textureType"), Some(&Value::from("png")));
	assert_eq!(stone.get("buffer"), Some(&Value::RawBuffer(b"DDS stone".to_vec())));
}

#[cfg(unix)]
#[test]
fn retexture_fails_when_converter_fails() {
	let dir = tempfile::tempdir().expect("tempdir");
	let input = write_sample(dir.path(), "in.blob");
	let output = dir.path().join("out.blob");

	let result = run(&[
		"retexture",
		input.to_str().expect("utf-8 path"),
		output.to_str().expect("utf-8 path"),
		"--program",
		"false",
	]);
	assert_eq!(result.status.code(), Some(1));
	assert!(!output.exists(), "no output should be written on failure");
}
