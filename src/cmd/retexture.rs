use std::path::PathBuf;

use assetblob::blob::{BlobError, BlobFile, ExternalConverter, RetextureOptions, Result, find_library_mut, retexture_materials, write_blob};

use crate::cmd::util::decode_options;

#[derive(clap::Args)]
pub struct Args {
	/// Blob to read.
	pub input: PathBuf,
	/// Blob to write.
	pub output: PathBuf,
	/// `textureType` marker selecting materials to convert.
	#[arg(long, default_value = "dds")]
	pub from: String,
	/// `textureType` marker written after conversion.
	#[arg(long, default_value = "png")]
	pub to: String,
	/// Converter invoked as `<program> <input-file> <output-file>`.
	#[arg(long, default_value = "convert")]
	pub program: String,
	/// Drop unknown decode library keys instead of failing.
	#[arg(long)]
	pub lenient: bool,
}

/// Convert matching material textures and write the rewritten blob.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		output,
		from,
		to,
		program,
		lenient,
	} = args;

	let blob = BlobFile::open(&input)?;
	let mut value = blob.decode(&decode_options(lenient))?;
	let lib = find_library_mut(&mut value).ok_or(BlobError::LibraryNotFound)?;

	let options = RetextureOptions {
		from_format: from,
		to_format: to,
	};
	let mut converter = ExternalConverter::new(program);
	let report = retexture_materials(lib, &options, &mut converter)?;

	let written = write_blob(&output, &value)?;
	tracing::info!(
		input = %input.display(),
		output = %output.display(),
		converted = report.converted.len(),
		skipped = report.skipped,
		"retexture finished"
	);

	println!("input: {}", input.display());
	println!("output: {}", output.display());
	println!("converted: {}", report.converted.len());
	for name in &report.converted {
		println!("  {name}");
	}
	println!("skipped: {}", report.skipped);
	println!("bytes_written: {written}");
	Ok(())
}
