use std::path::PathBuf;

use assetblob::blob::{BlobError, BlobFile, Result, encode};

use crate::cmd::util::decode_options;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Drop unknown decode library keys instead of failing.
	#[arg(long)]
	pub lenient: bool,
}

/// Decode, re-encode, and require byte-identical output.
pub fn run(args: Args) -> Result<()> {
	let Args { path, lenient } = args;

	let blob = BlobFile::open(&path)?;
	let value = blob.decode(&decode_options(lenient))?;
	let reencoded = encode(&value)?;

	let original = blob.bytes();
	if let Some(at) = first_difference(original, &reencoded) {
		return Err(BlobError::RoundTripMismatch {
			at,
			original_len: original.len(),
			reencoded_len: reencoded.len(),
		});
	}

	println!("path: {}", path.display());
	println!("bytes: {}", original.len());
	println!("round_trip: ok");
	Ok(())
}

fn first_difference(left: &[u8], right: &[u8]) -> Option<usize> {
	let common = left.iter().zip(right).position(|(a, b)| a != b);
	match common {
		Some(at) => Some(at),
		None if left.len() != right.len() => Some(left.len().min(right.len())),
		None => None,
	}
}
