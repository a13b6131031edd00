use assetblob::blob::{BlobError, DecodeOptions, Result};

/// Decode options selected by the shared `--lenient` flag.
pub(crate) fn decode_options(lenient: bool) -> DecodeOptions {
	if lenient { DecodeOptions::lenient() } else { DecodeOptions::default() }
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(|err| BlobError::Custom(format!("json: {err}")))?;
	println!("{text}");
	Ok(())
}

/// Truncate to `max_len` Unicode scalar values, marking the cut.
pub(crate) fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

/// Render up to `max` leading bytes as space-separated hex.
pub(crate) fn hex_preview(bytes: &[u8], max: usize) -> String {
	let mut out = bytes.iter().take(max).map(|byte| format!("{byte:02x}")).collect::<Vec<_>>().join(" ");
	if bytes.len() > max {
		out.push_str(" ..");
	}
	out
}

#[cfg(test)]
mod tests {
	use super::{hex_preview, truncate};

	#[test]
	fn truncate_counts_scalar_values() {
		assert_eq!(truncate("héllo", 5), "héllo");
		assert_eq!(truncate("héllo", 2), "hé...");
	}

	#[test]
	fn hex_preview_marks_cut() {
		assert_eq!(hex_preview(&[0x44, 0x44, 0x53], 8), "44 44 53");
		assert_eq!(hex_preview(&[1, 2, 3], 2), "01 02 ..");
		assert_eq!(hex_preview(&[], 2), "");
	}
}
