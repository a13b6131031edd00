use crate::blob::Value;

/// Per-kind census of a value graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlobStats {
	/// Total values visited, containers included.
	pub values: usize,
	/// Count of [`Value::Null`].
	pub nulls: usize,
	/// Count of [`Value::Unset`].
	pub unsets: usize,
	/// Count of [`Value::Bool`].
	pub bools: usize,
	/// Count of [`Value::Number`].
	pub numbers: usize,
	/// Count of [`Value::BigInteger`].
	pub big_integers: usize,
	/// Count of [`Value::Text`].
	pub texts: usize,
	/// Count of [`Value::Sequence`].
	pub sequences: usize,
	/// Count of [`Value::Mapping`].
	pub mappings: usize,
	/// Count of [`Value::Library`].
	pub libraries: usize,
	/// Count of [`Value::NumericBuffer`].
	pub numeric_buffers: usize,
	/// Count of [`Value::RawBuffer`].
	pub raw_buffers: usize,
	/// Deepest nesting level; a scalar top-level value has depth 1.
	pub max_depth: usize,
	/// Payload bytes across numeric and raw buffers.
	pub buffer_bytes: usize,
	/// UTF-8 bytes across text values.
	pub text_bytes: usize,
}

/// Walk a value graph and count every node.
///
/// Uses an explicit stack, so arbitrarily deep graphs do not grow the call stack.
pub fn scan_stats(root: &Value) -> BlobStats {
	let mut stats = BlobStats::default();
	let mut stack = vec![(root, 1_usize)];

	while let Some((value, depth)) = stack.pop() {
		stats.values += 1;
		stats.max_depth = stats.max_depth.max(depth);

		match value {
			Value::Null => stats.nulls += 1,
			Value::Unset => stats.unsets += 1,
			Value::Bool(_) => stats.bools += 1,
			Value::Number(_) => stats.numbers += 1,
			Value::BigInteger(_) => stats.big_integers += 1,
			Value::Text(text) => {
				stats.texts += 1;
				stats.text_bytes += text.len();
			}
			Value::Sequence(items) => {
				stats.sequences += 1;
				stack.extend(items.iter().map(|item| (item, depth + 1)));
			}
			Value::Mapping(map) => {
				stats.mappings += 1;
				stack.extend(map.iter().map(|(_, item)| (item, depth + 1)));
			}
			Value::Library(lib) => {
				stats.libraries += 1;
				stack.extend(lib.fields().filter_map(|(_, slot)| slot).map(|item| (item, depth + 1)));
			}
			Value::NumericBuffer(buf) => {
				stats.numeric_buffers += 1;
				stats.buffer_bytes += buf.bytes().len();
			}
			Value::RawBuffer(bytes) => {
				stats.raw_buffers += 1;
				stats.buffer_bytes += bytes.len();
			}
		}
	}

	stats
}

#[cfg(test)]
mod tests;
