use num_bigint::BigInt;

use crate::blob::{BlobError, ElementKind, Result};

/// Runtime value carried by a blob.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Never-assigned marker, distinct from [`Value::Null`].
	Unset,
	/// Boolean scalar.
	Bool(bool),
	/// Double-precision number; the only numeric scalar.
	Number(f64),
	/// Arbitrary-precision signed integer.
	BigInteger(BigInt),
	/// UTF-8 text.
	Text(String),
	/// Ordered list.
	Sequence(Vec<Value>),
	/// Insertion-ordered string-keyed mapping.
	Mapping(Mapping),
	/// Fixed-shape decode library record.
	Library(Box<DecodeLibrary>),
	/// Typed numeric buffer.
	NumericBuffer(NumericBuffer),
	/// Untyped byte buffer.
	RawBuffer(Vec<u8>),
}

impl Value {
	/// Stable lowercase label for the value kind.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Unset => "unset",
			Self::Bool(_) => "bool",
			Self::Number(_) => "number",
			Self::BigInteger(_) => "bigint",
			Self::Text(_) => "text",
			Self::Sequence(_) => "sequence",
			Self::Mapping(_) => "mapping",
			Self::Library(_) => "library",
			Self::NumericBuffer(_) => "numeric_buffer",
			Self::RawBuffer(_) => "raw_buffer",
		}
	}

	/// True for both absent variants.
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Null | Self::Unset)
	}

	/// Boolean payload, if any.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Number payload, if any.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(v) => Some(*v),
			_ => None,
		}
	}

	/// Big integer payload, if any.
	pub fn as_bigint(&self) -> Option<&BigInt> {
		match self {
			Self::BigInteger(v) => Some(v),
			_ => None,
		}
	}

	/// Text payload, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(v) => Some(v),
			_ => None,
		}
	}

	/// Sequence items, if any.
	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Self::Sequence(items) => Some(items),
			_ => None,
		}
	}

	/// Mapping payload, if any.
	pub fn as_mapping(&self) -> Option<&Mapping> {
		match self {
			Self::Mapping(map) => Some(map),
			_ => None,
		}
	}

	/// Mutable mapping payload, if any.
	pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
		match self {
			Self::Mapping(map) => Some(map),
			_ => None,
		}
	}

	/// Decode library record, if any.
	pub fn as_library(&self) -> Option<&DecodeLibrary> {
		match self {
			Self::Library(lib) => Some(&**lib),
			_ => None,
		}
	}

	/// Mutable decode library record, if any.
	pub fn as_library_mut(&mut self) -> Option<&mut DecodeLibrary> {
		match self {
			Self::Library(lib) => Some(&mut **lib),
			_ => None,
		}
	}

	/// Numeric buffer payload, if any.
	pub fn as_numeric_buffer(&self) -> Option<&NumericBuffer> {
		match self {
			Self::NumericBuffer(buf) => Some(buf),
			_ => None,
		}
	}

	/// Raw buffer bytes, if any.
	pub fn as_raw_buffer(&self) -> Option<&[u8]> {
		match self {
			Self::RawBuffer(bytes) => Some(bytes),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<BigInt> for Value {
	fn from(value: BigInt) -> Self {
		Self::BigInteger(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::Sequence(value)
	}
}

impl From<Mapping> for Value {
	fn from(value: Mapping) -> Self {
		Self::Mapping(value)
	}
}

impl From<DecodeLibrary> for Value {
	fn from(value: DecodeLibrary) -> Self {
		Self::Library(Box::new(value))
	}
}

impl From<NumericBuffer> for Value {
	fn from(value: NumericBuffer) -> Self {
		Self::NumericBuffer(value)
	}
}

/// String-keyed mapping that keeps insertion order and unique keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
	entries: Vec<(String, Value)>,
}

impl Mapping {
	/// Create an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty mapping with room for `capacity` entries.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: Vec::with_capacity(capacity),
		}
	}

	/// Insert or replace an entry, returning the previous value.
	///
	/// A replaced key keeps its original position.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
		let key = key.into();
		if let Some(slot) = self.get_mut(&key) {
			return Some(std::mem::replace(slot, value));
		}
		self.entries.push((key, value));
		None
	}

	/// Value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Mutable value stored under `key`.
	pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
		self.entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// True when `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Remove an entry, preserving the order of the rest.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		let idx = self.entries.iter().position(|(k, _)| k == key)?;
		Some(self.entries.remove(idx).1)
	}

	/// Entry count.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Iterate entries mutably in insertion order.
	pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> {
		self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(k, _)| k.as_str())
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for Mapping {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		let mut map = Self::new();
		for (key, value) in iter {
			map.insert(key, value);
		}
		map
	}
}

impl IntoIterator for Mapping {
	type Item = (String, Value);
	type IntoIter = std::vec::IntoIter<(String, Value)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

/// Rust scalar that can back a [`NumericBuffer`].
pub trait Element: bytemuck::Pod {
	/// Registered element kind for this scalar.
	const KIND: ElementKind;
}

macro_rules! impl_element {
	($($ty:ty => $kind:ident),* $(,)?) => {
		$(impl Element for $ty {
			const KIND: ElementKind = ElementKind::$kind;
		})*
	};
}

impl_element!(
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	f32 => F32,
	f64 => F64,
);

/// Homogeneous numeric array stored as raw bytes in host-native element order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericBuffer {
	kind: ElementKind,
	bytes: Vec<u8>,
}

impl NumericBuffer {
	/// Wrap raw element bytes, rejecting lengths that split an element.
	pub fn from_bytes(kind: ElementKind, bytes: Vec<u8>) -> Result<Self> {
		if bytes.len() % kind.width() != 0 {
			return Err(BlobError::MisalignedNumericBuffer {
				kind: kind.type_name(),
				len: bytes.len(),
				width: kind.width(),
			});
		}
		Ok(Self { kind, bytes })
	}

	/// Copy a typed slice into a buffer.
	pub fn from_slice<T: Element>(items: &[T]) -> Self {
		Self {
			kind: T::KIND,
			bytes: bytemuck::cast_slice(items).to_vec(),
		}
	}

	/// Read elements back as `T`, `None` when `T` does not match the buffer kind.
	pub fn to_vec<T: Element>(&self) -> Option<Vec<T>> {
		if T::KIND != self.kind {
			return None;
		}
		Some(self.bytes.chunks_exact(self.kind.width()).map(bytemuck::pod_read_unaligned).collect())
	}

	/// Element kind.
	pub fn kind(&self) -> ElementKind {
		self.kind
	}

	/// Element count.
	pub fn len(&self) -> usize {
		self.bytes.len() / self.kind.width()
	}

	/// True when the buffer holds no elements.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Raw element bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Consume the buffer, returning raw element bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}
}

/// Fixed-shape record persisted by the asset pipeline.
///
/// Every field is optional; `None` is the default for fields missing from a
/// stream and is written back as an unset marker. A field holding
/// `Some(Value::Unset)` encodes identically and compares equal to `None`.
#[derive(Debug, Clone, Default)]
pub struct DecodeLibrary {
	/// Library display name.
	pub name: Option<Value>,
	/// Whether mipmaps are decoded.
	pub load_mipmaps: Option<Value>,
	/// Anisotropy level applied to textures.
	pub anisotropy: Option<Value>,
	/// Whether DDS textures can be consumed directly.
	pub supports_dds: Option<Value>,
	/// Map sector coordinates.
	pub sector: Option<Value>,
	/// Whether zone bounds helpers are drawn.
	pub helpers_zone_bounds: Option<Value>,
	/// BSP tree nodes.
	pub bsp_nodes: Option<Value>,
	/// BSP collision geometry.
	pub bsp_colliders: Option<Value>,
	/// BSP leaves.
	pub bsp_leaves: Option<Value>,
	/// BSP zones.
	pub bsp_zones: Option<Value>,
	/// Zone lookup table for BSP leaves.
	pub bsp_zone_index_map: Option<Value>,
	/// Geometry decode info keyed by geometry name.
	pub geometries: Option<Value>,
	/// Placed geometry instances.
	pub geometry_instances: Option<Value>,
	/// Material decode info keyed by material name.
	pub materials: Option<Value>,
	/// Material modifier decode info.
	pub material_modifiers: Option<Value>,
}

impl DecodeLibrary {
	/// Wire keys in declaration order.
	pub const FIELDS: [&'static str; 15] = [
		"name",
		"loadMipmaps",
		"anisotropy",
		"supportsDDS",
		"sector",
		"helpersZoneBounds",
		"bspNodes",
		"bspColliders",
		"bspLeaves",
		"bspZones",
		"bspZoneIndexMap",
		"geometries",
		"geometryInstances",
		"materials",
		"materialModifiers",
	];

	fn slots(&self) -> [&Option<Value>; 15] {
		[
			&self.name,
			&self.load_mipmaps,
			&self.anisotropy,
			&self.supports_dds,
			&self.sector,
			&self.helpers_zone_bounds,
			&self.bsp_nodes,
			&self.bsp_colliders,
			&self.bsp_leaves,
			&self.bsp_zones,
			&self.bsp_zone_index_map,
			&self.geometries,
			&self.geometry_instances,
			&self.materials,
			&self.material_modifiers,
		]
	}

	fn slots_mut(&mut self) -> [&mut Option<Value>; 15] {
		[
			&mut self.name,
			&mut self.load_mipmaps,
			&mut self.anisotropy,
			&mut self.supports_dds,
			&mut self.sector,
			&mut self.helpers_zone_bounds,
			&mut self.bsp_nodes,
			&mut self.bsp_colliders,
			&mut self.bsp_leaves,
			&mut self.bsp_zones,
			&mut self.bsp_zone_index_map,
			&mut self.geometries,
			&mut self.geometry_instances,
			&mut self.materials,
			&mut self.material_modifiers,
		]
	}

	/// Look up a field by wire key; outer `None` means the key is not a field.
	pub fn field(&self, key: &str) -> Option<&Option<Value>> {
		let idx = Self::FIELDS.iter().position(|name| *name == key)?;
		self.slots().into_iter().nth(idx)
	}

	/// Mutable lookup by wire key.
	pub fn field_mut(&mut self, key: &str) -> Option<&mut Option<Value>> {
		let idx = Self::FIELDS.iter().position(|name| *name == key)?;
		self.slots_mut().into_iter().nth(idx)
	}

	/// Iterate `(wire key, field)` pairs in declaration order.
	pub fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&Value>)> {
		Self::FIELDS.into_iter().zip(self.slots()).map(|(key, slot)| (key, slot.as_ref()))
	}

	/// Number of fields currently holding a value other than unset.
	pub fn populated(&self) -> usize {
		self.fields().filter(|(_, slot)| present(*slot).is_some()).count()
	}
}

/// Collapse the unset marker into an empty field.
fn present(slot: Option<&Value>) -> Option<&Value> {
	slot.filter(|value| !matches!(value, Value::Unset))
}

impl PartialEq for DecodeLibrary {
	fn eq(&self, other: &Self) -> bool {
		self.fields().zip(other.fields()).all(|((_, left), (_, right))| present(left) == present(right))
	}
}
