mod bytes;
mod decode;
mod encode;
mod error;
mod file;
mod retexture;
mod ser;
mod stats;
mod tag;
mod value;

/// Byte cursor and encode sinks.
pub use bytes::{ByteSink, ChunkSink, Cursor};
/// Decoding entry points and options.
pub use decode::{DecodeOptions, UnknownKeyPolicy, decode, decode_blob, decode_with};
/// Encoding entry points and options.
pub use encode::{EncodeOptions, encode, encode_chunks, encode_into};
/// Error and result aliases.
pub use error::{BlobError, Result};
/// Blob file reading and writing.
pub use file::{BlobFile, write_blob};
/// Material texture rewriting.
pub use retexture::{ExternalConverter, RetextureOptions, RetextureReport, TextureConverter, find_library, find_library_mut, retexture_materials};
/// Serde bridge into the value model.
pub use ser::{ValueSerializer, to_value};
/// Value graph census.
pub use stats::{BlobStats, scan_stats};
/// Wire tag and type-name registries.
pub use tag::{AbsentKind, ElementKind, ObjectKind, WireTag};
/// Runtime value types.
pub use value::{DecodeLibrary, Element, Mapping, NumericBuffer, Value};
