//! Binary value codec for asset-viewer decode library blobs.

/// Wire registry, value model, encoder, decoder, and blob file tools.
pub mod blob;
