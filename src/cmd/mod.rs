/// Value tree printing command.
pub mod dump;
/// Blob summary command.
pub mod info;
/// Material texture conversion command.
pub mod retexture;
/// Shared CLI helpers.
pub(crate) mod util;
/// Re-encode equality check command.
pub mod verify;
