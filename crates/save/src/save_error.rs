// ---------------------------------------------------------------------------
// SaveError: error types for snapshot and restore
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while producing or consuming a session snapshot.
#[derive(Debug)]
pub enum SaveError {
    /// I/O error while reading or writing snapshot bytes.
    Io(std::io::Error),
    /// The bytes do not start with the "TRAK" magic.
    BadMagic([u8; 4]),
    /// The header format version is not one this build reads.
    UnsupportedVersion { supported: u32, found: u32 },
    /// The stored payload does not match the header checksum.
    ChecksumMismatch { expected: u32, computed: u32 },
    /// A payload too large for the header's 32-bit size fields.
    TooLarge { size: usize },
    /// Fewer bytes than the header (or its declared payload) requires.
    Truncated { needed: usize, available: usize },
    /// lz4 decompression failed or produced the wrong size.
    Decompress(String),
    /// Bitcode decoding of the extension map failed.
    Decode(String),
    /// A required resource was missing from the ECS world.
    MissingResource(&'static str),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "I/O error: {e}"),
            SaveError::BadMagic(found) => {
                write!(f, "Not a Trailcare snapshot (magic bytes {found:02X?})")
            }
            SaveError::UnsupportedVersion { supported, found } => write!(
                f,
                "Unsupported snapshot version v{found}, this build reads up to v{supported}"
            ),
            SaveError::ChecksumMismatch { expected, computed } => write!(
                f,
                "Snapshot is corrupted: checksum mismatch (expected {expected:#010X}, got {computed:#010X})"
            ),
            SaveError::TooLarge { size } => write!(
                f,
                "Snapshot too large: {size} bytes exceeds the {} byte limit",
                u32::MAX
            ),
            SaveError::Truncated { needed, available } => write!(
                f,
                "Snapshot is truncated: need {needed} bytes, have {available}"
            ),
            SaveError::Decompress(msg) => write!(f, "Decompression error: {msg}"),
            SaveError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            SaveError::MissingResource(name) => {
                write!(f, "Missing required resource: {name}")
            }
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<bitcode::Error> for SaveError {
    fn from(e: bitcode::Error) -> Self {
        SaveError::Decode(e.to_string())
    }
}

impl From<lz4_flex::block::DecompressError> for SaveError {
    fn from(e: lz4_flex::block::DecompressError) -> Self {
        SaveError::Decompress(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_error_display_io() {
        let err = SaveError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let msg = format!("{err}");
        assert!(msg.contains("I/O error"), "got: {msg}");
        assert!(msg.contains("file not found"), "got: {msg}");
    }

    #[test]
    fn test_save_error_display_bad_magic() {
        let msg = SaveError::BadMagic(*b"MEGA").to_string();
        assert!(msg.contains("Not a Trailcare snapshot"), "got: {msg}");
        assert!(msg.contains("4D"), "got: {msg}");
    }

    #[test]
    fn test_save_error_display_version() {
        let msg = SaveError::UnsupportedVersion {
            supported: 1,
            found: 7,
        }
        .to_string();
        assert!(msg.contains("v7"), "got: {msg}");
        assert!(msg.contains("v1"), "got: {msg}");
    }

    #[test]
    fn test_save_error_display_truncated() {
        let msg = SaveError::Truncated {
            needed: 24,
            available: 3,
        }
        .to_string();
        assert!(msg.contains("need 24"), "got: {msg}");
        assert!(msg.contains("have 3"), "got: {msg}");
    }

    #[test]
    fn test_save_error_display_too_large() {
        let msg = SaveError::TooLarge { size: 5_000_000_000 }.to_string();
        assert!(msg.contains("5000000000 bytes"), "got: {msg}");
        assert!(msg.contains("4294967295"), "got: {msg}");
    }

    #[test]
    fn test_save_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let save_err: SaveError = io_err.into();
        assert!(matches!(save_err, SaveError::Io(_)));
        assert!(std::error::Error::source(&save_err).is_some());
    }

    #[test]
    fn test_save_error_from_bitcode() {
        let err = bitcode::decode::<u64>(&[]).unwrap_err();
        let save_err: SaveError = err.into();
        assert!(matches!(save_err, SaveError::Decode(_)));
        assert!(std::error::Error::source(&save_err).is_none());
    }
}
