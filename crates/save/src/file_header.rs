// ---------------------------------------------------------------------------
// file_header – Snapshot header with magic bytes, version, and checksum
// ---------------------------------------------------------------------------
//
// Header format (24 bytes, fixed-size, little-endian):
//   [0..4]   Magic bytes: "TRAK" (0x5452414B)
//   [4..8]   Format version (u32)
//   [8..12]  Flags (u32: bit 0 = lz4 compressed)
//   [12..16] Uncompressed payload size (u32)
//   [16..20] Stored payload size (u32)
//   [20..24] xxHash32 checksum of the stored payload
//
// On save: encode extensions -> optionally compress -> prepend header
// On load: check magic -> check version -> validate checksum -> decompress

use xxhash_rust::xxh32::xxh32;

use crate::save_error::SaveError;

/// Magic bytes identifying a Trailcare session snapshot.
pub const MAGIC: [u8; 4] = *b"TRAK";

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 24;

/// Current header format version.
pub const HEADER_FORMAT_VERSION: u32 = 1;

/// Flag bit: the payload is lz4 block-compressed.
pub const FLAG_COMPRESSED: u32 = 1;

const XXHASH_SEED: u32 = 0;

/// Whether to lz4-compress the payload when wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    None,
    #[default]
    Lz4,
}

/// Parsed file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub format_version: u32,
    pub flags: u32,
    pub uncompressed_size: u32,
    pub payload_size: u32,
    pub checksum: u32,
}

impl FileHeader {
    pub fn is_compressed(&self) -> bool {
        self.flags & FLAG_COMPRESSED != 0
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&self.format_version.to_le_bytes());
        out.extend_from_slice(&self.flags.to_le_bytes());
        out.extend_from_slice(&self.uncompressed_size.to_le_bytes());
        out.extend_from_slice(&self.payload_size.to_le_bytes());
        out.extend_from_slice(&self.checksum.to_le_bytes());
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Header size fields are 32-bit.
pub(crate) fn size_field(len: usize) -> Result<u32, SaveError> {
    u32::try_from(len).map_err(|_| SaveError::TooLarge { size: len })
}

/// Wrap encoded snapshot data with a file header.
///
/// Returns bytes: [header (24 bytes)] ++ [payload], where the payload is
/// `data` itself or its lz4-compressed form. Fails with `TooLarge` if either
/// size does not fit the header.
pub fn wrap_with_header(data: &[u8], compression: Compression) -> Result<Vec<u8>, SaveError> {
    let uncompressed_size = size_field(data.len())?;
    let (flags, payload) = match compression {
        Compression::None => (0, data.to_vec()),
        Compression::Lz4 => (FLAG_COMPRESSED, lz4_flex::compress(data)),
    };

    let header = FileHeader {
        format_version: HEADER_FORMAT_VERSION,
        flags,
        uncompressed_size,
        payload_size: size_field(payload.len())?,
        checksum: xxh32(&payload, XXHASH_SEED),
    };

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    header.write_to(&mut out);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Parse and validate the file header from raw bytes.
///
/// Returns the header and the stored payload (still compressed if the
/// header says so). Bytes after the declared payload are ignored.
///
/// # Errors
///
/// - `BadMagic` if the bytes do not start with "TRAK"
/// - `Truncated` if the header or the declared payload is cut short
/// - `UnsupportedVersion` if the header comes from a newer build
/// - `ChecksumMismatch` if the payload was modified or damaged
pub fn unwrap_header(bytes: &[u8]) -> Result<(FileHeader, &[u8]), SaveError> {
    if bytes.len() >= MAGIC.len() && bytes[..MAGIC.len()] != MAGIC {
        let mut found = [0u8; 4];
        found.copy_from_slice(&bytes[..MAGIC.len()]);
        return Err(SaveError::BadMagic(found));
    }
    if bytes.len() < HEADER_SIZE {
        return Err(SaveError::Truncated {
            needed: HEADER_SIZE,
            available: bytes.len(),
        });
    }

    let header = FileHeader {
        format_version: read_u32(bytes, 4),
        flags: read_u32(bytes, 8),
        uncompressed_size: read_u32(bytes, 12),
        payload_size: read_u32(bytes, 16),
        checksum: read_u32(bytes, 20),
    };

    if header.format_version == 0 || header.format_version > HEADER_FORMAT_VERSION {
        return Err(SaveError::UnsupportedVersion {
            supported: HEADER_FORMAT_VERSION,
            found: header.format_version,
        });
    }

    let end = HEADER_SIZE + header.payload_size as usize;
    if bytes.len() < end {
        return Err(SaveError::Truncated {
            needed: end,
            available: bytes.len(),
        });
    }
    let payload = &bytes[HEADER_SIZE..end];

    let computed = xxh32(payload, XXHASH_SEED);
    if computed != header.checksum {
        return Err(SaveError::ChecksumMismatch {
            expected: header.checksum,
            computed,
        });
    }

    Ok((header, payload))
}

/// Undo the compression recorded in `header`, checking the result against the
/// declared uncompressed size.
pub fn decompress_payload(header: &FileHeader, payload: &[u8]) -> Result<Vec<u8>, SaveError> {
    let expected = header.uncompressed_size as usize;
    let data = if header.is_compressed() {
        lz4_flex::decompress(payload, expected)?
    } else {
        payload.to_vec()
    };

    if data.len() != expected {
        return Err(SaveError::Decompress(format!(
            "expected {expected} bytes after decompression, got {}",
            data.len()
        )));
    }
    Ok(data)
}

#[cfg(test)]
#[path = "file_header_tests.rs"]
mod tests;
