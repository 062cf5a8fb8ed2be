use super::*;

#[test]
fn test_wrap_and_unwrap_uncompressed() {
    let data = b"ledger and progress bytes";
    let wrapped = wrap_with_header(data, Compression::None).unwrap();

    assert_eq!(&wrapped[..4], b"TRAK");
    assert_eq!(wrapped.len(), HEADER_SIZE + data.len());

    let (header, payload) = unwrap_header(&wrapped).expect("unwrap should succeed");
    assert_eq!(header.format_version, HEADER_FORMAT_VERSION);
    assert!(!header.is_compressed());
    assert_eq!(header.uncompressed_size, data.len() as u32);
    assert_eq!(header.payload_size, data.len() as u32);
    assert_eq!(payload, data);
    assert_eq!(decompress_payload(&header, payload).unwrap(), data);
}

#[test]
fn test_compressed_payload_restores_original() {
    let data: Vec<u8> = b"Plastic bottles - Namche Bazaar;".repeat(200);
    let wrapped = wrap_with_header(&data, Compression::Lz4).unwrap();

    let (header, payload) = unwrap_header(&wrapped).expect("unwrap should succeed");
    assert!(header.is_compressed());
    assert_eq!(header.flags & FLAG_COMPRESSED, FLAG_COMPRESSED);
    assert_eq!(header.uncompressed_size, data.len() as u32);
    assert!(payload.len() < data.len());

    let restored = decompress_payload(&header, payload).expect("decompress should succeed");
    assert_eq!(restored, data);
}

#[test]
fn test_empty_payload() {
    let wrapped = wrap_with_header(b"", Compression::None).unwrap();
    assert_eq!(wrapped.len(), HEADER_SIZE);

    let (header, payload) = unwrap_header(&wrapped).unwrap();
    assert_eq!(header.uncompressed_size, 0);
    assert!(payload.is_empty());
}

#[test]
fn test_bad_magic_rejected() {
    let mut wrapped = wrap_with_header(b"payload", Compression::None).unwrap();
    wrapped[..4].copy_from_slice(b"MEGA");

    match unwrap_header(&wrapped) {
        Err(SaveError::BadMagic(found)) => assert_eq!(&found, b"MEGA"),
        other => panic!("expected BadMagic, got {other:?}"),
    }
}

#[test]
fn test_short_input_is_truncated() {
    assert!(matches!(
        unwrap_header(b""),
        Err(SaveError::Truncated {
            needed: HEADER_SIZE,
            available: 0
        })
    ));
    assert!(matches!(
        unwrap_header(b"TRAK\x01\x00"),
        Err(SaveError::Truncated { available: 6, .. })
    ));
}

#[test]
fn test_truncated_payload_detected() {
    let wrapped = wrap_with_header(b"twenty bytes of data", Compression::None).unwrap();
    let cut = &wrapped[..wrapped.len() - 5];

    assert!(matches!(
        unwrap_header(cut),
        Err(SaveError::Truncated { needed, available }) if needed == wrapped.len() && available == cut.len()
    ));
}

#[test]
fn test_corrupted_payload_fails_checksum() {
    let mut wrapped = wrap_with_header(b"test payload", Compression::None).unwrap();
    let last = wrapped.len() - 1;
    wrapped[last] ^= 0xFF;

    let err = unwrap_header(&wrapped).unwrap_err();
    assert!(matches!(err, SaveError::ChecksumMismatch { .. }));
    assert!(err.to_string().contains("checksum mismatch"), "got: {err}");
}

#[test]
fn test_future_version_rejected() {
    let mut wrapped = wrap_with_header(b"test payload", Compression::None).unwrap();
    wrapped[4..8].copy_from_slice(&999u32.to_le_bytes());

    assert!(matches!(
        unwrap_header(&wrapped),
        Err(SaveError::UnsupportedVersion { found: 999, .. })
    ));
}

#[test]
fn test_version_zero_rejected() {
    let mut wrapped = wrap_with_header(b"test payload", Compression::None).unwrap();
    wrapped[4..8].copy_from_slice(&0u32.to_le_bytes());

    assert!(matches!(
        unwrap_header(&wrapped),
        Err(SaveError::UnsupportedVersion { found: 0, .. })
    ));
}

#[test]
fn test_trailing_bytes_ignored() {
    let mut wrapped = wrap_with_header(b"payload", Compression::None).unwrap();
    wrapped.extend_from_slice(b"garbage");

    let (_, payload) = unwrap_header(&wrapped).unwrap();
    assert_eq!(payload, b"payload");
}

#[test]
fn test_wrong_uncompressed_size_fails_decompression() {
    let data = b"abcdefabcdefabcdefabcdef".to_vec();
    let mut wrapped = wrap_with_header(&data, Compression::None).unwrap();
    wrapped[12..16].copy_from_slice(&100u32.to_le_bytes());

    let (header, payload) = unwrap_header(&wrapped).unwrap();
    assert!(matches!(
        decompress_payload(&header, payload),
        Err(SaveError::Decompress(_))
    ));
}

#[test]
fn test_garbage_compressed_payload_fails_decompression() {
    let garbage = [0xF0u8, 0xFF, 0xFF, 0xFF, 0x01, 0x02];
    let header = FileHeader {
        format_version: HEADER_FORMAT_VERSION,
        flags: FLAG_COMPRESSED,
        uncompressed_size: 64,
        payload_size: garbage.len() as u32,
        checksum: xxh32(&garbage, 0),
    };

    assert!(matches!(
        decompress_payload(&header, &garbage),
        Err(SaveError::Decompress(_))
    ));
}

#[test]
fn test_size_field_rejects_oversized_lengths() {
    assert_eq!(size_field(0).unwrap(), 0);
    assert_eq!(size_field(u32::MAX as usize).unwrap(), u32::MAX);

    let too_big = u32::MAX as usize + 1;
    assert!(matches!(
        size_field(too_big),
        Err(SaveError::TooLarge { size }) if size == too_big
    ));
}
