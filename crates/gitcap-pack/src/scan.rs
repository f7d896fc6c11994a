//! Pure byte-signature scanning.
//!
//! Locating the pack stream is a forward scan for a fixed 4-byte magic; it
//! is kept free of any file I/O so it can be tested on plain buffers.

use crate::{PackError, Result};

/// Magic bytes at the start of a pack stream.
pub const PACK_SIGNATURE: &[u8; 4] = b"PACK";
/// Signature plus 4-byte version plus 4-byte object count.
pub const PACK_HEADER_LEN: usize = 12;
/// How much of a signature-less buffer the diagnostic hex dump shows.
const DUMP_PREFIX_LEN: usize = 100;

/// The fixed-width header fields following the signature.
///
/// Reported for diagnostics only; no value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackHeader {
    /// Declared pack format version (big-endian bytes 4..8).
    pub version: u32,
    /// Declared object count (big-endian bytes 8..12).
    pub object_count: u32,
}

impl PackHeader {
    fn read(payload: &[u8]) -> Self {
        let mut version = [0u8; 4];
        version.copy_from_slice(&payload[4..8]);
        let mut object_count = [0u8; 4];
        object_count.copy_from_slice(&payload[8..12]);

        Self {
            version: u32::from_be_bytes(version),
            object_count: u32::from_be_bytes(object_count),
        }
    }
}

/// A pack payload located inside a larger capture buffer.
#[derive(Debug, Clone, Copy)]
pub struct PackPayload<'a> {
    /// Byte offset of the signature in the scanned buffer.
    pub offset: usize,
    /// Declared header fields.
    pub header: PackHeader,
    /// Signature through end of buffer, verbatim.
    pub bytes: &'a [u8],
}

/// Forward scan for the first occurrence of `magic` in `buf`.
#[must_use]
pub fn find_signature(buf: &[u8], magic: &[u8]) -> Option<usize> {
    if magic.is_empty() {
        return Some(0);
    }
    buf.windows(magic.len()).position(|window| window == magic)
}

/// Locates the pack payload in a captured request body.
///
/// The payload is the suffix from the first `PACK` signature to the end of
/// the buffer. At least the 12 header bytes must remain from that point.
pub fn locate_pack(buf: &[u8]) -> Result<PackPayload<'_>> {
    let offset =
        find_signature(buf, PACK_SIGNATURE).ok_or_else(|| PackError::SignatureMissing {
            file_size: buf.len(),
            prefix_hex: hex::encode(&buf[..buf.len().min(DUMP_PREFIX_LEN)]),
        })?;

    let bytes = &buf[offset..];
    if bytes.len() < PACK_HEADER_LEN {
        return Err(PackError::TooShort { len: bytes.len() });
    }

    Ok(PackPayload {
        offset,
        header: PackHeader::read(bytes),
        bytes,
    })
}
