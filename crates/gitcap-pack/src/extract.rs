//! Filesystem shell around the scanner.

use crate::{locate_pack, PackError, Result};
use std::path::Path;

/// Outcome of one extraction, for operator display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractReport {
    /// Offset of the signature in the input file.
    pub offset: usize,
    /// The signature bytes as found at that offset.
    pub signature: [u8; 4],
    /// Declared pack format version.
    pub version: u32,
    /// Declared object count.
    pub object_count: u32,
    /// Size of the extracted payload in bytes.
    pub pack_size: usize,
}

/// Extracts the pack payload from a captured request file.
///
/// Reads the whole input into memory, locates the first pack signature and
/// writes the suffix from there verbatim to `output`. Nothing is written on
/// failure. Single-shot: any error is fatal to the run.
pub fn extract_pack_file(input: &Path, output: &Path) -> Result<ExtractReport> {
    if !input.exists() {
        return Err(PackError::NotFound {
            path: input.to_path_buf(),
        });
    }

    let data = std::fs::read(input)?;
    let payload = locate_pack(&data)?;

    std::fs::write(output, payload.bytes)?;

    tracing::debug!(
        input = %input.display(),
        offset = payload.offset,
        pack_size = payload.bytes.len(),
        "extracted pack payload"
    );

    let mut signature = [0u8; 4];
    signature.copy_from_slice(&payload.bytes[..4]);

    Ok(ExtractReport {
        offset: payload.offset,
        signature,
        version: payload.header.version,
        object_count: payload.header.object_count,
        pack_size: payload.bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PACK_SIGNATURE;

    #[test]
    fn test_extract_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("req.bin");
        let output = tmp.path().join("out.pack");

        // pkt-line prefix (20 bytes), then a 32-byte pack stream
        let mut pack = PACK_SIGNATURE.to_vec();
        pack.extend_from_slice(&2u32.to_be_bytes());
        pack.extend_from_slice(&5u32.to_be_bytes());
        pack.extend_from_slice(&[0u8; 20]);

        let mut body = b"0032want <sha>\n0000".to_vec();
        body.push(b'x');
        assert_eq!(body.len(), 20);
        body.extend_from_slice(&pack);
        std::fs::write(&input, &body).unwrap();

        let report = extract_pack_file(&input, &output).unwrap();
        assert_eq!(report.offset, 20);
        assert_eq!(&report.signature, PACK_SIGNATURE);
        assert_eq!(report.version, 2);
        assert_eq!(report.object_count, 5);
        assert_eq!(report.pack_size, 32);

        // Output is byte-identical to the suffix from the signature
        assert_eq!(std::fs::read(&output).unwrap(), pack);
    }

    #[test]
    fn test_extract_missing_input() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("absent.bin");
        let output = tmp.path().join("out.pack");

        let err = extract_pack_file(&input, &output).unwrap_err();
        assert!(matches!(err, PackError::NotFound { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_extract_no_signature_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("req.bin");
        let output = tmp.path().join("out.pack");
        std::fs::write(&input, b"0000just pkt-lines, no pack").unwrap();

        let err = extract_pack_file(&input, &output).unwrap_err();
        assert!(matches!(err, PackError::SignatureMissing { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_extract_truncated_header_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("req.bin");
        let output = tmp.path().join("out.pack");
        std::fs::write(&input, b"0000PACK\x00\x00\x00\x02").unwrap();

        let err = extract_pack_file(&input, &output).unwrap_err();
        assert!(matches!(err, PackError::TooShort { len: 8 }));
        assert!(!output.exists());
    }
}
