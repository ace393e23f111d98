//! Encoding preserving file I/O
//!
//! C# sources in the wild carry UTF-8 or UTF-16 BOMs, and editors get
//! upset when a tool silently re-encodes them. Reads probe the first
//! bytes for a BOM; writes re-apply exactly what was read.

use std::fs;
use std::path::Path;

use crate::error::{IoContext, NormalizerError, NormalizerResult};

/// Encodings recognized by the BOM probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

/// File content plus what is needed to write it back byte-faithfully.
#[derive(Debug, Clone)]
pub struct FileText {
    pub text: String,
    pub encoding: FileEncoding,
    pub has_bom: bool,
}

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Reads a file, probing the first bytes for a UTF-8 or UTF-16 BOM.
/// Files without a BOM are treated as UTF-8.
pub fn read_text(path: &Path) -> NormalizerResult<FileText> {
    let bytes = fs::read(path).with_io_context(&format!("could not read {}", path.display()))?;

    if bytes.starts_with(&UTF8_BOM) {
        return Ok(FileText {
            text: decode_utf8(&bytes[UTF8_BOM.len()..], path)?,
            encoding: FileEncoding::Utf8,
            has_bom: true,
        });
    }
    if bytes.starts_with(&UTF16_LE_BOM) {
        return Ok(FileText {
            text: decode_utf16(&bytes[2..], path, u16::from_le_bytes)?,
            encoding: FileEncoding::Utf16Le,
            has_bom: true,
        });
    }
    if bytes.starts_with(&UTF16_BE_BOM) {
        return Ok(FileText {
            text: decode_utf16(&bytes[2..], path, u16::from_be_bytes)?,
            encoding: FileEncoding::Utf16Be,
            has_bom: true,
        });
    }

    Ok(FileText {
        text: decode_utf8(&bytes, path)?,
        encoding: FileEncoding::Utf8,
        has_bom: false,
    })
}

/// Writes `text` with the encoding and BOM flag captured at read time.
pub fn write_text(
    path: &Path,
    text: &str,
    encoding: FileEncoding,
    has_bom: bool,
) -> NormalizerResult<()> {
    let mut bytes: Vec<u8> = Vec::with_capacity(text.len() + 3);
    match encoding {
        FileEncoding::Utf8 => {
            if has_bom {
                bytes.extend_from_slice(&UTF8_BOM);
            }
            bytes.extend_from_slice(text.as_bytes());
        }
        FileEncoding::Utf16Le => {
            if has_bom {
                bytes.extend_from_slice(&UTF16_LE_BOM);
            }
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
        }
        FileEncoding::Utf16Be => {
            if has_bom {
                bytes.extend_from_slice(&UTF16_BE_BOM);
            }
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_be_bytes());
            }
        }
    }
    fs::write(path, bytes).with_io_context(&format!("could not write {}", path.display()))
}

fn decode_utf8(bytes: &[u8], path: &Path) -> NormalizerResult<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| NormalizerError::Decode {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn decode_utf16(
    bytes: &[u8],
    path: &Path,
    combine: fn([u8; 2]) -> u16,
) -> NormalizerResult<String> {
    if bytes.len() % 2 != 0 {
        return Err(NormalizerError::Decode {
            file: path.to_path_buf(),
            message: "odd number of UTF-16 payload bytes".to_string(),
        });
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| NormalizerError::Decode {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_bytes(bytes: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Test.cs");
        fs::write(&path, bytes).unwrap();
        (dir, path)
    }

    fn round_trip(bytes: &[u8]) -> Vec<u8> {
        let (_dir, path) = write_bytes(bytes);
        let file = read_text(&path).unwrap();
        write_text(&path, &file.text, file.encoding, file.has_bom).unwrap();
        fs::read(&path).unwrap()
    }

    #[test]
    fn test_plain_utf8_without_bom() {
        let (_dir, path) = write_bytes("class C {}\n".as_bytes());
        let file = read_text(&path).unwrap();
        assert_eq!(file.text, "class C {}\n");
        assert_eq!(file.encoding, FileEncoding::Utf8);
        assert!(!file.has_bom);
    }

    #[test]
    fn test_utf8_bom_is_detected_and_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("class C {}\n".as_bytes());
        let (_dir, path) = write_bytes(&bytes);

        let file = read_text(&path).unwrap();
        assert_eq!(file.text, "class C {}\n");
        assert_eq!(file.encoding, FileEncoding::Utf8);
        assert!(file.has_bom);
    }

    #[test]
    fn test_utf16_le_round_trip() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "/// docé\nclass C {}\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }

        let (_dir, path) = write_bytes(&bytes);
        let file = read_text(&path).unwrap();
        assert_eq!(file.text, "/// docé\nclass C {}\n");
        assert_eq!(file.encoding, FileEncoding::Utf16Le);
        assert!(file.has_bom);

        assert_eq!(round_trip(&bytes), bytes);
    }

    #[test]
    fn test_utf16_be_round_trip() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "class C {}\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }

        let (_dir, path) = write_bytes(&bytes);
        let file = read_text(&path).unwrap();
        assert_eq!(file.text, "class C {}\n");
        assert_eq!(file.encoding, FileEncoding::Utf16Be);

        assert_eq!(round_trip(&bytes), bytes);
    }

    #[test]
    fn test_utf8_round_trips_are_byte_identical() {
        let plain = "/// <summary>Doc.</summary>\nclass C {}\n".as_bytes().to_vec();
        assert_eq!(round_trip(&plain), plain);

        let mut with_bom = vec![0xEF, 0xBB, 0xBF];
        with_bom.extend_from_slice(&plain);
        assert_eq!(round_trip(&with_bom), with_bom);
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let (_dir, path) = write_bytes(&[0x66, 0xFF, 0xFF, 0x66]);
        assert!(matches!(
            read_text(&path),
            Err(NormalizerError::Decode { .. })
        ));
    }

    #[test]
    fn test_truncated_utf16_payload_is_a_decode_error() {
        let (_dir, path) = write_bytes(&[0xFF, 0xFE, 0x41]);
        assert!(matches!(
            read_text(&path),
            Err(NormalizerError::Decode { .. })
        ));
    }
}
