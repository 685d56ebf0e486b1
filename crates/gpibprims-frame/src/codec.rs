use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};

/// Escape byte reserved by the bridge protocol.
pub const ESC: u8 = 0x1b;

/// Carriage return; terminates a command unless escaped.
pub const CR: u8 = 0x0d;

/// Line feed; terminates a command unless escaped.
pub const LF: u8 = 0x0a;

/// Escape a payload into `dst`.
///
/// Substitution rules, in order:
/// - ESC → ESC ESC (first, so inserted escape bytes are never re-escaped)
/// - CR  → ESC CR
/// - LF  → ESC LF
///
/// The single pass below is byte-for-byte equivalent to applying the rules
/// in that order.
pub fn escape_into(payload: &[u8], dst: &mut BytesMut) {
    dst.reserve(payload.len() + 1);
    for &byte in payload {
        match byte {
            ESC | CR | LF => {
                dst.put_u8(ESC);
                dst.put_u8(byte);
            }
            other => dst.put_u8(other),
        }
    }
}

/// Encode a data frame into `dst`: escaped payload plus one LF terminator.
///
/// Wire format:
/// ```text
/// ┌────────────────────────────┬──────────────┐
/// │ Escaped payload            │ LF (1B)      │
/// │ (reserved bytes doubled)   │ unescaped    │
/// └────────────────────────────┴──────────────┘
/// ```
/// The terminator is appended after escaping and is never itself escaped,
/// even when the payload ends in LF. An empty payload encodes to just the
/// terminator.
pub fn encode_data(payload: &[u8], dst: &mut BytesMut) {
    escape_into(payload, dst);
    dst.put_u8(LF);
}

/// Reverse [`escape_into`]: collapse every ESC pair to its literal byte.
///
/// Exact inverse of the escape rules (undoing LF, then CR, then ESC
/// collapses to one pass over escape pairs). A dangling ESC at the end of
/// the input is a [`FrameError::TruncatedEscape`].
pub fn unescape(escaped: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(escaped.len());
    let mut pos = 0;
    while pos < escaped.len() {
        let byte = escaped[pos];
        if byte == ESC {
            match escaped.get(pos + 1) {
                Some(&literal) => {
                    out.push(literal);
                    pos += 2;
                }
                None => return Err(FrameError::TruncatedEscape { position: pos }),
            }
        } else {
            out.push(byte);
            pos += 1;
        }
    }
    Ok(out)
}

/// Validate that `text` is pure ASCII and return its bytes.
///
/// Fails on the first offending character, before any bytes reach a
/// transport.
pub fn ensure_ascii(text: &str) -> Result<&[u8]> {
    let bytes = text.as_bytes();
    if let Some(position) = bytes.iter().position(|byte| !byte.is_ascii()) {
        return Err(FrameError::NotAscii {
            byte: bytes[position],
            position,
        });
    }
    Ok(bytes)
}

/// Decode an ASCII response line into a `String`.
///
/// A non-ASCII byte is an error, never a lossy substitution.
pub fn decode_ascii(data: &[u8]) -> Result<String> {
    if let Some(position) = data.iter().position(|byte| !byte.is_ascii()) {
        return Err(FrameError::NotAscii {
            byte: data[position],
            position,
        });
    }
    Ok(data.iter().map(|&byte| byte as char).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(payload: &[u8]) -> Vec<u8> {
        let mut buf = BytesMut::new();
        escape_into(payload, &mut buf);
        buf.to_vec()
    }

    fn framed(payload: &[u8]) -> Vec<u8> {
        let mut buf = BytesMut::new();
        encode_data(payload, &mut buf);
        buf.to_vec()
    }

    #[test]
    fn test_escape_doubles_reserved_bytes() {
        assert_eq!(escaped(b"\x1b"), b"\x1b\x1b");
        assert_eq!(escaped(b"\r"), b"\x1b\r");
        assert_eq!(escaped(b"\n"), b"\x1b\n");
    }

    #[test]
    fn test_escape_passes_other_bytes_through() {
        assert_eq!(escaped(b"hello"), b"hello");
        assert_eq!(escaped(&[0x00, 0x88, 0xff]), vec![0x00, 0x88, 0xff]);
    }

    #[test]
    fn test_escape_worked_example() {
        // "A<ESC>B<CR>C<LF>D" framed for the wire.
        assert_eq!(framed(b"A\x1bB\rC\nD"), b"A\x1b\x1bB\x1b\rC\x1b\nD\n");
    }

    #[test]
    fn test_empty_payload_encodes_to_bare_terminator() {
        assert_eq!(framed(b""), b"\n");
    }

    #[test]
    fn test_terminator_never_escaped() {
        // Payload ending in LF: the payload LF is escaped, the appended
        // terminator is not.
        let frame = framed(b"data\n");
        assert_eq!(frame, b"data\x1b\n\n");
        assert_eq!(frame.last(), Some(&LF));
        // Exactly one unescaped trailing LF: the byte before it completes
        // an escape pair or is ordinary data.
        assert_eq!(frame[frame.len() - 2], LF);
        assert_eq!(frame[frame.len() - 3], ESC);
    }

    #[test]
    fn test_unescape_round_trip() {
        let cases: &[&[u8]] = &[
            b"",
            b"plain",
            b"\x1b",
            b"\x1b\x1b\x1b",
            b"\r\n",
            b"a\rb\nc\x1bd",
            b"\x1b\r\n\x1b\r\n",
            &[0x00, 0x1b, 0x0d, 0x0a, 0x7f, 0xff],
        ];
        for payload in cases {
            let wire = escaped(payload);
            let restored = unescape(&wire).unwrap();
            assert_eq!(&restored, payload, "round trip for {payload:?}");
        }
    }

    #[test]
    fn test_unescape_dangling_escape() {
        let result = unescape(b"abc\x1b");
        assert!(matches!(
            result,
            Err(FrameError::TruncatedEscape { position: 3 })
        ));
    }

    #[test]
    fn test_ensure_ascii_accepts_ascii() {
        assert_eq!(ensure_ascii("*IDN?").unwrap(), b"*IDN?");
        assert_eq!(ensure_ascii("").unwrap(), b"");
    }

    #[test]
    fn test_ensure_ascii_rejects_non_ascii() {
        let err = ensure_ascii("caf\u{e9}").unwrap_err();
        assert!(matches!(err, FrameError::NotAscii { position: 3, .. }));
    }

    #[test]
    fn test_decode_ascii() {
        assert_eq!(decode_ascii(b"32\r\n").unwrap(), "32\r\n");
        assert!(matches!(
            decode_ascii(&[b'o', b'k', 0xc3]),
            Err(FrameError::NotAscii {
                byte: 0xc3,
                position: 2
            })
        ));
    }
}
