/// Windowed LZ compression with single-byte back-references
/// Token stream: [BYTE] for literals, [0xFF][0x00] for an escaped 0xFF,
/// [0xFF][OFFSET][LENGTH] for a back-reference with offset and length in 1..=255
use crate::error::{Result, RevencError};

/// Marks a back-reference token (or, followed by 0x00, an escaped literal).
pub const FLAG: u8 = 0xFF;
/// Follows FLAG when the input itself contained a 0xFF byte.
const ESCAPE: u8 = 0x00;
/// Shortest run worth a 3-byte token.
const MIN_MATCH: usize = 4;
/// Offset and length are single bytes, so both cap at 255.
const MAX_OFFSET: usize = 255;
const MAX_MATCH: usize = 255;

pub fn encode(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut encoded = Vec::with_capacity(data.len());
    let mut i = 0;

    while i < data.len() {
        let (offset, length) = longest_match(data, i);

        if length >= MIN_MATCH {
            encoded.push(FLAG);
            encoded.push(offset as u8);
            encoded.push(length as u8);
            i += length;
        } else if data[i] == FLAG {
            // A literal 0xFF would read as a token marker, so escape it
            encoded.push(FLAG);
            encoded.push(ESCAPE);
            i += 1;
        } else {
            encoded.push(data[i]);
            i += 1;
        }
    }

    encoded
}

/// Greedy search over the look-behind window at `pos`.
///
/// Offsets are tried ascending and a candidate only replaces the best on a
/// strictly greater length, so ties resolve to the smallest offset. Matches
/// may run past `pos` (offset < length); the decoder copies byte-at-a-time,
/// which reproduces exactly that overlap.
fn longest_match(data: &[u8], pos: usize) -> (usize, usize) {
    let mut best_offset = 0;
    let mut best_length = 0;
    let window = pos.min(MAX_OFFSET);

    for offset in 1..=window {
        let mut length = 0;
        while pos + length < data.len()
            && data[pos - offset + length] == data[pos + length]
            && length < MAX_MATCH
        {
            length += 1;
        }

        if length > best_length {
            best_length = length;
            best_offset = offset;
        }
    }

    (best_offset, best_length)
}

pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut decoded: Vec<u8> = Vec::with_capacity(data.len() * 2);
    let mut i = 0;

    while i < data.len() {
        if data[i] != FLAG {
            decoded.push(data[i]);
            i += 1;
            continue;
        }

        if i + 1 < data.len() && data[i + 1] == ESCAPE {
            decoded.push(FLAG);
            i += 2;
        } else if i + 2 < data.len() {
            let offset = data[i + 1] as usize;
            let length = data[i + 2] as usize;

            if offset == 0 || offset > decoded.len() {
                return Err(RevencError::Decode(format!(
                    "back-reference offset {} exceeds {} decoded bytes",
                    offset,
                    decoded.len()
                )));
            }

            // Byte-at-a-time so overlapping copies (offset < length) see the
            // bytes appended earlier in this same token
            let start = decoded.len() - offset;
            for j in 0..length {
                let byte = decoded[start + j];
                decoded.push(byte);
            }
            i += 3;
        } else {
            return Err(RevencError::Decode(
                "truncated token at end of LZ stream".to_string(),
            ));
        }
    }

    Ok(decoded)
}
