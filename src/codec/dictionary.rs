/// Adaptive dictionary (LZW-style) compression
/// Codes 0..=255 are single-byte literals; 256 and up are phrases learned
/// in first-seen order, capped at 65536 entries with no eviction. The code
/// stream serializes as little-endian u16 pairs.
use crate::error::{Result, RevencError};
use byteorder::{LittleEndian, ReadBytesExt};
use std::collections::HashMap;

/// Hard cap on learned entries, literals included. Once full, no new
/// phrases are learned but matching against existing ones continues.
const MAX_ENTRIES: usize = 65536;

pub fn encode(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    // Phrase -> code lookup, seeded with every single byte. Code assignment
    // order is tracked by an explicit counter, never by map iteration.
    let mut phrases: HashMap<Vec<u8>, u16> = HashMap::with_capacity(512);
    for byte in 0..=255u8 {
        phrases.insert(vec![byte], byte as u16);
    }
    let mut next_code: usize = 256;

    let mut codes: Vec<u16> = Vec::new();
    let mut current: Vec<u8> = Vec::new();

    for &byte in data {
        let mut candidate = current.clone();
        candidate.push(byte);

        if phrases.contains_key(&candidate) {
            current = candidate;
        } else {
            codes.push(phrases[current.as_slice()]);
            if next_code < MAX_ENTRIES {
                phrases.insert(candidate, next_code as u16);
                next_code += 1;
            }
            current.clear();
            current.push(byte);
        }
    }

    if !current.is_empty() {
        codes.push(phrases[current.as_slice()]);
    }

    let mut encoded = Vec::with_capacity(codes.len() * 2);
    for code in codes {
        encoded.extend_from_slice(&code.to_le_bytes());
    }
    encoded
}

pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    if data.len() % 2 != 0 {
        return Err(RevencError::Decode(format!(
            "dictionary stream has odd length {}",
            data.len()
        )));
    }

    let mut cursor = std::io::Cursor::new(data);
    let mut codes = Vec::with_capacity(data.len() / 2);
    while (cursor.position() as usize) < data.len() {
        let code = cursor
            .read_u16::<LittleEndian>()
            .map_err(|e| RevencError::Decode(format!("unreadable code unit: {}", e)))?;
        codes.push(code);
    }

    // Rebuild the table in the same order the encoder assigned codes
    let mut phrases: Vec<Vec<u8>> = (0..=255u8).map(|byte| vec![byte]).collect();

    let first = codes[0] as usize;
    if first >= phrases.len() {
        return Err(RevencError::Decode(format!(
            "first code {} is not a literal",
            first
        )));
    }
    let mut previous = phrases[first].clone();
    let mut decoded = previous.clone();

    for &code in &codes[1..] {
        let code = code as usize;

        let entry = if code < phrases.len() {
            phrases[code].clone()
        } else if code == phrases.len() {
            // The encoder emitted a code it was assigning in the same step:
            // the phrase is the previous expansion plus its own first byte
            let mut entry = previous.clone();
            entry.push(previous[0]);
            entry
        } else {
            return Err(RevencError::Decode(format!(
                "unrecognized dictionary code {} (have {} entries)",
                code,
                phrases.len()
            )));
        };

        decoded.extend_from_slice(&entry);

        if phrases.len() < MAX_ENTRIES {
            let mut learned = previous.clone();
            learned.push(entry[0]);
            phrases.push(learned);
        }

        previous = entry;
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;

    #[test]
    fn test_dictionary_empty() {
        let data = vec![];
        let encoded = encode(&data);
        let decoded = decode(&encoded).unwrap();
        assert_eq!(data, decoded);
        assert!(encoded.is_empty());
    }

    #[test]
    fn test_dictionary_single_byte() {
        let data = vec![42];
        let encoded = encode(&data);
        assert_eq!(encoded, vec![42, 0]); // one literal code, LE
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_dictionary_learns_phrases() {
        // "ab"*8 parses as a|b|ab|aba|ba|bab|abab
        let data = b"abababababababab".to_vec();
        let encoded = encode(&data);
        let expected_codes: [u16; 7] = [97, 98, 256, 258, 257, 260, 259];
        let mut expected = Vec::new();
        for code in expected_codes {
            expected.write_u16::<LittleEndian>(code).unwrap();
        }
        assert_eq!(encoded, expected);
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_dictionary_code_equals_next_unassigned() {
        // The classic LZW special case: "aaaa" emits code 256 one step
        // before the decoder would have learned it
        let data = b"aaaa".to_vec();
        let encoded = encode(&data);
        assert_eq!(encoded, vec![97, 0, 0, 1, 97, 0]); // [97, 256, 97] LE
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_dictionary_all_byte_values() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode(&data);
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_dictionary_rejects_odd_length() {
        assert!(decode(&[0, 1, 2]).is_err());
    }

    #[test]
    fn test_dictionary_rejects_unknown_code() {
        // Code 300 with an empty learned table
        let mut stream = Vec::new();
        stream.write_u16::<LittleEndian>(65).unwrap();
        stream.write_u16::<LittleEndian>(300).unwrap();
        assert!(decode(&stream).is_err());
    }

    #[test]
    fn test_dictionary_rejects_phrase_first_code() {
        let mut stream = Vec::new();
        stream.write_u16::<LittleEndian>(256).unwrap();
        assert!(decode(&stream).is_err());
    }
}
