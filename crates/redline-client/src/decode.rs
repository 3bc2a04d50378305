//! Incremental UTF-8 decoding for streamed response bodies.

use bytes::BytesMut;

/// Stateful incremental UTF-8 decoder.
///
/// Chunk boundaries are arbitrary: a multi-byte character may be split
/// across reads, so the trailing incomplete sequence is carried between
/// calls instead of decoding each chunk in isolation. Invalid sequences
/// decode to U+FFFD.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    pending: BytesMut,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next chunk, returning the text that is complete so far.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let mut out = String::new();
        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(valid) => {
                    out.push_str(valid);
                    self.pending.clear();
                    return out;
                }
                Err(err) => {
                    let valid = self.pending.split_to(err.valid_up_to());
                    out.push_str(std::str::from_utf8(&valid).expect("prefix is valid UTF-8"));

                    match err.error_len() {
                        // Invalid sequence: emit a replacement and skip it.
                        Some(len) => {
                            let _ = self.pending.split_to(len);
                            out.push('\u{FFFD}');
                        }
                        // Incomplete trailing character: keep for the next chunk.
                        None => return out,
                    }
                }
            }
        }
    }

    /// Flush a dangling incomplete sequence at end of stream.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            self.pending.clear();
            '\u{FFFD}'.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.decode(b"hello"), "hello");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn multibyte_character_split_across_two_chunks() {
        // "é" is 0xC3 0xA9
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.decode(&[0xC3]), "");
        assert_eq!(decoder.decode(&[0xA9]), "é");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn four_byte_character_split_three_ways() {
        // "🎉" is 0xF0 0x9F 0x8E 0x89
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.decode(&[0xF0, 0x9F]), "");
        assert_eq!(decoder.decode(&[0x8E]), "");
        assert_eq!(decoder.decode(&[0x89, b'!']), "🎉!");
    }

    #[test]
    fn split_character_decodes_exactly_once() {
        let mut decoder = StreamDecoder::new();
        let mut text = String::new();
        let bytes = "check ✅ done".as_bytes();
        text.push_str(&decoder.decode(&bytes[..7]));
        text.push_str(&decoder.decode(&bytes[7..]));
        assert_eq!(text, "check ✅ done");
    }

    #[test]
    fn invalid_byte_becomes_replacement_character() {
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.decode(&[b'a', 0xFF, b'b']), "a\u{FFFD}b");
    }

    #[test]
    fn dangling_partial_sequence_flushes_as_replacement() {
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.decode(&[b'a', 0xC3]), "a");
        assert_eq!(decoder.finish(), "\u{FFFD}");
    }
}
