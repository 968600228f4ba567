//! Request framing for yabai's message socket.
//!
//! A frame is a 4-byte header followed by each token as UTF-8 bytes plus a
//! NUL terminator, and one final NUL marking the end of the message:
//!
//! ```text
//! [len][0][0][0] q u e r y \0 - - w i n d o w s \0 \0
//! ```
//!
//! `len` is the body length (everything after the header) truncated to a
//! single byte.  Bodies over 255 bytes wrap silently, so commands must stay
//! short.

const HEADER_LEN: usize = 4;

/// Encode `tokens` into a request frame.
pub fn encode<S: AsRef<str>>(tokens: &[S]) -> Vec<u8> {
    let mut frame = vec![0u8; HEADER_LEN];
    for token in tokens {
        frame.extend_from_slice(token.as_ref().as_bytes());
        frame.push(0);
    }
    frame.push(0);
    frame[0] = (frame.len() - HEADER_LEN) as u8;
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_query_windows() {
        let frame = encode(&["query", "--windows"]);
        let mut expected = vec![17u8, 0, 0, 0];
        expected.extend_from_slice(b"query\0--windows\0\0");
        assert_eq!(frame, expected);
    }

    #[test]
    fn empty_command_is_just_the_terminator() {
        let frame = encode::<&str>(&[]);
        assert_eq!(frame, vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn ends_with_an_extra_nul_after_the_last_token() {
        let frame = encode(&["window", "12", "--focus"]);
        assert!(frame.ends_with(b"--focus\0\0"));
        assert_eq!(frame[0] as usize, frame.len() - 4);
        assert_eq!(&frame[1..4], &[0, 0, 0]);
    }

    #[test]
    fn length_byte_wraps_for_long_bodies() {
        let long = "x".repeat(300);
        let frame = encode(&[long.as_str()]);
        // 300 bytes + terminator + end marker = 302 body bytes.
        assert_eq!(frame.len(), 306);
        assert_eq!(frame[0], (302 % 256) as u8);
    }

    #[test]
    fn multibyte_tokens_count_bytes_not_chars() {
        let frame = encode(&["é"]);
        assert_eq!(frame[0], 4);
    }
}
