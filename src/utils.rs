//! Utility functions.

/// Renders bytes as contiguous lowercase hex. An absent sequence renders as an empty string.
pub fn hex_string(bytes: Option<&[u8]>) -> String {
    bytes.map(hex::encode).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lowercase_without_separators() {
        assert_eq!(hex_string(Some(&[0x01, 0xab, 0x00, 0xff])), "01ab00ff");
    }

    #[test]
    fn absent_and_empty_render_empty() {
        assert_eq!(hex_string(None), "");
        assert_eq!(hex_string(Some(&[])), "");
    }
}
