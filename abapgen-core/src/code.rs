//! Numeric suffix codes shared by the uniquifier and the type interner.

/// Target width of a suffix code. Indices past 999 widen instead of wrapping.
pub const SUFFIX_WIDTH: usize = 3;

/// Render an index as a suffix code (e.g., 0 -> "000", 42 -> "042", 1000 -> "1000").
pub fn suffix_code(index: usize) -> String {
    format!("{:0width$}", index, width = SUFFIX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_code_padding() {
        assert_eq!(suffix_code(0), "000");
        assert_eq!(suffix_code(5), "005");
        assert_eq!(suffix_code(7), "007");
        assert_eq!(suffix_code(42), "042");
        assert_eq!(suffix_code(123), "123");
        assert_eq!(suffix_code(999), "999");
    }

    #[test]
    fn test_suffix_code_widens_past_width() {
        assert_eq!(suffix_code(1000), "1000");
        assert_eq!(suffix_code(12345), "12345");
    }
}
