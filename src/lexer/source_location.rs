//! Source location utilities for converting byte offsets to line/column positions
//!
//! Token positions in diagnostics are 1-based line/column pairs, with columns
//! counted in characters so multi-byte input reports sensibly. The index is
//! built once per tokenize and answers lookups with a binary search over line
//! starts.

/// A 1-based line/column position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation<'src> {
    source: &'src str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'src> SourceLocation<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a 1-based line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let col = self.source[line_start..byte_offset].chars().count();

        Position::new(line + 1, col + 1)
    }

    /// Position just past the last character, used for end-of-input tokens
    pub fn end_position(&self) -> Position {
        self.byte_to_position(self.source.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let loc = SourceLocation::new("hello");
        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(4), Position::new(1, 5));
    }

    #[test]
    fn test_multiline() {
        let loc = SourceLocation::new("abc\n  def\nghi");

        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(3), Position::new(1, 4));
        assert_eq!(loc.byte_to_position(4), Position::new(2, 1));
        assert_eq!(loc.byte_to_position(6), Position::new(2, 3));
        assert_eq!(loc.byte_to_position(10), Position::new(3, 1));
    }

    #[test]
    fn test_columns_count_characters_not_bytes() {
        // "é" is two bytes; the column after it must still be 2
        let loc = SourceLocation::new("é!");
        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(2), Position::new(1, 2));
    }

    #[test]
    fn test_end_position() {
        assert_eq!(SourceLocation::new("").end_position(), Position::new(1, 1));
        assert_eq!(
            SourceLocation::new("ab\ncd").end_position(),
            Position::new(2, 3)
        );
        // Trailing newline opens an empty final line
        assert_eq!(
            SourceLocation::new("ab\n").end_position(),
            Position::new(2, 1)
        );
    }
}
