//! Line and column lookup for rendering spans.

use mt_ir::Span;

/// Byte offsets of every line start in a source text.
///
/// ```
/// use mt_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "x := 1.\ny := x + 1.";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.line_col(0), (1, 1));
/// assert_eq!(table.line_col(8), (2, 1));
/// assert_eq!(table.line_text(source, 2), "y := x + 1.");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let index = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(index + 1).unwrap_or(u32::MAX)
    }

    /// 1-based `(line, column)`; the column counts bytes.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let start = self.offsets[(line - 1) as usize];
        (line, offset - start + 1)
    }

    /// Text of a 1-based line, without its newline.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> &'s str {
        let index = (line as usize).saturating_sub(1);
        let Some(&start) = self.offsets.get(index) else {
            return "";
        };
        let end = self
            .offsets
            .get(index + 1)
            .map_or(source.len(), |&next| next as usize - 1);
        source.get(start as usize..end).unwrap_or("")
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Whether `span` can be located in a source of `len` bytes.
///
/// Synthesized tokens (block bodies replayed from storage) carry
/// [`Span::DUMMY`] and are not rendered with a snippet.
pub fn is_renderable(span: Span, len: usize) -> bool {
    span != Span::DUMMY && (span.end as usize) <= len
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_line() {
        let table = LineOffsetTable::build("3 + 4");
        assert_eq!(table.line_count(), 1);
        assert_eq!(table.line_col(4), (1, 5));
    }

    #[test]
    fn test_multi_line() {
        let source = "a\nbb\nccc";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_col(2), (2, 1));
        assert_eq!(table.line_col(3), (2, 2));
        assert_eq!(table.line_col(5), (3, 1));
        assert_eq!(table.line_text(source, 1), "a");
        assert_eq!(table.line_text(source, 2), "bb");
        assert_eq!(table.line_text(source, 3), "ccc");
        assert_eq!(table.line_text(source, 9), "");
    }

    #[test]
    fn test_offset_on_newline_belongs_to_its_line() {
        let table = LineOffsetTable::build("ab\ncd");
        assert_eq!(table.line_col(2), (1, 3));
    }

    #[test]
    fn test_renderable() {
        assert!(is_renderable(Span::new(1, 3), 3));
        assert!(!is_renderable(Span::new(1, 4), 3));
        assert!(!is_renderable(Span::DUMMY, 10));
    }
}
