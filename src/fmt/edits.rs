//! Minimal text edits from a full-text before/after pair.
//!
//! The formatter returns a complete document; clients want localized edits
//! so cursors and folds survive formatting. A line-level diff turns the
//! replacement into per-range edits: each non-equal diff op covers a
//! half-open line range of the old text and carries the corresponding new
//! lines as replacement.

use similar::{ChangeTag, DiffTag, TextDiff};
use tower_lsp::lsp_types::{Position, Range, TextEdit};

/// Compute the edits that turn `old` into `new`.
///
/// Identical texts produce an empty list. Edits are ordered by position and
/// non-overlapping, ranges run from column 0 of the first changed line to
/// column 0 of the line past the change.
pub fn compute_text_edits(old: &str, new: &str) -> Vec<TextEdit> {
    let diff = TextDiff::from_lines(old, new);
    let mut edits = Vec::new();

    for op in diff.ops() {
        if op.tag() == DiffTag::Equal {
            continue;
        }
        let old_range = op.old_range();
        let new_text: String = diff
            .iter_changes(op)
            .filter(|change| change.tag() == ChangeTag::Insert)
            .map(|change| change.value())
            .collect();
        edits.push(TextEdit {
            range: Range::new(
                Position::new(old_range.start as u32, 0),
                Position::new(old_range.end as u32, 0),
            ),
            new_text,
        });
    }

    edits
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Apply line-range edits to a text, for verifying round trips.
    fn apply_edits(text: &str, edits: &[TextEdit]) -> String {
        let mut lines: Vec<&str> = text.split_inclusive('\n').collect();
        // Apply back to front so earlier line numbers stay valid.
        for edit in edits.iter().rev() {
            let start = edit.range.start.line as usize;
            let end = edit.range.end.line as usize;
            lines.splice(start..end.min(lines.len()), [edit.new_text.as_str()]);
        }
        lines.concat()
    }

    #[test]
    fn identical_texts_produce_no_edits() {
        let text = "{\n  a: 1,\n}\n";
        assert!(compute_text_edits(text, text).is_empty());
    }

    #[test]
    fn single_changed_line_yields_single_line_edit() {
        let old = "{\n  a:1,\n  b: 2,\n}\n";
        let new = "{\n  a: 1,\n  b: 2,\n}\n";
        let edits = compute_text_edits(old, new);
        assert_eq!(edits.len(), 1);
        let edit = &edits[0];
        assert_eq!(edit.range.start, Position::new(1, 0));
        assert_eq!(edit.range.end, Position::new(2, 0));
        assert_eq!(edit.new_text, "  a: 1,\n");
    }

    #[test]
    fn inserted_lines_have_empty_old_range() {
        let old = "a\nc\n";
        let new = "a\nb\nc\n";
        let edits = compute_text_edits(old, new);
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].range.start, edits[0].range.end);
        assert_eq!(edits[0].new_text, "b\n");
    }

    #[test]
    fn deleted_lines_have_empty_replacement() {
        let old = "a\n\n\n\nb\n";
        let new = "a\n\nb\n";
        let edits = compute_text_edits(old, new);
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].new_text, "");
        assert!(edits[0].range.end.line > edits[0].range.start.line);
    }

    #[test]
    fn distant_changes_become_separate_edits() {
        let old = "one\nsame\nsame\nsame\ntwo\n";
        let new = "ONE\nsame\nsame\nsame\nTWO\n";
        let edits = compute_text_edits(old, new);
        assert_eq!(edits.len(), 2);
        assert_eq!(edits[0].range.start.line, 0);
        assert_eq!(edits[1].range.start.line, 4);
    }

    #[test]
    fn edits_round_trip_onto_the_new_text() {
        let cases = [
            ("{\n  a:1,\n}\n", "{\n  a: 1,\n}\n"),
            ("a\nb\nc\n", "a\nc\n"),
            ("a\nc\n", "a\nb\nc\n"),
            ("", "x\n"),
            ("x\n", ""),
            ("no newline at end", "still no newline"),
        ];
        for (old, new) in cases {
            let edits = compute_text_edits(old, new);
            assert_eq!(apply_edits(old, &edits), new, "case {old:?} -> {new:?}");
        }
    }

    #[test]
    fn whole_document_is_not_replaced_for_local_change() {
        let old: String = (0..100).map(|i| format!("line {i}\n")).collect();
        let new = old.replace("line 42\n", "line forty-two\n");
        let edits = compute_text_edits(&old, &new);
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].range.start.line, 42);
        assert_eq!(edits[0].range.end.line, 43);
    }
}
