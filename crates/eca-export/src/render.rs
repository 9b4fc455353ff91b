//! Plain-text rendering of histories and rule tables.
//!
//! The only visualization surface the workspace ships: block-art rows for
//! terminals and a rule-table diagram listing all eight neighborhoods.

use std::fmt::Write;

use eca_core::{Grid, RuleTable};

/// Render a history as block art, one line per generation.
pub fn render_history(history: &[Grid]) -> String {
    let mut out = String::new();
    for grid in history {
        // Grid's Display already uses the block glyphs.
        let _ = writeln!(out, "{grid}");
    }
    out
}

/// Render a rule's full transition table.
///
/// Neighborhoods are listed most significant first, the way rule numbers
/// are conventionally written out:
///
/// ```text
/// rule 30 (00011110)
/// 111 110 101 100 011 010 001 000
///  0   0   0   1   1   1   1   0
/// ```
pub fn render_rule(rule: &RuleTable) -> String {
    let mut header = String::new();
    let mut outputs = String::new();
    for i in (0..8usize).rev() {
        let _ = write!(header, "{}{}{}{}", i >> 2 & 1, i >> 1 & 1, i & 1, " ");
        let _ = write!(outputs, " {}  ", (rule.number() >> i) & 1);
    }
    format!(
        "{rule}\n{}\n{}\n",
        header.trim_end(),
        outputs.trim_end()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_history() {
        let history = vec![
            Grid::new(3, vec![false, true, false]).unwrap(),
            Grid::new(3, vec![true, true, true]).unwrap(),
        ];
        assert_eq!(render_history(&history), "░█░\n███\n");
    }

    #[test]
    fn test_render_rule_30() {
        let rendered = render_rule(&RuleTable::new(30).unwrap());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "rule 30 (00011110)");
        assert_eq!(lines[1], "111 110 101 100 011 010 001 000");
        assert_eq!(lines[2], " 0   0   0   1   1   1   1   0");
    }
}
