use similar::{ChangeTag, TextDiff};

use crate::ports::TextDiffer;

use super::split_lines;

/// Lines of unchanged context around each change
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Line based unified diff backed by `similar`
#[derive(Debug, Clone)]
pub struct UnifiedDiffer {
    context_lines: usize,
}

impl UnifiedDiffer {
    pub fn new(context_lines: usize) -> Self {
        Self { context_lines }
    }
}

impl Default for UnifiedDiffer {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_LINES)
    }
}

impl TextDiffer for UnifiedDiffer {
    fn unified_diff(&self, old: &str, new: &str, from_label: &str, to_label: &str) -> String {
        let old_lines = split_lines(old);
        let new_lines = split_lines(new);
        let diff = TextDiff::configure().diff_slices(old_lines.as_slice(), new_lines.as_slice());

        let mut unified = diff.unified_diff();
        unified.context_radius(self.context_lines);

        let mut output: Vec<String> = Vec::new();
        for hunk in unified.iter_hunks() {
            if output.is_empty() {
                output.push(format!("--- {}", from_label));
                output.push(format!("+++ {}", to_label));
            }
            output.push(hunk.header().to_string());

            for change in hunk.iter_changes() {
                let sign = match change.tag() {
                    ChangeTag::Equal => ' ',
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                };
                output.push(format!("{}{}", sign, change.value()));
            }
        }

        output.join("\n")
    }
}
