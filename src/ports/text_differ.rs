/// Port for line based diffing of two rendered texts
pub trait TextDiffer: Send + Sync {
    /// Unified diff of `old` against `new` with the given header labels.
    /// Returns an empty string when both texts have the same lines.
    fn unified_diff(&self, old: &str, new: &str, from_label: &str, to_label: &str) -> String;
}
