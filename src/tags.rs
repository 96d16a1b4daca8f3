use serde::{Deserialize, Serialize};

/// Ordered set of note tags. Insertion order is preserved; duplicates
/// (case-sensitive) and empty strings never get in. Input is trimmed
/// before any check, matching the Enter-to-commit gesture in the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn from_vec(tags: Vec<String>) -> Self {
        let mut set = Self::default();
        for tag in tags {
            set.insert(&tag);
        }
        set
    }

    /// Add a tag. Returns false (and leaves the set unchanged) when the
    /// trimmed input is empty or already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove the tag at `index`, as the chip's close button does.
    /// Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
        }
    }

    /// Fold a batch of suggested tags in, skipping duplicates.
    pub fn merge(&mut self, tags: impl IntoIterator<Item = String>) {
        for tag in tags {
            self.insert(&tag);
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.tags.clone()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut tags = TagSet::default();
        tags.insert("work");
        tags.insert("ideas");
        tags.insert("2026");
        assert_eq!(tags.as_slice(), ["work", "ideas", "2026"]);
    }

    #[test]
    fn committing_a_duplicate_leaves_the_set_unchanged() {
        let mut tags = TagSet::default();
        assert!(tags.insert("work"));
        assert!(!tags.insert("work"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        let mut tags = TagSet::default();
        tags.insert("Work");
        assert!(tags.insert("work"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn empty_and_whitespace_input_is_rejected() {
        let mut tags = TagSet::default();
        assert!(!tags.insert(""));
        assert!(!tags.insert("   "));
        assert!(tags.is_empty());
    }

    #[test]
    fn input_is_trimmed_before_the_duplicate_check() {
        let mut tags = TagSet::default();
        tags.insert("todo");
        assert!(!tags.insert("  todo  "));
        assert_eq!(tags.as_slice(), ["todo"]);
    }

    #[test]
    fn remove_by_position() {
        let mut tags = TagSet::from_vec(vec!["a".into(), "b".into(), "c".into()]);
        tags.remove(1);
        assert_eq!(tags.as_slice(), ["a", "c"]);
        tags.remove(99); // out of range is a no-op
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn merge_skips_already_present_tags() {
        let mut tags = TagSet::from_vec(vec!["ai".into()]);
        tags.merge(vec!["ai".into(), "notes".into(), "".into()]);
        assert_eq!(tags.as_slice(), ["ai", "notes"]);
    }
}
