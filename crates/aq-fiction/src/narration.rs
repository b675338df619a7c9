//! Narration: the ordered text lines a command produces.

use std::fmt;

/// Lines of text to show the player, in order. Empty strings are paragraph
/// breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narration {
    lines: Vec<String>,
}

impl Narration {
    /// An empty narration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A narration of one line.
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    /// Append a line.
    pub fn push(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Append a paragraph break.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Append every line of `other`.
    pub fn append(&mut self, other: Narration) {
        self.lines.extend(other.lines);
    }

    /// The lines so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume into the underlying lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Whether nothing was narrated.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any line equals `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l == text)
    }
}

impl Extend<String> for Narration {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.lines.extend(iter);
    }
}

impl From<Vec<String>> for Narration {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_render() {
        let mut n = Narration::line("You are at Village.");
        n.blank();
        n.push("You can go to:");
        n.extend(vec!["- Forest Path".to_string()]);
        assert_eq!(n.lines().len(), 4);
        assert!(n.contains("- Forest Path"));
        assert_eq!(
            n.to_string(),
            "You are at Village.\n\nYou can go to:\n- Forest Path"
        );
    }

    #[test]
    fn append_keeps_order() {
        let mut a = Narration::line("one");
        a.append(Narration::from(vec!["two".to_string(), "three".to_string()]));
        assert_eq!(a.into_lines(), vec!["one", "two", "three"]);
        assert!(Narration::new().is_empty());
    }
}
