use std::fmt;

/// Acknowledgement text shown after a submission.
///
/// Messages are compile-time constants split into display lines. They are
/// rendered as plain text, so nothing user-supplied may ever end up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckMessage {
    lines: &'static [&'static str],
}

impl AckMessage {
    pub(crate) const fn new(lines: &'static [&'static str]) -> Self {
        Self { lines }
    }

    /// Lines to display, in order
    #[must_use]
    pub fn lines(&self) -> &'static [&'static str] {
        self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }
}

/// Single-line form: lines joined by one space.
impl fmt::Display for AckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join(" "))
    }
}
