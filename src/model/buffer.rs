//! Buffer model - the ordered lines of the document being edited

/// Ordered sequence of text lines
///
/// Lines are 0-based internally and 1-based when addressed by the user.
/// No stored line ever contains a line terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Buffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from already split lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buffer = Self::new();
        for line in lines {
            buffer.push_line(line.as_ref());
        }
        buffer
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append one line of text
    ///
    /// A trailing `\n` or `\r\n` is stripped. Interior terminators split the
    /// text into several lines so the no-terminator invariant holds.
    pub fn push_line(&mut self, text: &str) {
        let text = text
            .strip_suffix('\n')
            .map(|t| t.strip_suffix('\r').unwrap_or(t))
            .unwrap_or(text);

        if !text.contains(['\n', '\r']) {
            self.lines.push(text.to_string());
            return;
        }

        for part in text.split('\n') {
            let part = part.strip_suffix('\r').unwrap_or(part);
            self.lines
                .extend(part.split('\r').map(|segment| segment.to_string()));
        }
    }

    /// Replace the whole content
    pub fn replace(&mut self, lines: Vec<String>) {
        *self = Self::from_lines(lines);
    }

    /// Drop every line
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get a line by 0-based index
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// All lines in document order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines in the half-open 0-based range `[start, end)`, clamped to the buffer
    pub fn slice(&self, start: usize, end: usize) -> &[String] {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        &self.lines[start..end]
    }
}
