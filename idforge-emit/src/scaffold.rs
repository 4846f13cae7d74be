//! Brace-scoped scaffolding writer.

const INDENT: &str = "    ";

/// Writer for brace-delimited nesting scaffolds.
///
/// Keeps track of how many scopes are open so the body lands at the right
/// depth and every opening brace gets its closing brace in reverse order.
#[derive(Debug, Default)]
pub struct ScaffoldWriter {
    depth: usize,
    buffer: String,
}

impl ScaffoldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line at the current depth. An empty string produces a blank
    /// line with no trailing indentation.
    pub fn line(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Open a scope: the header line, an opening brace, one level deeper.
    pub fn open(&mut self, header: &str) -> &mut Self {
        self.line(header);
        self.line("{");
        self.depth += 1;
        self
    }

    /// Close the innermost open scope.
    pub fn close(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
        self
    }

    /// Add multi-line text with every non-blank line indented to the
    /// current depth. Internal blank lines stay free of trailing spaces.
    pub fn body(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.line(line);
        }
        self
    }

    /// Number of currently open scopes.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
