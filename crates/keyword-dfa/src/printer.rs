// Line sink for generated code. Emission only ever talks to the trait so
// callers can redirect output anywhere that understands indentation.
pub trait Printer {
    fn line(&mut self, text: &str);
    fn block(&mut self);
    fn block_end(&mut self);
}

/// Accumulates indented lines into a `String`.
#[derive(Debug, Clone)]
pub struct CodePrinter {
    buf: String,
    depth: usize,
    indent_width: usize,
}

impl CodePrinter {
    pub fn new() -> CodePrinter {
        CodePrinter::with_indent(4)
    }

    pub fn with_indent(indent_width: usize) -> CodePrinter {
        CodePrinter {
            buf: String::new(),
            depth: 0,
            indent_width,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Default for CodePrinter {
    fn default() -> Self {
        CodePrinter::new()
    }
}

impl Printer for CodePrinter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth * self.indent_width {
            self.buf.push(' ');
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn block(&mut self) {
        self.depth += 1;
    }

    fn block_end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_nested_blocks() {
        let mut p = CodePrinter::new();
        p.line("a {");
        p.block();
        p.line("b {");
        p.block();
        p.line("c");
        p.block_end();
        p.line("}");
        p.block_end();
        p.line("}");

        assert_eq!(p.as_str(), "a {\n    b {\n        c\n    }\n}\n");
    }

    #[test]
    fn block_end_at_top_level_is_noop() {
        let mut p = CodePrinter::with_indent(2);
        p.block_end();
        p.block_end();
        assert_eq!(p.depth(), 0);
        p.block();
        p.line("x");
        assert_eq!(p.into_string(), "  x\n");
    }
}
