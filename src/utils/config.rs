// Rendering constants
pub mod render {
    // Separator placed between tokens of an in-order expression rendering
    pub const TOKEN_SEPARATOR: &str = " ";
    // Separator placed between statements of a rendered body
    pub const STATEMENT_SEPARATOR: &str = "; ";
    pub const BODY_OPEN: &str = "{";
    pub const BODY_CLOSE: &str = "}";
    // Placeholder for an empty expression slot or an unseeded expression
    pub const EMPTY_SLOT: &str = "_";
}

// Skeleton arena constants
pub mod tree {
    // Slots reserved up front by `Tree::new`
    pub const INITIAL_CAPACITY: usize = 16;
}

// Debug printer defaults
pub mod printer {
    pub const DEFAULT_INDENT_WIDTH: usize = 2;
    pub const MAX_INDENT_WIDTH: usize = 8;
}

/// Options consumed by [`crate::semantic::DebugPrinter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Spaces per nesting level when a body is expanded.
    pub indent_width: usize,
    /// Prefix every line with the node kind, e.g. `Return: 60`.
    pub show_kinds: bool,
}

impl PrinterConfig {
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.min(printer::MAX_INDENT_WIDTH);
        self
    }

    pub fn with_kinds(mut self, show_kinds: bool) -> Self {
        self.show_kinds = show_kinds;
        self
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent_width: printer::DEFAULT_INDENT_WIDTH,
            show_kinds: true,
        }
    }
}
