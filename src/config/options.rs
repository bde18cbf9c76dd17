//! API options for trace output and boxed rendering.
//!
//! `TraceOptions` controls how a multiplication step is printed by the trace
//! monitors in [`crate::utils::trace`]; `RenderOptions` picks the glyphs used by
//! [`Matrix::beautify_with`](crate::Matrix::beautify_with).

/// Trace output parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceOptions {
    /// Line printed between the operand and the result
    pub separator: String,

    /// Print the operand before the separator
    pub show_operand: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            separator: "-".repeat(10),
            show_operand: true,
        }
    }
}

/// Box glyphs for `beautify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub corner: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            corner: '+',
            horizontal: '-',
            vertical: '|',
        }
    }
}
