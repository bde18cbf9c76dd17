//! Step snapshots for traced multiplication and ready-made monitors.
//!
//! A `Step` is handed to the monitor of a [`ChainMultiply`](crate::chain::ChainMultiply)
//! after each successful step. Monitors only observe; the numeric result is the same
//! with or without one.

use std::fmt;

use crate::chain::operand::Operand;
use crate::config::options::TraceOptions;
use crate::core::traits::Element;
use crate::matrix::Matrix;

/// Snapshot of one chain step: `result = before op operand`.
#[derive(Debug, Clone, Copy)]
pub struct Step<'s, T> {
    /// Zero-based position in the chain
    pub index: usize,
    pub before: &'s Matrix<T>,
    pub operand: Operand<'s, T>,
    pub result: &'s Matrix<T>,
}

impl<T: Element> Step<'_, T> {
    /// Operand, separator line, then the result.
    pub fn render(&self, opts: &TraceOptions) -> String {
        let mut out = String::new();
        if opts.show_operand {
            out.push_str(&self.operand.to_string());
        }
        out.push_str(&opts.separator);
        out.push('\n');
        out.push_str(&self.result.to_string());
        out
    }
}

impl<T: Element> fmt::Display for Step<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&TraceOptions::default()))
    }
}

/// Monitor printing each step to stdout.
pub fn print_step<T: Element>(step: &Step<'_, T>) {
    println!("{step}");
}

/// Monitor emitting each step through `log::info!`.
pub fn log_step<T: Element>(step: &Step<'_, T>) {
    log::info!("step {}:\n{}", step.index, step);
}

/// Monitor that renders with custom options into `sink`.
pub fn render_into<'o, T: Element + 'o>(
    opts: &'o TraceOptions,
    sink: &'o mut Vec<String>,
) -> impl FnMut(&Step<'_, T>) + 'o {
    move |step: &Step<'_, T>| sink.push(step.render(opts))
}
