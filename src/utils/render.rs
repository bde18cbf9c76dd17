//! Text rendering: the plain `Display` form and the boxed `beautify` form.

use std::fmt;

use crate::config::options::RenderOptions;
use crate::core::traits::Element;
use crate::matrix::Matrix;

/// One line per row; every element is followed by a single space.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for v in row {
                write!(f, "{v} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Element> Matrix<T> {
    /// Boxed rendering with the default `+`, `-` and `|` glyphs.
    ///
    /// ```text
    /// +-------+
    /// |  7 10 |
    /// | 15 22 |
    /// +-------+
    /// ```
    pub fn beautify(&self) -> String {
        self.beautify_with(&RenderOptions::default())
    }

    /// Boxed rendering; every cell is right-aligned to the widest printed element.
    pub fn beautify_with(&self, opts: &RenderOptions) -> String {
        let cells: Vec<String> = self.data.iter().map(ToString::to_string).collect();
        let width = field_width(&cells);
        let inner = self.cols * width + (self.cols - 1);
        let border = format!(
            "{c}{h}{c}\n",
            c = opts.corner,
            h = opts.horizontal.to_string().repeat(inner + 2)
        );

        let mut out = String::with_capacity((inner + 5) * (self.rows + 2));
        out.push_str(&border);
        for row in cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|c| format!("{c:>width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!("{v} {line} {v}\n", v = opts.vertical));
        }
        out.push_str(&border);
        out
    }
}

fn field_width(cells: &[String]) -> usize {
    cells.iter().map(|c| c.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_width_is_widest_cell() {
        let cells = vec!["7".to_string(), "-120".to_string(), "15".to_string()];
        assert_eq!(field_width(&cells), 4);
    }

    #[test]
    fn single_cell_box() {
        let m = Matrix::new(1, 1, vec![5]).unwrap();
        assert_eq!(m.beautify(), "+---+\n| 5 |\n+---+\n");
    }
}
