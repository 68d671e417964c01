use std::fmt::{Display, Write as _};
use std::io::{self, Write};

/// Labels shorter than the widest algorithm label get an extra tab so the sequences line up.
const LABEL_WIDTH: usize = "Selection sort".len();

/// Render a labelled sequence on one line, without the trailing newline. Every element is followed
/// by a single space.
///
/// # Parameters
/// - `label` name printed in front of the sequence
/// - `data` sequence to render, it is only read
pub fn render_line<T: Display>(label: &str, data: &[T]) -> String {
    let mut line = format!("Printing {}: ", label);
    if label.len() < LABEL_WIDTH {
        line.push_str("\t ");
    }

    for n in data {
        // writing into a String cannot fail
        let _ = write!(line, "{} ", n);
    }

    line
}

/// Write the line produced by [`render_line`] followed by a newline.
pub fn write_line<W: Write, T: Display>(out: &mut W, label: &str, data: &[T]) -> io::Result<()> {
    writeln!(out, "{}", render_line(label, data))
}
