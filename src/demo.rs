use std::io::{self, Write};

use crate::render::write_line;
use crate::Algorithm;

/// The sequence every algorithm is demonstrated on.
pub const UNSORTED: [i32; 14] = [3, 5, 1, 3, 4, 8, 1, 7, 11, 9, 2, 5, 6, 1];

/// Print the unsorted sequence, then the result of every algorithm in [`Algorithm::ALL`] order.
/// Each algorithm sorts its own copy of [`UNSORTED`].
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Program started.")?;

    let data = UNSORTED.to_vec();
    write_line(out, "Unsorted", &data)?;

    for algorithm in Algorithm::ALL {
        let sorted = algorithm.sorted_copy(&data);
        write_line(out, algorithm.label(), &sorted)?;
    }

    writeln!(out, "Program ended.")
}
