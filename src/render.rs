//! Text rendering of workers.
//!
//! One line per worker:
//! `name|title|min_salary|happiness|productivity|charisma|creativity|cleverness`

use std::io::{self, BufWriter, Write};

use crate::worker::Worker;

pub const FIELD_DELIMITER: char = '|';

/// Number of fields in a rendered line.
pub const FIELD_COUNT: usize = 8;

/// Render one worker as a delimited line (without a newline).
pub fn render_line(worker: &Worker) -> String {
    let a = worker.attributes();
    let fields = [
        worker.name().to_string(),
        worker.title().to_string(),
        worker.min_salary().to_string(),
        a.happiness.to_string(),
        a.productivity.to_string(),
        a.charisma.to_string(),
        a.creativity.to_string(),
        a.cleverness.to_string(),
    ];
    fields.join(&FIELD_DELIMITER.to_string())
}

/// Write every worker to `out`, one line each, in order.
pub fn write_population<W: Write>(out: W, workers: &[Worker]) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for worker in workers {
        writeln!(out, "{}", render_line(worker))?;
    }
    out.flush()
}
