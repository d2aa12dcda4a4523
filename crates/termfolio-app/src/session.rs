//! The read-submit-render loop.

use std::io::{self, BufRead, Write};

use termfolio_terminal::TranscriptStore;

use crate::render::Console;

/// Run until the input reaches end-of-file.
///
/// Each line is submitted whole; the line terminator is stripped and
/// nothing else is.
pub fn run<R: BufRead, W: Write>(
    store: &mut TranscriptStore,
    console: &mut Console<W>,
    mut input: R,
) -> io::Result<()> {
    console.render(store.current())?;
    let mut line = String::new();
    loop {
        console.prompt()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("end of input");
            return Ok(());
        }
        let raw = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&line);
        console.input_submitted()?;
        store.submit(raw);
        console.render(store.current())?;
    }
}
