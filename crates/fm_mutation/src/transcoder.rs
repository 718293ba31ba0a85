use std::io::{self, BufRead, Write};
use log::debug;
use rand::Rng;

use crate::Mutator;

/// Streams `reader` to `writer` line by line, mutating sequence lines.
///
/// Lines are read as raw bytes together with their terminators, so the
/// output has exactly the layout of the input, `\r\n` endings and a missing
/// final newline included. The writer is flushed before returning.
pub fn transcode<B, W, R>(
    mut reader: B,
    mut writer: W,
    mutator: &mut Mutator<R>,
) -> io::Result<()>
where
    B: BufRead,
    W: Write,
    R: Rng,
{
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        mutator.mutate_line(&mut line);
        writer.write_all(&line)?;
    }
    writer.flush()?;
    debug!("Transcoding finished: {}", mutator.stats());
    Ok(())
}
