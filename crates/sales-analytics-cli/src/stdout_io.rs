use std::io::{self, Write};

/// Writes `text` plus a newline, treating a closed pipe (`| head`) as success.
pub fn write_stdout_line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_tolerating_broken_pipe(&mut stdout, text, true)
}

pub fn write_stdout_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_tolerating_broken_pipe(&mut stdout, text, false)
}

fn write_tolerating_broken_pipe(
    writer: &mut dyn Write,
    text: &str,
    newline: bool,
) -> io::Result<()> {
    match write_and_flush(writer, text, newline) {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn write_and_flush(writer: &mut dyn Write, text: &str, newline: bool) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    if newline {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
