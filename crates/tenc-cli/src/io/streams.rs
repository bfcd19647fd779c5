use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use anyhow::Context;

/// Opens the input stream: a buffered file when a path is given, otherwise
/// standard input.
pub fn open_input(path: Option<&str>) -> anyhow::Result<Box<dyn Read>> {
    Ok(match path {
        Some(p) if !p.is_empty() => {
            let file = File::open(p).with_context(|| format!("open input {p}"))?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(io::stdin().lock()),
    })
}

/// Opens the output stream: a buffered file when a path is given, otherwise
/// standard output.
pub fn open_output(path: Option<&str>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) if !p.is_empty() => {
            let file = File::create(p).with_context(|| format!("create output {p}"))?;
            Box::new(BufWriter::new(file))
        }
        _ => Box::new(io::stdout().lock()),
    })
}
