use clap::Args;
use tenc_core::codec::registry;
use tenc_core::{convert, Newline};

use crate::io::streams;

#[derive(Args)]
pub struct EncodeArgs {
    /// Input encoding, name or code page (default: UTF-8)
    #[arg(short, long)]
    pub from: Option<String>,

    /// Output encoding, name or code page (default: UTF-8)
    #[arg(short, long)]
    pub to: Option<String>,

    /// Input file path (default: standard input)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output file path (default: standard output)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Emit the output preamble (BOM) if the encoding has one
    #[arg(short, long)]
    pub preamble: bool,

    /// End-of-line conversion: cr, crlf, lf, none (default: none)
    #[arg(short, long)]
    pub eol: Option<String>,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let from = registry::resolve(args.from.as_deref().unwrap_or(""))?;
    let to = registry::resolve(args.to.as_deref().unwrap_or(""))?;
    let newline = Newline::parse(args.eol.as_deref().unwrap_or(""));

    let mut input = streams::open_input(args.input.as_deref())?;
    let mut output = streams::open_output(args.output.as_deref())?;
    convert(&mut input, from, &mut output, to, args.preamble, newline)?;
    Ok(())
}
