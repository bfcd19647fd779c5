use std::path::PathBuf;

use clap::Args;
use tenc_core::codec::registry;
use tenc_core::{replace_file_in_place, Newline};

use crate::io::fileset;

#[derive(Args)]
pub struct OverwriteArgs {
    /// Target files, globbing allowed (*.txt, **/*.cs)
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Input encoding, name or code page (default: UTF-8)
    #[arg(short, long)]
    pub from: Option<String>,

    /// Output encoding, name or code page (default: UTF-8)
    #[arg(short, long)]
    pub to: Option<String>,

    /// Search base directory (default: current directory)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Match target patterns case-insensitively
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Emit the output preamble (BOM) if the encoding has one
    #[arg(short, long)]
    pub preamble: bool,

    /// End-of-line conversion: cr, crlf, lf, none (default: none)
    #[arg(short, long)]
    pub eol: Option<String>,

    /// File exclude pattern, globbing allowed
    #[arg(short = 'x', long)]
    pub exclude: Vec<String>,

    /// Select and report files without converting anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: OverwriteArgs) -> anyhow::Result<()> {
    let from = registry::resolve(args.from.as_deref().unwrap_or(""))?;
    let to = registry::resolve(args.to.as_deref().unwrap_or(""))?;
    let newline = Newline::parse(args.eol.as_deref().unwrap_or(""));

    let base = match args.base.as_deref() {
        Some(b) if !b.is_empty() => PathBuf::from(b),
        _ => std::env::current_dir()?,
    };

    let files = fileset::resolve(&base, &args.targets, &args.exclude, args.ignore_case)?;
    if files.is_empty() {
        anyhow::bail!("no file was matched");
    }

    let mut failed = 0usize;
    for rel in &files {
        if args.dry_run {
            println!("replacing file(dryrun): {}", rel.display());
            continue;
        }
        println!("replacing file: {}", rel.display());

        let path = base.join(rel);
        let mut warnings = Vec::new();
        let result = replace_file_in_place(&path, from, to, args.preamble, newline, &mut warnings);
        for warning in &warnings {
            eprintln!("warning: {warning}");
        }
        if let Err(e) = result {
            eprintln!("converting file error({}): {e}", path.display());
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} files failed", files.len());
    }
    Ok(())
}
