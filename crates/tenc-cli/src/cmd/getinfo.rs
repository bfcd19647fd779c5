use clap::Args;
use tenc_core::codec::registry;

#[derive(Args)]
pub struct GetInfoArgs {
    /// Encoding names to probe
    #[arg(short, long)]
    pub name: Vec<String>,

    /// Code page ranges to probe: a single number or "start-end" (0-65535)
    #[arg(short, long)]
    pub codepage: Vec<String>,

    /// Also print rows for names/code pages that did not resolve
    #[arg(short, long)]
    pub show_fault: bool,
}

struct ProbeRow {
    name: String,
    code_page: Option<u16>,
    found: bool,
    display_name: String,
    preamble_hex: String,
}

pub fn run(args: GetInfoArgs) -> anyhow::Result<()> {
    println!("Name,CodePage,Found,DisplayName,Preamble(hex)");
    for row in probe_rows(&args.name, &args.codepage) {
        if !args.show_fault && !row.found {
            continue;
        }
        let cp = row.code_page.map(|c| c.to_string()).unwrap_or_default();
        println!(
            "{},{},{},{},{}",
            row.name, cp, row.found, row.display_name, row.preamble_hex
        );
    }
    Ok(())
}

fn probe_rows(names: &[String], ranges: &[String]) -> Vec<ProbeRow> {
    let mut rows = Vec::new();
    for name in names {
        if name.is_empty() {
            continue;
        }
        rows.push(probe_name(name));
    }
    for range in ranges {
        let Some((start, end)) = parse_range(range) else {
            continue;
        };
        for cp in start..=end {
            rows.push(probe_code_page(cp));
        }
    }
    rows
}

fn probe_name(name: &str) -> ProbeRow {
    match registry::resolve(name) {
        Ok(enc) => ProbeRow {
            name: name.to_string(),
            code_page: registry::code_page_of(enc),
            found: true,
            display_name: enc.name().to_string(),
            preamble_hex: hex(registry::preamble(enc.output_encoding())),
        },
        Err(_) => ProbeRow {
            name: name.to_string(),
            code_page: None,
            found: false,
            display_name: String::new(),
            preamble_hex: String::new(),
        },
    }
}

fn probe_code_page(cp: u16) -> ProbeRow {
    match registry::by_code_page(cp) {
        Some(enc) => ProbeRow {
            name: enc.name().to_string(),
            code_page: Some(cp),
            found: true,
            display_name: enc.name().to_string(),
            preamble_hex: hex(registry::preamble(enc.output_encoding())),
        },
        None => ProbeRow {
            name: String::new(),
            code_page: Some(cp),
            found: false,
            display_name: String::new(),
            preamble_hex: String::new(),
        },
    }
}

/// "932" -> (932, 932); "0-1000" -> (0, 1000). Unparsable or inverted
/// ranges are skipped.
fn parse_range(s: &str) -> Option<(u16, u16)> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    match s.split_once('-') {
        None => {
            let cp = s.parse::<u16>().ok()?;
            Some((cp, cp))
        }
        Some((a, b)) => {
            let start = a.trim().parse::<u16>().ok()?;
            let end = b.trim().parse::<u16>().ok()?;
            if start > end {
                return None;
            }
            Some((start, end))
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
