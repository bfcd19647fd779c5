// crates/tenc-core/src/codec/newline.rs
//
// Byte-level line terminator rewriting on destination-encoded chunks.
//
// Rules:
// - A terminator is \r, \n, or \r\n; every terminator is rewritten to the
//   requested style. Style None passes the chunk through verbatim.
// - A \r at the end of a chunk is held back (pending_cr) because the next
//   chunk may start with \n, completing a \r\n pair.
// - Works after encoding, so the destination must keep 0x0D/0x0A unambiguous
//   (true for ASCII-compatible encodings).

use std::io::{self, Write};

use memchr::memchr2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    None,
    Cr,
    Lf,
    Crlf,
}

impl Newline {
    /// Case-insensitive token -> style. Unrecognized or empty tokens mean `None`.
    pub fn parse(token: &str) -> Newline {
        if token.eq_ignore_ascii_case("crlf") {
            Newline::Crlf
        } else if token.eq_ignore_ascii_case("lf") {
            Newline::Lf
        } else if token.eq_ignore_ascii_case("cr") {
            Newline::Cr
        } else {
            Newline::None
        }
    }

    fn terminator(self) -> Option<&'static [u8]> {
        match self {
            Newline::None => None,
            Newline::Cr => Some(b"\r"),
            Newline::Lf => Some(b"\n"),
            Newline::Crlf => Some(b"\r\n"),
        }
    }
}

/// Rewrites terminators in successive chunks, carrying a possible half \r\n
/// pair across chunk boundaries. Call `finish` once the stream is exhausted.
pub struct NewlineRewriter {
    style: Newline,
    pending_cr: bool,
}

impl NewlineRewriter {
    pub fn new(style: Newline) -> NewlineRewriter {
        NewlineRewriter {
            style,
            pending_cr: false,
        }
    }

    pub fn pending_cr(&self) -> bool {
        self.pending_cr
    }

    pub fn process<W: Write>(&mut self, chunk: &[u8], out: &mut W) -> io::Result<()> {
        let Some(nl) = self.style.terminator() else {
            return out.write_all(chunk);
        };

        let mut i = 0;
        if self.pending_cr && !chunk.is_empty() {
            // The held-back \r resolves now: as a pair if the chunk opens
            // with \n, otherwise as a lone \r.
            self.pending_cr = false;
            out.write_all(nl)?;
            if chunk[0] == b'\n' {
                i = 1;
            }
        }

        while i < chunk.len() {
            let Some(off) = memchr2(b'\r', b'\n', &chunk[i..]) else {
                out.write_all(&chunk[i..])?;
                break;
            };
            out.write_all(&chunk[i..i + off])?;
            let t = i + off;
            if chunk[t] == b'\n' {
                out.write_all(nl)?;
                i = t + 1;
            } else if t + 1 == chunk.len() {
                // Trailing \r: whether it is half of a pair depends on the
                // next chunk.
                self.pending_cr = true;
                i = t + 1;
            } else if chunk[t + 1] == b'\n' {
                out.write_all(nl)?;
                i = t + 2;
            } else {
                // Lone \r, including the first of a \r\r run.
                out.write_all(nl)?;
                i = t + 1;
            }
        }
        Ok(())
    }

    /// Resolves a still-pending \r as a lone terminator at end of stream.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.pending_cr {
            self.pending_cr = false;
            out.write_all(self.style.terminator().unwrap_or(b"\r"))?;
        }
        Ok(())
    }
}
