// crates/tenc-core/src/codec/convert.rs
//
// Streaming transcode: fixed-size reads, decode under the source encoding,
// re-encode under the destination, pipe every encoded chunk through the
// newline rewriter. Memory stays O(chunk), never O(stream).

use std::io::{ErrorKind, Read, Write};

use encoding_rs::{CoderResult, DecoderResult, Encoder, Encoding};

use crate::codec::newline::{Newline, NewlineRewriter};
use crate::codec::registry;
use crate::error::{Result, TencError};

const READ_CHUNK: usize = 8 * 1024;

pub fn convert<R: Read, W: Write>(
    input: &mut R,
    from: &'static Encoding,
    output: &mut W,
    to: &'static Encoding,
    emit_preamble: bool,
    newline: Newline,
) -> Result<()> {
    // new_decoder() BOM-sniffs, so a recognized source preamble is skipped
    // (and may re-route the decoder, e.g. a UTF-16 BOM on a UTF-8 id).
    let mut decoder = from.new_decoder();
    let to = to.output_encoding();
    let mut encoder = to.new_encoder();
    let mut rewriter = NewlineRewriter::new(newline);

    let mut read_buf = vec![0u8; READ_CHUNK];
    let mut text = String::with_capacity(READ_CHUNK);
    let mut encoded: Vec<u8> = Vec::with_capacity(READ_CHUNK);
    let mut started = false;

    loop {
        let n = read_chunk(input, &mut read_buf)?;
        let last = n == 0;

        let mut pos = 0;
        loop {
            text.clear();
            let (result, read) =
                decoder.decode_to_string_without_replacement(&read_buf[pos..n], &mut text, last);
            pos += read;

            if !text.is_empty() {
                if !started {
                    started = true;
                    if emit_preamble {
                        let pre = registry::preamble(to);
                        if !pre.is_empty() {
                            output.write_all(pre)?;
                        }
                    }
                }
                encode_chunk(&mut encoder, &text, &mut encoded, &mut rewriter, output, false)?;
            }

            match result {
                DecoderResult::InputEmpty => break,
                DecoderResult::OutputFull => {}
                DecoderResult::Malformed(_, _) => {
                    return Err(TencError::Decode(format!(
                        "malformed byte sequence for {}",
                        decoder.encoding().name()
                    )));
                }
            }
        }

        if last {
            break;
        }
    }

    if started {
        // Flush encoder state (e.g. the shift-back sequence of ISO-2022-JP).
        encode_chunk(&mut encoder, "", &mut encoded, &mut rewriter, output, true)?;
    }
    rewriter.finish(output)?;
    output.flush()?;
    Ok(())
}

fn read_chunk<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<usize> {
    loop {
        match input.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

fn encode_chunk<W: Write>(
    encoder: &mut Encoder,
    text: &str,
    buf: &mut Vec<u8>,
    rewriter: &mut NewlineRewriter,
    output: &mut W,
    last: bool,
) -> Result<()> {
    let mut pos = 0;
    loop {
        buf.clear();
        if let Some(need) = encoder.max_buffer_length_from_utf8_if_no_unmappables(text.len() - pos)
        {
            buf.reserve(need);
        }
        let (result, read, _) = encoder.encode_from_utf8_to_vec(&text[pos..], buf, last);
        pos += read;
        if !buf.is_empty() {
            rewriter.process(buf, output)?;
        }
        match result {
            CoderResult::InputEmpty => return Ok(()),
            CoderResult::OutputFull => {
                // Unmappable replacements can outgrow the capacity hint; a
                // stall with no input consumed and no output produced means
                // the length computation disagrees with the encoder.
                if read == 0 && buf.is_empty() {
                    if buf.capacity() > 16 * text.len() + 1024 {
                        return Err(TencError::Encode(format!(
                            "encoder for {} made no progress",
                            encoder.encoding().name()
                        )));
                    }
                    buf.reserve(buf.capacity().max(64));
                }
            }
        }
    }
}
