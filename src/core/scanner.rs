//! Whitespace-delimited integer reader over any byte stream

use std::io::{BufRead, BufReader, ErrorKind, Read};

use super::error::{Error, Result};

/// Pulls unsigned integers from a stream, one token at a time.
///
/// The scanner owns its buffer, so nothing outlives a single query. Input is
/// consumed incrementally; large networks are never held in memory as text.
pub struct Scanner<R> {
    reader: BufReader<R>,
}

impl<R: Read> Scanner<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
        }
    }

    /// Read the next token as a `u32`. `expected` names the field in errors.
    pub fn next_u32(&mut self, expected: &'static str) -> Result<u32> {
        if !self.skip_whitespace()? {
            return Err(Error::UnexpectedEof { expected });
        }

        let mut value: u64 = 0;
        loop {
            let (consumed, done) = {
                let buf = match self.reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                };
                if buf.is_empty() {
                    break;
                }

                let mut consumed = 0;
                let mut done = false;
                for &byte in buf {
                    if byte.is_ascii_whitespace() {
                        done = true;
                        break;
                    }
                    if !byte.is_ascii_digit() {
                        return Err(Error::InvalidInput(format!(
                            "unexpected character {:?} while reading {expected}",
                            byte as char
                        )));
                    }
                    value = value * 10 + u64::from(byte - b'0');
                    if value > u64::from(u32::MAX) {
                        return Err(Error::InvalidInput(format!(
                            "{expected} does not fit in 32 bits"
                        )));
                    }
                    consumed += 1;
                }
                (consumed, done)
            };
            self.reader.consume(consumed);
            if done {
                break;
            }
        }

        Ok(value as u32)
    }

    /// Advance past whitespace; `false` means the stream is exhausted.
    fn skip_whitespace(&mut self) -> Result<bool> {
        loop {
            let (skipped, found) = {
                let buf = match self.reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                };
                if buf.is_empty() {
                    return Ok(false);
                }
                match buf.iter().position(|b| !b.is_ascii_whitespace()) {
                    Some(idx) => (idx, true),
                    None => (buf.len(), false),
                }
            };
            self.reader.consume(skipped);
            if found {
                return Ok(true);
            }
        }
    }
}
