use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Bytes pulled from the reader but not yet consumed by the scanner.
///
/// The lookahead never holds more bytes than the longest peek asked for, so
/// reading stays incremental even over a blocking source.
pub(super) struct InputStream<R> {
    reader: R,
    lookahead: VecDeque<u8>,
    position: usize,
}

impl<R: BufRead> InputStream<R> {
    pub(super) const fn new(reader: R) -> Self {
        Self {
            reader,
            lookahead: VecDeque::new(),
            position: 0,
        }
    }

    /// Number of bytes consumed so far.
    pub(super) const fn position(&self) -> usize {
        self.position
    }

    /// Ensure at least `n` bytes are buffered, unless input ends first.
    fn fill(&mut self, n: usize) -> io::Result<()> {
        while self.lookahead.len() < n {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(());
            }
            let take = available.len().min(n - self.lookahead.len());
            self.lookahead.extend(&available[..take]);
            self.reader.consume(take);
        }
        Ok(())
    }

    /// Look at the byte `offset` places ahead without consuming it.
    pub(super) fn peek(&mut self, offset: usize) -> io::Result<Option<u8>> {
        self.fill(offset + 1)?;
        Ok(self.lookahead.get(offset).copied())
    }

    /// "Consume the next input character"
    pub(super) fn consume(&mut self) -> io::Result<Option<u8>> {
        self.fill(1)?;
        let byte = self.lookahead.pop_front();
        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    /// Consume up to `n` bytes, stopping early at end of input.
    pub(super) fn consume_bytes(&mut self, n: usize) -> io::Result<()> {
        for _ in 0..n {
            if self.consume()?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// "If the next few characters are..."
    pub(super) fn next_few_bytes_are(&mut self, target: &[u8]) -> io::Result<bool> {
        self.fill(target.len())?;
        Ok(self.lookahead.len() >= target.len()
            && self.lookahead.iter().zip(target).all(|(a, b)| a == b))
    }

    /// Consume bytes while `predicate` holds and return them.
    pub(super) fn take_while(&mut self, predicate: impl Fn(u8) -> bool) -> io::Result<Vec<u8>> {
        let mut taken = Vec::new();
        while let Some(byte) = self.peek(0)? {
            if !predicate(byte) {
                break;
            }
            taken.push(byte);
            self.position += 1;
            let _ = self.lookahead.pop_front();
        }
        Ok(taken)
    }

    pub(super) fn skip_whitespace(&mut self) -> io::Result<()> {
        while let Some(byte) = self.peek(0)? {
            if !is_whitespace_byte(byte) {
                break;
            }
            self.position += 1;
            let _ = self.lookahead.pop_front();
        }
        Ok(())
    }
}

/// Space, tab, line feed, vertical tab, form feed, carriage return.
pub(super) const fn is_whitespace_byte(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}
