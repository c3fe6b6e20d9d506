//! Buffered writer that wipes its buffer after every flush.

use std::io::{self, Write};

use zeroize::Zeroize;

const CAPACITY: usize = 8 * 1024;

pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_until_flush() {
        let mut out = Vec::new();
        {
            let mut w = SecureBufWriter::new(&mut out);
            w.write_all(b"ana\n").unwrap();
            w.write_all(b"luz\n").unwrap();
            assert!(w.inner.is_empty());
            w.flush().unwrap();
            assert!(w.buf.is_empty());
        }
        assert_eq!(out, b"ana\nluz\n");
    }

    #[test]
    fn large_writes_bypass_the_buffer() {
        let mut out = Vec::new();
        let big = vec![b'x'; CAPACITY + 1];
        {
            let mut w = SecureBufWriter::new(&mut out);
            w.write_all(b"a").unwrap();
            w.write_all(&big).unwrap();
        }
        assert_eq!(out.len(), CAPACITY + 2);
        assert_eq!(out[0], b'a');
    }
}
