//! I/O adapters that hash bytes as they pass through.
//!
//! [`HashReader`] and [`HashWriter`] wrap any [`Read`](std::io::Read) /
//! [`Write`](std::io::Write) and feed a [`StreamingHash`] with exactly the bytes
//! transferred, so short reads and short writes are accounted for.
//!
//! # Example
//!
//! ```rust
//! # use traits::StreamingHash;
//! # #[derive(Clone, Default)]
//! # struct Sum(u32);
//! # impl StreamingHash for Sum {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   type Output = u32;
//! #   fn new() -> Self { Self(0) }
//! #   fn with_initial(initial: Self::Output) -> Self { Self(initial) }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn finalize(&self) -> Self::Output { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! use std::io::Cursor;
//!
//! use traits::io::HashReader;
//!
//! let mut reader = HashReader::<_, Sum>::new(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.hash(), u32::from(b'a') + u32::from(b'b') + u32::from(b'c'));
//! assert_eq!(reader.bytes_read(), 3);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, IoSlice, IoSliceMut, Read, Write};

use crate::StreamingHash;

/// Feed the first `n` bytes spread across `bufs` to `on_data`.
#[inline]
fn update_prefix<'a>(bufs: impl Iterator<Item = &'a [u8]>, n: usize, mut on_data: impl FnMut(&[u8])) {
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let take = remaining.min(buf.len());
    if let Some(data) = buf.get(..take) {
      on_data(data);
    }
    remaining -= take;
  }
}

/// Wraps a [`Read`] and hashes every byte read through it.
#[derive(Clone, Debug)]
pub struct HashReader<R, H: StreamingHash> {
  inner: R,
  hasher: H,
  bytes: u64,
}

impl<R, H: StreamingHash> HashReader<R, H> {
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: H::new(), bytes: 0 }
  }

  /// Start from a previous hash value instead of the published seed.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: R, initial: H::Output) -> Self {
    Self { inner, hasher: H::with_initial(initial), bytes: 0 }
  }

  /// Hash of everything read so far.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Number of bytes read so far.
  #[inline]
  #[must_use]
  pub const fn bytes_read(&self) -> u64 {
    self.bytes
  }

  /// Unwrap, returning the inner reader and the hash so far.
  #[inline]
  pub fn into_parts(self) -> (R, H::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: Read, H: StreamingHash> Read for HashReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    self.bytes += n as u64;
    Ok(n)
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let hasher = &mut self.hasher;
    update_prefix(bufs.iter().map(|b| &**b), n, |data| hasher.update(data));
    self.bytes += n as u64;
    Ok(n)
  }
}

/// Wraps a [`Write`] and hashes every byte the inner writer accepts.
///
/// Only the bytes reported as written are hashed, so retrying a short write
/// does not double-count anything.
#[derive(Clone, Debug)]
pub struct HashWriter<W, H: StreamingHash> {
  inner: W,
  hasher: H,
  bytes: u64,
}

impl<W, H: StreamingHash> HashWriter<W, H> {
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: H::new(), bytes: 0 }
  }

  /// Hash of everything written so far.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Number of bytes written so far.
  #[inline]
  #[must_use]
  pub const fn bytes_written(&self) -> u64 {
    self.bytes
  }

  /// Unwrap, returning the inner writer and the hash so far.
  #[inline]
  pub fn into_parts(self) -> (W, H::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }
}

impl<W: Write, H: StreamingHash> Write for HashWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    self.bytes += n as u64;
    Ok(n)
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    let hasher = &mut self.hasher;
    update_prefix(bufs.iter().map(|b| &**b), n, |data| hasher.update(data));
    self.bytes += n as u64;
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(test)]
mod tests {
  use std::{io::Cursor, vec::Vec};

  use super::*;

  #[derive(Clone, Default)]
  struct Sum(u32);

  impl StreamingHash for Sum {
    const OUTPUT_SIZE: usize = 4;
    type Output = u32;

    fn new() -> Self {
      Self(0)
    }

    fn with_initial(initial: u32) -> Self {
      Self(initial)
    }

    fn update(&mut self, data: &[u8]) {
      for &b in data {
        self.0 = self.0.wrapping_add(u32::from(b));
      }
    }

    fn finalize(&self) -> u32 {
      self.0
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  /// Accepts at most `limit` bytes per call.
  struct Trickle {
    out: Vec<u8>,
    limit: usize,
  }

  impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      let n = buf.len().min(self.limit);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn reader_hashes_what_was_read() {
    let mut r = HashReader::<_, Sum>::new(Cursor::new(b"hello".to_vec()));
    let mut buf = [0u8; 2];
    let n = r.read(&mut buf).unwrap();
    assert_eq!(n, 2);
    assert_eq!(r.hash(), u32::from(b'h') + u32::from(b'e'));
    assert_eq!(r.bytes_read(), 2);
  }

  #[test]
  fn reader_vectored_counts_only_filled_bytes() {
    let mut r = HashReader::<_, Sum>::new(Cursor::new(b"abc".to_vec()));
    let mut a = [0u8; 2];
    let mut b = [0u8; 8];
    let n = r.read_vectored(&mut [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b)]).unwrap();
    assert_eq!(n, 3);
    assert_eq!(r.hash(), Sum::hash_all(b"abc"));
  }

  #[test]
  fn short_writes_are_not_double_counted() {
    let mut w = HashWriter::<_, Sum>::new(Trickle { out: Vec::new(), limit: 3 });
    w.write_all(b"hello world").unwrap();
    let (inner, hash) = w.into_parts();
    assert_eq!(inner.out, b"hello world");
    assert_eq!(hash, Sum::hash_all(b"hello world"));
  }

  #[test]
  fn resume_reader() {
    let head = Sum::hash_all(b"ab");
    let mut r = HashReader::<_, Sum>::with_initial(Cursor::new(b"cd".to_vec()), head);
    io::copy(&mut r, &mut io::sink()).unwrap();
    assert_eq!(r.hash(), Sum::hash_all(b"abcd"));
  }

  #[test]
  fn reader_count_survives_full_drain() {
    let mut r = HashReader::<_, Sum>::new(Cursor::new(b"hello world".to_vec()));
    io::copy(&mut r, &mut io::sink()).unwrap();
    let n: u64 = r.bytes_read();
    assert_eq!(n, 11);
    assert_eq!(r.hash(), Sum::hash_all(b"hello world"));
  }

  #[test]
  fn reader_exposes_inner() {
    let mut r = HashReader::<_, Sum>::new(Cursor::new(b"abcdef".to_vec()));
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf).unwrap();
    assert_eq!(r.inner().position(), 4);

    // Bytes skipped on the inner reader are not hashed.
    r.inner_mut().set_position(5);
    io::copy(&mut r, &mut io::sink()).unwrap();
    assert_eq!(r.hash(), Sum::hash_all(b"abcdf"));
    assert_eq!(r.bytes_read(), 5);

    let inner = r.into_inner();
    assert_eq!(inner.position(), 6);
  }

  #[test]
  fn writer_counts_and_unwraps() {
    let mut w = HashWriter::<_, Sum>::new(Vec::new());
    w.write_all(b"xyz").unwrap();
    w.flush().unwrap();
    assert_eq!(w.bytes_written(), 3);
    assert_eq!(w.hash(), Sum::hash_all(b"xyz"));
    assert_eq!(w.into_inner(), b"xyz");
  }
}
