// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use byteorder::ReadBytesExt;
use std::io::{BufReader, Read, Seek, SeekFrom, Write};

use crate::{Error, Result, ToU64, TryVec};
#[allow(unused_imports)]
use crate::Vec;

/// Buffered, seekable view of the damaged input.
///
/// Every component of the repair engine reads the input through this type.
/// It tracks the absolute offset (for diagnostics and bounded rewinds) and the
/// total stream length, so that skips past the end are reported as
/// [`Error::UnexpectedEOF`] instead of silently succeeding.
pub struct ByteCursor<R> {
    reader: BufReader<R>,
    offset: u64,
    len: u64,
}

impl<R: Read + Seek> ByteCursor<R> {
    pub fn new(mut inner: R) -> Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self { reader: BufReader::new(inner), offset: 0, len })
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Total length of the input.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.offset)
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.len
    }

    /// Read exactly `N` bytes, or fail with `UnexpectedEOF` leaving the
    /// offset where the short read stopped.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Read one byte; `None` at the end of the input.
    pub fn next_byte(&mut self) -> Result<Option<u8>> {
        match self.read_array::<1>() {
            Ok([b]) => Ok(Some(b)),
            Err(Error::UnexpectedEOF) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Look at the next `N` bytes without consuming them.
    pub fn peek<const N: usize>(&mut self) -> Result<[u8; N]> {
        let start = self.offset;
        let bytes = self.read_array::<N>();
        self.seek_to(start)?;
        bytes
    }

    pub fn peek_u32(&mut self) -> Result<u32> {
        self.peek::<4>().map(u32::from_be_bytes)
    }

    pub fn seek_relative(&mut self, delta: i64) -> Result<()> {
        let target = self
            .offset
            .checked_add_signed(delta)
            .ok_or(Error::InvalidData("seek before start of stream"))?;
        self.reader.seek_relative(delta)?;
        self.offset = target;
        Ok(())
    }

    pub fn seek_to(&mut self, pos: u64) -> Result<()> {
        let delta = i64::try_from(pos)? - i64::try_from(self.offset)?;
        self.seek_relative(delta)
    }

    /// Skip `bytes` forward. Fails without moving if that would pass the end.
    pub fn skip(&mut self, bytes: u64) -> Result<()> {
        if bytes > self.remaining() {
            return Err(Error::UnexpectedEOF);
        }
        self.seek_relative(i64::try_from(bytes)?)
    }

    /// Read a whole unit payload, allocating fallibly.
    ///
    /// The payload is only returned once all `len` bytes have been read.
    pub fn read_payload(&mut self, len: u32) -> Result<TryVec<u8>> {
        let len = u64::from(len);
        if len > self.remaining() {
            return Err(Error::UnexpectedEOF);
        }
        let mut vec = std::vec::Vec::new();
        vec.try_reserve_exact(usize::try_from(len)?)
            .map_err(|_| Error::OutOfMemory)?;
        let read = self.by_ref().take(len).read_to_end(&mut vec)?;
        if read.to_u64() != len {
            return Err(Error::UnexpectedEOF);
        }
        Ok(vec.into())
    }

    /// Copy everything from the current offset to `out`.
    pub fn copy_to_end<W: Write>(&mut self, out: &mut W) -> Result<u64> {
        let copied = std::io::copy(self, out)?;
        Ok(copied)
    }
}

impl<R: Read> Read for ByteCursor<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let bytes_read = self.reader.read(buf)?;
        self.offset = self
            .offset
            .checked_add(bytes_read.to_u64())
            .ok_or(Error::Unsupported("total bytes read too large for offset type"))?;
        Ok(bytes_read)
    }
}

pub(crate) fn be_u16<T: ReadBytesExt>(src: &mut T) -> Result<u16> {
    src.read_u16::<byteorder::BigEndian>().map_err(From::from)
}

pub(crate) fn be_u32<T: ReadBytesExt>(src: &mut T) -> Result<u32> {
    src.read_u32::<byteorder::BigEndian>().map_err(From::from)
}
