/*
 * Copyright 2024 Ivan Yurchenko
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::io;
use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::capability::{ReadOutcome, Reader, Seeker, Whence};
use crate::error::StreamError;

/// Makes a [`Reader`] (and [`Seeker`]) out of `std::io` types.
///
/// `Ok(0)` for a non-empty buffer is reported as end of stream.
#[derive(Debug)]
pub struct FromStd<R> {
    inner: R,
}

impl<R> FromStd<R> {
    #[inline]
    pub fn new(inner: R) -> FromStd<R> {
        FromStd { inner }
    }

    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Reader for FromStd<R> {
    fn read(&mut self, buf: &mut [u8]) -> ReadOutcome {
        match self.inner.read(buf) {
            Ok(0) if !buf.is_empty() => ReadOutcome::end_of_stream(),
            Ok(n) => ReadOutcome::ok(n),
            Err(e) => ReadOutcome::with_error(0, StreamError::from(e)),
        }
    }
}

impl<R: Seek> Seeker for FromStd<R> {
    fn seek(&mut self, offset: i64, whence: Whence) -> Result<i64, StreamError> {
        let pos = self.inner.seek(whence.to_seek_from(offset)?)?;
        i64::try_from(pos).map_err(|_| {
            StreamError::from(io::Error::new(ErrorKind::InvalidInput, "position is too big"))
        })
    }
}

/// Makes a `std::io` reader (and seeker) out of a [`Reader`].
///
/// A read that returns both bytes and an error is split: the bytes are
/// returned first, the error on the next call. End of stream becomes
/// `Ok(0)`.
#[derive(Debug)]
pub struct IntoStd<R> {
    inner: R,
    pending: Option<StreamError>,
}

impl<R> IntoStd<R> {
    #[inline]
    pub fn new(inner: R) -> IntoStd<R> {
        IntoStd {
            inner,
            pending: None,
        }
    }

    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

fn to_io_result(error: StreamError) -> io::Result<usize> {
    match error {
        StreamError::EndOfStream => Ok(0),
        e => Err(e.into()),
    }
}

impl<R: Reader> Read for IntoStd<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(error) = self.pending.take() {
            return to_io_result(error);
        }

        let outcome = self.inner.read(buf);
        match outcome.error {
            None => Ok(outcome.n),
            Some(error) if outcome.n == 0 => to_io_result(error),
            Some(error) => {
                self.pending = Some(error);
                Ok(outcome.n)
            }
        }
    }
}

impl<R: Seeker> Seek for IntoStd<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        // A deferred error belongs to the position being left.
        self.pending = None;
        let (offset, whence) = Whence::split(pos)?;
        let new_offset = self.inner.seek(offset, whence)?;
        u64::try_from(new_offset)
            .map_err(|_| io::Error::new(ErrorKind::InvalidInput, "negative position"))
    }
}
