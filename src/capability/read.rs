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

use crate::error::StreamError;

/// Result of a single read call.
///
/// Unlike `io::Result<usize>`, a read may report bytes and an error at the
/// same time: `n` bytes were placed at the start of the buffer and the
/// error happened after them.
#[derive(Debug)]
pub struct ReadOutcome {
    pub n: usize,
    pub error: Option<StreamError>,
}

impl ReadOutcome {
    #[inline]
    pub fn ok(n: usize) -> ReadOutcome {
        ReadOutcome { n, error: None }
    }

    #[inline]
    pub fn with_error(n: usize, error: StreamError) -> ReadOutcome {
        ReadOutcome {
            n,
            error: Some(error),
        }
    }

    #[inline]
    pub fn end_of_stream() -> ReadOutcome {
        ReadOutcome::with_error(0, StreamError::EndOfStream)
    }

    #[inline]
    pub fn is_end_of_stream(&self) -> bool {
        self.error
            .as_ref()
            .map_or(false, StreamError::is_end_of_stream)
    }
}

pub trait Reader {
    fn read(&mut self, buf: &mut [u8]) -> ReadOutcome;
}

impl<R: Reader + ?Sized> Reader for &mut R {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> ReadOutcome {
        (**self).read(buf)
    }
}

impl<R: Reader + ?Sized> Reader for Box<R> {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> ReadOutcome {
        (**self).read(buf)
    }
}

/// Wraps up a function as a [`Reader`].
pub struct ReadFn<F>(pub F);

impl<F> ReadFn<F>
where
    F: FnMut(&mut [u8]) -> ReadOutcome,
{
    #[inline]
    pub fn new(f: F) -> ReadFn<F> {
        ReadFn(f)
    }
}

impl<F> Reader for ReadFn<F>
where
    F: FnMut(&mut [u8]) -> ReadOutcome,
{
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> ReadOutcome {
        (self.0)(buf)
    }
}

#[cfg(test)]
mockall::mock! {
    #[cfg(test)]
    #[derive(Debug)]
    pub(crate) TestReader {}

    impl Reader for TestReader {
        fn read(&mut self, buf: &mut [u8]) -> ReadOutcome;
    }
}
