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
use std::io::{ErrorKind, SeekFrom};

use crate::error::StreamError;

/// Origin of a seek offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    Start,
    Current,
    End,
}

impl Whence {
    /// Splits `pos` into a signed offset and its origin.
    pub fn split(pos: SeekFrom) -> io::Result<(i64, Whence)> {
        match pos {
            SeekFrom::Start(offset) => i64::try_from(offset)
                .map(|o| (o, Whence::Start))
                .map_err(|_| io::Error::new(ErrorKind::InvalidInput, "offset is too big")),
            SeekFrom::Current(offset) => Ok((offset, Whence::Current)),
            SeekFrom::End(offset) => Ok((offset, Whence::End)),
        }
    }

    pub fn to_seek_from(self, offset: i64) -> io::Result<SeekFrom> {
        match self {
            Whence::Start => u64::try_from(offset).map(SeekFrom::Start).map_err(|_| {
                io::Error::new(ErrorKind::InvalidInput, "negative offset from start")
            }),
            Whence::Current => Ok(SeekFrom::Current(offset)),
            Whence::End => Ok(SeekFrom::End(offset)),
        }
    }
}

pub trait Seeker {
    /// Returns the new offset from the start of the stream.
    fn seek(&mut self, offset: i64, whence: Whence) -> Result<i64, StreamError>;
}

/// Wraps up a function as a [`Seeker`].
pub struct SeekFn<F>(pub F);

impl<F> SeekFn<F>
where
    F: FnMut(i64, Whence) -> Result<i64, StreamError>,
{
    #[inline]
    pub fn new(f: F) -> SeekFn<F> {
        SeekFn(f)
    }
}

impl<F> Seeker for SeekFn<F>
where
    F: FnMut(i64, Whence) -> Result<i64, StreamError>,
{
    #[inline]
    fn seek(&mut self, offset: i64, whence: Whence) -> Result<i64, StreamError> {
        (self.0)(offset, whence)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{ErrorKind, SeekFrom};

    use rstest::rstest;

    use crate::capability::seek::{SeekFn, Seeker, Whence};
    use crate::test_utils::{assert_test_error, test_error};

    #[rstest]
    #[case(SeekFrom::Start(0), 0, Whence::Start)]
    #[case(SeekFrom::Start(65), 65, Whence::Start)]
    #[case(SeekFrom::Current(-3), -3, Whence::Current)]
    #[case(SeekFrom::End(-10), -10, Whence::End)]
    fn split_and_back(
        #[case] pos: SeekFrom,
        #[case] expected_offset: i64,
        #[case] expected_whence: Whence,
    ) {
        let (offset, whence) = Whence::split(pos).unwrap();
        assert_eq!(offset, expected_offset);
        assert_eq!(whence, expected_whence);
        assert_eq!(whence.to_seek_from(offset).unwrap(), pos);
    }

    #[test]
    fn split_too_big_offset() {
        let error = Whence::split(SeekFrom::Start(u64::MAX)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn negative_offset_from_start() {
        let error = Whence::Start.to_seek_from(-1).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn seek_fn_forwards_arguments_and_result() {
        let mut seeker = SeekFn::new(|offset, whence| {
            assert_eq!(offset, 65);
            assert_eq!(whence, Whence::End);
            Ok(456)
        });
        assert_eq!(seeker.seek(65, Whence::End).unwrap(), 456);

        let mut failing = SeekFn::new(|_, _| Err(test_error()));
        assert_test_error(&failing.seek(0, Whence::Start).unwrap_err());
    }
}
