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

use std::fmt;

use log::trace;

use crate::capability::{Closer, ReadOutcome, Reader, Seeker, Stater, Whence};
use crate::error::StreamError;
use crate::file_info::MockFileInfo;

/// A file assembled from independent read, seek, close and stat delegates.
///
/// Each delegate is an object implementing the capability, or a single
/// function wrapped in [`ReadFn`](crate::ReadFn), [`SeekFn`](crate::SeekFn),
/// [`CloseFn`](crate::CloseFn) or [`StatFn`](crate::StatFn). When a delegate
/// is missing, the matching call does nothing:
///
/// - `read` returns `(0, EndOfStream)`;
/// - `seek` returns the requested offset, as if `whence` were `Start`;
/// - `close` succeeds;
/// - `stat` returns [`MockFileInfo::dummy`].
#[derive(Default)]
pub struct MockFile {
    pub reader: Option<Box<dyn Reader + Send>>,
    pub seeker: Option<Box<dyn Seeker + Send>>,
    pub closer: Option<Box<dyn Closer + Send>>,
    pub stater: Option<Box<dyn Stater + Send>>,
}

impl MockFile {
    pub fn new() -> MockFile {
        MockFile::default()
    }

    pub fn with_reader(mut self, reader: impl Reader + Send + 'static) -> Self {
        self.reader = Some(Box::new(reader));
        self
    }

    pub fn with_seeker(mut self, seeker: impl Seeker + Send + 'static) -> Self {
        self.seeker = Some(Box::new(seeker));
        self
    }

    pub fn with_closer(mut self, closer: impl Closer + Send + 'static) -> Self {
        self.closer = Some(Box::new(closer));
        self
    }

    pub fn with_stater(mut self, stater: impl Stater + Send + 'static) -> Self {
        self.stater = Some(Box::new(stater));
        self
    }
}

impl Reader for MockFile {
    fn read(&mut self, buf: &mut [u8]) -> ReadOutcome {
        match self.reader.as_mut() {
            Some(reader) => reader.read(buf),
            None => {
                trace!("No reader set, returning end of stream");
                ReadOutcome::end_of_stream()
            }
        }
    }
}

impl Seeker for MockFile {
    fn seek(&mut self, offset: i64, whence: Whence) -> Result<i64, StreamError> {
        match self.seeker.as_mut() {
            Some(seeker) => seeker.seek(offset, whence),
            None => {
                trace!("No seeker set, returning offset {}", offset);
                Ok(offset)
            }
        }
    }
}

impl Closer for MockFile {
    fn close(&mut self) -> Result<(), StreamError> {
        match self.closer.as_mut() {
            Some(closer) => closer.close(),
            None => Ok(()),
        }
    }
}

impl Stater for MockFile {
    fn stat(&self) -> Result<MockFileInfo, StreamError> {
        match self.stater.as_ref() {
            Some(stater) => stater.stat(),
            None => {
                trace!("No stater set, returning dummy file info");
                Ok(MockFileInfo::dummy())
            }
        }
    }
}

impl fmt::Debug for MockFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockFile")
            .field("reader", &self.reader.is_some())
            .field("seeker", &self.seeker.is_some())
            .field("closer", &self.closer.is_some())
            .field("stater", &self.stater.is_some())
            .finish()
    }
}
