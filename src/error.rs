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

use thiserror::Error;

/// Error returned by the capabilities of this crate, either on its own or
/// together with a byte count (see [`ReadOutcome`](crate::ReadOutcome)).
#[derive(Error, Debug)]
pub enum StreamError {
    /// No more bytes are available.
    #[error("end of stream")]
    EndOfStream,

    /// Any other error, passed through from a delegate or injected by a test.
    #[error("IO error")]
    IO {
        #[from]
        source: io::Error,
    },
}

impl StreamError {
    #[inline]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, StreamError::EndOfStream)
    }
}

impl From<StreamError> for io::Error {
    fn from(value: StreamError) -> Self {
        match value {
            StreamError::EndOfStream => io::Error::from(io::ErrorKind::UnexpectedEof),
            StreamError::IO { source } => source,
        }
    }
}
