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

use std::collections::VecDeque;
use std::error::Error;
use std::io;
use std::io::ErrorKind;

use fastrand::Rng;

use crate::capability::{ReadOutcome, Reader};
use crate::error::StreamError;

pub(crate) const HELLO_WORLD: &[u8] = b"hello world";

pub(crate) fn test_error() -> StreamError {
    StreamError::from(io::Error::new(ErrorKind::Other, "test_error"))
}

pub(crate) fn assert_test_error(error: &StreamError) {
    let source = error.source().unwrap();
    let source_error = source.downcast_ref::<io::Error>().unwrap();
    assert_eq!(source_error.kind(), ErrorKind::Other);
    assert_eq!(format!("{}", source_error), "test_error");
}

/// Endless, reproducible sequence of read sizes in `1..=max`.
pub(crate) fn random_chunk_sizes(seed: u64, max: usize) -> impl Iterator<Item = usize> {
    let mut rng = Rng::with_seed(seed);
    std::iter::repeat_with(move || rng.usize(1..=max))
}

/// Returns the scripted chunks one per read call, then end of stream.
/// Remembers the buffer length of every call.
#[derive(Debug)]
pub(crate) struct ScriptedReader {
    chunks: VecDeque<(Vec<u8>, Option<io::Error>)>,
    requested: Vec<usize>,
}

impl ScriptedReader {
    pub(crate) fn new(chunks: Vec<(Vec<u8>, Option<io::Error>)>) -> ScriptedReader {
        ScriptedReader {
            chunks: chunks.into(),
            requested: Vec::new(),
        }
    }

    pub(crate) fn requested(&self) -> &[usize] {
        &self.requested
    }
}

impl Reader for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> ReadOutcome {
        self.requested.push(buf.len());
        match self.chunks.pop_front() {
            Some((data, error)) => {
                assert!(data.len() <= buf.len(), "scripted chunk exceeds the buffer");
                buf[..data.len()].copy_from_slice(&data);
                ReadOutcome {
                    n: data.len(),
                    error: error.map(StreamError::from),
                }
            }
            None => ReadOutcome::end_of_stream(),
        }
    }
}
