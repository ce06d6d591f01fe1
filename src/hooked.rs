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

use log::debug;

use crate::capability::{Closer, ReadOutcome, Reader, Seeker, Stater, Whence};
use crate::error::StreamError;
use crate::file_info::MockFileInfo;

/// Returned by the hook of a [`HookedReader`].
///
/// A one-shot error is `HookAction::disable().error(e)`, an error recurring
/// every 20 bytes is `HookAction::after(20).error(e)`.
#[derive(Debug)]
pub struct HookAction {
    /// Bytes to read before the hook runs again. Negative disables it.
    pub next: i64,
    /// Returned as the error of the read call that triggered the hook.
    pub error: Option<StreamError>,
}

impl HookAction {
    #[inline]
    pub fn after(next: i64) -> HookAction {
        HookAction { next, error: None }
    }

    #[inline]
    pub fn disable() -> HookAction {
        HookAction::after(-1)
    }

    #[inline]
    pub fn error(mut self, error: StreamError) -> HookAction {
        self.error = Some(error);
        self
    }
}

/// A reader that runs a hook after a number of bytes has been read from the
/// inner reader.
///
/// The hook receives the invocation number, starting at 1, and returns a
/// [`HookAction`]. It runs synchronously inside the `read` call, so it may
/// also block, e.g. to hand control over a channel to the thread driving
/// the code under test.
///
/// A single read call crosses at most one interception boundary: the
/// buffer passed to the inner reader is truncated to the bytes left until
/// the boundary.
pub struct HookedReader<R, F> {
    inner: R,
    // Negative means the hook is disabled.
    remaining: i64,
    hook: F,
    invocations: u64,
}

impl<R, F> HookedReader<R, F>
where
    R: Reader,
    F: FnMut(u64) -> HookAction,
{
    /// Runs `hook` after `threshold` bytes are read from `inner`. A negative
    /// threshold makes this a plain passthrough.
    pub fn new(inner: R, threshold: i64, hook: F) -> HookedReader<R, F> {
        HookedReader {
            inner,
            remaining: threshold,
            hook,
            invocations: 0,
        }
    }
}

impl<R, F> HookedReader<R, F> {
    /// Bytes left until the next hook invocation, negative if disabled.
    #[inline]
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// How many times the hook has run.
    #[inline]
    pub fn invocations(&self) -> u64 {
        self.invocations
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

impl<R, F> Reader for HookedReader<R, F>
where
    R: Reader,
    F: FnMut(u64) -> HookAction,
{
    fn read(&mut self, buf: &mut [u8]) -> ReadOutcome {
        if self.remaining < 0 {
            return self.inner.read(buf);
        }

        let remaining = self.remaining as u64;
        if (buf.len() as u64) < remaining {
            let outcome = self.inner.read(buf);
            self.remaining -= outcome.n as i64;
            return outcome;
        }

        // Safe to cast: remaining is not bigger than the buffer length.
        let outcome = self.inner.read(&mut buf[..remaining as usize]);
        self.remaining -= outcome.n as i64;
        if outcome.error.is_some() || self.remaining != 0 {
            return outcome;
        }

        self.invocations += 1;
        let action = (self.hook)(self.invocations);
        debug!(
            "Hook invocation {} returned next threshold {}, error: {:?}",
            self.invocations, action.next, action.error
        );
        if action.next < 0 {
            debug!("Hook disabled after {} invocations", self.invocations);
        }
        self.remaining = action.next;
        ReadOutcome {
            n: outcome.n,
            error: action.error,
        }
    }
}

impl<R: Seeker, F> Seeker for HookedReader<R, F> {
    #[inline]
    fn seek(&mut self, offset: i64, whence: Whence) -> Result<i64, StreamError> {
        self.inner.seek(offset, whence)
    }
}

impl<R: Closer, F> Closer for HookedReader<R, F> {
    #[inline]
    fn close(&mut self) -> Result<(), StreamError> {
        self.inner.close()
    }
}

impl<R: Stater, F> Stater for HookedReader<R, F> {
    #[inline]
    fn stat(&self) -> Result<MockFileInfo, StreamError> {
        self.inner.stat()
    }
}

impl<R: fmt::Debug, F> fmt::Debug for HookedReader<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookedReader")
            .field("inner", &self.inner)
            .field("remaining", &self.remaining)
            .field("invocations", &self.invocations)
            .finish_non_exhaustive()
    }
}
