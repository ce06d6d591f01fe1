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

//! Utilities for testing code that reads, seeks, closes and stats files.
//!
//! - [`HookedReader`] runs a hook after a number of bytes has been read,
//!   e.g. to inject an error or to signal another thread.
//! - [`MockFile`] is a file made of independent read, seek, close and stat
//!   delegates, each doing nothing when unset.
//!
//! [`FromStd`] and [`IntoStd`] connect both to `std::io`.

mod capability;
mod compat;
mod error;
mod file_info;
mod hooked;
mod mock_file;
#[cfg(test)]
mod test_utils;

pub use capability::{
    CloseFn, Closer, ReadFn, ReadOutcome, Reader, SeekFn, Seeker, StatFn, Stater, Whence,
};
pub use compat::{FromStd, IntoStd};
pub use error::StreamError;
pub use file_info::MockFileInfo;
pub use hooked::{HookAction, HookedReader};
pub use mock_file::MockFile;
