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
use crate::file_info::MockFileInfo;

/// Provides file metadata, like `std::fs::File::metadata`.
pub trait Stater {
    fn stat(&self) -> Result<MockFileInfo, StreamError>;
}

/// Wraps up a function as a [`Stater`].
pub struct StatFn<F>(pub F);

impl<F> StatFn<F>
where
    F: Fn() -> Result<MockFileInfo, StreamError>,
{
    #[inline]
    pub fn new(f: F) -> StatFn<F> {
        StatFn(f)
    }
}

impl<F> Stater for StatFn<F>
where
    F: Fn() -> Result<MockFileInfo, StreamError>,
{
    #[inline]
    fn stat(&self) -> Result<MockFileInfo, StreamError> {
        (self.0)()
    }
}
