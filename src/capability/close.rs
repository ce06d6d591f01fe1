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

pub trait Closer {
    fn close(&mut self) -> Result<(), StreamError>;
}

/// Wraps up a function as a [`Closer`].
pub struct CloseFn<F>(pub F);

impl<F> CloseFn<F>
where
    F: FnMut() -> Result<(), StreamError>,
{
    #[inline]
    pub fn new(f: F) -> CloseFn<F> {
        CloseFn(f)
    }
}

impl<F> Closer for CloseFn<F>
where
    F: FnMut() -> Result<(), StreamError>,
{
    #[inline]
    fn close(&mut self) -> Result<(), StreamError> {
        (self.0)()
    }
}
