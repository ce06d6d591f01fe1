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

mod close;
mod read;
mod seek;
mod stat;

pub use close::{CloseFn, Closer};
#[cfg(test)]
pub(crate) use read::MockTestReader;
pub use read::{ReadFn, ReadOutcome, Reader};
pub use seek::{SeekFn, Seeker, Whence};
pub use stat::{StatFn, Stater};
