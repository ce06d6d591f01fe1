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

use std::time::{SystemTime, UNIX_EPOCH};

/// File metadata as reported by a [`Stater`](crate::Stater).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFileInfo {
    /// Base name of the file.
    pub name: String,
    /// Length in bytes.
    pub size: u64,
    /// Permission bits, e.g. `0o644`.
    pub mode: u32,
    pub mod_time: SystemTime,
    pub is_dir: bool,
}

impl MockFileInfo {
    pub const DUMMY_NAME: &'static str = "dummyfile";
    pub const DUMMY_MODE: u32 = 0o644;

    /// Empty, zero-mode regular file modified at the Unix epoch.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            size: 0,
            mode: 0,
            mod_time: UNIX_EPOCH,
            is_dir: false,
        }
    }

    /// What a [`MockFile`](crate::MockFile) without a stater reports.
    pub fn dummy() -> Self {
        MockFileInfo::new(MockFileInfo::DUMMY_NAME).mode(MockFileInfo::DUMMY_MODE)
    }

    pub fn size(mut self, value: u64) -> Self {
        self.size = value;
        self
    }

    pub fn mode(mut self, value: u32) -> Self {
        self.mode = value;
        self
    }

    pub fn mod_time(mut self, value: SystemTime) -> Self {
        self.mod_time = value;
        self
    }

    pub fn dir(mut self, value: bool) -> Self {
        self.is_dir = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use crate::file_info::MockFileInfo;

    #[test]
    fn dummy() {
        let info = MockFileInfo::dummy();
        assert_eq!(info.name, "dummyfile");
        assert_eq!(info.size, 0);
        assert_eq!(info.mode, 0o644);
        assert_eq!(info.mod_time, UNIX_EPOCH);
        assert!(!info.is_dir);
    }

    #[test]
    fn creation() {
        let mod_time = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let info = MockFileInfo::new("data")
            .size(123)
            .mode(0o755)
            .mod_time(mod_time)
            .dir(true);
        assert_eq!(info.name, "data");
        assert_eq!(info.size, 123);
        assert_eq!(info.mode, 0o755);
        assert_eq!(info.mod_time, mod_time);
        assert!(info.is_dir);
        assert_ne!(info, MockFileInfo::new("data"));
    }
}
