// ShakeGen, a test generator for CAVP SHAKE byte test vectors
// Copyright (C) 2025 A. Russon
// 
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
// 
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{
    fs::File,
    io::{
        BufReader,
        Read,
        Seek
    },
    path::Path
};

use glob::Pattern;
use tracing::debug;
use zip::ZipArchive;

use crate::errors::{
    Error,
    Result
};

// archive of CAVP response files (e.g. `shakebytetestvectors.zip`)
pub struct VectorArchive<R: Read + Seek> {
    zip: ZipArchive<R>
}

impl VectorArchive<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

// an entry matches on its full name or on its last path component
fn entry_matches(pattern: &Pattern, name: &str) -> bool {
    if name.ends_with('/') {
        return false;
    }
    pattern.matches(name) || name.rsplit('/').next().is_some_and(|base| pattern.matches(base))
}

impl<R: Read + Seek> VectorArchive<R> {
    pub fn new(reader: R) -> Result<Self> {
        Ok(Self {
            zip: ZipArchive::new(reader)?
        })
    }

    // name of the first entry matching the glob `pattern`, in archive order
    pub fn find_entry(&self, pattern: &str) -> Result<String> {
        let compiled = Pattern::new(pattern)?;
        self.zip.file_names()
            .find(|name| entry_matches(&compiled, name))
            .map(String::from)
            .ok_or_else(|| Error::EntryNotFound(pattern.to_string()))
    }

    // reads the first entry matching `pattern` as text, one element per line, with
    // surrounding whitespace removed
    pub fn read_lines(&mut self, pattern: &str) -> Result<Vec<String>> {
        let name = self.find_entry(pattern)?;
        let mut entry = self.zip.by_name(&name)?;

        // the size declared in the entry header is not trusted
        let mut buf = Vec::new();
        entry.read_to_end(&mut buf)?;
        let content = String::from_utf8(buf)?;

        let lines: Vec<String> = content.lines()
            .map(|line| line.trim().to_string())
            .collect();
        debug!(entry = %name, lines = lines.len(), "read response file");
        Ok(lines)
    }
}
