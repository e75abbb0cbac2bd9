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

use std::num::IntErrorKind;

use crate::errors::{
    Error,
    Result
};

// one blank-line terminated block of `Key = Value` lines from a response file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Record {
    line: usize,
    fields: usize,
    msg: Option<String>,
    len: Option<usize>,
    output: Option<String>,
    output_len: Option<usize>
}

impl Record {
    const MSG: &str = "Msg";
    const LEN: &str = "Len";
    const OUTPUT: &str = "Output";
    const OUTPUT_LEN: &str = "OutputLen";

    // 0-based line of the first key of the block
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn msg(&self) -> Option<&str> {
        self.msg.as_deref()
    }

    pub fn len(&self) -> Option<usize> {
        self.len
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn output_len(&self) -> Option<usize> {
        self.output_len
    }

    // number of `Key = Value` lines in the block, unknown keys included
    pub fn fields(&self) -> usize {
        self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields == 0
    }

    fn set(&mut self, line: usize, key: &str, value: &str) -> Result<()> {
        if self.is_empty() {
            self.line = line;
        }
        self.fields += 1;

        if key == Self::MSG {
            self.msg = Some(value.to_string());
        }
        else if key == Self::LEN {
            self.len = Some(parse_count(line, key, value)?);
        }
        else if key == Self::OUTPUT {
            self.output = Some(value.to_string());
        }
        else if key == Self::OUTPUT_LEN {
            self.output_len = Some(parse_count(line, key, value)?);
        }
        // other keys (e.g. COUNT) only mark the block as non-empty
        Ok(())
    }
}

// counts too large for usize saturate, truncation is then a no-op
fn parse_count(line: usize, key: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(count) => Ok(count),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        Err(_) => Err(Error::InvalidNumber(line, key.to_string()))
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|c| c.is_ascii_alphanumeric() || c == b'_')
}

// matches `^\w+ = \w+$`
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(" = ")?;
    match is_word(key) && is_word(value) {
        true => Some((key, value)),
        false => None
    }
}

// splits the lines of a response file into records
pub fn parse_records<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut curr = Record::default();

    for (line_i, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() {
            if !curr.is_empty() {
                records.push(std::mem::take(&mut curr));
            }
        }
        else if let Some((key, value)) = split_key_value(line) {
            curr.set(line_i, key, value)?;
        }
    }

    Ok(records)
}
