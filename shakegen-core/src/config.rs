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

use crate::algorithm::{
    Algorithm,
    ALGORITHMS
};
use crate::emit::DEFAULT_PER_LINE;
use crate::errors::{
    Error,
    Result
};
use crate::vectors::LengthUnit;

pub struct Config {
    algorithms: Vec<&'static Algorithm>,
    len_unit: LengthUnit,
    per_line: usize
}

impl Config {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            algorithms: ALGORITHMS.to_vec(),
            len_unit: LengthUnit::default(),
            per_line: DEFAULT_PER_LINE
        }
    }

    pub fn algorithms(&self) -> &[&'static Algorithm] {
        &self.algorithms
    }

    // restricts generation to the named algorithms, kept in declaration order
    pub fn set_algorithms<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            match Algorithm::find(name.as_ref()) {
                Some(algo) => selected.push(algo),
                None => return Err(Error::Config("unknown algorithm (shake128 or shake256 expected)"))
            }
        }
        if selected.is_empty() {
            return Err(Error::Config("no algorithm selected"));
        }
        self.algorithms = ALGORITHMS.into_iter()
            .filter(|algo| selected.contains(algo))
            .collect();
        Ok(())
    }

    pub fn len_unit(&self) -> LengthUnit {
        self.len_unit
    }

    pub fn set_len_unit(&mut self, len_unit: LengthUnit) {
        self.len_unit = len_unit;
    }

    pub fn per_line(&self) -> usize {
        self.per_line
    }

    pub fn set_per_line(&mut self, per_line: usize) -> Result<()> {
        if per_line == 0 {
            return Err(Error::Config("bytes per line must be at least 1"));
        }
        self.per_line = per_line;
        Ok(())
    }
}
