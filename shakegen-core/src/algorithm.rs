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

// SHAKE variant under test and the CAVP response files holding its vectors
#[derive(Debug, PartialEq, Eq)]
pub struct Algorithm {
    name: &'static str,
    prefix: &'static str,
    rsp_files: &'static [&'static str]
}

pub const SHAKE128: Algorithm = Algorithm {
    name: "SHAKE128",
    prefix: "shake128",
    rsp_files: &[
        "SHAKE128ShortMsg.rsp",
        "SHAKE128LongMsg.rsp",
        "SHAKE128VariableOut.rsp"
    ]
};

pub const SHAKE256: Algorithm = Algorithm {
    name: "SHAKE256",
    prefix: "shake256",
    rsp_files: &[
        "SHAKE256ShortMsg.rsp",
        "SHAKE256LongMsg.rsp",
        "SHAKE256VariableOut.rsp"
    ]
};

pub const ALGORITHMS: [&Algorithm; 2] = [&SHAKE128, &SHAKE256];

impl Algorithm {
    // looks up an algorithm by display name or function prefix (case insensitive)
    pub fn find(name: &str) -> Option<&'static Algorithm> {
        ALGORITHMS.into_iter().find(|algo| {
            algo.name.eq_ignore_ascii_case(name) || algo.prefix.eq_ignore_ascii_case(name)
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    // prefix of the C functions, e.g. `shake128` for `shake128_xof_once`
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn rsp_files(&self) -> &'static [&'static str] {
        self.rsp_files
    }
}
