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

mod algorithm;
mod archive;
mod config;
mod emit;
mod generator;
mod record;
mod vectors;
pub mod errors;

pub use algorithm::{
    Algorithm,
    ALGORITHMS,
    SHAKE128,
    SHAKE256
};

pub use archive::VectorArchive;

pub use config::Config;

pub use emit::{
    TestFunction,
    DEFAULT_PER_LINE
};

pub use generator::{
    build_vectors,
    generate,
    generate_from
};

pub use record::{
    Record,
    parse_records
};

pub use vectors::{
    LengthUnit,
    TestVector,
    VectorSet
};
