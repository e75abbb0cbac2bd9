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
    io::{
        Read,
        Seek,
        Write
    },
    path::Path
};

use tracing::{
    debug,
    info
};

use crate::{
    algorithm::Algorithm,
    archive::VectorArchive,
    config::Config,
    emit::TestFunction,
    errors::{
        Error,
        Result
    },
    record::parse_records,
    vectors::{
        LengthUnit,
        VectorSet
    }
};

// collects the test vectors of all response files of `algorithm`
pub fn build_vectors<R: Read + Seek>(
    archive: &mut VectorArchive<R>,
    algorithm: &'static Algorithm,
    len_unit: LengthUnit
) -> Result<VectorSet> {
    let mut vectors = VectorSet::new();

    for (file, rsp_file) in algorithm.rsp_files().iter().enumerate() {
        let in_file = |err| Error::ResponseFile(rsp_file.to_string(), Box::new(err));

        let lines = archive.read_lines(rsp_file)?;
        let records = parse_records(&lines).map_err(in_file)?;
        for record in records.iter() {
            vectors.push(file, record, len_unit).map_err(in_file)?;
        }
        debug!(algorithm = algorithm.name(), file = rsp_file, tests = records.len(), "parsed response file");
    }

    if vectors.is_empty() {
        return Err(Error::NoVectors(algorithm.name()));
    }
    info!(
        algorithm = algorithm.name(),
        tests = vectors.len(),
        data_size = vectors.data().len(),
        "collected test vectors"
    );
    Ok(vectors)
}

// writes one test function per configured algorithm, returns the total number of
// test vectors
pub fn generate_from<R: Read + Seek, W: Write>(
    archive: &mut VectorArchive<R>,
    source: &str,
    config: &Config,
    writer: &mut W
) -> Result<usize> {
    let mut total = 0;

    for (i, algorithm) in config.algorithms().iter().copied().enumerate() {
        let vectors = build_vectors(archive, algorithm, config.len_unit())?;
        let function = TestFunction::new(algorithm, &vectors, source)
            .per_line(config.per_line());

        if i > 0 {
            writeln!(writer)?;
        }
        write!(writer, "{function}")?;
        total += vectors.len();
    }

    writer.flush()?;
    Ok(total)
}

// opens the archive at `archive_path` and runs `generate_from` on it
pub fn generate<W: Write>(archive_path: &Path, config: &Config, writer: &mut W) -> Result<usize> {
    let mut archive = VectorArchive::open(archive_path)?;
    let source = match archive_path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => archive_path.to_string_lossy()
    };
    generate_from(&mut archive, &source, config, writer)
}
