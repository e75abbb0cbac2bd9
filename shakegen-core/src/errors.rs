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

#[derive(Debug)]
pub enum Error {
    // common errors
    Io(std::io::Error),
    FileNotFound(std::path::PathBuf),
    UTF8(std::string::FromUtf8Error),

    // archive
    Zip(zip::result::ZipError),
    Pattern(glob::PatternError),
    EntryNotFound(String),

    // response files (line numbers are 0-based)
    ResponseFile(String, Box<Error>),
    InvalidNumber(usize, String),
    MissingField(usize, &'static str),
    Hex(usize, &'static str, hex::FromHexError),
    NoVectors(&'static str),

    // configuration
    Config(&'static str),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(value: std::string::FromUtf8Error) -> Self {
        Self::UTF8(value)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(value: zip::result::ZipError) -> Self {
        Self::Zip(value)
    }
}

impl From<glob::PatternError> for Error {
    fn from(value: glob::PatternError) -> Self {
        Self::Pattern(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::FileNotFound(path) => write!(f, "File \"{}\" not found.", path.display()),
            Self::UTF8(err) => write!(f, "{err}"),

            // archive
            Self::Zip(err) => write!(f, "Archive: {err}."),
            Self::Pattern(err) => write!(f, "Archive: bad entry pattern ({err})."),
            Self::EntryNotFound(pattern) => write!(
                f,
                "Archive: no entry matching \"{pattern}\"."
            ),

            // response files
            Self::ResponseFile(name, err) => write!(f, "{name}: {err}"),
            Self::InvalidNumber(line, key) => write!(
                f,
                "line {line}: value of \"{key}\" is not a decimal integer"
            ),
            Self::MissingField(line, key) => write!(
                f,
                "line {line}: test vector without \"{key}\""
            ),
            Self::Hex(line, key, err) => write!(
                f,
                "line {line}: bad hexadecimal value for \"{key}\" ({err})"
            ),

            Self::NoVectors(name) => write!(f, "{name}: no test vectors found."),

            Self::Config(s) => write!(f, "Configuration: {s}."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::UTF8(err) => Some(err),
            Self::Zip(err) => Some(err),
            Self::Pattern(err) => Some(err),
            Self::ResponseFile(_, err) => Some(err.as_ref()),
            Self::Hex(_, _, err) => Some(err),
            _ => None
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
