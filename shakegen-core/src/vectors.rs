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

use crate::errors::{
    Error,
    Result
};
use crate::record::Record;

// unit of the `Len` and `OutputLen` fields when truncating decoded values
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    // the value is the number of bytes to keep
    #[default]
    Items,
    // the value is a bit count, rounded up to whole bytes
    Bits
}

impl LengthUnit {
    fn count(self, value: usize) -> usize {
        match self {
            Self::Items => value,
            Self::Bits => value.div_ceil(8)
        }
    }
}

impl std::str::FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "items" | "bytes" => Ok(Self::Items),
            "bits" => Ok(Self::Bits),
            _ => Err(Error::Config("bad length unit (items or bits expected)"))
        }
    }
}

// location of one test in the shared data buffer of a `VectorSet`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestVector {
    // index of the response file in the algorithm's file list
    pub file: usize,
    // 0-based line of the test in the response file
    pub line: usize,
    pub msg_ofs: usize,
    pub msg_len: usize,
    pub exp_ofs: usize,
    pub exp_len: usize
}

// test vectors of one algorithm
#[derive(Debug, Default)]
pub struct VectorSet {
    data: Vec<u8>,
    tests: Vec<TestVector>
}

fn decode(
    line: usize,
    key: &'static str,
    value: Option<&str>,
    limit: Option<usize>,
    unit: LengthUnit
) -> Result<Vec<u8>> {
    let Some(value) = value else {
        return Err(Error::MissingField(line, key));
    };
    let mut bytes = hex::decode(value).map_err(|e| Error::Hex(line, key, e))?;
    if let Some(limit) = limit {
        bytes.truncate(unit.count(limit));
    }
    Ok(bytes)
}

impl VectorSet {
    pub fn new() -> Self {
        Self::default()
    }

    // decodes a record and appends its message and expected output
    pub fn push(&mut self, file: usize, record: &Record, unit: LengthUnit) -> Result<&TestVector> {
        let line = record.line();
        let msg = decode(line, "Msg", record.msg(), record.len(), unit)?;
        let exp = decode(line, "Output", record.output(), record.output_len(), unit)?;

        let msg_ofs = self.data.len();
        let test = TestVector {
            file,
            line,
            msg_ofs,
            msg_len: msg.len(),
            exp_ofs: msg_ofs + msg.len(),
            exp_len: exp.len()
        };

        self.data.extend_from_slice(&msg);
        self.data.extend_from_slice(&exp);
        self.tests.push(test);
        Ok(&self.tests[self.tests.len() - 1])
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn tests(&self) -> &[TestVector] {
        &self.tests
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn message(&self, test: &TestVector) -> &[u8] {
        &self.data[test.msg_ofs..test.msg_ofs + test.msg_len]
    }

    pub fn expected(&self, test: &TestVector) -> &[u8] {
        &self.data[test.exp_ofs..test.exp_ofs + test.exp_len]
    }

    // largest expected output, in bytes
    pub fn max_exp_len(&self) -> usize {
        self.tests.iter().map(|test| test.exp_len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_records;
    use hex_literal::hex;
    use rand::{
        Rng,
        RngCore,
        SeedableRng,
        rngs::SmallRng
    };

    fn push_all(vectors: &mut VectorSet, file: usize, lines: &[&str], unit: LengthUnit) {
        for record in parse_records(lines).unwrap().iter() {
            vectors.push(file, record, unit).unwrap();
        }
    }

    #[test]
    fn test_push_single() {
        let mut vectors = VectorSet::new();
        push_all(&mut vectors, 0, &["Len = 8", "Msg = ff", "Output = 1234", ""], LengthUnit::Items);

        assert_eq!(vectors.tests(), &[TestVector {
            file: 0,
            line: 0,
            msg_ofs: 0,
            msg_len: 1,
            exp_ofs: 1,
            exp_len: 2
        }]);
        assert_eq!(vectors.data(), &hex!("ff1234"));
    }

    #[test]
    fn test_push_truncate_items() {
        let mut vectors = VectorSet::new();
        push_all(&mut vectors, 0, &[
            "Len = 0",
            "Msg = 00",
            "Output = 0102030405",
            "OutputLen = 3",
            "",
            "Len = 2",
            "Msg = a1a2a3",
            "Output = b1",
            "",
        ], LengthUnit::Items);

        let tests = vectors.tests();
        assert_eq!(tests[0].msg_len, 0);
        assert_eq!(tests[0].exp_len, 3);
        assert_eq!(vectors.expected(&tests[0]), &hex!("010203"));
        assert_eq!(vectors.message(&tests[1]), &hex!("a1a2"));
        assert_eq!(vectors.expected(&tests[1]), &hex!("b1"));
        assert_eq!(vectors.data(), &hex!("010203a1a2b1"));
    }

    #[test]
    fn test_push_truncate_bits() {
        let mut vectors = VectorSet::new();
        push_all(&mut vectors, 0, &[
            "Len = 16",
            "Msg = a1a2a3",
            "OutputLen = 12",
            "Output = b1b2b3",
            "",
        ], LengthUnit::Bits);

        let test = vectors.tests()[0];
        assert_eq!(vectors.message(&test), &hex!("a1a2"));
        assert_eq!(vectors.expected(&test), &hex!("b1b2"));
    }

    #[test]
    fn test_push_huge_len() {
        for unit in [LengthUnit::Items, LengthUnit::Bits] {
            let mut vectors = VectorSet::new();
            push_all(&mut vectors, 0, &[
                "Len = 18446744073709551616",
                "Msg = a1a2",
                "Output = b1",
                "",
            ], unit);
            assert_eq!(vectors.data(), &hex!("a1a2b1"));
        }
    }

    #[test]
    fn test_push_missing_field() {
        let mut vectors = VectorSet::new();
        let records = parse_records(&["COUNT = 3", "Msg = 00", ""]).unwrap();
        let res = vectors.push(0, &records[0], LengthUnit::Items);
        assert!(res.is_err_and(|e| matches!(e, Error::MissingField(0, "Output"))));
        assert!(vectors.is_empty());
        assert!(vectors.data().is_empty());
    }

    #[test]
    fn test_push_bad_hex() {
        let mut vectors = VectorSet::new();
        let records = parse_records(&["", "Msg = 0g", "Output = 00", ""]).unwrap();
        let res = vectors.push(0, &records[0], LengthUnit::Items);
        assert!(res.is_err_and(|e| matches!(e, Error::Hex(1, "Msg", _))));

        let records = parse_records(&["Msg = 00", "Output = 012", ""]).unwrap();
        let res = vectors.push(0, &records[0], LengthUnit::Items);
        assert!(res.is_err_and(|e| matches!(e, Error::Hex(0, "Output", _))));
    }

    #[test]
    fn test_multiple_files() {
        let mut vectors = VectorSet::new();
        push_all(&mut vectors, 0, &["Msg = 01", "Output = 02", ""], LengthUnit::Items);
        push_all(&mut vectors, 2, &["# header", "", "Msg = 0304", "Output = 05", ""], LengthUnit::Items);

        let tests = vectors.tests();
        assert_eq!(vectors.len(), 2);
        assert_eq!((tests[1].file, tests[1].line), (2, 2));
        assert_eq!(tests[1].msg_ofs, 2);
        assert_eq!(vectors.data(), &hex!("0102030405"));
        assert_eq!(vectors.max_exp_len(), 1);
    }

    #[test]
    fn test_random_records() {
        let mut rng = SmallRng::seed_from_u64(0x5348414b45);
        let mut vectors = VectorSet::new();
        let mut expected = Vec::new();

        for _ in 0..64 {
            let mut msg = vec![0u8; rng.random_range(1..200)];
            let mut out = vec![0u8; rng.random_range(1..100)];
            rng.fill_bytes(&mut msg);
            rng.fill_bytes(&mut out);
            let out_len = rng.random_range(0..=out.len());

            let lines = [
                format!("Msg = {}", hex::encode(&msg)),
                format!("OutputLen = {out_len}"),
                format!("Output = {}", hex::encode(&out)),
                String::new()
            ];
            let records = parse_records(&lines).unwrap();
            vectors.push(1, &records[0], LengthUnit::Items).unwrap();

            out.truncate(out_len);
            expected.push((msg, out));
        }

        let mut end = 0;
        for (test, (msg, out)) in vectors.tests().iter().zip(expected.iter()) {
            assert_eq!(test.msg_ofs, end);
            assert_eq!(test.exp_ofs, test.msg_ofs + test.msg_len);
            assert_eq!(vectors.message(test), msg.as_slice());
            assert_eq!(vectors.expected(test), out.as_slice());
            end = test.exp_ofs + test.exp_len;
        }
        assert_eq!(end, vectors.data().len());
    }

    #[test]
    fn test_length_unit() {
        assert_eq!("items".parse::<LengthUnit>().unwrap(), LengthUnit::Items);
        assert_eq!("bits".parse::<LengthUnit>().unwrap(), LengthUnit::Bits);
        assert!("nibbles".parse::<LengthUnit>().is_err());
        assert_eq!(LengthUnit::Bits.count(0), 0);
        assert_eq!(LengthUnit::Bits.count(1), 1);
        assert_eq!(LengthUnit::Bits.count(1344), 168);
        assert_eq!(LengthUnit::Items.count(1344), 1344);
    }
}
