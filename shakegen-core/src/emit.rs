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

use std::fmt;

use crate::algorithm::Algorithm;
use crate::vectors::VectorSet;

// number of bytes per line of the emitted `DATA` table
pub const DEFAULT_PER_LINE: usize = 128;

// C test function running every test vector of one algorithm
pub struct TestFunction<'a> {
    algorithm: &'a Algorithm,
    vectors: &'a VectorSet,
    source: &'a str,
    per_line: usize
}

impl<'a> TestFunction<'a> {
    // `source` is the name of the archive the vectors come from
    pub fn new(algorithm: &'a Algorithm, vectors: &'a VectorSet, source: &'a str) -> Self {
        Self {
            algorithm,
            vectors,
            source,
            per_line: DEFAULT_PER_LINE
        }
    }

    pub fn per_line(mut self, per_line: usize) -> Self {
        self.per_line = per_line.max(1);
        self
    }

    // size of the `got` buffer, never zero so the declaration stays valid
    pub fn got_len(&self) -> usize {
        self.vectors.max_exp_len().max(1)
    }

    fn fmt_data(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.vectors.data();
        if data.is_empty() {
            // empty initializer lists are not valid C
            return writeln!(f, "    0,");
        }
        for chunk in data.chunks(self.per_line) {
            f.write_str("    ")?;
            for (i, byte) in chunk.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{byte}")?;
            }
            f.write_str(",\n")?;
        }
        Ok(())
    }

    fn fmt_rsp_files(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.algorithm.rsp_files().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{name}\"")?;
        }
        Ok(())
    }

    fn fmt_tests(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for test in self.vectors.tests() {
            writeln!(
                f,
                "    {{ {}, {}, {}, {}, {}, {} }},",
                test.file,
                test.line,
                test.msg_ofs,
                test.msg_len,
                test.exp_ofs,
                test.exp_len
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for TestFunction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.algorithm.name();
        let prefix = self.algorithm.prefix();

        writeln!(f, "// {name} tests from {}", self.source)?;
        writeln!(f, "static void test_{prefix}_xof_cmvp(void) {{")?;

        f.write_str("  // data for tests\n")?;
        f.write_str("  static const uint8_t DATA[] = {\n")?;
        self.fmt_data(f)?;
        writeln!(f, "  }}; // total size = {}", self.vectors.data().len())?;

        f.write_str("\n  // response file names\n")?;
        f.write_str("  static const char *RSP_FILES[] = { ")?;
        self.fmt_rsp_files(f)?;
        f.write_str(" };\n")?;

        f.write_str(concat!(
            "\n",
            "  // test vectors\n",
            "  static const struct {\n",
            "    const size_t rsp_file_ofs, // offset of source file name in RSP_FILES\n",
            "                 rsp_file_line, // line within rsp file\n",
            "                 src_ofs, // message offset into DATA\n",
            "                 src_len, // message length of data\n",
            "                 exp_ofs, // expected output offset into DATA\n",
            "                 exp_len; // expected output length\n",
            "  } TESTS[] = {\n",
        ))?;
        self.fmt_tests(f)?;
        f.write_str("  };\n")?;

        write!(
            f,
            r#"
  // run tests
  for (size_t i = 0; i < sizeof(TESTS) / sizeof(TESTS[0]); i++) {{
    // get expected result
    const uint8_t * const exp = DATA + TESTS[i].exp_ofs;
    const size_t exp_len = TESTS[i].exp_len;

    // hash data into "got"
    uint8_t got[{got_len}] = {{ 0 }};
    {prefix}_xof_once(DATA + TESTS[i].src_ofs, TESTS[i].src_len, got, exp_len);

    // check for expected result
    if (memcmp(got, exp, exp_len)) {{
      // get response file name and test vector line
      const char * const file_name = RSP_FILES[TESTS[i].rsp_file_ofs];
      const size_t file_line = TESTS[i].rsp_file_line;

      fprintf(stderr, "test_{prefix}_xof_cmvp[%zu, \"%s\", line %zu] failed:\ngot = ", i, file_name, file_line);
      dump_hex(stderr, got, exp_len);
      fprintf(stderr, "\nexp = ");
      dump_hex(stderr, exp, exp_len);
      fprintf(stderr, "\n");
    }}
  }}
}}
"#,
            got_len = self.got_len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{
        SHAKE128,
        SHAKE256
    };
    use crate::record::parse_records;
    use crate::vectors::LengthUnit;

    fn vector_set(files: &[&[&str]]) -> VectorSet {
        let mut vectors = VectorSet::new();
        for (file, lines) in files.iter().enumerate() {
            for record in parse_records(*lines).unwrap().iter() {
                vectors.push(file, record, LengthUnit::Items).unwrap();
            }
        }
        vectors
    }

    #[test]
    fn test_render_single() {
        let vectors = vector_set(&[&["Len = 8", "Msg = ff", "Output = 1234", ""]]);
        let code = TestFunction::new(&SHAKE128, &vectors, "shakebytetestvectors.zip").to_string();

        assert!(code.starts_with(
            "// SHAKE128 tests from shakebytetestvectors.zip\n\
            static void test_shake128_xof_cmvp(void) {\n\
            \x20 // data for tests\n\
            \x20 static const uint8_t DATA[] = {\n\
            \x20   255, 18, 52,\n\
            \x20 }; // total size = 3\n"
        ));
        assert!(code.contains(
            "  static const char *RSP_FILES[] = { \"SHAKE128ShortMsg.rsp\", \
            \"SHAKE128LongMsg.rsp\", \"SHAKE128VariableOut.rsp\" };\n"
        ));
        assert!(code.contains("  } TESTS[] = {\n    { 0, 0, 0, 1, 1, 2 },\n  };\n"));
        assert!(code.contains("    uint8_t got[2] = { 0 };\n"));
        assert!(code.contains(
            "    shake128_xof_once(DATA + TESTS[i].src_ofs, TESTS[i].src_len, got, exp_len);\n"
        ));
        assert!(code.contains(
            r#"fprintf(stderr, "test_shake128_xof_cmvp[%zu, \"%s\", line %zu] failed:\ngot = ", i, file_name, file_line);"#
        ));
        assert!(code.ends_with("    }\n  }\n}\n"));
    }

    #[test]
    fn test_render_line_width() {
        let msg = "ab".repeat(300);
        let msg_line = format!("Msg = {msg}");
        let vectors = vector_set(&[&[msg_line.as_str(), "Output = 01", ""]]);
        let code = TestFunction::new(&SHAKE256, &vectors, "vectors.zip")
            .per_line(128)
            .to_string();

        let rows: Vec<&str> = code.lines()
            .skip_while(|line| !line.contains("DATA[] = {"))
            .skip(1)
            .take_while(|line| !line.starts_with("  };"))
            .collect();

        // 301 bytes: 2 full lines of 128 and a last line of 45
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].split(", ").count(), 128);
        assert_eq!(rows[1].split(", ").count(), 128);
        assert_eq!(rows[2].split(", ").count(), 45);
        assert!(rows.iter().all(|row| row.starts_with("    171") && row.ends_with(',')));
        assert!(rows[2].ends_with(", 171, 1,"));
        assert!(code.contains("  }; // total size = 301\n"));
        assert!(code.contains("test_shake256_xof_cmvp"));
    }

    #[test]
    fn test_render_rows() {
        let vectors = vector_set(&[
            &["Msg = 00", "Output = 0102", ""],
            &[],
            &["#", "", "", "Msg = 0304", "Output = 050607", ""],
        ]);
        let code = TestFunction::new(&SHAKE256, &vectors, "vectors.zip").to_string();

        assert!(code.contains("    { 0, 0, 0, 1, 1, 2 },\n    { 2, 3, 3, 2, 5, 3 },\n"));
        assert!(code.contains("    uint8_t got[3] = { 0 };\n"));
        assert!(code.contains("  }; // total size = 8\n"));
    }

    #[test]
    fn test_render_empty_data() {
        let vectors = vector_set(&[&["Len = 0", "Msg = 00", "OutputLen = 0", "Output = 00", ""]]);
        let function = TestFunction::new(&SHAKE128, &vectors, "vectors.zip");
        assert_eq!(function.got_len(), 1);

        let code = function.to_string();
        assert!(code.contains("  static const uint8_t DATA[] = {\n    0,\n  }; // total size = 0\n"));
        assert!(code.contains("    { 0, 0, 0, 0, 0, 0 },\n"));
    }
}
