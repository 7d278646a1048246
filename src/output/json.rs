//
//  gitlink
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Utilities
//!
//! Pretty-printed JSON for `--json` mode, suitable for piping into `jq`.

use serde::Serialize;
use std::io::{self, Write};

/// Writes a value as pretty-printed JSON to stdout.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Writes a value as pretty-printed JSON to any writer, newline-terminated.
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::GitLink;

    #[test]
    fn test_write_json_to_buffer() {
        let link = GitLink {
            url: "https://github.com/o/r/blob/main/a.rs".to_string(),
            file_name: "a.rs".to_string(),
        };
        let mut buf = Vec::new();
        write_json_to(&mut buf, &vec![link]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["file_name"], "a.rs");
    }
}
