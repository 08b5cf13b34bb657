//! CLI command implementations.

mod convert;
mod export;

use std::io::{self, Read};
use std::path::Path;

pub(crate) use convert::ConvertArgs;
pub(crate) use export::ExportArgs;

/// Read a whole input file, or stdin when the path is absent or `-`.
fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
