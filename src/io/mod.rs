use std::fs::File;
use std::io::BufReader;

use anyhow::Context;

pub mod edge_reader;

pub fn open_commands(path: impl Into<String>) -> anyhow::Result<BufReader<File>> {
    let path = path.into();
    let f = File::open(&path).with_context(|| format!("could not open commands file {}", path))?;
    Ok(BufReader::new(f))
}
