use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde_json::error::Category;

use super::*;
use crate::error::GraphError;

fn json_error(err: serde_json::Error) -> GraphError {
    match err.classify() {
        Category::Io => GraphError::Io(err.into()),
        _ => GraphError::Deserialization(err.to_string()),
    }
}

/// Trait for writing a graph as a JSON [`PersistedGraph`].
pub trait JsonWrite {
    /// Writes the graph to the provided writer.
    ///
    /// # Errors
    /// [`GraphError::Io`] if writing fails.
    fn try_write_json<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the graph to a file, creating or truncating it.
    ///
    /// # Errors
    /// [`GraphError::Io`] if the file cannot be created or writing fails.
    fn try_write_json_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Serializes the graph into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.try_write_json(&mut buffer)?;
        Ok(buffer)
    }
}

/// Trait for reading a graph from a JSON [`PersistedGraph`].
pub trait JsonRead: Sized {
    /// Reads a graph from the given reader.
    ///
    /// # Errors
    /// [`GraphError::Deserialization`] if the input is not a valid record, [`GraphError::Io`] if
    /// reading fails.
    fn try_read_json<R>(reader: R) -> Result<Self>
    where
        R: Read;

    /// Reads a graph from a file.
    ///
    /// # Errors
    /// See [`JsonRead::try_read_json`]; additionally [`GraphError::Io`] if the file cannot be opened.
    fn try_read_json_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_json(BufReader::new(File::open(path)?))
    }

    /// Deserializes a graph from a byte buffer produced by [`JsonWrite::to_bytes`].
    fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::try_read_json(bytes)
    }
}

impl JsonWrite for TriangularGraph {
    fn try_write_json<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        serde_json::to_writer(writer, &self.to_persisted()).map_err(json_error)
    }
}

impl JsonRead for TriangularGraph {
    fn try_read_json<R>(reader: R) -> Result<Self>
    where
        R: Read,
    {
        let record: PersistedGraph = serde_json::from_reader(reader).map_err(json_error)?;
        TriangularGraph::try_from(record)
    }
}
