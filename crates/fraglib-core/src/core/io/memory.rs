use super::traits::{FragmentSource, MoleculeSink};
use std::io;

/// A fragment source over an in-memory list of lines.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl FragmentSource for MemorySource {
    fn fragment_lines(&mut self) -> io::Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

/// A sink collecting molecules in memory, mainly for tests and small runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    molecules: Vec<(String, String)>,
    finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected `(identifier, SMILES)` pairs, in emission order.
    pub fn molecules(&self) -> &[(String, String)] {
        &self.molecules
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl MoleculeSink for MemorySink {
    fn write_molecule(&mut self, id: &str, smiles: &str) -> io::Result<()> {
        self.molecules.push((id.to_string(), smiles.to_string()));
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}
