use super::traits::{FragmentSource, MoleculeSink};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Reads fragment lines from a plain text file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FragmentSource for FileSource {
    fn fragment_lines(&mut self) -> io::Result<Vec<String>> {
        let file = File::open(&self.path)?;
        BufReader::new(file).lines().collect()
    }
}

/// Writes enumerated molecules as `<smiles><TAB><id>` lines.
pub struct SmilesFileSink {
    writer: BufWriter<File>,
}

impl SmilesFileSink {
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl MoleculeSink for SmilesFileSink {
    fn write_molecule(&mut self, id: &str, smiles: &str) -> io::Result<()> {
        writeln!(self.writer, "{smiles}\t{id}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_source_reads_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffolds.txt");
        std::fs::write(&path, "s1\t[R1]CC\n\n2\t[R1]c1ccccc1\n").unwrap();

        let mut source = FileSource::new(&path);
        let lines = source.fragment_lines().unwrap();
        assert_eq!(lines, vec!["s1\t[R1]CC", "", "2\t[R1]c1ccccc1"]);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let mut source = FileSource::new("/nonexistent/fragments.txt");
        assert!(source.fragment_lines().is_err());
    }

    #[test]
    fn sink_writes_smiles_tab_id_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.smi");

        let mut sink = SmilesFileSink::create(&path).unwrap();
        sink.write_molecule("1.1_1", "c1%10ccccc1.C%10").unwrap();
        sink.write_molecule("1.1_2", "c1%10ccccc1.N%10").unwrap();
        sink.finish().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "c1%10ccccc1.C%10\t1.1_1\nc1%10ccccc1.N%10\t1.1_2\n");
    }
}
