use std::io;

/// Defines the interface for reading raw fragment lines.
///
/// A source yields the lines of one fragment collection (one fragment per
/// line, optionally `id<TAB>text`). Line interpretation (blank-line skipping,
/// default identifiers) is the pool's job, not the source's.
pub trait FragmentSource {
    /// Reads all lines of the collection, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read.
    fn fragment_lines(&mut self) -> io::Result<Vec<String>>;
}

/// Defines the interface for consuming enumerated molecules.
///
/// The enumeration driver calls `write_molecule` synchronously once per
/// finished molecule, which gives the sink natural backpressure, and
/// `finish` exactly once when the run ends (also after cancellation).
pub trait MoleculeSink {
    /// Accepts one finished `(identifier, SMILES)` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the molecule cannot be written; the driver aborts
    /// the run.
    fn write_molecule(&mut self, id: &str, smiles: &str) -> io::Result<()>;

    /// Flushes and closes the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if buffered output cannot be flushed.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
