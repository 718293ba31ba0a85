/// The only distinction we make between FASTA lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind {
    Header,
    Sequence,
}

impl LineKind {
    /// A header starts with '>'. Everything else, empty lines included,
    /// counts as sequence.
    pub fn classify(line: &[u8]) -> Self {
        match line.first() {
            Some(b'>') => LineKind::Header,
            _ => LineKind::Sequence,
        }
    }
}
