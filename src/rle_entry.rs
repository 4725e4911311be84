/// One entry of a run-length encoded sequence.
///
/// The encoder only emits `Run` for two or more repetitions, and never emits
/// two adjacent entries holding equal values. `decode` accepts any entries,
/// including hand-built ones that break those rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEntry<T> {
    /// A single, unrepeated occurrence.
    Single(T),

    /// `count` consecutive occurrences of the value.
    Run(usize, T),
}

impl<T> RunEntry<T> {
    /// Number of elements this entry expands to.
    pub fn count(&self) -> usize {
        match self {
            RunEntry::Single(_) => 1,
            RunEntry::Run(count, _) => *count,
        }
    }

    /// The repeated value.
    pub fn value(&self) -> &T {
        match self {
            RunEntry::Single(value) | RunEntry::Run(_, value) => value,
        }
    }

    /// Splits the entry into `(count, value)`.
    pub fn into_parts(self) -> (usize, T) {
        match self {
            RunEntry::Single(value) => (1, value),
            RunEntry::Run(count, value) => (count, value),
        }
    }
}

/// Returns how many elements decoding `entries` would produce.
pub fn decoded_len<T>(entries: &[RunEntry<T>]) -> usize {
    entries.iter().map(RunEntry::count).sum()
}
