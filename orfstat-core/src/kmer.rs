use crate::error::{OrfstatError, OrfstatResult};
use std::collections::HashMap;

/// A pooled k-mer frequency table.
///
/// Counts every window of length k at every starting position, summed over
/// all added sequences. A sequence shorter than k contributes nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KmerCounts {
    k: usize,
    counts: HashMap<Vec<u8>, usize>,
}

impl KmerCounts {
    pub fn new(k: usize) -> OrfstatResult<Self> {
        if k == 0 {
            return Err(OrfstatError::InvalidKmerLen { k });
        }
        Ok(Self {
            k,
            counts: HashMap::new(),
        })
    }

    pub fn from_sequences<'a, I>(seqs: I, k: usize) -> OrfstatResult<Self>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut table = Self::new(k)?;
        for seq in seqs {
            table.add_sequence(seq);
        }
        Ok(table)
    }

    pub fn add_sequence(&mut self, seq: &[u8]) {
        for window in seq.windows(self.k) {
            *self.counts.entry(window.to_vec()).or_insert(0) += 1;
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Occurrence count for one k-mer, 0 when absent.
    pub fn get(&self, kmer: &[u8]) -> usize {
        self.counts.get(kmer).copied().unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Maximum count over all observed k-mers. Fails when nothing was
    /// observed (max over an empty table).
    pub fn max_count(&self) -> OrfstatResult<usize> {
        self.counts
            .values()
            .copied()
            .max()
            .ok_or(OrfstatError::NoKmerData { k: self.k })
    }

    /// Number of distinct k-mers achieving the maximum count. Walks every
    /// entry so all tied k-mers are counted.
    pub fn distinct_at_max(&self) -> OrfstatResult<usize> {
        let max = self.max_count()?;
        Ok(self.counts.values().filter(|&&count| count == max).count())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], usize)> {
        self.counts.iter().map(|(kmer, &count)| (kmer.as_slice(), count))
    }
}
