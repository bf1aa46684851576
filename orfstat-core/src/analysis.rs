use crate::error::{OrfstatError, OrfstatResult};
use crate::kmer::KmerCounts;
use crate::orf::{self, Codon, Frame, Orf, START_CODON, STOP_CODONS};
use crate::seq::set::RecordSet;

/// Knobs for one analysis run. `Default` carries the reference constants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Identifier of the sequence singled out for its own ORF maximum.
    pub target_id: String,
    /// Candidate repeats looked up in the 7-mer table, checked in order.
    pub candidate_7mers: Vec<String>,
    pub start_codons: Vec<Codon>,
    pub stop_codons: Vec<Codon>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_id: "gi|142022655|gb|EQ086233.1|16".to_string(),
            candidate_7mers: vec![
                "AATGGCA".to_string(),
                "CATCGCC".to_string(),
                "CGCGCCG".to_string(),
                "TGCGCGC".to_string(),
            ],
            start_codons: vec![START_CODON],
            stop_codons: STOP_CODONS.to_vec(),
        }
    }
}

/// The final result of one run. Optional fields distinguish "could not be
/// derived" from a computed zero: `longest_orf_target` is `None` when the
/// target identifier is absent from the set, and the k-mer fields are
/// `None` when every sequence is shorter than the respective k.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisReport {
    pub record_count: usize,
    pub longest_seq_len: usize,
    pub shortest_seq_len: usize,
    pub longest_orf_frame2: usize,
    pub longest_orf_frame3_len: usize,
    /// 1-based start of the longest frame-3 ORF, 0 when none exists.
    pub longest_orf_frame3_start: usize,
    pub longest_orf_any_frame: usize,
    pub longest_orf_target: Option<usize>,
    pub most_frequent_6mer_count: Option<usize>,
    pub distinct_12mers_at_max: Option<usize>,
    pub top_candidate_7mer: Option<Box<str>>,
    pub top_candidate_7mer_count: usize,
}

#[derive(Clone, Copy, Debug)]
struct RecordStats {
    seq_len: usize,
    frame2_max: usize,
    frame3_best: Option<(usize, usize)>,
    any_frame_max: usize,
}

pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Runs the full analysis over a record set.
    ///
    /// Records are folded in arrival order. Wherever a maximum carries a
    /// position or name with it, updates compare strictly-greater, so ties
    /// keep the first occurrence.
    pub fn analyze(&self, records: &RecordSet) -> OrfstatResult<AnalysisReport> {
        if records.is_empty() {
            return Err(OrfstatError::EmptyInput);
        }

        let stats: Vec<RecordStats> =
            par_map!(records.seqs(), |seq| self.scan_record(seq.as_bytes()));

        let mut longest_seq_len = 0usize;
        let mut shortest_seq_len = usize::MAX;
        let mut longest_orf_frame2 = 0usize;
        let mut frame3_len = 0usize;
        let mut frame3_start = 0usize;
        let mut longest_orf_any_frame = 0usize;

        for stat in &stats {
            longest_seq_len = longest_seq_len.max(stat.seq_len);
            shortest_seq_len = shortest_seq_len.min(stat.seq_len);
            longest_orf_frame2 = longest_orf_frame2.max(stat.frame2_max);
            if let Some((len, start)) = stat.frame3_best {
                if len > frame3_len {
                    frame3_len = len;
                    frame3_start = start;
                }
            }
            longest_orf_any_frame = longest_orf_any_frame.max(stat.any_frame_max);
        }

        let longest_orf_target = records.get_by_id(&self.config.target_id).map(|seq| {
            Frame::ALL
                .iter()
                .map(|&frame| self.longest_orf_len(seq.as_bytes(), frame))
                .max()
                .unwrap_or(0)
        });

        let table6 = KmerCounts::from_sequences(records.seqs().iter().map(|s| s.as_bytes()), 6)?;
        let table12 = KmerCounts::from_sequences(records.seqs().iter().map(|s| s.as_bytes()), 12)?;
        let table7 = KmerCounts::from_sequences(records.seqs().iter().map(|s| s.as_bytes()), 7)?;

        let most_frequent_6mer_count = table6.max_count().ok();
        let distinct_12mers_at_max = table12.distinct_at_max().ok();

        let mut top_candidate_7mer: Option<Box<str>> = None;
        let mut top_candidate_7mer_count = 0usize;
        for candidate in &self.config.candidate_7mers {
            let count = table7.get(candidate.as_bytes());
            if count > top_candidate_7mer_count {
                top_candidate_7mer_count = count;
                top_candidate_7mer = Some(candidate.as_str().into());
            }
        }

        Ok(AnalysisReport {
            record_count: records.len(),
            longest_seq_len,
            shortest_seq_len,
            longest_orf_frame2,
            longest_orf_frame3_len: frame3_len,
            longest_orf_frame3_start: frame3_start,
            longest_orf_any_frame,
            longest_orf_target,
            most_frequent_6mer_count,
            distinct_12mers_at_max,
            top_candidate_7mer,
            top_candidate_7mer_count,
        })
    }

    fn scan_record(&self, seq: &[u8]) -> RecordStats {
        let frame1 = self.find_orfs(seq, Frame::One);
        let frame2 = self.find_orfs(seq, Frame::Two);
        let frame3 = self.find_orfs(seq, Frame::Three);

        let mut frame3_best: Option<(usize, usize)> = None;
        for orf in &frame3 {
            if frame3_best.map_or(true, |(len, _)| orf.len > len) {
                frame3_best = Some((orf.len, orf.start));
            }
        }

        let frame2_max = max_len(&frame2);
        let any_frame_max = max_len(&frame1).max(frame2_max).max(max_len(&frame3));

        RecordStats {
            seq_len: seq.len(),
            frame2_max,
            frame3_best,
            any_frame_max,
        }
    }

    fn find_orfs(&self, seq: &[u8], frame: Frame) -> Vec<Orf> {
        orf::find_orfs_with_codons(
            seq,
            frame,
            &self.config.start_codons,
            &self.config.stop_codons,
        )
    }

    fn longest_orf_len(&self, seq: &[u8], frame: Frame) -> usize {
        max_len(&self.find_orfs(seq, frame))
    }
}

fn max_len(orfs: &[Orf]) -> usize {
    orfs.iter().map(|orf| orf.len).max().unwrap_or(0)
}
