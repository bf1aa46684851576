pub type Codon = [u8; 3];

pub const START_CODON: Codon = *b"ATG";
pub const STOP_CODONS: [Codon; 3] = [*b"TAA", *b"TAG", *b"TGA"];

/// A reading frame: the codon-alignment offset at which a sequence is
/// partitioned into triplets. Biologically numbered 1..=3, offsets 0..=2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    One,
    Two,
    Three,
}

impl Frame {
    pub const ALL: [Frame; 3] = [Frame::One, Frame::Two, Frame::Three];

    pub fn offset(self) -> usize {
        match self {
            Frame::One => 0,
            Frame::Two => 1,
            Frame::Three => 2,
        }
    }
}

/// An open reading frame within one sequence.
///
/// `start` is the 1-based position of the first base of the start codon in
/// the unshifted sequence; `len` counts bases from the start codon through
/// the closing stop codon inclusive, and is always a multiple of 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orf {
    pub start: usize,
    pub len: usize,
}

/// Scans one sequence in one frame with the standard genetic code.
pub fn find_orfs(seq: &[u8], frame: Frame) -> Vec<Orf> {
    find_orfs_with_codons(seq, frame, &[START_CODON], &STOP_CODONS)
}

/// Scans one sequence in one frame with injected start/stop codon sets.
///
/// Codons are walked left to right without overlap; trailing bases that do
/// not fill a codon are ignored. At most one ORF is open at a time: a start
/// codon opens only while none is open, a stop codon closes the open one,
/// and every other codon (start codons included) is skipped while open. An
/// ORF still open at the end of the walk is emitted truncated to the last
/// complete codon. ORFs are returned in order of increasing start position.
pub fn find_orfs_with_codons(
    seq: &[u8],
    frame: Frame,
    starts: &[Codon],
    stops: &[Codon],
) -> Vec<Orf> {
    let offset = frame.offset();
    let bytes = match seq.get(offset..) {
        Some(bytes) => bytes,
        None => return Vec::new(),
    };

    let mut orfs = Vec::new();
    let mut open: Option<usize> = None;

    for (i, codon) in bytes.chunks_exact(3).enumerate() {
        match open {
            None => {
                if starts.iter().any(|c| c == codon) {
                    open = Some(i * 3);
                }
            }
            Some(start) => {
                if stops.iter().any(|c| c == codon) {
                    orfs.push(Orf {
                        start: start + offset + 1,
                        len: i * 3 + 3 - start,
                    });
                    open = None;
                }
            }
        }
    }

    if let Some(start) = open {
        orfs.push(Orf {
            start: start + offset + 1,
            len: (bytes.len() - start) / 3 * 3,
        });
    }

    orfs
}
