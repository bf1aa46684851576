use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrfstatError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("invalid k-mer length: {k} (must be at least 1)")]
    InvalidKmerLen { k: usize },

    #[error("no {k}-mers in input (every sequence is shorter than {k})")]
    NoKmerData { k: usize },

    #[error("empty input: no records to analyze")]
    EmptyInput,

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),

    #[error("record set length mismatch (ids={ids}, descs={descs}, seqs={seqs})")]
    RecordSetLenMismatch {
        ids: usize,
        descs: usize,
        seqs: usize,
    },
}

pub type OrfstatResult<T> = Result<T, OrfstatError>;
