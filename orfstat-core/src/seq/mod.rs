pub mod dna;
pub mod record;
pub mod set;

pub use dna::DnaSeq;
pub use record::SeqRecord;
pub use set::RecordSet;
