#[macro_use]
mod par;

pub mod alphabets;
pub mod analysis;
pub mod error;
pub mod io;
pub mod kmer;
pub mod orf;
pub mod seq;
