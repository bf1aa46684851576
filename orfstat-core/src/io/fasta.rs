use crate::error::{OrfstatError, OrfstatResult};
use crate::seq::dna::DnaSeq;
use crate::seq::record::SeqRecord;
use crate::seq::set::RecordSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

pub struct FastaRecords<R> {
    reader: R,
    line_no: usize,
    pending_header: Option<(String, usize)>,
    buf_line: String,
    seq_buf: Vec<u8>,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending_header: None,
            buf_line: String::new(),
            seq_buf: Vec::new(),
        }
    }

    fn next_header(&mut self) -> Option<OrfstatResult<(String, usize)>> {
        if let Some(pending) = self.pending_header.take() {
            return Some(Ok(pending));
        }

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with('>') {
                        return Some(Ok((self.buf_line.clone(), line_no)));
                    }
                    if self.buf_line.trim().is_empty() {
                        continue;
                    }
                    return Some(Err(OrfstatError::FastaFormat {
                        msg: "expected header line starting with '>'",
                        line: line_no,
                    }));
                }
                Err(err) => return Some(Err(OrfstatError::FastaIo(err))),
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = OrfstatResult<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let (header_line, header_line_no) = match self.next_header()? {
            Ok(header) => header,
            Err(err) => return Some(Err(err)),
        };

        let (id, desc) = match parse_header(&header_line, header_line_no) {
            Ok(parsed) => parsed,
            Err(err) => return Some(Err(err)),
        };

        self.seq_buf.clear();

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => break,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with('>') {
                        self.pending_header = Some((self.buf_line.clone(), line_no));
                        break;
                    }
                    for b in self.buf_line.bytes() {
                        if !b.is_ascii_whitespace() {
                            self.seq_buf.push(b);
                        }
                    }
                }
                Err(err) => return Some(Err(OrfstatError::FastaIo(err))),
            }
        }

        let capacity = self.seq_buf.capacity();
        let bytes = std::mem::take(&mut self.seq_buf);
        let seq = match DnaSeq::new(bytes) {
            Ok(seq) => seq,
            Err(err) => return Some(Err(err)),
        };
        self.seq_buf = Vec::with_capacity(capacity);

        Some(Ok(SeqRecord { id, desc, seq }))
    }
}

pub fn fasta_records_from_reader<R: BufRead>(reader: R) -> FastaRecords<R> {
    FastaRecords::new(reader)
}

pub fn read_fasta_records_from_reader<R: BufRead>(reader: R) -> OrfstatResult<Vec<SeqRecord>> {
    let mut out = Vec::new();
    for record in fasta_records_from_reader(reader) {
        out.push(record?);
    }
    Ok(out)
}

pub fn read_fasta_records_from_path(path: impl AsRef<Path>) -> OrfstatResult<Vec<SeqRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_fasta_records_from_reader(reader)
}

pub fn read_fasta_records_from_bytes(data: &[u8]) -> OrfstatResult<Vec<SeqRecord>> {
    let reader = BufReader::new(Cursor::new(data));
    read_fasta_records_from_reader(reader)
}

pub fn read_fasta_set_from_reader<R: BufRead>(reader: R) -> OrfstatResult<RecordSet> {
    let records = read_fasta_records_from_reader(reader)?;
    Ok(RecordSet::from_records(records))
}

pub fn read_fasta_set_from_path(path: impl AsRef<Path>) -> OrfstatResult<RecordSet> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_fasta_set_from_reader(reader)
}

pub fn read_fasta_set_from_bytes(data: &[u8]) -> OrfstatResult<RecordSet> {
    let reader = BufReader::new(Cursor::new(data));
    read_fasta_set_from_reader(reader)
}

fn parse_header(header_line: &str, line_no: usize) -> OrfstatResult<(Box<str>, Option<Box<str>>)> {
    let header = header_line
        .strip_prefix('>')
        .ok_or(OrfstatError::FastaFormat {
            msg: "expected header line starting with '>'",
            line: line_no,
        })?;

    let header = header.trim_end_matches(&['\n', '\r'][..]).trim_start();
    if header.is_empty() {
        return Err(OrfstatError::FastaFormat {
            msg: "empty header",
            line: line_no,
        });
    }

    let (id, desc) = match header.find(|c: char| c.is_whitespace()) {
        Some(idx) => {
            let id = &header[..idx];
            let desc = header[idx..].trim();
            let desc = if desc.is_empty() { None } else { Some(desc) };
            (id, desc)
        }
        None => (header, None),
    };

    Ok((id.into(), desc.map(|s| s.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_record() {
        let data = b">seq1\nACGT\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[0].desc(), None);
        assert_eq!(records[0].seq().as_bytes(), b"ACGT");
    }

    #[test]
    fn header_with_description() {
        let data = b">seq1 some desc here\nAC\nGT\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[0].desc(), Some("some desc here"));
        assert_eq!(records[0].seq().as_bytes(), b"ACGT");
    }

    #[test]
    fn multiple_records() {
        let data = b">seq1\nAC\n>seq2\nGT\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[1].id(), "seq2");
    }

    #[test]
    fn lowercase_input_is_uppercased() {
        let data = b">seq1\nacgt\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records[0].seq().as_bytes(), b"ACGT");
    }

    #[test]
    fn empty_sequence_allowed() {
        let data = b">seq1\n>seq2\nA\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seq().as_bytes(), b"");
        assert_eq!(records[1].seq().as_bytes(), b"A");
    }

    #[test]
    fn invalid_format_before_header() {
        let data = b"ACGT\n>seq1\nAC\n";
        let err = read_fasta_records_from_bytes(data).unwrap_err();
        match err {
            OrfstatError::FastaFormat { .. } => {}
            other => panic!("expected fasta format error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_sequence_char() {
        let data = b">seq1\nAC#\n";
        let err = read_fasta_records_from_bytes(data).unwrap_err();
        match err {
            OrfstatError::InvalidChar { .. } => {}
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }

    #[test]
    fn set_reader_builds_index() {
        let data = b">seq1\nAC\n>seq2\nGTGT\n";
        let set = read_fasta_set_from_bytes(data).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get_by_id("seq2").map(|s| s.len()), Some(4));
    }
}
