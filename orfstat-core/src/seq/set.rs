use crate::error::{OrfstatError, OrfstatResult};
use crate::seq::dna::DnaSeq;
use crate::seq::record::SeqRecord;
use std::collections::HashMap;

/// An ordered, fully materialized collection of records.
///
/// Keeps records in arrival order and carries an identifier index for
/// target lookups. Duplicate identifiers keep the last occurrence in the
/// index; the records themselves are never dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSet {
    ids: Vec<Box<str>>,
    descs: Vec<Option<Box<str>>>,
    seqs: Vec<DnaSeq>,
    index: HashMap<Box<str>, usize>,
}

impl RecordSet {
    pub fn new(
        ids: Vec<Box<str>>,
        descs: Vec<Option<Box<str>>>,
        seqs: Vec<DnaSeq>,
    ) -> OrfstatResult<Self> {
        if ids.len() != seqs.len() || descs.len() != seqs.len() {
            return Err(OrfstatError::RecordSetLenMismatch {
                ids: ids.len(),
                descs: descs.len(),
                seqs: seqs.len(),
            });
        }
        let index = build_index(&ids);
        Ok(Self {
            ids,
            descs,
            seqs,
            index,
        })
    }

    pub fn from_records(records: Vec<SeqRecord>) -> Self {
        let mut ids = Vec::with_capacity(records.len());
        let mut descs = Vec::with_capacity(records.len());
        let mut seqs = Vec::with_capacity(records.len());

        for record in records {
            ids.push(record.id);
            descs.push(record.desc);
            seqs.push(record.seq);
        }

        let index = build_index(&ids);
        Self {
            ids,
            descs,
            seqs,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.seqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seqs.is_empty()
    }

    pub fn ids(&self) -> &[Box<str>] {
        &self.ids
    }

    pub fn descs(&self) -> &[Option<Box<str>>] {
        &self.descs
    }

    pub fn seqs(&self) -> &[DnaSeq] {
        &self.seqs
    }

    pub fn id(&self, i: usize) -> Option<&str> {
        self.ids.get(i).map(|s| s.as_ref())
    }

    pub fn desc(&self, i: usize) -> Option<Option<&str>> {
        self.descs.get(i).map(|d| d.as_deref())
    }

    pub fn seq(&self, i: usize) -> Option<&DnaSeq> {
        self.seqs.get(i)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&DnaSeq> {
        self.index_of(id).and_then(|i| self.seqs.get(i))
    }

    pub fn lengths(&self) -> Vec<usize> {
        self.seqs.iter().map(|s| s.len()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DnaSeq)> {
        self.ids
            .iter()
            .map(|id| id.as_ref())
            .zip(self.seqs.iter())
    }
}

fn build_index(ids: &[Box<str>]) -> HashMap<Box<str>, usize> {
    let mut index = HashMap::with_capacity(ids.len());
    for (i, id) in ids.iter().enumerate() {
        index.insert(id.clone(), i);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, seq: &[u8]) -> SeqRecord {
        SeqRecord::new(id, DnaSeq::new(seq.to_vec()).unwrap())
    }

    #[test]
    fn from_records_preserves_order() {
        let set = RecordSet::from_records(vec![
            record("b", b"AC"),
            record("a", b"GGGG"),
            record("c", b"T"),
        ]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.id(0), Some("b"));
        assert_eq!(set.id(1), Some("a"));
        assert_eq!(set.id(2), Some("c"));
        assert_eq!(set.lengths(), vec![2, 4, 1]);
    }

    #[test]
    fn get_by_id() {
        let set = RecordSet::from_records(vec![record("x", b"AC"), record("y", b"GT")]);
        assert_eq!(set.get_by_id("y").map(DnaSeq::as_bytes), Some(&b"GT"[..]));
        assert_eq!(set.get_by_id("z"), None);
    }

    #[test]
    fn iter_pairs_ids_with_seqs() {
        let set = RecordSet::from_records(vec![record("x", b"AC"), record("y", b"GT")]);
        let pairs: Vec<(&str, &[u8])> = set.iter().map(|(id, seq)| (id, seq.as_bytes())).collect();
        assert_eq!(pairs, vec![("x", &b"AC"[..]), ("y", &b"GT"[..])]);
    }

    #[test]
    fn descs_are_carried() {
        let rec = record("x", b"AC").with_desc("sample desc");
        let set = RecordSet::from_records(vec![rec, record("y", b"GT")]);
        assert_eq!(set.desc(0), Some(Some("sample desc")));
        assert_eq!(set.desc(1), Some(None));
        assert_eq!(set.descs().len(), 2);
    }

    #[test]
    fn duplicate_ids_index_last_occurrence() {
        let set = RecordSet::from_records(vec![record("x", b"AAAA"), record("x", b"CC")]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get_by_id("x").map(DnaSeq::as_bytes), Some(&b"CC"[..]));
    }

    #[test]
    fn new_rejects_length_mismatch() {
        let err = RecordSet::new(
            vec!["a".into()],
            vec![None, None],
            vec![DnaSeq::new(b"AC".to_vec()).unwrap()],
        )
        .unwrap_err();
        match err {
            OrfstatError::RecordSetLenMismatch { ids, descs, seqs } => {
                assert_eq!((ids, descs, seqs), (1, 2, 1));
            }
            other => panic!("expected length mismatch, got {other:?}"),
        }
    }
}
