// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;

use log::warn;

use crate::seq::record::SeqRecord;

// An ordered mapping from sequence ID to record. Iteration follows the order in which IDs first
// appear in the source file. Duplicate IDs are not an error: the later sequence replaces the
// earlier one but stays at the position of the first occurrence.

#[derive(Debug, Default, Clone)]
pub struct SequenceCollection {
    records: Vec<SeqRecord>,
    index: HashMap<String, usize>,
}

impl SequenceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, record: SeqRecord) {
        match self.index.get(&record.header) {
            Some(&pos) => {
                warn!(
                    "Duplicate sequence ID '{}': keeping the later sequence",
                    record.header
                );
                self.records[pos].sequence = record.sequence;
            }
            None => {
                self.index.insert(record.header.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&SeqRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    pub fn first(&self) -> Option<&SeqRecord> {
        self.records.first()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|rec| rec.header.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeqRecord> {
        self.records.iter()
    }
}

impl FromIterator<SeqRecord> for SequenceCollection {
    fn from_iter<I: IntoIterator<Item = SeqRecord>>(iter: I) -> Self {
        let mut collection = SequenceCollection::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a SequenceCollection {
    type Item = &'a SeqRecord;
    type IntoIter = std::slice::Iter<'a, SeqRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
