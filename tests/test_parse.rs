// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

use aacomp::composition::{composition_of, compute_composition};
use aacomp::errors::AacompError;
use aacomp::seq::fasta::{parse, read_fasta_file, strip_gaps};
use aacomp::seq::record::SeqRecord;

fn sample_records() -> Vec<SeqRecord> {
    vec![
        SeqRecord::new("R1", "MKVLLAWYQQNNTT"),
        SeqRecord::new("R2 with description", "ACDEFGHIKLMNPQRSTVWY"),
        SeqRecord::new("R3", "HHHH-PP--G"),
        SeqRecord::new("R4", "W"),
    ]
}

#[test]
fn test_n_records_in_file_order() {
    let records = sample_records();
    let text = utils::to_fasta(&records, 60);
    let coll = parse(&text, false).unwrap();
    assert_eq!(coll.len(), records.len());
    let ids: Vec<&str> = coll.ids().collect();
    assert_eq!(ids, vec!["R1", "R2 with description", "R3", "R4"]);
}

#[test]
fn test_round_trip() {
    let records = sample_records();
    for width in [1, 3, 60] {
        let text = utils::to_fasta(&records, width);
        let coll = parse(&text, false).unwrap();
        let parsed: Vec<SeqRecord> = coll.iter().cloned().collect();
        assert_eq!(parsed, records, "line width {}", width);
    }
}

#[test]
fn test_round_trip_single() {
    for rec in sample_records() {
        let text = format!(">{}\n{}\n", rec.header, rec.sequence);
        let coll = parse(&text, false).unwrap();
        assert_eq!(coll.get(&rec.header), Some(&rec));
    }
}

#[test]
fn test_del_gaps_equals_strip_after_parse() {
    let text = utils::to_fasta(&sample_records(), 4);
    let with_gaps = parse(&text, false).unwrap();
    let without_gaps = parse(&text, true).unwrap();
    for (a, b) in with_gaps.iter().zip(without_gaps.iter()) {
        assert_eq!(strip_gaps(&a.sequence), b.sequence);
        assert_eq!(strip_gaps(&b.sequence), b.sequence);
        // Gaps never reach the denominator, so both versions give the same profile.
        assert_eq!(
            compute_composition(&a.sequence).unwrap(),
            compute_composition(&b.sequence).unwrap()
        );
    }
}

#[test]
fn test_protein_file() {
    let coll = read_fasta_file("tests/data/proteins.fas", false).unwrap();
    assert_eq!(coll.len(), 3);

    let hba = coll.get("sp|P69905|HBA_HUMAN Hemoglobin subunit alpha").unwrap();
    assert_eq!(hba.sequence.len(), 142);
    assert!(hba.sequence.starts_with("MVLSPADKTNVKAAWGKVGAHAGEYGAEALERMFLSFPTTKTYFPHFDLSHGSAQVKGHGKK"));

    assert_eq!(coll.get("aligned fragment").unwrap().sequence, "MV-LS--PADKT-NV");
    let prof = composition_of(&coll, "aligned fragment").unwrap();
    assert_eq!(prof.residues(), 11);

    // One empty sequence does not affect the others.
    assert!(matches!(
        composition_of(&coll, "gaps only"),
        Err(AacompError::EmptySequence)
    ));
}

#[test]
fn test_protein_file_del_gaps() {
    let coll = read_fasta_file("tests/data/proteins.fas", true).unwrap();
    assert_eq!(coll.get("aligned fragment").unwrap().sequence, "MVLSPADKTNV");
    assert_eq!(coll.get("gaps only").unwrap().sequence, "");
}
