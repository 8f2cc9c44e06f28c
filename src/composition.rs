// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::debug;

use crate::errors::AacompError;
use crate::seq::fasta::GAP;
use crate::seq::file::SequenceCollection;

/// The 20 standard amino acids, in reporting order.
pub const AMINO_ACIDS: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'Y',
];

const DECIMALS_SCALE: f64 = 10_000.0;

/// Relative frequency of each standard amino acid in one sequence.
///
/// All 20 residues are always present, in [`AMINO_ACIDS`] order, with 0.0 for absent ones.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionProfile {
    frequencies: [f64; 20],
    residues: usize,
}

impl CompositionProfile {
    pub fn get(&self, aa: char) -> Option<f64> {
        AMINO_ACIDS
            .iter()
            .position(|&c| c == aa)
            .map(|pos| self.frequencies[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        AMINO_ACIDS.iter().copied().zip(self.frequencies.iter().copied())
    }

    // Always 20: absent residues are kept with frequency 0.0.
    pub fn len(&self) -> usize {
        AMINO_ACIDS.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Number of non-gap characters, i.e. the denominator of every frequency.
    pub fn residues(&self) -> usize {
        self.residues
    }
}

// Rounds half away from zero (f64::round), to 4 decimals.
fn round_frequency(freq: f64) -> f64 {
    (freq * DECIMALS_SCALE).round() / DECIMALS_SCALE
}

/// Computes the amino-acid composition of `seq`.
///
/// Residues are counted case-sensitively in the sequence as given; the denominator is the
/// sequence length with gaps removed, whether or not the parser already removed them. Characters
/// outside the 20-letter alphabet (lowercase, 'X', '*', ...) only count in the denominator.
pub fn compute_composition(seq: &str) -> Result<CompositionProfile, AacompError> {
    let residues = seq.chars().filter(|&c| c != GAP).count();
    if residues == 0 {
        return Err(AacompError::EmptySequence);
    }

    let mut counts = [0usize; 20];
    for ch in seq.chars() {
        if let Some(pos) = AMINO_ACIDS.iter().position(|&aa| aa == ch) {
            counts[pos] += 1;
        }
    }
    debug!("composition over {} residues", residues);

    let mut frequencies = [0.0; 20];
    for (freq, count) in frequencies.iter_mut().zip(counts) {
        *freq = round_frequency(count as f64 / residues as f64);
    }

    Ok(CompositionProfile {
        frequencies,
        residues,
    })
}

pub fn composition_of(
    collection: &SequenceCollection,
    id: &str,
) -> Result<CompositionProfile, AacompError> {
    let record = collection
        .get(id)
        .ok_or_else(|| AacompError::UnknownId(id.to_string()))?;
    compute_composition(&record.sequence)
}
