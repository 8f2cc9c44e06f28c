// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use itertools::Itertools;

use crate::composition::{composition_of, CompositionProfile};
use crate::errors::AacompError;
use crate::seq::file::SequenceCollection;

pub fn format_summary(collection: &SequenceCollection) -> String {
    format!(
        "Found {} sequences.\nSequences IDs: {}\n",
        collection.len(),
        collection.ids().join(", ")
    )
}

pub fn format_composition(id: &str, profile: &CompositionProfile) -> String {
    let mut out = format!(
        "Chosen sequence ID: {}\nThe amino acid composition for this sequence:\n",
        id
    );
    for (aa, freq) in profile.iter() {
        out.push_str(&format!("{}: {:.4}\n", aa, freq));
    }
    out
}

// Summary of the whole collection, followed by the composition of sequence `id`.
pub fn format_report(collection: &SequenceCollection, id: &str) -> Result<String, AacompError> {
    let profile = composition_of(collection, id)?;
    Ok(format_summary(collection) + &format_composition(id, &profile))
}
