// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, info, warn};
use regex::Regex;

use crate::errors::AacompError;
use crate::seq::file::SequenceCollection;
use crate::seq::record::SeqRecord;

pub const GAP: char = '-';

// A header line is any line starting with '>'. In multi-line mode '$' stops before '\n' but not
// before '\r', so CRLF headers carry a trailing '\r' that must be dropped.
static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>.*$").expect("header regex is valid"));

pub fn strip_gaps(seq: &str) -> String {
    seq.chars().filter(|&c| c != GAP).collect()
}

fn join_lines(body: &str) -> String {
    body.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

/// Splits FastA text into records, in file order.
///
/// Each header is paired with the text up to the next header (or the end of input), so every
/// header gets exactly one body, possibly empty. Text before the first header is ignored. When
/// `del_gaps` is set, gap characters are removed from the bodies.
pub fn parse(text: &str, del_gaps: bool) -> Result<SequenceCollection, AacompError> {
    let headers: Vec<_> = HEADER_LINE.find_iter(text).collect();
    let Some(first) = headers.first() else {
        return Err(AacompError::Parse(String::from("No sequences found")));
    };
    if !text[..first.start()].trim().is_empty() {
        warn!("Ignoring text before the first header line");
    }

    let body_ends = headers
        .iter()
        .skip(1)
        .map(|m| m.start())
        .chain(std::iter::once(text.len()));

    let collection: SequenceCollection = headers
        .iter()
        .zip(body_ends)
        .map(|(hdr, end)| {
            let line = &hdr.as_str()[1..];
            let header = line.strip_suffix('\r').unwrap_or(line);
            let body = join_lines(&text[hdr.end()..end]);
            let sequence = if del_gaps { strip_gaps(&body) } else { body };
            debug!("record '{}': {} chars", header, sequence.len());
            SeqRecord::new(header, sequence)
        })
        .collect();

    info!("Parsed {} sequences", collection.len());
    Ok(collection)
}

pub fn read_fasta_file<P: AsRef<Path>>(
    path: P,
    del_gaps: bool,
) -> Result<SequenceCollection, AacompError> {
    let text = fs::read_to_string(path)?;
    parse(&text, del_gaps)
}
