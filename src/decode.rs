use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{MeCabError, Result};
use crate::types::{AnalyzedWord, DumpWord};

/// Sentinel line the analyzer prints after each analyzed text unit.
const EOS_LINE: &str = "EOS\n";

/// Number of space-separated fields in one `-Odump` lattice node line.
const DUMP_FIELDS: usize = 15;

/// Decodes plain, Chasen and simple output, which share one grammar: one
/// token line per word, tabs between the surface form and the feature list,
/// and a terminating `EOS` line.
///
/// The token grammars differ in how many fields they emit (`-Osimple` stops
/// after the part of speech), so missing trailing fields decode to empty
/// strings, and to `None` for the optional reading and pronunciation.
pub(crate) fn decode_analyzed_words(raw: &str) -> Result<Vec<AnalyzedWord>> {
    // Empty input produces a bare "EOS\n", so the marker is stripped
    // separately from the newline that precedes it.
    let body = raw.strip_suffix(EOS_LINE).unwrap_or(raw);
    let body = body.strip_suffix('\n').unwrap_or(body);
    if body.is_empty() {
        return Ok(Vec::new());
    }

    // Chasen output separates every field with a tab; plain and simple output
    // use one tab and then commas. Normalizing all tabs to commas reduces the
    // three grammars to a single flat comma-separated list.
    let normalized = body.replace('\t', ",");
    let words = normalized
        .split('\n')
        .map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            word_from_fields(fields[0], &fields[1..])
        })
        .collect();
    Ok(words)
}

/// Decodes `-Odump` output: one space-separated lattice node per line, no
/// `EOS` marker, a single trailing newline.
pub(crate) fn decode_dump_words(raw: &str) -> Result<Vec<DumpWord>> {
    let body = raw.strip_suffix('\n').unwrap_or(raw);
    if body.is_empty() {
        return Ok(Vec::new());
    }
    body.split('\n').map(dump_word_from_line).collect()
}

/// Decodes `-Owakati` output: the surfaces re-joined by single spaces, with a
/// trailing space before the final newline.
pub(crate) fn decode_wakati(raw: &str) -> Vec<String> {
    let mut surfaces: Vec<String> = raw.split(' ').map(str::to_owned).collect();
    // The trailing " \n" leaves one artifact element behind the last surface.
    surfaces.pop();
    surfaces
}

/// Decodes `-Oyomi` output: a single reading string, dropping every newline
/// and any stray space immediately preceding one.
pub(crate) fn decode_yomi(raw: &str) -> String {
    yomi_trailer().replace_all(raw, "").into_owned()
}

fn yomi_trailer() -> &'static Regex {
    static TRAILER: OnceLock<Regex> = OnceLock::new();
    TRAILER.get_or_init(|| Regex::new(" ?\n").expect("hard-coded pattern compiles"))
}

/// Maps a comma-separated feature list (everything after the surface form)
/// onto an [`AnalyzedWord`].
fn word_from_fields(surface: &str, fields: &[&str]) -> AnalyzedWord {
    let field = |index: usize| fields.get(index).copied().unwrap_or_default().to_owned();
    AnalyzedWord {
        surface: surface.to_owned(),
        feature: field(0),
        feature_details: [field(1), field(2), field(3)],
        conjugation_forms: [field(4), field(5)],
        original_form: field(6),
        reading: fields.get(7).map(|field| (*field).to_owned()),
        pronunciation: fields.get(8).map(|field| (*field).to_owned()),
    }
}

fn dump_word_from_line(line: &str) -> Result<DumpWord> {
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() < DUMP_FIELDS {
        return Err(MeCabError::MalformedOutput(format!(
            "expected {} space-separated dump fields, found {} in line {:?}",
            DUMP_FIELDS,
            fields.len(),
            line
        )));
    }

    let feature_fields: Vec<&str> = fields[2].split(',').collect();
    let word = word_from_fields(fields[1], &feature_fields);

    Ok(DumpWord {
        node_id: int_field(fields[0], "node id", line)?,
        word,
        character_start_byte: int_field(fields[3], "start byte offset", line)?,
        character_end_byte: int_field(fields[4], "end byte offset", line)?,
        rc_attr: int_field(fields[5], "right connection attribute", line)?,
        lc_attr: int_field(fields[6], "left connection attribute", line)?,
        pos_id: int_field(fields[7], "part-of-speech id", line)?,
        character_type: int_field(fields[8], "character type", line)?,
        status: int_field(fields[9], "node status", line)?,
        is_best: int_field::<i64>(fields[10], "best-path flag", line)? != 0,
        alpha: score_field(fields[11]),
        beta: score_field(fields[12]),
        prob: score_field(fields[13]),
        cost: cost_field(fields[14]),
    })
}

/// Structural integer field. A token that is not a number here means the line
/// is not a dump line at all, which is reported rather than papered over.
fn int_field<T>(token: &str, name: &str, line: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    token.parse().map_err(|error| {
        MeCabError::MalformedOutput(format!(
            "invalid {name} {token:?} in dump line {line:?}: {error}"
        ))
    })
}

/// Lattice score field. The analyzer can emit the `*` placeholder for scores
/// depending on its lattice-level settings; those decode to NaN.
fn score_field(token: &str) -> f64 {
    token.parse().unwrap_or(f64::NAN)
}

/// Cumulative path cost. An integer in well-formed output, but the `*`
/// placeholder is tolerated and kept distinguishable as `None`.
fn cost_field(token: &str) -> Option<i64> {
    token.parse().ok()
}
