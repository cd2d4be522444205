// Word extraction and normalization for route slips.
//
// A slip's vocabulary is what makes it comparable: each file is reduced to a
// set of lowercase words, dropping anything too short or too generic to tell
// one ride from another. Cardinal directions are filtered because nearly
// every slip says "turn north onto ..." regardless of which ride it is.
// Tokens ending in "txt" (slip file names quoted inside other slips) and
// tokens starting with "http" (route links) are dropped for the same reason.

use std::collections::HashSet;

/// The normalized vocabulary of one route slip.
///
/// Membership is all that matters downstream — the similarity estimator
/// consumes intersections and unions, never ordering or counts.
pub type WordSet = HashSet<String>;

/// Substrings that mark a token as a cardinal direction.
const DIRECTIONS: [&str; 4] = ["north", "east", "south", "west"];

/// Tokens shorter than this carry no signal.
const MIN_TOKEN_LEN: usize = 3;

/// Normalize a raw token, or return `None` when it should be discarded.
///
/// Lowercases, then drops tokens shorter than three characters, tokens
/// containing a cardinal-direction substring, tokens ending in "txt", and
/// tokens starting with "http".
pub fn simplify(token: &str) -> Option<String> {
    let token = token.to_lowercase();
    if token.chars().count() < MIN_TOKEN_LEN {
        return None;
    }
    if DIRECTIONS.iter().any(|d| token.contains(d)) {
        return None;
    }
    if token.ends_with("txt") || token.starts_with("http") {
        return None;
    }
    Some(token)
}

/// Scan one line of slip text, inserting every surviving token into `words`.
///
/// Tokens are maximal runs of alphabetic characters; everything else is a
/// separator. Lines are scanned independently, so a word split across a line
/// break counts as two fragments. That quirk is load-bearing: existing slip
/// corpora were scored this way, and changing it would shift every entry in
/// the similarity table.
pub fn scan_line(line: &str, words: &mut WordSet) {
    let mut current = String::new();
    for c in line.chars() {
        if c.is_alphabetic() {
            current.push(c);
        } else if !current.is_empty() {
            if let Some(token) = simplify(&current) {
                words.insert(token);
            }
            current.clear();
        }
    }
    if let Some(token) = simplify(&current) {
        words.insert(token);
    }
}

/// Tokenize a complete slip text, line by line.
pub fn from_text(text: &str) -> WordSet {
    let mut words = WordSet::new();
    for line in text.lines() {
        scan_line(line, &mut words);
    }
    words
}
