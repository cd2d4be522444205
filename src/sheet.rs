// Multi-copy print sheets.
//
// A route slip prints small: reformatting it into a CSV grid that carries
// several side-by-side copies of the slip lets a club cut one sheet of
// paper into that many slips instead of printing one sheet per copy.
//
// The text format is line-oriented. Everything above the first blank line
// is the slip header (ride name, date, start point); everything below is
// one cue per line, "LANDMARK the rest of the instruction".

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Cue cells are clipped to this many characters so the landmark column
/// stays narrow on the printed grid.
pub const CUE_WIDTH: usize = 7;

/// Make a cell safe for a comma-separated grid without quoting: delimiters
/// are substituted rather than escaped, and URLs are dropped outright
/// because they make the printed columns too wide.
fn sanitize(cell: &str) -> String {
    if cell.starts_with("http") {
        return String::new();
    }
    cell.replace(',', ";").replace('"', "'")
}

/// Reformat the slip text on `input` into a CSV grid of `copies`
/// side-by-side copies, written to `output`.
///
/// Header lines become records of `copies` ("", line) pairs so the ride
/// name spans the full width. Cue lines put the first word, clipped to
/// [`CUE_WIDTH`] characters, in the left cell and the rest of the line in
/// the right cell. Blank lines below the header yield no record.
pub fn write_sheet<R: BufRead, W: Write>(input: R, output: W, copies: u32) -> Result<()> {
    if copies == 0 {
        bail!("a print sheet needs at least one copy");
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(output);

    let mut past_header = false;
    for line in input.lines() {
        let line = line.context("could not read the route slip text")?;
        let line = line.trim();
        if past_header {
            let mut tokens = line.split_whitespace();
            if let Some(first) = tokens.next() {
                let cue: String = first.chars().take(CUE_WIDTH).collect();
                let rest = tokens.collect::<Vec<_>>().join(" ");
                write_row(&mut writer, &sanitize(&cue), &sanitize(&rest), copies)?;
            }
        } else if !line.is_empty() {
            write_row(&mut writer, "", &sanitize(line), copies)?;
        } else {
            past_header = true;
        }
    }
    writer.flush()?;
    Ok(())
}

fn write_row<W: Write>(
    writer: &mut csv::Writer<W>,
    left: &str,
    right: &str,
    copies: u32,
) -> Result<()> {
    let mut record = Vec::with_capacity(copies as usize * 2);
    for _ in 0..copies {
        record.push(left);
        record.push(right);
    }
    writer.write_record(&record)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(input: &str, copies: u32) -> String {
        let mut out = Vec::new();
        write_sheet(input.as_bytes(), &mut out, copies).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_rows_span_full_width() {
        let out = sheet("Harbor Loop\n40 km\n\nLeft Main St\n", 3);
        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            ",Harbor Loop,,Harbor Loop,,Harbor Loop"
        );
        assert_eq!(lines.next().unwrap(), ",40 km,,40 km,,40 km");
    }

    #[test]
    fn test_cue_rows_split_first_word() {
        let out = sheet("Ride\n\nLeft Main St\n", 2);
        let body = out.lines().nth(1).unwrap();
        assert_eq!(body, "Left,Main St,Left,Main St");
    }

    #[test]
    fn test_cue_clipped_to_seven_characters() {
        let out = sheet("Ride\n\nStraight past the mill\n", 1);
        let body = out.lines().nth(1).unwrap();
        assert_eq!(body, "Straigh,past the mill");
    }

    #[test]
    fn test_urls_are_dropped() {
        let out = sheet("Ride\n\nMap https://example.com/route\n", 1);
        let body = out.lines().nth(1).unwrap();
        assert_eq!(body, "Map,");
    }

    #[test]
    fn test_cue_clipped_before_url_check() {
        // The clipped cue still reads as a URL and is dropped.
        let out = sheet("Ride\n\nhttpsxyzabc 9:00\n", 1);
        let body = out.lines().nth(1).unwrap();
        assert_eq!(body, ",9:00");
    }

    #[test]
    fn test_commas_and_quotes_substituted() {
        let out = sheet("Ride\n\nRight 10:30, \"sharp\"\n", 1);
        let body = out.lines().nth(1).unwrap();
        assert_eq!(body, "Right,10:30; 'sharp'");
    }

    #[test]
    fn test_blank_body_lines_yield_nothing() {
        let out = sheet("Ride\n\nLeft Main St\n\nRight Mill Rd\n", 1);
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_zero_copies_refused() {
        let mut out = Vec::new();
        assert!(write_sheet("Ride\n".as_bytes(), &mut out, 0).is_err());
    }
}
