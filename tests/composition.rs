// Composition tests — the whole ordering pipeline chained in memory.
//
// These tests exercise the data flow between modules:
//   slip text -> word sets -> similarity table -> greedy tour -> report
// without touching the filesystem; the slip texts live in the test.

use slipstream::report::OrderReport;
use slipstream::sheet::write_sheet;
use slipstream::similarity::jaccard::jaccard;
use slipstream::similarity::matrix::SimilarityMatrix;
use slipstream::slips::{Corpus, RouteSlip};
use slipstream::tour::{best_tour, path_similarity_sum};
use slipstream::words::from_text;

fn corpus(slips: &[(&str, &str)]) -> Corpus {
    Corpus {
        slips: slips
            .iter()
            .map(|(name, text)| RouteSlip {
                name: name.to_string(),
                words: from_text(text),
            })
            .collect(),
    }
}

/// Three club rides: two near-twins along the harbor plus an unrelated
/// hill route. The twins must never end up adjacent.
fn harbor_corpus() -> Corpus {
    corpus(&[
        (
            "harbor_loop.txt",
            "Harbor Loop 40km\n\nSTART Market Square\nLEFT onto Harbor Rd\n\
             RIGHT at the cannery\nFINISH Market Square\n",
        ),
        (
            "harbor_sprint.txt",
            "Harbor Sprint 25km\n\nSTART Market Square\nLEFT onto Harbor Rd\n\
             FINISH at the cannery\n",
        ),
        (
            "orchard_hills.txt",
            "Orchard Hills 60km\n\nSTART Mill Pond\nCLIMB Orchard Grade\n\
             DESCEND past the cider barn\n",
        ),
    ])
}

// ============================================================
// Chain: slip text -> word sets -> table -> tour
// ============================================================

#[test]
fn near_twin_slips_never_print_adjacent() {
    let corpus = harbor_corpus();
    let matrix = SimilarityMatrix::build(&corpus);
    let tour = best_tour(&matrix).unwrap();
    assert_eq!(
        tour.sequence,
        vec![0, 2, 1],
        "the hill route should sit between the harbor twins"
    );
}

#[test]
fn table_entries_match_direct_jaccard() {
    let corpus = harbor_corpus();
    let matrix = SimilarityMatrix::build(&corpus);
    for a in 0..corpus.len() {
        for b in 0..corpus.len() {
            if a != b {
                assert_eq!(
                    matrix.get(a, b),
                    jaccard(&corpus.slips[a].words, &corpus.slips[b].words)
                );
            }
        }
    }
}

#[test]
fn tour_sum_is_the_sum_of_its_legs() {
    let corpus = harbor_corpus();
    let matrix = SimilarityMatrix::build(&corpus);
    let tour = best_tour(&matrix).unwrap();
    let legs = path_similarity_sum(&tour.sequence, &matrix);
    assert!((tour.similarity_sum - legs).abs() < 1e-12);
}

// ============================================================
// Chain: tour -> report -> JSON
// ============================================================

#[test]
fn report_carries_names_and_leg_scores() {
    let corpus = harbor_corpus();
    let matrix = SimilarityMatrix::build(&corpus);
    let tour = best_tour(&matrix).unwrap();
    let report = OrderReport::new(&corpus, &tour, &matrix);

    assert_eq!(report.slip_count, 3);
    let names: Vec<&str> = report.sequence.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["harbor_loop.txt", "orchard_hills.txt", "harbor_sprint.txt"]
    );

    assert!(report.sequence[0].similarity_to_previous.is_none());
    for leg in &report.sequence[1..] {
        let score = leg.similarity_to_previous.unwrap();
        assert!((0.0..=1.0).contains(&score), "leg {}: {score}", leg.name);
    }
}

#[test]
fn report_serializes_with_stable_field_names() {
    let corpus = harbor_corpus();
    let matrix = SimilarityMatrix::build(&corpus);
    let tour = best_tour(&matrix).unwrap();
    let report = OrderReport::new(&corpus, &tour, &matrix);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["slip_count"], 3);
    assert_eq!(json["sequence"][0]["name"], "harbor_loop.txt");
    assert!(json["sequence"][0].get("similarity_to_previous").is_none());
    assert!(json["sequence"][1]["similarity_to_previous"].is_f64());
    assert!(json["path_similarity_sum"].as_f64().unwrap() > 0.0);
}

// ============================================================
// Chain: slip text -> print sheet
// ============================================================

#[test]
fn sheet_reformats_a_full_slip() {
    let text = "Harbor Loop 40km\nSunday 9:00\n\nSTART Market Square\n\
                LEFT onto Harbor Rd, https://example.com/map\n";
    let mut out = Vec::new();
    write_sheet(text.as_bytes(), &mut out, 2).unwrap();
    let csv = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], ",Harbor Loop 40km,,Harbor Loop 40km");
    assert_eq!(lines[1], ",Sunday 9:00,,Sunday 9:00");
    assert_eq!(lines[2], "START,Market Square,START,Market Square");
    // The comma is substituted; a URL mid-cell survives (only cells that
    // start with one are dropped)
    assert_eq!(
        lines[3],
        "LEFT,onto Harbor Rd; https://example.com/map,\
         LEFT,onto Harbor Rd; https://example.com/map"
    );
}
