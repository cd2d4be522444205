// Slipstream: print-order planning for club route slips.
//
// This is the library root. Each module corresponds to one stage of the
// ordering pipeline, plus the print-sheet reformatter.

pub mod config;
pub mod output;
pub mod report;
pub mod sheet;
pub mod similarity;
pub mod slips;
pub mod tour;
pub mod words;
