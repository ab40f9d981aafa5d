//! Embedded default lexicon
//!
//! The word/tier table is generated by the build script from `data/lexicon.txt`
//! and compiled into the binary.

// Include generated lexicon table from build script
include!(concat!(env!("OUT_DIR"), "/default_lexicon.rs"));
