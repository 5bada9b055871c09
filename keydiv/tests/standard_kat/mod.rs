//! Known-answer test modules, one per standard family.

mod an0148_vectors;
mod an10922_vectors;
mod common;
