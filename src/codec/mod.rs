//! Codecs — getting grids in and out of text
//!
//! - **Strict**: trusted seed files, fails on anything malformed
//! - **Bio**: the length-capped profile field, repairs whatever it reads
//! - **Planner**: advisory sizing of a grid against a length budget

pub mod bio;
pub mod planner;
pub mod strict;

pub use bio::{BioCodec, ColumnGuard, DecodedBio, EncodedBio, BIO_ALIVE, BIO_EMPTY, BIO_FULL};
pub use planner::{calculate_safe_dimensions, encoded_length};
