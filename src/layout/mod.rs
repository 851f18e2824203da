//! Pure layout geometry, kept free of any drawing concerns so it can be
//! tested without a terminal.

pub mod tree;
