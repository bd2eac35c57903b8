//! Self-describing n-ary trees encoded as a flat integer sequence
//!
//! Each node is written as a header `child_count metadata_count`, followed by
//! the encodings of its children in order, followed by its metadata entries.
//! Nothing delimits nodes, so the only way to find where a sibling starts is
//! to decode everything before it.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::license_tree::{decode, indexed_value, metadata_sum};
//!
//! let values = [2, 3, 0, 3, 10, 11, 12, 1, 1, 0, 1, 99, 2, 1, 1, 2];
//! let (root, consumed) = decode(&values).unwrap();
//!
//! assert_eq!(consumed, values.len());
//! assert_eq!(metadata_sum(&root), Ok(138));
//! assert_eq!(indexed_value(&root), Ok(66));
//! ```

mod decoder;
mod node;

pub use decoder::{Field, MalformedInput, decode};
pub use node::{Node, ValueOverflow, indexed_value, metadata_sum};

#[cfg(test)]
mod tests;
