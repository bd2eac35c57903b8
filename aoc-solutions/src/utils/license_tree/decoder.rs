//! Recursive descent over the flat integer encoding.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use super::node::Node;

/// Which header or body field the decoder was reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ChildCount,
    MetadataCount,
    Metadata,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::ChildCount => "child count",
            Field::MetadataCount => "metadata count",
            Field::Metadata => "metadata entry",
        })
    }
}

/// The integer sequence does not encode a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("input ended at offset {offset} while reading a {expected}")]
    UnexpectedEnd { offset: usize, expected: Field },
    #[error("negative value {value} at offset {offset}")]
    NegativeValue { offset: usize, value: i64 },
}

/// Read position over the whole input, threaded through the recursion
struct Cursor<'a> {
    values: &'a [i64],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(values: &'a [i64]) -> Self {
        Self { values, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.values.len() - self.offset
    }

    fn next(&mut self, expected: Field) -> Result<u64, MalformedInput> {
        let offset = self.offset;
        let value = *self
            .values
            .get(offset)
            .ok_or(MalformedInput::UnexpectedEnd { offset, expected })?;
        let value = u64::try_from(value).map_err(|_| MalformedInput::NegativeValue { offset, value })?;
        self.offset += 1;
        Ok(value)
    }

    fn next_count(&mut self, expected: Field) -> Result<usize, MalformedInput> {
        // a count that does not fit usize can never be satisfied by the input
        self.next(expected)
            .map(|count| usize::try_from(count).unwrap_or(usize::MAX))
    }
}

/// Decode the node starting at `values[0]`.
///
/// Returns the tree together with the number of integers it occupied; values
/// after that are left untouched for the caller to judge.
pub fn decode(values: &[i64]) -> Result<(Node, usize), MalformedInput> {
    let mut cursor = Cursor::new(values);
    let root = decode_node(&mut cursor)?;
    debug!(
        consumed = cursor.offset,
        total = values.len(),
        nodes = root.node_count(),
        "decoded license tree"
    );
    Ok((root, cursor.offset))
}

fn decode_node(cursor: &mut Cursor<'_>) -> Result<Node, MalformedInput> {
    let child_count = cursor.next_count(Field::ChildCount)?;
    let metadata_count = cursor.next_count(Field::MetadataCount)?;

    // declared counts are untrusted, never reserve more than the input can hold
    let mut children = Vec::with_capacity(child_count.min(cursor.remaining() / 2));
    for _ in 0..child_count {
        children.push(decode_node(cursor)?);
    }

    let mut metadata = Vec::with_capacity(metadata_count.min(cursor.remaining()));
    for _ in 0..metadata_count {
        metadata.push(cursor.next(Field::Metadata)?);
    }

    Ok(Node::new(children, metadata))
}
