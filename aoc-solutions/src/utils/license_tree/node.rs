//! Tree model and its aggregate metrics.

use thiserror::Error;

/// A vertex of a license tree: ordered children plus ordered metadata.
///
/// Children are owned exclusively by their parent. Nodes are immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    children: Vec<Node>,
    metadata: Vec<u64>,
}

impl Node {
    pub fn new(children: Vec<Node>, metadata: Vec<u64>) -> Self {
        Self { children, metadata }
    }

    /// Childless node carrying only metadata
    pub fn leaf(metadata: Vec<u64>) -> Self {
        Self::new(Vec::new(), metadata)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn metadata(&self) -> &[u64] {
        &self.metadata
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of integers needed to encode this node and its subtree:
    /// `2 + Σ child lengths + metadata count`.
    pub fn encoded_len(&self) -> usize {
        2 + self.metadata.len() + self.children.iter().map(Node::encoded_len).sum::<usize>()
    }

    /// Flat header/children/metadata encoding, the inverse of
    /// [`decode`](super::decode).
    pub fn encode(&self) -> Vec<u64> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out);
        out
    }

    fn encode_into(&self, out: &mut Vec<u64>) {
        out.push(self.children.len() as u64);
        out.push(self.metadata.len() as u64);
        for child in &self.children {
            child.encode_into(out);
        }
        out.extend_from_slice(&self.metadata);
    }

    /// Total node count of the subtree rooted here
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

/// A tree metric exceeded `u64::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tree value does not fit in 64 bits")]
pub struct ValueOverflow;

fn checked_total(values: impl IntoIterator<Item = u64>) -> Result<u64, ValueOverflow> {
    values
        .into_iter()
        .try_fold(0u64, |acc, v| acc.checked_add(v).ok_or(ValueOverflow))
}

/// Sum of every metadata entry in the subtree.
pub fn metadata_sum(node: &Node) -> Result<u64, ValueOverflow> {
    node.children
        .iter()
        .try_fold(checked_total(node.metadata.iter().copied())?, |acc, child| {
            acc.checked_add(metadata_sum(child)?).ok_or(ValueOverflow)
        })
}

/// Value of a node: a leaf is worth the sum of its metadata; an internal node
/// is worth the sum of the children its metadata points at (1-based, repeats
/// count again, zero or out-of-range entries count nothing).
pub fn indexed_value(node: &Node) -> Result<u64, ValueOverflow> {
    if node.is_leaf() {
        return checked_total(node.metadata.iter().copied());
    }

    // each child evaluated once, however often it is referenced
    let child_values = node
        .children
        .iter()
        .map(indexed_value)
        .collect::<Result<Vec<u64>, _>>()?;

    checked_total(node.metadata.iter().filter_map(|&entry| {
        let index = usize::try_from(entry).ok()?.checked_sub(1)?;
        child_values.get(index).copied()
    }))
}
