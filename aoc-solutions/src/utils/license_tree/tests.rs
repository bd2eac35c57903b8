//! Tests for the license tree decoder and metrics.

use proptest::prelude::*;

use super::*;

const SAMPLE: [i64; 16] = [2, 3, 0, 3, 10, 11, 12, 1, 1, 0, 1, 99, 2, 1, 1, 2];

fn to_signed(values: &[u64]) -> Vec<i64> {
    values.iter().map(|&v| v as i64).collect()
}

#[test]
fn test_sample_tree_shape() {
    let (root, consumed) = decode(&SAMPLE).unwrap();

    assert_eq!(consumed, SAMPLE.len());
    assert_eq!(root.metadata(), &[1, 1, 2]);
    assert_eq!(root.children().len(), 2);

    let b = &root.children()[0];
    assert!(b.is_leaf());
    assert_eq!(b.metadata(), &[10, 11, 12]);

    let c = &root.children()[1];
    assert_eq!(c.metadata(), &[2]);
    let d = &c.children()[0];
    assert_eq!(d.metadata(), &[99]);
    assert_eq!(root.node_count(), 4);
}

#[test]
fn test_sample_metrics() {
    let (root, _) = decode(&SAMPLE).unwrap();
    assert_eq!(metadata_sum(&root), Ok(138));
    assert_eq!(indexed_value(&root), Ok(66));
}

#[test]
fn test_indexed_value_skips_zero_and_out_of_range() {
    // C has one child D but points at child 2, so C is worth 0
    let (root, _) = decode(&SAMPLE).unwrap();
    assert_eq!(indexed_value(&root.children()[1]), Ok(0));

    let node = Node::new(vec![Node::leaf(vec![7])], vec![0, 2, 5]);
    assert_eq!(indexed_value(&node), Ok(0));
}

#[test]
fn test_indexed_value_counts_repeated_references() {
    let node = Node::new(vec![Node::leaf(vec![3, 4]), Node::leaf(vec![100])], vec![1, 1, 1]);
    assert_eq!(indexed_value(&node), Ok(21));
}

#[test]
fn test_empty_node_is_legal() {
    let (node, consumed) = decode(&[0, 0]).unwrap();
    assert_eq!(consumed, 2);
    assert_eq!(node, Node::default());
    assert_eq!(metadata_sum(&node), Ok(0));
    assert_eq!(indexed_value(&node), Ok(0));
}

#[test]
fn test_metric_overflow_is_reported() {
    let (root, consumed) = decode(&[0, 3, i64::MAX, i64::MAX, i64::MAX]).unwrap();
    assert_eq!(consumed, 5);
    assert_eq!(metadata_sum(&root), Err(ValueOverflow));
    assert_eq!(indexed_value(&root), Err(ValueOverflow));

    // children fit on their own, their total does not
    let big = Node::leaf(vec![u64::MAX / 2 + 1]);
    let parent = Node::new(vec![big.clone(), big], vec![1, 2]);
    assert_eq!(metadata_sum(&parent), Err(ValueOverflow));
    assert_eq!(indexed_value(&parent), Err(ValueOverflow));

    // repeated references multiply a child's value
    let chain = Node::new(vec![Node::leaf(vec![u64::MAX / 3 + 1])], vec![1, 1, 1]);
    assert_eq!(metadata_sum(&chain), Ok(u64::MAX / 3 + 4));
    assert_eq!(indexed_value(&chain), Err(ValueOverflow));
    assert_eq!(ValueOverflow.to_string(), "tree value does not fit in 64 bits");
}

#[test]
fn test_trailing_values_are_not_consumed() {
    let (node, consumed) = decode(&[0, 1, 5, 42, 43]).unwrap();
    assert_eq!(consumed, 3);
    assert_eq!(node.metadata(), &[5]);
}

#[test]
fn test_truncated_metadata_is_malformed() {
    assert_eq!(
        decode(&[0, 3, 1, 2]),
        Err(MalformedInput::UnexpectedEnd {
            offset: 4,
            expected: Field::Metadata,
        })
    );
}

#[test]
fn test_truncated_header_is_malformed() {
    assert_eq!(
        decode(&[]),
        Err(MalformedInput::UnexpectedEnd {
            offset: 0,
            expected: Field::ChildCount,
        })
    );
    assert_eq!(
        decode(&[1]),
        Err(MalformedInput::UnexpectedEnd {
            offset: 1,
            expected: Field::MetadataCount,
        })
    );
    // second declared child never arrives
    assert_eq!(
        decode(&[2, 0, 0, 0]),
        Err(MalformedInput::UnexpectedEnd {
            offset: 4,
            expected: Field::ChildCount,
        })
    );
}

#[test]
fn test_negative_value_is_malformed() {
    assert_eq!(
        decode(&[0, 2, 4, -1]),
        Err(MalformedInput::NegativeValue { offset: 3, value: -1 })
    );
    assert_eq!(
        decode(&[-2, 0]),
        Err(MalformedInput::NegativeValue { offset: 0, value: -2 })
    );
}

#[test]
fn test_huge_declared_counts_fail_without_allocating() {
    let result = decode(&[i64::MAX, i64::MAX, 0, 0]);
    assert!(matches!(result, Err(MalformedInput::UnexpectedEnd { .. })));
}

#[test]
fn test_error_messages() {
    let err = decode(&[0, 1]).unwrap_err();
    assert_eq!(err.to_string(), "input ended at offset 2 while reading a metadata entry");
    let err = decode(&[0, -4]).unwrap_err();
    assert_eq!(err.to_string(), "negative value -4 at offset 1");
}

fn arb_tree() -> impl Strategy<Value = Node> {
    let leaf = prop::collection::vec(0u64..100, 0..4).prop_map(Node::leaf);
    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            prop::collection::vec(inner, 0..4),
            prop::collection::vec(0u64..6, 0..4),
        )
            .prop_map(|(children, metadata)| Node::new(children, metadata))
    })
}

/// A random tree paired with a copy whose children are independently
/// shuffled at every node
fn arb_tree_with_permutation() -> impl Strategy<Value = (Node, Node)> {
    let leaf = prop::collection::vec(0u64..100, 0..4)
        .prop_map(|metadata| (Node::leaf(metadata.clone()), Node::leaf(metadata)));
    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            prop::collection::vec(inner, 0..4),
            prop::collection::vec(0u64..6, 0..4),
        )
            .prop_flat_map(|(pairs, metadata)| {
                let (originals, permuted): (Vec<Node>, Vec<Node>) = pairs.into_iter().unzip();
                (
                    Just(Node::new(originals, metadata.clone())),
                    Just(permuted).prop_shuffle(),
                    Just(metadata),
                )
            })
            .prop_map(|(original, shuffled, metadata)| (original, Node::new(shuffled, metadata)))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Decoding an encoding consumes exactly its length and rebuilds the tree
    #[test]
    fn prop_decode_consumes_declared_length(tree in arb_tree()) {
        let encoded = tree.encode();
        prop_assert_eq!(encoded.len(), tree.encoded_len());

        let (decoded, consumed) = decode(&to_signed(&encoded)).unwrap();
        prop_assert_eq!(consumed, encoded.len());
        prop_assert_eq!(&decoded, &tree);
        prop_assert_eq!(decoded.encode(), encoded);
    }

    /// Reordering the children of any node never changes the metadata sum
    #[test]
    fn prop_metadata_sum_ignores_child_order((tree, permuted) in arb_tree_with_permutation()) {
        prop_assert_eq!(tree.node_count(), permuted.node_count());
        prop_assert_eq!(metadata_sum(&permuted), metadata_sum(&tree));
    }

    /// A childless node is worth its own metadata sum
    #[test]
    fn prop_leaf_value_is_metadata_sum(metadata in prop::collection::vec(0u64..1000, 0..10)) {
        let leaf = Node::leaf(metadata);
        prop_assert_eq!(indexed_value(&leaf), metadata_sum(&leaf));
    }

    /// Chopping any suffix off a valid encoding is reported, never panics
    #[test]
    fn prop_truncation_is_malformed(tree in arb_tree(), cut in 1usize..8) {
        let encoded = to_signed(&tree.encode());
        let keep = encoded.len().saturating_sub(cut);
        let is_unexpected_end = matches!(
            decode(&encoded[..keep]),
            Err(MalformedInput::UnexpectedEnd { .. })
        );
        prop_assert!(is_unexpected_end);
    }
}
