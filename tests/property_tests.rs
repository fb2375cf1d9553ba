use std::cmp::Reverse;
use std::collections::BinaryHeap;

use huffman_coder::alphabet::{alphabet_from_text, build_alphabet};
use huffman_coder::huffman::{HuffmanTree, SymbolWeight};
use proptest::prelude::*;
use proptest::sample::Index;

fn create_alphabet(weights: &[u32]) -> Vec<SymbolWeight<usize>> {
    weights
        .iter()
        .enumerate()
        .map(|(symbol, &weight)| SymbolWeight::new(symbol, weight as f64))
        .collect()
}

// sum of all merged weights, which equals the weighted path length of any
// optimal prefix code regardless of tie-breaks
fn optimal_cost(weights: &[u32]) -> u64 {
    let mut heap: BinaryHeap<Reverse<u64>> = weights.iter().map(|&w| Reverse(w as u64)).collect();
    let mut cost = 0;
    while let (Some(Reverse(a)), Some(Reverse(b))) = (heap.pop(), heap.pop()) {
        cost += a + b;
        heap.push(Reverse(a + b));
    }
    cost
}

proptest! {
    #[test]
    fn test_codes_are_prefix_free_and_complete(
        weights in prop::collection::vec(0..1000u32, 2..40),
    ) {
        let tree = HuffmanTree::new(&create_alphabet(&weights)).unwrap();
        let table = tree.code_table();
        prop_assert_eq!(table.len(), weights.len());
        prop_assert!(table.is_prefix_free());
        prop_assert!((table.kraft_sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip(
        weights in prop::collection::vec(1..1000u32, 1..40),
        picks in prop::collection::vec(any::<Index>(), 0..200),
    ) {
        let tree = HuffmanTree::new(&create_alphabet(&weights)).unwrap();
        let sequence: Vec<usize> = picks.iter().map(|i| i.index(weights.len())).collect();
        let bits = tree.encode(sequence.iter()).unwrap();
        prop_assert_eq!(tree.decode(&bits).unwrap(), sequence);
    }

    #[test]
    fn test_weighted_path_length_is_optimal(
        weights in prop::collection::vec(0..1000u32, 2..40),
    ) {
        let tree = HuffmanTree::new(&create_alphabet(&weights)).unwrap();
        let weighted_path_length = tree.code_table().weighted_path_length();
        prop_assert_eq!(weighted_path_length, optimal_cost(&weights) as f64);
    }

    #[test]
    fn test_text_round_trip(text in "\\PC{1,200}") {
        let tree = HuffmanTree::new(&alphabet_from_text(&text)).unwrap();
        let bits = tree.encode_text(&text).unwrap();
        prop_assert_eq!(tree.decode_text(&bits).unwrap(), text);
    }

    #[test]
    fn test_alphabet_weights_sum_to_length(symbols in prop::collection::vec(0..20u8, 0..300)) {
        let alphabet = build_alphabet(symbols.iter().copied());
        let total: f64 = alphabet.iter().map(|sw| sw.weight).sum();
        prop_assert_eq!(total, symbols.len() as f64);
        let mut distinct = symbols.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(alphabet.len(), distinct.len());
    }

    #[test]
    fn test_truncated_code_is_rejected(
        weights in prop::collection::vec(1..1000u32, 2..40),
        pick in any::<Index>(),
    ) {
        let tree = HuffmanTree::new(&create_alphabet(&weights)).unwrap();
        let symbol = pick.index(weights.len());
        let code = tree.code_of(&symbol).unwrap();
        prop_assume!(code.len() > 1);
        prop_assert!(tree.decode(&code[..code.len() - 1]).is_err());
    }
}
