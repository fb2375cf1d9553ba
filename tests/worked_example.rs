use huffman_coder::alphabet::alphabet_from_text;
use huffman_coder::huffman::{
    CodingError, ConfigurationIssue, HuffmanTree, MalformedInput, SymbolWeight,
};

fn create_worked_example_tree() -> HuffmanTree<char> {
    let alphabet = [('A', 0.60), ('B', 0.25), ('C', 0.10), ('D', 0.05)].map(SymbolWeight::from);
    HuffmanTree::new(&alphabet).expect("Construction of worked example failed")
}

#[test]
fn test_encode_single_letters() {
    let tree = create_worked_example_tree();
    assert_eq!(tree.encode_text("A").unwrap(), "0");
    assert_eq!(tree.encode_text("B").unwrap(), "10");
    assert_eq!(tree.encode_text("C").unwrap(), "110");
    assert_eq!(tree.encode_text("D").unwrap(), "111");
}

#[test]
fn test_encode_strings() {
    let tree = create_worked_example_tree();
    assert_eq!(tree.encode_text("ABBA").unwrap(), "010100");
    assert_eq!(tree.encode_text("ACDC").unwrap(), "0110111110");
}

#[test]
fn test_decode_single_letters() {
    let tree = create_worked_example_tree();
    assert_eq!(tree.decode_text("0").unwrap(), "A");
    assert_eq!(tree.decode_text("10").unwrap(), "B");
    assert_eq!(tree.decode_text("110").unwrap(), "C");
    assert_eq!(tree.decode_text("111").unwrap(), "D");
}

#[test]
fn test_decode_strings() {
    let tree = create_worked_example_tree();
    assert_eq!(tree.decode_text("010100").unwrap(), "ABBA");
    assert_eq!(tree.decode_text("0110111110").unwrap(), "ACDC");
}

#[test]
fn test_empty_strings() {
    let tree = create_worked_example_tree();
    assert!(alphabet_from_text("").is_empty());
    assert_eq!(tree.encode_text("").unwrap(), "");
    assert_eq!(tree.decode_text("").unwrap(), "");
}

#[test]
fn test_decode_invalid_bit_sequences() {
    let tree = create_worked_example_tree();
    for bits in ["1", "011"] {
        let result = tree.decode_text(bits);
        assert!(
            matches!(
                result,
                Err(CodingError::MalformedInputError(
                    MalformedInput::IncompleteCode { .. }
                ))
            ),
            "Decoding {} must fail with malformed input",
            bits
        );
    }
}

#[test]
fn test_encode_letter_not_in_alphabet() {
    let tree = create_worked_example_tree();
    assert!(matches!(
        tree.encode_text("E"),
        Err(CodingError::UnknownSymbolError(_))
    ));
}

#[test]
fn test_empty_alphabet_fails_fast() {
    let result = HuffmanTree::new(&alphabet_from_text(""));
    assert!(matches!(
        result,
        Err(CodingError::ConfigurationError(ConfigurationIssue::EmptyAlphabet))
    ));
}

#[test]
fn test_single_symbol_alphabet_from_text() {
    let tree = HuffmanTree::new(&alphabet_from_text("zzzz")).unwrap();
    let bits = tree.encode_text("zzzz").unwrap();
    assert_eq!(bits, "0000");
    assert_eq!(tree.decode_text(&bits).unwrap(), "zzzz");
}

#[test]
fn test_text_with_multibyte_characters() {
    let text = "Grüße aus München, 5€ für Käse!";
    let tree = HuffmanTree::new(&alphabet_from_text(text)).unwrap();
    let bits = tree.encode_text(text).unwrap();
    assert_eq!(tree.decode_text(&bits).unwrap(), text);
    assert!(tree.code_table().is_prefix_free());
}

#[test]
fn test_tree_is_shared_between_threads() {
    let text = "she sells sea shells by the sea shore";
    let tree = std::sync::Arc::new(HuffmanTree::new(&alphabet_from_text(text)).unwrap());
    let handles: Vec<_> = text
        .split(' ')
        .map(|word| {
            let tree = std::sync::Arc::clone(&tree);
            let word = word.to_string();
            std::thread::spawn(move || {
                let bits = tree.encode_text(&word).unwrap();
                tree.decode_text(&bits).unwrap() == word
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
