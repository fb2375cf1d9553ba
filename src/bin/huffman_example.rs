use huffman_coder::huffman::{CodingError, HuffmanTree, SymbolWeight};

fn main() -> Result<(), CodingError> {
    // symbol-weight pairs
    let alphabet = [('A', 0.60), ('B', 0.25), ('C', 0.10), ('D', 0.05)].map(SymbolWeight::from);

    let tree = HuffmanTree::new(&alphabet)?;
    println!("huffman tree\n{}", tree);
    println!("code table\n{}", tree.code_table());

    for text in ["ABBA", "ACDC"] {
        let encoded = tree.encode_text(text)?;
        let decoded = tree.decode_text(&encoded)?;
        println!("{} -> {} -> {}", text, encoded, decoded);
    }

    match tree.decode_text("011") {
        Ok(text) => println!("unexpectedly decoded {}", text),
        Err(e) => println!("decoding 011 failed: {}", e),
    }
    Ok(())
}
