use super::code::{CodeTable, SymbolCode};
use super::coding_error::{CodingError, ConfigurationIssue, MalformedInput};
use super::SymbolWeight;
use std::borrow::Borrow;
use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Code assigned to the only symbol of a single symbol alphabet.
/// The root is a leaf in that case, so the upward walk alone yields nothing.
pub const SINGLE_SYMBOL_CODE: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn bit(self) -> char {
        match self {
            Side::Left => '0',
            Side::Right => '1',
        }
    }

    pub fn from_bit(bit: char) -> Option<Side> {
        match bit {
            '0' => Some(Side::Left),
            '1' => Some(Side::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
struct ParentLink {
    parent: usize,
    side: Side,
}

#[derive(Clone)]
enum NodeKind<S> {
    Leaf { symbol: S },
    Inner { left: usize, right: usize },
}

#[derive(Clone)]
struct Node<S> {
    weight: f64,
    index: usize,
    kind: NodeKind<S>,
    // set once when the node gets merged, never touched afterwards
    link: Option<ParentLink>,
}

/// Member of the working set during construction.
/// Ordered by weight, equal weights by arena index, so the node
/// that entered the working set first is extracted first.
#[derive(Clone, Copy)]
struct QueueEntry {
    weight: f64,
    index: usize,
}

pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
    root_index: usize,
    leaf_indices: HashMap<S, usize>,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl<S> From<&Node<S>> for QueueEntry {
    fn from(node: &Node<S>) -> Self {
        Self {
            weight: node.weight,
            index: node.index,
        }
    }
}

impl<S> HuffmanTree<S>
where
    S: Eq + Hash + Clone + Debug,
{
    pub fn new(alphabet: &[SymbolWeight<S>]) -> Result<HuffmanTree<S>, CodingError> {
        Self::validate_alphabet(alphabet)?;
        log::debug!("Building huffman tree for {} symbols", alphabet.len());

        let mut nodes: Vec<Node<S>> = alphabet
            .iter()
            .enumerate()
            .map(|(index, sw)| Node {
                weight: sw.weight,
                index,
                kind: NodeKind::Leaf {
                    symbol: sw.symbol.clone(),
                },
                link: None,
            })
            .collect();
        let leaf_indices: HashMap<S, usize> = alphabet
            .iter()
            .enumerate()
            .map(|(index, sw)| (sw.symbol.clone(), index))
            .collect();

        let mut heap: BinaryHeap<Reverse<QueueEntry>> =
            nodes.iter().map(QueueEntry::from).map(Reverse).collect();
        let root_index = loop {
            let Reverse(first) = heap.pop().ok_or(ConfigurationIssue::EmptyAlphabet)?;
            let Some(Reverse(second)) = heap.pop() else {
                break first.index;
            };
            // first extracted goes right, second left
            let index = Self::merge(&mut nodes, second.index, first.index);
            heap.push(Reverse(QueueEntry::from(&nodes[index])));
        };

        let tree = HuffmanTree {
            nodes,
            root_index,
            leaf_indices,
        };
        log::debug!(
            "Huffman tree built with {} nodes and root weight {}",
            tree.nodes.len(),
            tree.root_weight()
        );
        Ok(tree)
    }

    fn validate_alphabet(alphabet: &[SymbolWeight<S>]) -> Result<(), ConfigurationIssue> {
        if alphabet.is_empty() {
            return Err(ConfigurationIssue::EmptyAlphabet);
        }
        let mut seen = HashSet::with_capacity(alphabet.len());
        for sw in alphabet {
            if !sw.weight.is_finite() || sw.weight < 0.0 {
                return Err(ConfigurationIssue::InvalidWeight(
                    format!("{:?}", sw.symbol),
                    sw.weight,
                ));
            }
            if !seen.insert(&sw.symbol) {
                return Err(ConfigurationIssue::DuplicateSymbol(format!(
                    "{:?}",
                    sw.symbol
                )));
            }
        }
        Ok(())
    }

    fn merge(nodes: &mut Vec<Node<S>>, left: usize, right: usize) -> usize {
        let index = nodes.len();
        let weight = nodes[left].weight + nodes[right].weight;
        nodes[left].link = Some(ParentLink {
            parent: index,
            side: Side::Left,
        });
        nodes[right].link = Some(ParentLink {
            parent: index,
            side: Side::Right,
        });
        log::trace!("Merging node {} and node {} into node {}", left, right, index);
        nodes.push(Node {
            weight,
            index,
            kind: NodeKind::Inner { left, right },
            link: None,
        });
        index
    }

    pub fn encode<I>(&self, symbols: I) -> Result<String, CodingError>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut bits = String::new();
        for symbol in symbols {
            let leaf_index = self.leaf_index_of(symbol.borrow())?;
            bits.push_str(&self.code_of_leaf(leaf_index));
        }
        Ok(bits)
    }

    /// Decodes a string of '0' and '1' characters.
    ///
    /// Either the whole sequence decodes or an error is returned,
    /// symbols decoded before the error are dropped.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>, CodingError> {
        let mut symbols = Vec::new();
        let mut current_index = self.root_index;
        let mut consumed_bits = 0;
        for (position, bit) in bits.chars().enumerate() {
            let side =
                Side::from_bit(bit).ok_or(MalformedInput::InvalidBit { bit, position })?;
            current_index = self.descend(current_index, side, position)?;
            if let NodeKind::Leaf { symbol } = &self.nodes[current_index].kind {
                symbols.push(symbol.clone());
                current_index = self.root_index;
            }
            consumed_bits += 1;
        }
        if current_index != self.root_index {
            return Err(MalformedInput::IncompleteCode { consumed_bits }.into());
        }
        Ok(symbols)
    }

    fn descend(
        &self,
        current_index: usize,
        side: Side,
        position: usize,
    ) -> Result<usize, CodingError> {
        match (&self.nodes[current_index].kind, side) {
            (NodeKind::Inner { left, .. }, Side::Left) => Ok(*left),
            (NodeKind::Inner { right, .. }, Side::Right) => Ok(*right),
            // only reachable when the root itself is the leaf
            (NodeKind::Leaf { .. }, Side::Left) => Ok(current_index),
            (NodeKind::Leaf { .. }, Side::Right) => {
                Err(MalformedInput::UnassignedCode { position }.into())
            }
        }
    }

    pub fn code_of(&self, symbol: &S) -> Result<String, CodingError> {
        let leaf_index = self.leaf_index_of(symbol)?;
        Ok(self.code_of_leaf(leaf_index))
    }

    fn leaf_index_of(&self, symbol: &S) -> Result<usize, CodingError> {
        self.leaf_indices
            .get(symbol)
            .copied()
            .ok_or_else(|| CodingError::UnknownSymbolError(format!("{:?}", symbol)))
    }

    // walks from the leaf up to the root and reverses the collected sides
    fn code_of_leaf(&self, leaf_index: usize) -> String {
        if leaf_index == self.root_index {
            return SINGLE_SYMBOL_CODE.to_string();
        }
        let mut reversed_bits = Vec::new();
        let mut current = &self.nodes[leaf_index];
        while let Some(link) = current.link {
            reversed_bits.push(link.side.bit());
            current = &self.nodes[link.parent];
        }
        reversed_bits.iter().rev().collect()
    }

    /// Read-only traversal from the root collecting the code of every leaf.
    pub fn code_table(&self) -> CodeTable<S> {
        let mut entries = Vec::with_capacity(self.symbol_count());
        if self.is_leaf(self.root_index) {
            self.fill_table(&mut entries, self.root_index, SINGLE_SYMBOL_CODE.to_string());
        } else {
            self.fill_table(&mut entries, self.root_index, String::new());
        }
        CodeTable::new(entries)
    }

    fn fill_table(
        &self,
        table: &mut Vec<SymbolCode<S>>,
        node_index: usize,
        current_pattern: String,
    ) {
        let node = &self.nodes[node_index];
        match &node.kind {
            NodeKind::Leaf { symbol } => table.push(SymbolCode {
                symbol: symbol.clone(),
                weight: node.weight,
                code: current_pattern,
            }),
            NodeKind::Inner { left, right } => {
                let left_pattern = format!("{}{}", current_pattern, Side::Left.bit());
                let right_pattern = format!("{}{}", current_pattern, Side::Right.bit());
                self.fill_table(table, *left, left_pattern);
                self.fill_table(table, *right, right_pattern);
            }
        }
    }

    fn is_leaf(&self, node_index: usize) -> bool {
        matches!(self.nodes[node_index].kind, NodeKind::Leaf { .. })
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.leaf_indices.contains_key(symbol)
    }

    pub fn symbol_count(&self) -> usize {
        self.leaf_indices.len()
    }

    pub fn root_weight(&self) -> f64 {
        self.nodes[self.root_index].weight
    }
}

impl HuffmanTree<char> {
    pub fn encode_text(&self, text: &str) -> Result<String, CodingError> {
        self.encode(text.chars())
    }

    pub fn decode_text(&self, bits: &str) -> Result<String, CodingError> {
        Ok(self.decode(bits)?.into_iter().collect())
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

// Node & Tree visualization
impl<S: Debug> Node<S> {
    fn render_lines(&self, tree: &HuffmanTree<S>) -> Vec<String> {
        match &self.kind {
            NodeKind::Leaf { symbol } => vec![format!("({:?}:{})", symbol, self.weight)],
            NodeKind::Inner { left, right } => {
                let left_box = tree.nodes[*left].render_lines(tree);
                let right_box = tree.nodes[*right].render_lines(tree);
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = centre_of(&left_box[0]);
                let right_pos = centre_of(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                for i in 0..left_box.len().max(right_box.len()) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

fn centre_of(line: &str) -> usize {
    let leading_spaces = line.chars().position(|c| c != ' ').unwrap_or(0);
    (leading_spaces * 2 + line.trim().chars().count()) / 2
}

impl<S: Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.nodes[self.root_index].render_lines(self) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
