use std::collections::HashMap;

use bitvec::{slice::BitSlice, vec::BitVec};

use crate::{
    errors::EncodeError,
    tree::{HuffmanTree, Node},
};

/// A single symbol's codeword, first-descended bit first.
pub type Code = BitVec;

/// Symbol-to-codeword mapping derived from one tree.
///
/// The codewords are leaf paths in a strict binary tree, so no codeword is a
/// prefix of another. Iteration order doesn't matter here; lookups do.
pub type CodeTable = HashMap<char, Code>;

/// Walk `tree` depth-first and record each leaf's path as its code: a `0`
/// bit for a left descent, `1` for a right descent.
///
/// A root that is itself a leaf (single-symbol alphabet) has an empty path,
/// which would make the symbol invisible in the output; it gets the fixed
/// one-bit code `0` instead.
pub fn assign_codes(tree: &HuffmanTree) -> CodeTable {
    let mut codes = CodeTable::new();
    match tree.root() {
        Node::Leaf { symbol, .. } => {
            let mut bit = Code::new();
            bit.push(false);
            codes.insert(*symbol, bit);
        }
        root => record_leaf_paths(root, Code::new(), &mut codes),
    }
    codes
}

fn record_leaf_paths(node: &Node, path: Code, codes: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, path);
        }
        Node::Internal { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push(false);
            record_leaf_paths(left, left_path, codes);

            let mut right_path = path;
            right_path.push(true);
            record_leaf_paths(right, right_path, codes);
        }
    }
}

/// Encode `text` by concatenating each symbol's codeword, in input order.
///
/// Fails if `text` contains a symbol absent from `codes`, which can only
/// happen when the table was derived from a different text.
pub fn encode(text: &str, codes: &CodeTable) -> Result<BitVec, EncodeError> {
    let mut out = BitVec::new();
    for symbol in text.chars() {
        let code = codes
            .get(&symbol)
            .ok_or(EncodeError::UnknownSymbol(symbol))?;
        out.extend_from_bitslice(code);
    }
    Ok(out)
}

/// Render `bits` as the '0'/'1' string a caller would print.
pub fn display_bits(bits: &BitSlice) -> String {
    bits.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
}
