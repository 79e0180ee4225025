//! Static Huffman encoding.
//!
//! Counts per-symbol frequencies over an in-memory text, builds the optimal
//! prefix-code tree by greedy merging, derives a code table, and maps the
//! text through it:
//!
//! ```rust
//! let bits = huffcode::encode_with_huffman("abracadabra")?;
//! assert_eq!(bits.len(), 23);
//! # Ok::<(), huffcode::EncodeError>(())
//! ```
//!
//! Decoding and codebook persistence are out of scope; the returned bits and
//! the [`CodeTable`] are everything a caller would need to add them.

mod code;
mod errors;
mod freq;
mod tree;

pub use code::{assign_codes, display_bits, encode, Code, CodeTable};
pub use errors::EncodeError;
pub use freq::{count_frequencies, FrequencyTable};
pub use tree::{HuffmanTree, Node};

use bitvec::vec::BitVec;

/// Huffman-encode `text`: count frequencies, build the tree, derive the code
/// table, and concatenate each symbol's code in input order.
///
/// The text is encoded as-is; normalization such as case-folding or
/// whitespace stripping is up to the caller. Fails with
/// [`EncodeError::EmptyInput`] for an empty text.
pub fn encode_with_huffman(text: &str) -> Result<BitVec, EncodeError> {
    let table = count_frequencies(text);
    let tree = HuffmanTree::build(&table)?;
    let codes = assign_codes(&tree);
    encode(text, &codes)
}
