/// An encoding failure, due to a violated caller precondition.
///
/// Every operation here is pure in-memory computation, so these are the only
/// ways to fail; there is nothing transient to retry.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The frequency table was empty. No tree can be formed over zero
    /// symbols; the caller must supply non-empty input.
    #[error("cannot build a Huffman tree from an empty frequency table")]
    EmptyInput,

    /// The text being encoded contains a symbol with no code table entry.
    ///
    /// This means the table was derived from a different symbol set than the
    /// text being encoded.
    #[error("symbol {0:?} has no code table entry")]
    UnknownSymbol(char),
}
