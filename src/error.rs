/// An error from the `rechunk` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RechunkError {
  /// The first eight bytes of the input were not the PNG signature.
  ///
  /// The input is not PNG data, and nothing more can be said about it.
  Signature,

  /// A chunk record ran past the end of the input.
  ///
  /// Either a length prefix was itself cut short, or a prefix declared more
  /// bytes than the buffer still holds. The input is truncated or corrupt.
  TruncatedChunk,

  /// There was no chunk to anchor an insertion against.
  ///
  /// Placing a chunk into a sequence needs either an existing chunk of the
  /// same type to replace, or a chunk of the anchor type to insert in front
  /// of. When neither is present the sequence is left unmodified.
  MissingTargetChunk,

  /// An output sink was too small for the serialized image.
  ///
  /// Nothing was written. A partial image must never be mistaken for a
  /// valid one, so the write is refused outright instead of truncated.
  IncompleteWrite,
}

/// Alias for a `Result` with [`RechunkError`] as the error type.
pub type RechunkResult<T> = Result<T, RechunkError>;
