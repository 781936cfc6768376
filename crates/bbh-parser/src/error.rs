/// Errors raised when changing the tag set of a [Registry](crate::Registry).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Tag name can never appear in a tokenized tag.
    ///
    /// Names must be one or more ascii letters.
    ///
    /// * 0: the rejected name.
    #[error("invalid tag name {0:?}: expected one or more ascii letters")]
    InvalidTagName(String),
}
