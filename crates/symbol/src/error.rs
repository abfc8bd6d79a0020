use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Character {character:?} at position {position} cannot be encoded in a Data Matrix symbol")]
    UnsupportedCharacter { character: char, position: usize },

    #[error("Data does not fit in any Data Matrix symbol: {0}")]
    Capacity(String),
}
