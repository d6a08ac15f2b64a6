use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("symbol {:?} at index {index} is outside the alphabet", *symbol as char)]
pub struct InvalidSymbolError {
    pub symbol: u8,
    pub index: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("patterns must contain at least one symbol")]
pub struct EmptyPatternError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum InsertError {
    InvalidSymbol(InvalidSymbolError),
    EmptyPattern(EmptyPatternError),
}
