use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("an alphabet must contain at least one symbol")]
pub struct EmptyAlphabetError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("alphabet of {size} symbols starting at {first:#04x} extends past the byte range")]
pub struct AlphabetOverflowError {
    pub first: u8,
    pub size: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum AlphabetError {
    EmptyAlphabet(EmptyAlphabetError),
    AlphabetOverflow(AlphabetOverflowError),
}
