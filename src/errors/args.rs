use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Incorrect type. Actual: {actual}, expected: {expected}")]
pub struct TypeMismatch {
    pub expected: TypeInfo,
    pub actual: TypeInfo,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ArgsErrorKind {
    #[error("Incorrect number of arguments. Actual: {actual}, expected: {expected}")]
    Count { expected: usize, actual: usize },
    #[error("Incorrect argument at position {position}: {source}")]
    IncorrectType {
        position: usize,
        #[source]
        source: TypeMismatch,
    },
}
