use alloc::string::String;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BindingErrorKind {
    #[error("Invalid binding kind: `{kind}`. Expected one of: `value`, `factory`, `constructor`")]
    InvalidKind { kind: String },
}
