/// Error returned by factories and constructors.
///
/// The container never inspects or wraps it, it reaches the caller of
/// [`crate::Container::get`] as is.
#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
