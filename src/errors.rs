mod args;
mod binding;
mod instantiate;
mod instantiator;
mod resolve;

pub use args::{ArgsErrorKind, TypeMismatch};
pub use binding::BindingErrorKind;
pub use instantiate::InstantiateErrorKind;
pub use instantiator::InstantiatorErrorKind;
pub use resolve::ResolveErrorKind;
