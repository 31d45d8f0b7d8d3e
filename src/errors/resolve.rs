use alloc::{string::String, vec::Vec};
use core::fmt::{self, Formatter};

use super::{args::TypeMismatch, instantiate::InstantiateErrorKind, instantiator::InstantiatorErrorKind, ArgsErrorKind};

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("Binding `{name}` not found in container")]
    NoBinding { name: String },
    #[error("Cyclic dependency detected: {}", DisplayPath(path))]
    CyclicDependency { path: Vec<String> },
    #[error(transparent)]
    IncorrectType(#[from] TypeMismatch),
    #[error(transparent)]
    Instantiator(InstantiatorErrorKind<ArgsErrorKind, InstantiateErrorKind>),
}

struct DisplayPath<'a>(&'a [String]);

impl fmt::Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut names = self.0.iter();
        if let Some(name) = names.next() {
            f.write_str(name)?;
        }
        for name in names {
            write!(f, " -> {name}")?;
        }
        Ok(())
    }
}
