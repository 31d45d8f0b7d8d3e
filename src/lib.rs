#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod args;
pub(crate) mod binding;
pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod container;
pub(crate) mod dependency;
pub(crate) mod errors;
pub(crate) mod inject;
pub(crate) mod instantiator;
pub(crate) mod lock;
pub(crate) mod registry;
pub(crate) mod service;

#[cfg(all(feature = "std", feature = "thread_safe"))]
pub(crate) mod global;

pub mod macros_utils;
pub mod utils;

pub use any::{Instance, TypeInfo};
pub use args::{FromArg, FromArgs};
pub use binding::{BindingKind, BindingRecord};
pub use config::Config;
pub use container::Container;
pub use dependency::{inject, Arg, Dependency};
pub use errors::{ArgsErrorKind, BindingErrorKind, InstantiateErrorKind, InstantiatorErrorKind, ResolveErrorKind, TypeMismatch};
pub use inject::{Inject, InjectCloned};
pub use instantiator::{Constructible, Factory};

#[cfg(all(feature = "std", feature = "thread_safe"))]
pub use global::global;
