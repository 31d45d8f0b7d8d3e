use alloc::string::String;
use core::fmt::{self, Debug, Formatter};

use crate::{
    any::Instance,
    utils::thread_safety::{SendSafety, SyncSafety},
};

/// Reference to another binding inside an argument list.
///
/// At resolution time the container replaces it with the resolved value of the binding
/// called [`Self::name`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dependency {
    name: String,
}

impl Dependency {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Marks the binding `name` for injection.
///
/// # Examples
/// ```rust
/// use bindi::{inject, Arg, Container, InjectCloned};
///
/// let container = Container::new();
/// container
///     .bind_value("n", 5u32)
///     .bind_factory("power", |InjectCloned(x): InjectCloned<u64>, InjectCloned(n): InjectCloned<u32>| Ok(x.pow(n)), vec![Arg::literal(2u64), inject("n").into()]);
///
/// assert_eq!(*container.get::<u64>("power").unwrap(), 32);
/// ```
#[inline]
#[must_use]
pub fn inject(name: impl Into<String>) -> Dependency {
    Dependency::new(name)
}

/// One element of a binding's argument list.
#[derive(Clone)]
pub enum Arg {
    /// Passed to the factory or constructor unchanged
    Literal(Instance),
    /// Substituted with the resolved value of another binding
    Dependency(Dependency),
}

impl Arg {
    #[inline]
    #[must_use]
    pub fn literal<T: SendSafety + SyncSafety + 'static>(value: T) -> Self {
        Self::Literal(Instance::new(value))
    }

    #[inline]
    #[must_use]
    pub fn dependency(name: impl Into<String>) -> Self {
        Self::Dependency(Dependency::new(name))
    }
}

impl From<Dependency> for Arg {
    #[inline]
    fn from(dependency: Dependency) -> Self {
        Self::Dependency(dependency)
    }
}

impl From<Instance> for Arg {
    #[inline]
    fn from(instance: Instance) -> Self {
        Self::Literal(instance)
    }
}

impl Debug for Arg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Literal(instance) => f.debug_tuple("Literal").field(&instance.type_info().name).finish(),
            Arg::Dependency(dependency) => f.debug_tuple("Dependency").field(&dependency.name).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{inject, Arg};
    use crate::args;

    use alloc::string::String;

    #[test]
    fn test_args_macro() {
        let args = args![2u64, @"n", String::from("text"), @String::from("other"),];

        assert_eq!(args.len(), 4);
        assert!(matches!(&args[0], Arg::Literal(instance) if instance.is::<u64>()));
        assert!(matches!(&args[1], Arg::Dependency(dependency) if dependency.name() == "n"));
        assert!(matches!(&args[2], Arg::Literal(instance) if instance.is::<String>()));
        assert!(matches!(&args[3], Arg::Dependency(dependency) if dependency.name() == "other"));

        assert!(args![].is_empty());
    }

    #[test]
    fn test_inject_into_arg() {
        let arg: Arg = inject("name").into();

        assert!(matches!(arg, Arg::Dependency(dependency) if dependency == inject(String::from("name"))));
    }
}
