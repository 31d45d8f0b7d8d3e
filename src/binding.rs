use alloc::{string::String, vec::Vec};
use core::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

use crate::{any::Instance, dependency::Arg, errors::BindingErrorKind, instantiator::BoxedInstantiator, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BindingKind {
    Value,
    Factory,
    Constructor,
}

impl BindingKind {
    pub const ALL: [BindingKind; 3] = [BindingKind::Value, BindingKind::Factory, BindingKind::Constructor];

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BindingKind::Value => "value",
            BindingKind::Factory => "factory",
            BindingKind::Constructor => "constructor",
        }
    }
}

impl Display for BindingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BindingKind {
    type Err = BindingErrorKind;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        BindingKind::ALL
            .into_iter()
            .find(|allowed| allowed.as_str() == kind)
            .ok_or_else(|| BindingErrorKind::InvalidKind { kind: String::from(kind) })
    }
}

pub(crate) enum Target {
    Value(Instance),
    Factory(BoxedInstantiator),
    Constructor(BoxedInstantiator),
}

impl Target {
    #[inline]
    pub(crate) const fn kind(&self) -> BindingKind {
        match self {
            Target::Value(_) => BindingKind::Value,
            Target::Factory(_) => BindingKind::Factory,
            Target::Constructor(_) => BindingKind::Constructor,
        }
    }
}

/// Registered recipe for a named value.
///
/// Records are immutable, binding the same name again replaces the whole record.
pub struct BindingRecord {
    name: String,
    target: Target,
    args: Vec<Arg>,
    config: Config,
}

impl BindingRecord {
    #[inline]
    #[must_use]
    pub(crate) fn new(name: String, target: Target, args: Vec<Arg>, config: Config) -> Self {
        Self {
            name,
            target,
            args,
            config,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> BindingKind {
        self.target.kind()
    }

    #[inline]
    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn is_singleton(&self) -> bool {
        self.config.cache_provides
    }

    #[inline]
    pub(crate) const fn target(&self) -> &Target {
        &self.target
    }
}

impl Debug for BindingRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingRecord")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("args", &self.args)
            .field("is_singleton", &self.is_singleton())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{BindingKind, BindingRecord, Target};
    use crate::{any::Instance, args, errors::BindingErrorKind, instantiator::boxed_factory, Config, InstantiateErrorKind};

    use alloc::string::{String, ToString as _};

    #[test]
    fn test_kind_from_str() {
        for kind in BindingKind::ALL {
            assert_eq!(kind.as_str().parse::<BindingKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_invalid_kind() {
        let err = "singleton".parse::<BindingKind>().unwrap_err();

        assert_eq!(
            err,
            BindingErrorKind::InvalidKind {
                kind: String::from("singleton")
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid binding kind: `singleton`. Expected one of: `value`, `factory`, `constructor`"
        );
        assert!("Value".parse::<BindingKind>().is_err());
        assert!("".parse::<BindingKind>().is_err());
    }

    #[test]
    fn test_record_kind_follows_target() {
        let value = BindingRecord::new(String::from("value"), Target::Value(Instance::new(1u8)), args![], Config::default());
        let factory = BindingRecord::new(
            String::from("factory"),
            Target::Factory(boxed_factory(|| Ok::<_, InstantiateErrorKind>(1u8))),
            args![@"value"],
            Config::transient(),
        );

        assert_eq!(value.kind(), BindingKind::Value);
        assert!(value.is_singleton());
        assert_eq!(factory.kind(), BindingKind::Factory);
        assert_eq!(factory.name(), "factory");
        assert_eq!(factory.args().len(), 1);
        assert!(!factory.is_singleton());
    }
}
