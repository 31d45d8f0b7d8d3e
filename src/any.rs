use core::{
    any::{type_name, TypeId},
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
};

use crate::{
    errors::TypeMismatch,
    utils::thread_safety::{RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl PartialOrd for TypeInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    #[inline]
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit_once("::").map_or(self.name, |(_, name)| name)
    }
}

/// Type-erased shared value.
///
/// Literal arguments, bound values and everything produced by factories and constructors
/// are stored as instances. Cloning an instance clones the handle, not the value.
#[derive(Clone)]
pub struct Instance {
    value: RcAnyThreadSafety,
    type_info: TypeInfo,
}

impl Instance {
    #[inline]
    #[must_use]
    pub fn new<T: SendSafety + SyncSafety + 'static>(value: T) -> Self {
        Self::from_rc(RcThreadSafety::new(value))
    }

    #[inline]
    #[must_use]
    pub fn from_rc<T: SendSafety + SyncSafety + 'static>(value: RcThreadSafety<T>) -> Self {
        Self {
            value,
            type_info: TypeInfo::of::<T>(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_info.id == TypeId::of::<T>()
    }

    /// Returns a shared handle to the value if it is a `T`.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] with both type names if the value is of another type.
    pub fn downcast<T: SendSafety + SyncSafety + 'static>(&self) -> Result<RcThreadSafety<T>, TypeMismatch> {
        self.value.clone().downcast::<T>().map_err(|_| TypeMismatch {
            expected: TypeInfo::of::<T>(),
            actual: self.type_info,
        })
    }

    /// Whether both instances point to the same allocation.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        RcThreadSafety::ptr_eq(&self.value, &other.value)
    }
}

impl Debug for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance").field("type", &self.type_info.name).finish_non_exhaustive()
    }
}
