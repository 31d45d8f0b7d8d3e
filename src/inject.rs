use crate::{
    any::Instance,
    args::FromArg,
    errors::TypeMismatch,
    utils::thread_safety::{RcThreadSafety, SendSafety, SyncSafety},
};

/// Shared handle to an argument value.
///
/// Singleton dependencies injected this way are the same allocation the container caches.
pub struct Inject<T>(pub RcThreadSafety<T>);

impl<T: SendSafety + SyncSafety + 'static> FromArg for Inject<T> {
    #[inline]
    fn from_arg(instance: Instance) -> Result<Self, TypeMismatch> {
        instance.downcast().map(Self)
    }
}

/// Owned clone of an argument value.
pub struct InjectCloned<T>(pub T);

impl<T: Clone + SendSafety + SyncSafety + 'static> FromArg for InjectCloned<T> {
    #[inline]
    fn from_arg(instance: Instance) -> Result<Self, TypeMismatch> {
        instance.downcast::<T>().map(|value| Self((*value).clone()))
    }
}

impl FromArg for Instance {
    #[inline]
    fn from_arg(instance: Instance) -> Result<Self, TypeMismatch> {
        Ok(instance)
    }
}
