use alloc::vec::Vec;
use parking_lot::Mutex;
use tracing::debug;

use super::{
    any::Instance,
    args::FromArgs,
    errors::{ArgsErrorKind, InstantiateErrorKind, InstantiatorErrorKind},
    service::{service_fn, BoxService},
    utils::thread_safety::{SendSafety, SyncSafety},
};

/// Function that builds a value from its resolved arguments.
///
/// Implemented for closures `FnMut(A1, .., An) -> Result<R, E>` where every `Ai` is a
/// [`crate::FromArg`] extractor. The container keeps a single factory per binding and calls it
/// in place, so state the closure mutates carries over to the next call.
pub trait Factory<Args>: 'static
where
    Args: FromArgs,
{
    type Provides: 'static;
    type Error: Into<InstantiateErrorKind>;

    fn call(&mut self, args: Args) -> Result<Self::Provides, Self::Error>;
}

/// Type that knows how to construct itself from its resolved arguments.
///
/// # Examples
/// ```rust
/// use bindi::{args, Constructible, Container, InjectCloned, InstantiateErrorKind};
///
/// struct User {
///     name: String,
///     age: u8,
/// }
///
/// impl Constructible for User {
///     type Args = (InjectCloned<String>, InjectCloned<u8>);
///
///     fn construct((InjectCloned(name), InjectCloned(age)): Self::Args) -> Result<Self, InstantiateErrorKind> {
///         Ok(Self { name, age })
///     }
/// }
///
/// let container = Container::new();
/// container.bind_constructor::<User>("user", args![String::from("Alice"), 30u8]);
///
/// let user = container.get::<User>("user").unwrap();
/// assert_eq!(user.name, "Alice");
/// assert_eq!(user.age, 30);
/// ```
pub trait Constructible: Sized + 'static {
    type Args: FromArgs;

    #[allow(clippy::missing_errors_doc)]
    fn construct(args: Self::Args) -> Result<Self, InstantiateErrorKind>;
}

pub(crate) type InstantiatorError = InstantiatorErrorKind<ArgsErrorKind, InstantiateErrorKind>;

pub(crate) type BoxedInstantiator = BoxService<Vec<Instance>, Instance, InstantiatorError>;

#[must_use]
pub(crate) fn boxed_factory<F, Args>(factory: F) -> BoxedInstantiator
where
    F: Factory<Args> + SendSafety + SyncSafety,
    F::Provides: SendSafety + SyncSafety,
    Args: FromArgs,
{
    let factory = Mutex::new(factory);

    BoxService::new(service_fn(move |args: Vec<Instance>| -> Result<Instance, InstantiatorError> {
        let args = match Args::from_args(args) {
            Ok(args) => args,
            Err(err) => return Err(InstantiatorErrorKind::Args(err)),
        };
        let provides = match factory.lock().call(args) {
            Ok(provides) => provides,
            Err(err) => return Err(InstantiatorErrorKind::Factory(err.into())),
        };

        debug!("Factory called");

        Ok(Instance::new(provides))
    }))
}

#[must_use]
pub(crate) fn boxed_constructor<T>() -> BoxedInstantiator
where
    T: Constructible + SendSafety + SyncSafety,
{
    BoxService::new(service_fn(|args: Vec<Instance>| -> Result<Instance, InstantiatorError> {
        let args = match T::Args::from_args(args) {
            Ok(args) => args,
            Err(err) => return Err(InstantiatorErrorKind::Args(err)),
        };
        let constructed = match T::construct(args) {
            Ok(constructed) => constructed,
            Err(err) => return Err(InstantiatorErrorKind::Factory(err)),
        };

        debug!("Constructor called");

        Ok(Instance::new(constructed))
    }))
}

macro_rules! impl_factory {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<F, Response, Err, $($ty,)*> Factory<($($ty,)*)> for F
        where
            F: FnMut($($ty,)*) -> Result<Response, Err> + 'static,
            Response: 'static,
            Err: Into<InstantiateErrorKind>,
            $( $ty: crate::args::FromArg, )*
        {
            type Provides = Response;
            type Error = Err;

            #[inline]
            fn call(&mut self, ($($ty,)*): ($($ty,)*)) -> Result<Self::Provides, Self::Error> {
                self($($ty,)*)
            }
        }
    };
}

all_the_tuples!(impl_factory);

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{boxed_constructor, boxed_factory, Constructible, Factory};
    use crate::{
        any::Instance,
        args::FromArgs,
        errors::{ArgsErrorKind, InstantiateErrorKind, InstantiatorErrorKind},
        inject::InjectCloned,
        service::Service as _,
        utils::thread_safety::RcThreadSafety,
    };

    use alloc::{
        format,
        string::{String, ToString as _},
        vec,
        vec::Vec,
    };
    use core::sync::atomic::{AtomicU8, Ordering};
    use tracing::debug;
    use tracing_test::traced_test;

    struct Pair(u8, String);

    impl Constructible for Pair {
        type Args = (InjectCloned<u8>, InjectCloned<String>);

        fn construct((InjectCloned(number), InjectCloned(text)): Self::Args) -> Result<Self, InstantiateErrorKind> {
            Ok(Self(number, text))
        }
    }

    #[test]
    #[allow(dead_code)]
    fn test_factory_helper() {
        fn factory<Args: FromArgs, F: Factory<Args>>(_f: F) {}
        fn factory_with_args() {
            factory(|| Ok::<_, InstantiateErrorKind>(()));
            factory(|InjectCloned(val): InjectCloned<u8>| Ok::<_, InstantiateErrorKind>(val));
        }
    }

    #[test]
    #[traced_test]
    fn test_boxed_factory() {
        let call_count = RcThreadSafety::new(AtomicU8::new(0));

        let instantiator = boxed_factory({
            let call_count = call_count.clone();
            move |InjectCloned(x): InjectCloned<u8>, InjectCloned(y): InjectCloned<u8>| {
                call_count.fetch_add(1, Ordering::SeqCst);

                debug!("Call factory");
                Ok::<_, InstantiateErrorKind>(x + y)
            }
        });

        let sum_1 = instantiator.call(vec![Instance::new(1u8), Instance::new(2u8)]).unwrap();
        let sum_2 = instantiator.call(vec![Instance::new(3u8), Instance::new(4u8)]).unwrap();

        assert_eq!(*sum_1.downcast::<u8>().unwrap(), 3);
        assert_eq!(*sum_2.downcast::<u8>().unwrap(), 7);
        assert_eq!(call_count.load(Ordering::SeqCst), 2);
        assert!(logs_contain("Factory called"));
    }

    #[test]
    #[traced_test]
    fn test_boxed_factory_keeps_state() {
        let mut counter = 0u32;
        let instantiator = boxed_factory(move || {
            counter += 1;
            Ok::<_, InstantiateErrorKind>(counter)
        });

        let values: Vec<u32> = (0..3)
            .map(|_| *instantiator.call(Vec::new()).unwrap().downcast::<u32>().unwrap())
            .collect();

        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    #[traced_test]
    fn test_boxed_factory_args_error() {
        let call_count = RcThreadSafety::new(AtomicU8::new(0));

        let instantiator = boxed_factory({
            let call_count = call_count.clone();
            move |InjectCloned(x): InjectCloned<u8>| {
                call_count.fetch_add(1, Ordering::SeqCst);
                Ok::<_, InstantiateErrorKind>(x)
            }
        });

        let err = instantiator.call(Vec::new()).unwrap_err();

        assert!(matches!(
            err,
            InstantiatorErrorKind::Args(ArgsErrorKind::Count { expected: 1, actual: 0 })
        ));
        assert_eq!(call_count.load(Ordering::SeqCst), 0);
    }

    #[test]
    #[traced_test]
    fn test_boxed_factory_error() {
        let instantiator = boxed_factory(|| Err::<(), _>(InstantiateErrorKind::from(anyhow::anyhow!("connection refused"))));

        let err = instantiator.call(Vec::new()).unwrap_err();

        assert!(matches!(err, InstantiatorErrorKind::Factory(_)));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    #[traced_test]
    fn test_boxed_constructor() {
        let instantiator = boxed_constructor::<Pair>();

        let pair = instantiator
            .call(vec![Instance::new(1u8), Instance::new(String::from("one"))])
            .unwrap()
            .downcast::<Pair>()
            .unwrap();

        assert_eq!(pair.0, 1);
        assert_eq!(pair.1, "one");
        assert!(logs_contain("Constructor called"));
    }
}
