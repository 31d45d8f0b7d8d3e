use alloc::vec::Vec;

use crate::{
    any::Instance,
    errors::{ArgsErrorKind, TypeMismatch},
};

/// Extracts a single positional argument from its resolved value.
pub trait FromArg: Sized {
    #[allow(clippy::missing_errors_doc)]
    fn from_arg(instance: Instance) -> Result<Self, TypeMismatch>;
}

/// Extracts the whole resolved argument list.
///
/// Implemented for tuples of [`FromArg`], where the tuple length must match
/// the number of arguments the binding was registered with.
pub trait FromArgs: Sized {
    #[allow(clippy::missing_errors_doc)]
    fn from_args(args: Vec<Instance>) -> Result<Self, ArgsErrorKind>;
}

#[inline]
fn next_arg<T: FromArg>(
    args: &mut impl Iterator<Item = (usize, Instance)>,
    expected: usize,
    actual: usize,
) -> Result<T, ArgsErrorKind> {
    match args.next() {
        Some((position, instance)) => T::from_arg(instance).map_err(|source| ArgsErrorKind::IncorrectType { position, source }),
        None => Err(ArgsErrorKind::Count { expected, actual }),
    }
}

macro_rules! impl_from_args {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case, unused_mut, unused_variables)]
        impl<$($ty,)*> FromArgs for ($($ty,)*)
        where
            $( $ty: FromArg, )*
        {
            #[inline]
            fn from_args(args: Vec<Instance>) -> Result<Self, ArgsErrorKind> {
                let expected = count_idents!($($ty),*);
                let actual = args.len();
                if expected != actual {
                    return Err(ArgsErrorKind::Count { expected, actual });
                }

                let mut args = args.into_iter().enumerate();
                Ok(($(next_arg::<$ty>(&mut args, expected, actual)?,)*))
            }
        }
    };
}

all_the_tuples!(impl_from_args);
