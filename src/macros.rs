#[rustfmt::skip]
macro_rules! all_the_tuples {
    ($name:ident) => {
        $name!([]);
        $name!([T1]);
        $name!([T1, T2]);
        $name!([T1, T2, T3]);
        $name!([T1, T2, T3, T4]);
        $name!([T1, T2, T3, T4, T5]);
        $name!([T1, T2, T3, T4, T5, T6]);
        $name!([T1, T2, T3, T4, T5, T6, T7]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12]);
    };
}

macro_rules! count_idents {
    () => { 0usize };
    ($head:ident $(, $tail:ident)*) => { 1usize + count_idents!($($tail),*) };
}

/// Builds an argument list for [`crate::Container::bind_factory`] and [`crate::Container::bind_constructor`].
///
/// Elements prefixed with `@` are binding names to inject, every other element is a literal
/// value passed as is.
///
/// # Examples
/// ```rust
/// use bindi::{args, Container, InjectCloned};
///
/// let container = Container::new();
/// container
///     .bind_value("n", 5u32)
///     .bind_factory("power", |InjectCloned(x): InjectCloned<u64>, InjectCloned(n): InjectCloned<u32>| Ok(x.pow(n)), args![2u64, @"n"]);
///
/// assert_eq!(*container.get::<u64>("power").unwrap(), 32);
/// ```
#[macro_export]
macro_rules! args {
    ($($tokens:tt)*) => {{
        #[allow(unused_mut)]
        let mut args = $crate::macros_utils::aliases::Vec::<$crate::Arg>::new();
        $crate::args_internal! { args; $($tokens)* }
        args
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! args_internal {
    // === Base case ===
    ($args:ident;) => {};

    // === Dependency ===
    // Example: args_internal! { args; @"name", 1 }
    ($args:ident; @ $name:expr $(, $($rest:tt)*)?) => {
        $args.push($crate::Arg::from($crate::inject($name)));
        $crate::args_internal! { $args; $($($rest)*)? }
    };

    // === Literal ===
    // Example: args_internal! { args; 1, @"name" }
    ($args:ident; $value:expr $(, $($rest:tt)*)?) => {
        $args.push($crate::Arg::literal($value));
        $crate::args_internal! { $args; $($($rest)*)? }
    };
}
