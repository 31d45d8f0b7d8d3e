#![allow(dead_code)]

#[cfg(feature = "std")]
mod std {
    extern crate std;

    pub type Vec<T> = std::vec::Vec<T>;
}

mod alloc {
    extern crate alloc;

    pub type Vec<T> = alloc::vec::Vec<T>;
}

#[cfg(feature = "std")]
pub use std::Vec;

#[cfg(not(feature = "std"))]
pub use alloc::Vec;
