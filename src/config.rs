/// Config for a binding
/// ## Fields
/// - `cache_provides`:
///   If `true`, the value produced by the binding is cached on first resolution and
///   reused until the binding is replaced (singleton).
///   If `false`, every resolution runs the factory or constructor again (transient).
///
///   This does **not** affect the dependencies of the value.
///   Each injected binding is cached according to its own config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub cache_provides: bool,
}

impl Config {
    #[inline]
    #[must_use]
    pub const fn singleton() -> Self {
        Self { cache_provides: true }
    }

    #[inline]
    #[must_use]
    pub const fn transient() -> Self {
        Self { cache_provides: false }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::singleton()
    }
}
