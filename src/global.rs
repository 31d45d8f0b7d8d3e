use once_cell::sync::Lazy;

use crate::container::Container;

static GLOBAL_CONTAINER: Lazy<Container> = Lazy::new(Container::new);

/// Process-wide container, created empty on first access.
///
/// It is an ordinary [`Container`]: bindings made through it are visible to every caller,
/// and separately created containers never see them.
///
/// # Examples
/// ```rust
/// use bindi::global;
///
/// global().bind_value("app_name", String::from("bindi"));
///
/// assert_eq!(*global().get::<String>("app_name").unwrap(), "bindi");
/// ```
#[inline]
#[must_use]
pub fn global() -> &'static Container {
    &GLOBAL_CONTAINER
}

#[cfg(test)]
mod tests {
    use super::global;
    use crate::Container;

    #[test]
    fn test_global_is_shared() {
        global().bind_value("global_test_number", 1u8);

        assert!(core::ptr::eq(global(), global()));
        assert_eq!(*global().get::<u8>("global_test_number").unwrap(), 1);
        assert!(!Container::new().contains("global_test_number"));
    }
}
