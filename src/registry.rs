use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::{binding::BindingRecord, utils::thread_safety::RcThreadSafety};

#[derive(Default, Clone)]
pub(crate) struct Registry {
    bindings: BTreeMap<String, RcThreadSafety<BindingRecord>>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { bindings: BTreeMap::new() }
    }

    /// Stores the record under its name and returns the replaced one
    #[inline]
    pub(crate) fn insert(&mut self, record: BindingRecord) -> Option<RcThreadSafety<BindingRecord>> {
        self.bindings.insert(String::from(record.name()), RcThreadSafety::new(record))
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, name: &str) -> Option<RcThreadSafety<BindingRecord>> {
        self.bindings.get(name).cloned()
    }

    #[inline]
    #[must_use]
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Whether `record` is still the one registered under its name
    #[inline]
    #[must_use]
    pub(crate) fn is_current(&self, record: &RcThreadSafety<BindingRecord>) -> bool {
        self.bindings
            .get(record.name())
            .is_some_and(|current| RcThreadSafety::ptr_eq(current, record))
    }

    #[inline]
    #[must_use]
    pub(crate) fn names(&self) -> Vec<String> {
        self.bindings.keys().cloned().collect()
    }
}
