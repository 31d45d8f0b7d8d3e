use alloc::{collections::BTreeMap, string::String};

use crate::any::Instance;

/// Resolved singleton values by binding name
#[derive(Default, Clone)]
pub(crate) struct Cache {
    map: BTreeMap<String, Instance>,
}

impl Cache {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    #[inline]
    pub(crate) fn insert(&mut self, name: &str, instance: Instance) -> Option<Instance> {
        self.map.insert(String::from(name), instance)
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, name: &str) -> Option<Instance> {
        self.map.get(name).cloned()
    }

    #[inline]
    pub(crate) fn remove(&mut self, name: &str) -> Option<Instance> {
        self.map.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Cache;
    use crate::any::Instance;

    #[test]
    fn test_insert_get_remove() {
        let mut cache = Cache::new();
        let instance = Instance::new(1u8);

        assert!(cache.get("a").is_none());
        assert!(cache.insert("a", instance.clone()).is_none());
        assert!(cache.get("a").unwrap().ptr_eq(&instance));
        assert!(cache.remove("a").unwrap().ptr_eq(&instance));
        assert!(cache.get("a").is_none());
    }
}
