use alloc::{collections::BTreeMap, string::String};
use parking_lot::{Mutex, ReentrantMutex};

use crate::utils::thread_safety::RcThreadSafety;

/// Construction locks, one per binding name.
///
/// Holding the lock of a name while building its singleton makes concurrent first
/// resolutions of that name wait for a single construction.
/// A name never shares its lock with another name.
/// Locks are reentrant, so a factory may resolve through the container on the same thread.
#[derive(Default)]
pub(crate) struct KeyedLocks {
    locks: Mutex<BTreeMap<String, RcThreadSafety<ReentrantMutex<()>>>>,
}

impl KeyedLocks {
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            locks: Mutex::new(BTreeMap::new()),
        }
    }

    #[must_use]
    pub(crate) fn get(&self, name: &str) -> RcThreadSafety<ReentrantMutex<()>> {
        let mut locks = self.locks.lock();
        if let Some(lock) = locks.get(name) {
            return lock.clone();
        }

        let lock = RcThreadSafety::new(ReentrantMutex::new(()));
        locks.insert(String::from(name), lock.clone());
        lock
    }
}
