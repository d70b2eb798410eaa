use crate::error::{ErrorCore, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub trait RwLockExt<T> {
    fn read_lock(&self, context: &str) -> Result<RwLockReadGuard<'_, T>>;
    fn write_lock(&self, context: &str) -> Result<RwLockWriteGuard<'_, T>>;
}

impl<T> RwLockExt<T> for RwLock<T> {
    fn read_lock(&self, context: &str) -> Result<RwLockReadGuard<'_, T>> {
        self.read()
            .map_err(|e| ErrorCore::CacheLockPoisoned(format!("[{}] {}", context, e)))
    }

    fn write_lock(&self, context: &str) -> Result<RwLockWriteGuard<'_, T>> {
        self.write()
            .map_err(|e| ErrorCore::CacheLockPoisoned(format!("[{}] {}", context, e)))
    }
}

impl<T> RwLockExt<T> for Arc<RwLock<T>> {
    fn read_lock(&self, context: &str) -> Result<RwLockReadGuard<'_, T>> {
        self.as_ref().read_lock(context)
    }

    fn write_lock(&self, context: &str) -> Result<RwLockWriteGuard<'_, T>> {
        self.as_ref().write_lock(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisoned_lock_reports_context() {
        let lock = Arc::new(RwLock::new(0));
        let poisoner = lock.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.write().unwrap();
            panic!("poison");
        })
        .join();

        let err = lock.read_lock("reading counter").unwrap_err();
        assert!(err.to_string().contains("[reading counter]"));
    }

    #[test]
    fn test_write_then_read() {
        let lock = RwLock::new(String::from("a"));
        lock.write_lock("append").unwrap().push('b');
        assert_eq!(*lock.read_lock("read").unwrap(), "ab");
    }
}
