//! Terminal restoration on every exit path.

/// Runs `restore` when dropped.
///
/// Held for the lifetime of the terminal session so an early `?` return or
/// an unwinding panic leaves the terminal usable, the same as a normal exit.
pub(crate) struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    pub(crate) fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn failing_setup(restored: &Cell<u32>) -> Result<(), String> {
        let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
        let enter_screen: Result<(), String> = Err("alternate screen unavailable".to_string());
        enter_screen?;
        Ok(())
    }

    #[test]
    fn test_restores_on_early_return() {
        let restored = Cell::new(0);
        assert!(failing_setup(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restores_on_normal_exit() {
        let restored = Cell::new(0);
        {
            let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
        }
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restores_on_panic() {
        let restored = Cell::new(0);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
            panic!("event loop crashed");
        }));
        assert!(result.is_err());
        assert_eq!(restored.get(), 1);
    }
}
