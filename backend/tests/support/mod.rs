//! Helpers shared by integration tests that read catalog settings from the
//! process environment (`CATALOG_CONFIG`, `HOST`, `PORT`, `CATALOG_SEED_FILE`).

use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with the given variables set (`Some`) or removed (`None`).
///
/// Calls are serialized across test threads, and the previous values are put
/// back when `f` returns or panics.
pub fn with_scoped_env<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _restore = EnvOverride::apply(vars);
    f()
}

struct EnvOverride {
    previous: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvOverride {
    fn apply(vars: &[(&str, Option<&str>)]) -> Self {
        // A panicking test leaves the lock poisoned; the environment is still restored.
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut previous: Vec<(String, Option<String>)> = Vec::with_capacity(vars.len());
        for (key, value) in vars {
            if !previous.iter().any(|(k, _)| k == key) {
                previous.push((key.to_string(), std::env::var(key).ok()));
            }
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..).rev() {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}
