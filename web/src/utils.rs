use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Where a value lives in `localStorage`.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

/// Optional preference backed by `localStorage`, `None` when nothing (or nothing readable) was stored.
pub(crate) trait LocalOrDefault: Sized {
    fn local_or_default() -> Self;
    fn local_save(&self);
}

impl<T> LocalOrDefault for Option<T>
where
    T: StorageKey + Serialize + DeserializeOwned,
{
    fn local_or_default() -> Self {
        match LocalStorage::get(T::KEY) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("nothing usable stored at {}: {:?}", T::KEY, err);
                None
            }
        }
    }

    fn local_save(&self) {
        match self {
            Some(value) => {
                if let Err(err) = LocalStorage::set(T::KEY, value) {
                    log::error!("could not save {} to local storage: {:?}", T::KEY, err);
                }
            }
            None => LocalStorage::delete(T::KEY),
        }
    }
}

/// Seed for the game clock, built from two 32-bit draws of `Math.random`.
pub(crate) fn js_random_seed() -> u64 {
    let draw = || (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (draw() << 32) | draw()
}
