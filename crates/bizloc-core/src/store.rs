//! In-memory holder for the viewer's last known position.

use std::sync::{Arc, PoisonError, RwLock};

use crate::types::Coordinates;

/// Shared handle to the user's last known coordinates.
///
/// Clones share one value. The value starts at the origin and is only ever
/// replaced whole through [`LocationStore::set_user_location`].
#[derive(Debug, Clone, Default)]
pub struct LocationStore {
    user_location: Arc<RwLock<Coordinates>>,
}

impl LocationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current value.
    #[must_use]
    pub fn user_location(&self) -> Coordinates {
        *self
            .user_location
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the stored coordinates. No range validation is applied.
    pub fn set_user_location(&self, lat: f64, lng: f64) {
        let mut guard = self
            .user_location
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Coordinates { lat, lng };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_origin() {
        let store = LocationStore::new();
        assert_eq!(store.user_location(), Coordinates { lat: 0.0, lng: 0.0 });
    }

    #[test]
    fn set_user_location_replaces_value() {
        let store = LocationStore::new();
        store.set_user_location(12.5, 77.6);
        assert_eq!(store.user_location(), Coordinates { lat: 12.5, lng: 77.6 });

        store.set_user_location(-33.9, 151.2);
        assert_eq!(
            store.user_location(),
            Coordinates {
                lat: -33.9,
                lng: 151.2
            }
        );
    }

    #[test]
    fn clones_share_one_value() {
        let store = LocationStore::new();
        let handle = store.clone();
        handle.set_user_location(1.0, 2.0);
        assert_eq!(store.user_location(), Coordinates::new(1.0, 2.0));
    }

    #[test]
    fn out_of_range_values_are_stored_as_given() {
        let store = LocationStore::new();
        store.set_user_location(120.0, -400.0);
        assert_eq!(store.user_location(), Coordinates::new(120.0, -400.0));
    }

    #[test]
    fn concurrent_writers_never_tear_the_pair() {
        let store = LocationStore::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let v = f64::from(i);
                    for _ in 0..100 {
                        store.set_user_location(v, v);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread panicked");
        }
        let current = store.user_location();
        assert!((current.lat - current.lng).abs() < f64::EPSILON);
    }
}
