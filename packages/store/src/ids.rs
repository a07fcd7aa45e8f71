//! Client-side id generation for newly created records.
//!
//! Ids are seeded from the wall clock in milliseconds but are guaranteed to be
//! strictly increasing per generator and greater than every id the generator
//! has been told about, so two creates in the same millisecond never collide.

use crate::models::UserId;

/// Monotonic id source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdGenerator {
    floor: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure future ids are greater than `id`.
    pub fn observe(&mut self, id: UserId) {
        self.floor = self.floor.max(id.0);
    }

    /// Issue the next id using the current wall clock.
    pub fn next_id(&mut self) -> UserId {
        self.next_id_at(now_millis())
    }

    /// Issue the next id as if the clock read `now_millis`.
    pub fn next_id_at(&mut self, now_millis: u64) -> UserId {
        let id = now_millis.max(self.floor.saturating_add(1));
        self.floor = id;
        UserId(id)
    }
}

/// Wall clock in milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
