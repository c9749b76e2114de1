/// Enrollment registry with lock-free reads and serialized mutations
/// 
/// Readers load the currently published activity map through ArcSwap and never
/// block. Every mutation takes the single store lock, stages the change on a
/// copy of the map, persists the copy, and only then publishes it. A failed
/// save therefore leaves both memory and disk at the pre-call state.

use crate::activity::{
    error::{RegistryError, Result},
    storage::SnapshotStore,
    types::{Activity, ActivityMap, EnrollOutcome, WithdrawOutcome},
};
use arc_swap::ArcSwap;
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory authority for all activities
/// 
/// Constructed once at startup and shared by reference (usually `Arc`) with
/// every request handler. The set of activity names is fixed by the snapshot
/// it was loaded from.
#[derive(Debug)]
pub struct ActivityRegistry {
    /// Published activity map, swapped atomically after each committed mutation
    activities: ArcSwap<ActivityMap>,

    /// Snapshot store; holding this lock is what serializes mutations
    store: Mutex<SnapshotStore>,
}

impl ActivityRegistry {
    /// Create registry by loading the store's snapshot
    /// 
    /// A missing or unreadable snapshot yields an empty registry (see `SnapshotStore::load`).
    pub fn load(store: SnapshotStore) -> Self {
        let activities = store.load();
        Self::with_activities(store, activities)
    }

    /// Create registry from an already-built activity map
    /// 
    /// Nothing is written until the first mutation.
    pub fn with_activities(store: SnapshotStore, activities: ActivityMap) -> Self {
        for (name, activity) in &activities {
            if activity.has_duplicates() {
                tracing::warn!("⚠️ Activity '{}' has duplicate participants in its snapshot", name);
            }
            if let Some(max) = activity.max_participants {
                if activity.participants.len() > max as usize {
                    tracing::warn!(
                        "⚠️ Activity '{}' is over capacity in its snapshot ({} > {})",
                        name,
                        activity.participants.len(),
                        max
                    );
                }
            }
        }

        tracing::info!("Initialized activity registry with {} activities", activities.len());

        Self {
            activities: ArcSwap::new(Arc::new(activities)),
            store: Mutex::new(store),
        }
    }

    /// Snapshot of the full registry (lock-free read)
    /// 
    /// The returned map is immutable; later mutations publish a new map
    /// instead of changing this one.
    pub fn list(&self) -> Arc<ActivityMap> {
        self.activities.load_full()
    }

    /// Get a single activity by name (lock-free read)
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.load().get(name).cloned()
    }

    /// Enroll a participant in an activity
    /// 
    /// Checks existence, then duplicate enrollment, then capacity, and persists
    /// the new roster before returning.
    pub fn enroll(&self, name: &str, participant: &str) -> Result<EnrollOutcome> {
        self.commit(name, |activity| {
            if activity.is_enrolled(participant) {
                return Err(RegistryError::AlreadyEnrolled {
                    activity: name.to_string(),
                    participant: participant.to_string(),
                });
            }
            if let Some(max) = activity.max_participants {
                if activity.is_full() {
                    return Err(RegistryError::CapacityExceeded {
                        activity: name.to_string(),
                        max,
                    });
                }
            }
            activity.participants.push(participant.to_string());
            Ok(())
        })?;

        tracing::info!("✅ Enrolled {} in {}", participant, name);

        Ok(EnrollOutcome {
            activity: name.to_string(),
            participant: participant.to_string(),
        })
    }

    /// Withdraw a participant from an activity
    /// 
    /// Removes the participant while keeping everyone else in signup order.
    pub fn withdraw(&self, name: &str, participant: &str) -> Result<WithdrawOutcome> {
        self.commit(name, |activity| {
            let position = activity
                .participants
                .iter()
                .position(|p| p == participant)
                .ok_or_else(|| RegistryError::NotEnrolled {
                    activity: name.to_string(),
                    participant: participant.to_string(),
                })?;
            activity.participants.remove(position);
            Ok(())
        })?;

        tracing::info!("👋 Withdrew {} from {}", participant, name);

        Ok(WithdrawOutcome {
            activity: name.to_string(),
            participant: participant.to_string(),
        })
    }

    /// Run one check-mutate-persist critical section against a named activity
    /// 
    /// The lock guard is dropped on every return path. The staged map is only
    /// published once the snapshot write succeeds.
    fn commit<F>(&self, name: &str, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Activity) -> Result<()>,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);

        let current = self.activities.load_full();
        if !current.contains_key(name) {
            tracing::debug!("Rejected change to unknown activity: {}", name);
            return Err(RegistryError::NotFound(name.to_string()));
        }

        let mut staged = (*current).clone();
        if let Some(activity) = staged.get_mut(name) {
            if let Err(e) = mutate(activity) {
                tracing::debug!("Rejected change to {}: {}", name, e);
                return Err(e);
            }
        }

        if let Err(e) = store.save(&staged) {
            tracing::error!("❌ Failed to persist change to {}, rolled back: {}", name, e);
            return Err(e.into());
        }

        self.activities.store(Arc::new(staged));
        Ok(())
    }
}
