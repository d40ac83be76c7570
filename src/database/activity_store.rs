use parking_lot::RwLock;

use crate::database::seed;
use crate::error::{Error, Result};
use crate::models::{Activity, DirectorySnapshot};

/// In-memory activity directory.
///
/// All mutations go through a single write lock, so the duplicate and
/// capacity checks of a signup see the same roster they append to.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: RwLock<Vec<Activity>>,
}

impl ActivityStore {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn snapshot(&self) -> DirectorySnapshot {
        DirectorySnapshot {
            activities: self.activities.read().clone(),
        }
    }

    pub fn find(&self, name: &str) -> Option<Activity> {
        self.activities.read().iter().find(|a| a.name == name).cloned()
    }

    /// Appends `email` to the roster of `activity_name` and returns the
    /// updated roster. Checks run in order: existence, duplicate, capacity.
    pub fn add_participant(&self, activity_name: &str, email: &str) -> Result<Vec<String>> {
        let mut activities = self.activities.write();
        let activity = activities
            .iter_mut()
            .find(|a| a.name == activity_name)
            .ok_or(Error::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(Error::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(Error::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(activity.participants.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn small_store(max: usize, participants: &[&str]) -> ActivityStore {
        ActivityStore::new(vec![Activity {
            name: "Robotics Club".to_string(),
            description: "Build robots".to_string(),
            schedule: "Wednesdays".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }])
    }

    #[test]
    fn test_add_participant_appends_at_end() {
        let store = small_store(3, &["a@x"]);
        let roster = store.add_participant("Robotics Club", "b@x").unwrap();
        assert_eq!(roster, vec!["a@x", "b@x"]);
        assert_eq!(store.find("Robotics Club").unwrap().participants, roster);
    }

    #[test]
    fn test_unknown_activity() {
        let store = small_store(3, &[]);
        let err = store.add_participant("robotics club", "a@x").unwrap_err();
        assert!(matches!(err, Error::ActivityNotFound));
    }

    #[test]
    fn test_duplicate_checked_before_capacity() {
        let store = small_store(1, &["a@x"]);
        let err = store.add_participant("Robotics Club", "a@x").unwrap_err();
        assert!(matches!(err, Error::AlreadySignedUp));

        let err = store.add_participant("Robotics Club", "b@x").unwrap_err();
        assert!(matches!(err, Error::ActivityFull));
        assert_eq!(store.find("Robotics Club").unwrap().participants, vec!["a@x"]);
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let store = small_store(3, &[]);
        let before = store.snapshot();
        store.add_participant("Robotics Club", "a@x").unwrap();
        assert!(before.get("Robotics Club").unwrap().participants.is_empty());
        assert_eq!(store.snapshot().get("Robotics Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn test_concurrent_signups_never_exceed_capacity() {
        let store = Arc::new(small_store(5, &[]));
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store
                        .add_participant("Robotics Club", &format!("student{i}@x"))
                        .is_ok()
                })
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(accepted, 5);
        assert_eq!(store.find("Robotics Club").unwrap().participants.len(), 5);
    }
}
