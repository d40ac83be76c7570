use crate::database::ActivityStore;
use crate::models::DirectorySnapshot;

pub fn list_activities(store: &ActivityStore) -> DirectorySnapshot {
    store.snapshot()
}
