//! Read/write round-trip and batch behavior

use crate::prelude::*;
use silt_repo::CommitOptions;
use silt_store::{MemoryStore, StoreAdapter};

#[tokio::test]
async fn forced_commit_snapshots_at_current_version() {
    let store = MemoryStore::new();
    let repo = counter_repo(&store, 10);

    let mut counter = Counter::with_id("e1");
    counter.add_one();
    counter.add_one();
    repo.commit(&mut counter, CommitOptions::force())
        .await
        .unwrap();

    let loaded = repo.get("e1").await.unwrap();

    assert_eq!(loaded.core.id, "e1");
    assert_eq!(loaded.core.version, 3);
    assert_eq!(loaded.core.snapshot_version, 3);
    assert_eq!(loaded.total, 2);
}

#[tokio::test]
async fn unforced_commit_below_cadence_rebuilds_from_events_alone() {
    let store = MemoryStore::new();
    let repo = counter_repo(&store, 10);

    let mut counter = Counter::with_id("e1");
    counter.add_one();
    counter.add_one();
    repo.commit(&mut counter, CommitOptions::default())
        .await
        .unwrap();

    let snapshots = store
        .range_query("counter#e1", "countersnapshots#", true, 1)
        .await
        .unwrap();
    assert!(snapshots.is_empty());

    let loaded = repo.get("e1").await.unwrap();

    assert_eq!(loaded.core.version, 3);
    assert_eq!(loaded.core.snapshot_version, 0);
    assert_eq!(loaded.total, 2);
}

#[tokio::test]
async fn get_all_returns_entities_in_input_order() {
    let store = MemoryStore::new();
    let repo = counter_repo(&store, 10);

    let mut e1 = Counter::with_id("e1");
    e1.add(1);
    repo.commit(&mut e1, CommitOptions::default()).await.unwrap();

    let mut e2 = Counter::with_id("e2");
    e2.add(2);
    repo.commit(&mut e2, CommitOptions::default()).await.unwrap();

    let loaded = repo.get_all(&["e1", "e2"]).await.unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].core.id, "e1");
    assert_eq!(loaded[1].core.id, "e2");
    assert_eq!(loaded[0].total, 1);
    assert_eq!(loaded[1].total, 2);
}

#[tokio::test]
async fn rejected_write_leaves_nothing_visible_to_get() {
    let store = MemoryStore::new();
    let repo = counter_repo(&store, 10);

    let mut counter = Counter::with_id("e1");
    counter.add(42);

    store.reject_writes(true);
    repo.commit(&mut counter, CommitOptions::force())
        .await
        .unwrap_err();
    store.reject_writes(false);

    let loaded = repo.get("e1").await.unwrap();
    assert_eq!(loaded.core.version, 0);
    assert_eq!(loaded.total, 0);

    // The entity still holds its pending work; a retry commits it intact
    repo.commit(&mut counter, CommitOptions::force())
        .await
        .unwrap();
    let loaded = repo.get("e1").await.unwrap();
    assert_eq!(loaded.core.version, 2);
    assert_eq!(loaded.total, 42);
}

#[tokio::test]
async fn replay_matches_from_scratch_regardless_of_cadence() {
    for frequency in [1, 2, 3, 5, 10, 25] {
        let store = MemoryStore::new();
        let repo = counter_repo(&store, frequency);

        // Twelve events spread over three commits
        let mut counter = Counter::with_id("e1");
        counter.add(1);
        counter.add(2);
        repo.commit(&mut counter, CommitOptions::default())
            .await
            .unwrap();
        for amount in 3..=8 {
            counter.add(amount);
        }
        repo.commit(&mut counter, CommitOptions::default())
            .await
            .unwrap();
        for amount in 9..=11 {
            counter.add(amount);
        }
        repo.commit(&mut counter, CommitOptions::default())
            .await
            .unwrap();

        let loaded = repo.get("e1").await.unwrap();

        assert_eq!(loaded.core.version, 12, "frequency {frequency}");
        assert_eq!(loaded.total, 66, "frequency {frequency}");
    }
}

#[tokio::test]
async fn commit_all_commits_a_batch_atomically() {
    let store = MemoryStore::new();
    let repo = counter_repo(&store, 10);

    let mut entities = vec![Counter::with_id("e1"), Counter::with_id("e2")];
    entities[0].add(7);
    entities[1].add(9);

    repo.commit_all(&mut entities, CommitOptions::default())
        .await
        .unwrap();

    let loaded = repo.get_all(&["e1", "e2"]).await.unwrap();
    assert_eq!(loaded[0].total, 7);
    assert_eq!(loaded[1].total, 9);
}
