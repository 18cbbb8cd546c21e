//! Service-level tests for reservation conflict resolution and ownership
//! isolation, using the in-memory reservation store.

use std::sync::Arc;

use chrono::{Duration, Local};
use uuid::Uuid;

use roomhub_core::{AppResult, ErrorKind};
use roomhub_database::memory::MemoryReservationStore;
use roomhub_database::store::ReservationStore;
use roomhub_entity::{NewReservation, Reservation};
use roomhub_service::{RequestContext, ReservationService};

fn service() -> ReservationService {
    ReservationService::new(Arc::new(MemoryReservationStore::new()))
}

fn ctx() -> RequestContext {
    let id = Uuid::new_v4();
    RequestContext::new(
        id,
        format!("user-{id}@example.com"),
        "127.0.0.1".to_string(),
        None,
    )
}

fn tomorrow() -> String {
    (Local::now().date_naive() + Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

#[tokio::test]
async fn create_then_identical_create_conflicts_naming_the_slot() {
    let service = service();
    let date = tomorrow();

    let created = service
        .create(&ctx(), &date, "10:00", "Sala A")
        .await
        .unwrap();
    assert_eq!(created.time_str(), "10:00");

    let err = service
        .create(&ctx(), &date, "10:00", "Sala A")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::SlotConflict);

    let details = err.details.expect("conflicting slot details");
    assert_eq!(details.get("date").unwrap(), date.as_str());
    assert_eq!(details.get("time").unwrap(), "10:00");
    assert_eq!(details.get("room").unwrap(), "Sala A");
}

#[tokio::test]
async fn same_time_different_room_or_day_does_not_conflict() {
    let service = service();
    let date = tomorrow();
    let later = (Local::now().date_naive() + Duration::days(2))
        .format("%Y-%m-%d")
        .to_string();

    service.create(&ctx(), &date, "10:00", "Sala A").await.unwrap();
    service.create(&ctx(), &date, "10:00", "Sala B").await.unwrap();
    service.create(&ctx(), &later, "10:00", "Sala A").await.unwrap();
}

#[tokio::test]
async fn concurrent_creates_for_one_slot_admit_exactly_one() {
    let service = Arc::new(service());
    let date = tomorrow();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let service = Arc::clone(&service);
        let date = date.clone();
        handles.push(tokio::spawn(async move {
            service.create(&ctx(), &date, "12:00", "Sala C").await
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(e) => {
                assert_eq!(e.kind, ErrorKind::SlotConflict);
                conflicts += 1;
            }
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 49);
}

#[tokio::test]
async fn owner_comes_from_the_request_context() {
    let service = service();
    let caller = ctx();

    let created = service
        .create(&caller, &tomorrow(), "09:00", "Sala D")
        .await
        .unwrap();
    assert_eq!(created.user_id, caller.user_id);
}

#[tokio::test]
async fn non_owner_access_is_indistinguishable_from_missing() {
    let service = service();
    let owner = ctx();
    let stranger = ctx();

    let created = service
        .create(&owner, &tomorrow(), "11:00", "Sala A")
        .await
        .unwrap();

    let foreign_get = service.get_one(&stranger, created.id).await.unwrap_err();
    let missing_get = service.get_one(&stranger, Uuid::new_v4()).await.unwrap_err();
    assert_eq!(foreign_get.kind, ErrorKind::NotFound);
    assert_eq!(foreign_get.kind, missing_get.kind);
    assert_eq!(foreign_get.message, missing_get.message);

    let foreign_delete = service.delete(&stranger, created.id).await.unwrap_err();
    assert_eq!(foreign_delete.kind, ErrorKind::NotFound);
    assert_eq!(foreign_delete.message, missing_get.message);

    // The record is untouched and the owner can still fetch it.
    let still_there = service.get_one(&owner, created.id).await.unwrap();
    assert_eq!(still_there.id, created.id);
}

#[tokio::test]
async fn delete_by_owner_removes_the_record() {
    let service = service();
    let owner = ctx();

    let created = service
        .create(&owner, &tomorrow(), "15:30", "Sala B")
        .await
        .unwrap();

    service.delete(&owner, created.id).await.unwrap();
    let err = service.get_one(&owner, created.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    // The freed slot can be rebooked.
    service
        .create(&ctx(), &tomorrow(), "15:30", "Sala B")
        .await
        .unwrap();
}

/// Store whose rows disappear out from under the delete: every lookup
/// works, but the delete itself never removes anything.
struct VanishingStore {
    inner: MemoryReservationStore,
}

#[async_trait::async_trait]
impl ReservationStore for VanishingStore {
    async fn find_slot(
        &self,
        date: chrono::NaiveDate,
        time: chrono::NaiveTime,
        room: roomhub_entity::Room,
    ) -> AppResult<Option<Reservation>> {
        self.inner.find_slot(date, time, room).await
    }

    async fn insert(&self, data: &NewReservation) -> AppResult<Reservation> {
        self.inner.insert(data).await
    }

    async fn find_by_owner(&self, owner: Uuid) -> AppResult<Vec<Reservation>> {
        self.inner.find_by_owner(owner).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Reservation>> {
        self.inner.find_by_id(id).await
    }

    async fn delete(&self, _id: Uuid) -> AppResult<bool> {
        Ok(false)
    }
}

#[tokio::test]
async fn delete_that_removes_nothing_is_not_confirmed() {
    let service = ReservationService::new(Arc::new(VanishingStore {
        inner: MemoryReservationStore::new(),
    }));
    let owner = ctx();

    let created = service
        .create(&owner, &tomorrow(), "13:00", "Sala C")
        .await
        .unwrap();

    // The ownership check still sees the record, but zero rows are
    // removed; the caller must not get a success confirmation.
    let err = service.delete(&owner, created.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn list_mine_is_ordered_and_owner_scoped() {
    let service = service();
    let owner = ctx();
    let other = ctx();

    let day1 = tomorrow();
    let day2 = (Local::now().date_naive() + Duration::days(3))
        .format("%Y-%m-%d")
        .to_string();

    service.create(&owner, &day2, "09:00", "Sala A").await.unwrap();
    service.create(&owner, &day1, "18:00", "Sala A").await.unwrap();
    service.create(&owner, &day1, "08:30", "Sala B").await.unwrap();
    service.create(&other, &day1, "10:00", "Sala C").await.unwrap();

    let mine = service.list_mine(&owner).await.unwrap();
    assert_eq!(mine.len(), 3);
    assert_eq!(
        mine.iter()
            .map(|r| (r.date.to_string(), r.time_str()))
            .collect::<Vec<_>>(),
        vec![
            (day1.clone(), "08:30".to_string()),
            (day1.clone(), "18:00".to_string()),
            (day2.clone(), "09:00".to_string()),
        ]
    );

    let empty = service.list_mine(&ctx()).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn invalid_input_aggregates_every_violation() {
    let service = service();

    let err = service
        .create(&ctx(), "not-a-date", "99:99", "Sala Z")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let details = err.details.expect("field violations");
    let fields: Vec<_> = details
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.get("field").unwrap().as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields.len(), 3);
    assert!(fields.contains(&"date".to_string()));
    assert!(fields.contains(&"time".to_string()));
    assert!(fields.contains(&"room".to_string()));
}
