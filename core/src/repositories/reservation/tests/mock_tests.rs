//! Tests for the mock reservation repository's atomicity contracts

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::reservation::{Reservation, ReservationStatus};
use crate::domain::value_objects::StayRange;
use crate::errors::{DomainError, ReservationError};
use crate::repositories::reservation::{MockReservationRepository, ReservationRepository};

fn stay(check_in: (i32, u32, u32), check_out: (i32, u32, u32)) -> StayRange {
    StayRange::new(
        NaiveDate::from_ymd_opt(check_in.0, check_in.1, check_in.2).unwrap(),
        NaiveDate::from_ymd_opt(check_out.0, check_out.1, check_out.2).unwrap(),
    )
    .unwrap()
}

fn reservation(property_id: Uuid, s: StayRange) -> Reservation {
    Reservation::new(
        Uuid::new_v4(),
        property_id,
        s,
        2,
        Decimal::from(200),
        None,
    )
}

#[tokio::test]
async fn insert_rejects_overlap_with_confirmed() {
    let repo = MockReservationRepository::new();
    let property_id = Uuid::new_v4();

    let mut existing = reservation(property_id, stay((2024, 6, 2), (2024, 6, 5)));
    existing.confirm().unwrap();
    repo.seed(existing).await;

    let overlapping = reservation(property_id, stay((2024, 6, 3), (2024, 6, 4)));
    let result = repo.insert(overlapping).await;
    assert!(matches!(
        result,
        Err(DomainError::Reservation(ReservationError::DateConflict))
    ));
}

#[tokio::test]
async fn insert_ignores_pending_overlap() {
    let repo = MockReservationRepository::new();
    let property_id = Uuid::new_v4();

    // Pending does not block dates
    repo.seed(reservation(property_id, stay((2024, 6, 2), (2024, 6, 5))))
        .await;

    let overlapping = reservation(property_id, stay((2024, 6, 3), (2024, 6, 4)));
    assert!(repo.insert(overlapping).await.is_ok());
}

#[tokio::test]
async fn transition_status_is_compare_and_set() {
    let repo = MockReservationRepository::new();
    let created = repo
        .insert(reservation(Uuid::new_v4(), stay((2024, 6, 1), (2024, 6, 3))))
        .await
        .unwrap();

    let applied = repo
        .transition_status(
            created.id,
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            Some(chrono::Utc::now()),
        )
        .await
        .unwrap();
    assert!(applied);

    // Second transition from Pending loses the race
    let applied_again = repo
        .transition_status(
            created.id,
            ReservationStatus::Pending,
            ReservationStatus::Rejected,
            None,
        )
        .await
        .unwrap();
    assert!(!applied_again);

    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ReservationStatus::Confirmed);
    assert!(stored.confirmed_at.is_some());
}

#[tokio::test]
async fn owner_listing_follows_property_ownership() {
    let repo = MockReservationRepository::new();
    let property_id = Uuid::new_v4();
    let owner_id = Uuid::new_v4();
    repo.set_property_owner(property_id, owner_id).await;

    repo.seed(reservation(property_id, stay((2024, 6, 1), (2024, 6, 3))))
        .await;
    repo.seed(reservation(Uuid::new_v4(), stay((2024, 6, 1), (2024, 6, 3))))
        .await;

    let listed = repo.find_for_property_owner(owner_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].property_id, property_id);
}
