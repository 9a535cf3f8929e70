//! Unit tests for the reservation lifecycle service

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::domain::entities::reservation::{Reservation, ReservationStatus};
use crate::domain::entities::user::{UserRole, UserSummary};
use crate::domain::value_objects::StayRange;
use crate::errors::{DomainError, ReservationError};
use crate::repositories::{
    MockPropertyRepository, MockReservationRepository, MockUserDirectory, ReservationRepository,
};
use crate::services::notification::mock::FailingNotificationDispatcher;
use crate::services::notification::{NotificationType, RecordingNotificationDispatcher};
use crate::services::reservation::{NewReservation, ReservationService};

type TestService = ReservationService<
    MockPropertyRepository,
    MockReservationRepository,
    MockUserDirectory,
    RecordingNotificationDispatcher,
>;

struct Fixture {
    service: TestService,
    properties: Arc<MockPropertyRepository>,
    reservations: Arc<MockReservationRepository>,
    users: Arc<MockUserDirectory>,
    notifier: Arc<RecordingNotificationDispatcher>,
    owner_id: Uuid,
    renter_id: Uuid,
    property_id: Uuid,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn stay(check_in: NaiveDate, check_out: NaiveDate) -> StayRange {
    StayRange::new(check_in, check_out).unwrap()
}

async fn fixture() -> Fixture {
    let properties = Arc::new(MockPropertyRepository::new());
    let reservations = Arc::new(MockReservationRepository::new());
    let users = Arc::new(MockUserDirectory::new());
    let notifier = Arc::new(RecordingNotificationDispatcher::new());

    let owner_id = Uuid::new_v4();
    let renter_id = Uuid::new_v4();
    let property_id = Uuid::new_v4();

    properties
        .insert(Property {
            id: property_id,
            owner_id,
            title: "Seaside cottage".to_string(),
            location: "Cornwall".to_string(),
            price_per_night: Decimal::from(100),
            max_guests: 4,
            is_available: true,
        })
        .await;
    reservations.set_property_owner(property_id, owner_id).await;
    users
        .insert(UserSummary {
            id: renter_id,
            name: "Ada Renter".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await;

    let service = ReservationService::new(
        properties.clone(),
        reservations.clone(),
        users.clone(),
        notifier.clone(),
    );

    Fixture {
        service,
        properties,
        reservations,
        users,
        notifier,
        owner_id,
        renter_id,
        property_id,
    }
}

fn booking(fx: &Fixture, check_in: NaiveDate, check_out: NaiveDate, guests: u32) -> NewReservation {
    NewReservation {
        property_id: fx.property_id,
        check_in,
        check_out,
        guest_count: guests,
        special_requests: None,
    }
}

async fn seed_confirmed(fx: &Fixture, check_in: NaiveDate, check_out: NaiveDate) -> Reservation {
    let mut reservation = Reservation::new(
        Uuid::new_v4(),
        fx.property_id,
        stay(check_in, check_out),
        2,
        Decimal::from(200),
        None,
    );
    reservation.confirm().unwrap();
    fx.reservations.seed(reservation.clone()).await;
    reservation
}

#[tokio::test]
async fn create_computes_nights_and_total() {
    let fx = fixture().await;
    let view = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();

    assert_eq!(view.total_amount, Decimal::from(300));
    assert_eq!(view.status, ReservationStatus::Pending);
    assert_eq!(view.user_name, "Ada Renter");
    assert_eq!(view.property_title, "Seaside cottage");
    assert!(view.confirmed_at.is_none());
}

#[tokio::test]
async fn create_notifies_property_owner() {
    let fx = fixture().await;
    let view = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();

    let sent = fx.notifier.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].user_id, fx.owner_id);
    assert_eq!(sent[0].kind, NotificationType::ReservationRequest);
    assert_eq!(sent[0].related_entity_id, Some(view.id));
}

#[tokio::test]
async fn owners_cannot_book() {
    let fx = fixture().await;
    let result = fx
        .service
        .create_reservation(
            fx.owner_id,
            UserRole::Owner,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Reservation(ReservationError::RoleViolation))
    ));
}

#[tokio::test]
async fn create_fails_for_missing_property() {
    let fx = fixture().await;
    let mut request = booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2);
    request.property_id = Uuid::new_v4();
    let result = fx
        .service
        .create_reservation(fx.renter_id, UserRole::Renter, request)
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn create_fails_for_unlisted_property() {
    let fx = fixture().await;
    let unlisted_id = Uuid::new_v4();
    fx.properties
        .insert(Property {
            id: unlisted_id,
            owner_id: fx.owner_id,
            title: "Closed flat".to_string(),
            location: "Leeds".to_string(),
            price_per_night: Decimal::from(80),
            max_guests: 2,
            is_available: false,
        })
        .await;

    let mut request = booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2);
    request.property_id = unlisted_id;
    let result = fx
        .service
        .create_reservation(fx.renter_id, UserRole::Renter, request)
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Reservation(
            ReservationError::PropertyUnavailable
        ))
    ));
}

#[tokio::test]
async fn capacity_check_runs_before_conflict_check() {
    let fx = fixture().await;
    // Even with a conflicting confirmed booking in place, five guests
    // against a four-guest property must fail on capacity first.
    seed_confirmed(&fx, date(2024, 6, 1), date(2024, 6, 4)).await;

    let result = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 5),
        )
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Reservation(ReservationError::CapacityExceeded {
            max_guests: 4
        }))
    ));
}

#[tokio::test]
async fn create_rejects_empty_date_range() {
    let fx = fixture().await;
    let result = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 4), date(2024, 6, 4), 2),
        )
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Reservation(ReservationError::InvalidDateRange))
    ));
}

#[tokio::test]
async fn contained_overlap_is_a_conflict() {
    let fx = fixture().await;
    seed_confirmed(&fx, date(2024, 6, 2), date(2024, 6, 5)).await;

    let result = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 3), date(2024, 6, 4), 2),
        )
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Reservation(ReservationError::DateConflict))
    ));
}

#[tokio::test]
async fn touching_checkout_boundary_is_not_a_conflict() {
    let fx = fixture().await;
    seed_confirmed(&fx, date(2024, 6, 2), date(2024, 6, 5)).await;

    let view = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 5), date(2024, 6, 7), 2),
        )
        .await
        .unwrap();
    assert_eq!(view.status, ReservationStatus::Pending);
}

#[tokio::test]
async fn pending_reservations_do_not_block() {
    let fx = fixture().await;
    fx.service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();

    // Same dates again while the first request is still pending
    let second = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await;
    assert!(second.is_ok());
}

#[tokio::test]
async fn notification_failure_does_not_fail_creation() {
    let fx = fixture().await;
    let service = ReservationService::new(
        fx.properties.clone(),
        fx.reservations.clone(),
        fx.users.clone(),
        Arc::new(FailingNotificationDispatcher),
    );

    let view = service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();
    assert_eq!(view.status, ReservationStatus::Pending);
}

#[tokio::test]
async fn owner_confirms_pending_reservation() {
    let fx = fixture().await;
    let view = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();

    fx.service
        .update_status(view.id, fx.owner_id, ReservationStatus::Confirmed)
        .await
        .unwrap();

    let stored = fx.reservations.find_by_id(view.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ReservationStatus::Confirmed);
    assert!(stored.confirmed_at.is_some());

    // Requester was told about the outcome
    let sent = fx.notifier.sent().await;
    let outcome = sent
        .iter()
        .find(|n| n.kind == NotificationType::ReservationConfirmed)
        .unwrap();
    assert_eq!(outcome.user_id, fx.renter_id);
}

#[tokio::test]
async fn second_decision_fails_with_invalid_transition() {
    let fx = fixture().await;
    let view = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();

    fx.service
        .update_status(view.id, fx.owner_id, ReservationStatus::Confirmed)
        .await
        .unwrap();
    let result = fx
        .service
        .update_status(view.id, fx.owner_id, ReservationStatus::Rejected)
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Reservation(
            ReservationError::InvalidTransition { .. }
        ))
    ));
}

#[tokio::test]
async fn only_the_property_owner_may_decide() {
    let fx = fixture().await;
    let view = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();

    let result = fx
        .service
        .update_status(view.id, Uuid::new_v4(), ReservationStatus::Confirmed)
        .await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
}

#[tokio::test]
async fn decision_must_be_confirmed_or_rejected() {
    let fx = fixture().await;
    let view = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();

    let result = fx
        .service
        .update_status(view.id, fx.owner_id, ReservationStatus::Cancelled)
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Reservation(
            ReservationError::InvalidTransition { .. }
        ))
    ));
}

#[tokio::test]
async fn requester_cancels_then_cancel_is_idempotent_error() {
    let fx = fixture().await;
    let view = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();

    fx.service.cancel(view.id, fx.renter_id).await.unwrap();
    let stored = fx.reservations.find_by_id(view.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ReservationStatus::Cancelled);

    let second = fx.service.cancel(view.id, fx.renter_id).await;
    assert!(matches!(
        second,
        Err(DomainError::Reservation(ReservationError::AlreadyCancelled))
    ));
    let unchanged = fx.reservations.find_by_id(view.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status, ReservationStatus::Cancelled);
}

#[tokio::test]
async fn only_the_requester_may_cancel() {
    let fx = fixture().await;
    let view = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();

    let result = fx.service.cancel(view.id, fx.owner_id).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
}

#[tokio::test]
async fn completed_reservation_cannot_be_cancelled() {
    let fx = fixture().await;
    let mut reservation = Reservation::new(
        fx.renter_id,
        fx.property_id,
        stay(date(2024, 5, 1), date(2024, 5, 3)),
        2,
        Decimal::from(200),
        None,
    );
    reservation.confirm().unwrap();
    reservation.complete().unwrap();
    fx.reservations.seed(reservation.clone()).await;

    let result = fx.service.cancel(reservation.id, fx.renter_id).await;
    assert!(matches!(
        result,
        Err(DomainError::Reservation(
            ReservationError::InvalidTransition { .. }
        ))
    ));
}

#[tokio::test]
async fn renter_cannot_view_someone_elses_reservation() {
    let fx = fixture().await;
    let view = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();

    let result = fx
        .service
        .get_reservation(view.id, Uuid::new_v4(), UserRole::Renter)
        .await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));

    // The property owner may view it
    let owner_view = fx
        .service
        .get_reservation(view.id, fx.owner_id, UserRole::Owner)
        .await
        .unwrap();
    assert_eq!(owner_view.id, view.id);
}

#[tokio::test]
async fn listing_returns_newest_first() {
    let fx = fixture().await;
    let first = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 6, 1), date(2024, 6, 4), 2),
        )
        .await
        .unwrap();
    let second = fx
        .service
        .create_reservation(
            fx.renter_id,
            UserRole::Renter,
            booking(&fx, date(2024, 7, 1), date(2024, 7, 4), 2),
        )
        .await
        .unwrap();

    let mine = fx
        .service
        .list_for_user(fx.renter_id, UserRole::Renter)
        .await
        .unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].id, second.id);
    assert_eq!(mine[1].id, first.id);

    let owners = fx
        .service
        .list_for_user(fx.owner_id, UserRole::Owner)
        .await
        .unwrap();
    assert_eq!(owners.len(), 2);
}
