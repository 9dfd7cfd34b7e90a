mod support;

use rust_decimal::Decimal;
use time::macros::date;
use uuid::Uuid;

use application::service::{
    AvailabilityService, ChangeBookingStatusService, CreateBookingService, GetBookingService,
};
use application::transfer::{
    ChangeBookingStatusDto, CheckAvailabilityDto, CreateBookingDto, GetOwnerBookingsDto,
    GetUserBookingsDto, IsCarAvailableDto,
};
use kernel::prelude::entity::{BookingStatus, UserRole};
use kernel::KernelError;

use support::{make_car, make_user, MockDatabase};

struct Fixture {
    db: MockDatabase,
    owner_id: Uuid,
    renter_id: Uuid,
    car_id: Uuid,
}

fn fixture(rate: i64) -> Fixture {
    let db = MockDatabase::default();
    let owner = make_user(UserRole::Owner);
    let renter = make_user(UserRole::Customer);
    let car = make_car(&owner, "Yerevan", rate);

    let owner_id = *owner.id().as_ref();
    let renter_id = *renter.id().as_ref();
    let car_id = *car.id().as_ref();
    db.insert_user(owner);
    db.insert_user(renter);
    db.insert_car(car);
    Fixture {
        db,
        owner_id,
        renter_id,
        car_id,
    }
}

#[tokio::test]
async fn booking_three_days_at_thousand_prices_three_thousand() {
    let f = fixture(1000);

    let booking = f
        .db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: f.car_id,
            pickup_date: date!(2024 - 06 - 01),
            return_date: date!(2024 - 06 - 04),
        })
        .await
        .unwrap();

    assert_eq!(booking.price, Decimal::from(3000));
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.owner_id, f.owner_id);
    assert_eq!(booking.user_id, f.renter_id);

    let listed = f
        .db
        .get_user_bookings(GetUserBookingsDto {
            user_id: f.renter_id,
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, booking.id);
}

#[tokio::test]
async fn same_day_booking_bills_one_day() {
    let f = fixture(500);

    let booking = f
        .db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: f.car_id,
            pickup_date: date!(2024 - 06 - 10),
            return_date: date!(2024 - 06 - 10),
        })
        .await
        .unwrap();

    assert_eq!(booking.price, Decimal::from(500));
}

#[tokio::test]
async fn sequential_overlapping_bookings_are_rejected() {
    let f = fixture(100);

    f.db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: f.car_id,
            pickup_date: date!(2024 - 01 - 05),
            return_date: date!(2024 - 01 - 10),
        })
        .await
        .unwrap();

    let overlap = f
        .db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: f.car_id,
            pickup_date: date!(2024 - 01 - 08),
            return_date: date!(2024 - 01 - 12),
        })
        .await
        .expect_err("overlapping booking must be rejected");
    assert!(matches!(
        overlap.current_context(),
        KernelError::Unavailable
    ));

    // The day after the return date is free again.
    f.db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: f.car_id,
            pickup_date: date!(2024 - 01 - 11),
            return_date: date!(2024 - 01 - 15),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn availability_mirrors_overlap_rule() {
    let f = fixture(100);

    f.db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: f.car_id,
            pickup_date: date!(2024 - 01 - 05),
            return_date: date!(2024 - 01 - 10),
        })
        .await
        .unwrap();

    let blocked = f
        .db
        .is_car_available(IsCarAvailableDto {
            car_id: f.car_id,
            pickup_date: date!(2024 - 01 - 08),
            return_date: date!(2024 - 01 - 12),
        })
        .await
        .unwrap();
    assert!(!blocked);

    let free = f
        .db
        .is_car_available(IsCarAvailableDto {
            car_id: f.car_id,
            pickup_date: date!(2024 - 01 - 11),
            return_date: date!(2024 - 01 - 15),
        })
        .await
        .unwrap();
    assert!(free);
}

#[tokio::test]
async fn cancelled_bookings_free_the_calendar() {
    let f = fixture(100);

    let booking = f
        .db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: f.car_id,
            pickup_date: date!(2024 - 01 - 05),
            return_date: date!(2024 - 01 - 10),
        })
        .await
        .unwrap();

    f.db
        .change_status(ChangeBookingStatusDto {
            requester_id: f.owner_id,
            booking_id: booking.id,
            status: "cancelled".to_string(),
        })
        .await
        .unwrap();

    let available = f
        .db
        .is_car_available(IsCarAvailableDto {
            car_id: f.car_id,
            pickup_date: date!(2024 - 01 - 05),
            return_date: date!(2024 - 01 - 10),
        })
        .await
        .unwrap();
    assert!(available);
}

#[tokio::test]
async fn search_filters_by_location_listing_and_dates() {
    let db = MockDatabase::default();
    let owner = make_user(UserRole::Owner);
    let renter = make_user(UserRole::Customer);
    let renter_id = *renter.id().as_ref();

    let free_car = make_car(&owner, "Yerevan", 100);
    let booked_car = make_car(&owner, "Yerevan", 100);
    let elsewhere = make_car(&owner, "Gyumri", 100);
    let free_car_id = *free_car.id().as_ref();
    let booked_car_id = *booked_car.id().as_ref();

    db.insert_user(owner);
    db.insert_user(renter);
    db.insert_car(free_car);
    db.insert_car(booked_car);
    db.insert_car(elsewhere);

    db.create_booking(CreateBookingDto {
        user_id: renter_id,
        car_id: booked_car_id,
        pickup_date: date!(2024 - 03 - 01),
        return_date: date!(2024 - 03 - 05),
    })
    .await
    .unwrap();

    let available = db
        .search_available_cars(CheckAvailabilityDto {
            location: "Yerevan".to_string(),
            pickup_date: date!(2024 - 03 - 03),
            return_date: date!(2024 - 03 - 06),
        })
        .await
        .unwrap();

    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, free_car_id);
}

#[tokio::test]
async fn booking_unknown_car_reports_not_found() {
    let f = fixture(100);

    let report = f
        .db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: Uuid::new_v4(),
            pickup_date: date!(2024 - 01 - 01),
            return_date: date!(2024 - 01 - 02),
        })
        .await
        .expect_err("unknown car must be rejected");
    assert!(matches!(report.current_context(), KernelError::NotFound));
}

#[tokio::test]
async fn only_the_owner_may_change_status() {
    let f = fixture(100);

    let booking = f
        .db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: f.car_id,
            pickup_date: date!(2024 - 04 - 01),
            return_date: date!(2024 - 04 - 03),
        })
        .await
        .unwrap();

    // Neither the renter nor a stranger is the booking owner.
    for requester in [f.renter_id, Uuid::new_v4()] {
        let report = f
            .db
            .change_status(ChangeBookingStatusDto {
                requester_id: requester,
                booking_id: booking.id,
                status: "confirmed".to_string(),
            })
            .await
            .expect_err("non-owner must be rejected");
        assert!(matches!(
            report.current_context(),
            KernelError::Unauthorized
        ));
    }

    let stored = f.db.booking(booking.id).unwrap();
    assert_eq!(stored.status(), &BookingStatus::Pending);
}

#[tokio::test]
async fn owner_confirmation_shows_up_in_user_listing() {
    let f = fixture(100);

    let booking = f
        .db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: f.car_id,
            pickup_date: date!(2024 - 04 - 01),
            return_date: date!(2024 - 04 - 03),
        })
        .await
        .unwrap();

    f.db
        .change_status(ChangeBookingStatusDto {
            requester_id: f.owner_id,
            booking_id: booking.id,
            status: "confirmed".to_string(),
        })
        .await
        .unwrap();

    let listed = f
        .db
        .get_user_bookings(GetUserBookingsDto {
            user_id: f.renter_id,
        })
        .await
        .unwrap();
    assert_eq!(listed[0].status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn transitions_out_of_terminal_states_are_rejected() {
    let f = fixture(100);

    let booking = f
        .db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: f.car_id,
            pickup_date: date!(2024 - 04 - 01),
            return_date: date!(2024 - 04 - 03),
        })
        .await
        .unwrap();

    // A pending -> pending no-op is not a transition either.
    let noop = f
        .db
        .change_status(ChangeBookingStatusDto {
            requester_id: f.owner_id,
            booking_id: booking.id,
            status: "pending".to_string(),
        })
        .await
        .expect_err("no-op transition must be rejected");
    assert!(matches!(
        noop.current_context(),
        KernelError::InvalidTransition
    ));

    f.db
        .change_status(ChangeBookingStatusDto {
            requester_id: f.owner_id,
            booking_id: booking.id,
            status: "confirmed".to_string(),
        })
        .await
        .unwrap();

    let out_of_terminal = f
        .db
        .change_status(ChangeBookingStatusDto {
            requester_id: f.owner_id,
            booking_id: booking.id,
            status: "cancelled".to_string(),
        })
        .await
        .expect_err("confirmed is terminal");
    assert!(matches!(
        out_of_terminal.current_context(),
        KernelError::InvalidTransition
    ));
}

#[tokio::test]
async fn repeated_cancellation_changes_nothing() {
    let f = fixture(100);

    let booking = f
        .db
        .create_booking(CreateBookingDto {
            user_id: f.renter_id,
            car_id: f.car_id,
            pickup_date: date!(2024 - 04 - 01),
            return_date: date!(2024 - 04 - 03),
        })
        .await
        .unwrap();

    f.db
        .change_status(ChangeBookingStatusDto {
            requester_id: f.owner_id,
            booking_id: booking.id,
            status: "cancelled".to_string(),
        })
        .await
        .unwrap();
    let cancelled = f.db.booking(booking.id).unwrap();

    let second = f
        .db
        .change_status(ChangeBookingStatusDto {
            requester_id: f.owner_id,
            booking_id: booking.id,
            status: "cancelled".to_string(),
        })
        .await
        .expect_err("second cancel is rejected");
    assert!(matches!(
        second.current_context(),
        KernelError::InvalidTransition
    ));

    // Price and dates are untouched by the rejected transition.
    let after = f.db.booking(booking.id).unwrap();
    assert_eq!(after, cancelled);
}

#[tokio::test]
async fn owner_listing_requires_owner_role() {
    let f = fixture(100);

    let report = f
        .db
        .get_owner_bookings(GetOwnerBookingsDto {
            owner_id: f.renter_id,
            role: UserRole::Customer,
        })
        .await
        .expect_err("customers have no fleet bookings");
    assert!(matches!(
        report.current_context(),
        KernelError::Unauthorized
    ));

    let bookings = f
        .db
        .get_owner_bookings(GetOwnerBookingsDto {
            owner_id: f.owner_id,
            role: UserRole::Owner,
        })
        .await
        .unwrap();
    assert!(bookings.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_double_booking_yields_exactly_one_success() {
    let f = fixture(100);

    let dto = CreateBookingDto {
        user_id: f.renter_id,
        car_id: f.car_id,
        pickup_date: date!(2024 - 05 - 01),
        return_date: date!(2024 - 05 - 03),
    };

    let db_a = f.db.clone();
    let db_b = f.db.clone();
    let dto_a = dto.clone();
    let dto_b = dto.clone();
    let task_a = tokio::spawn(async move { db_a.create_booking(dto_a).await });
    let task_b = tokio::spawn(async move { db_b.create_booking(dto_b).await });

    let result_a = task_a.await.unwrap();
    let result_b = task_b.await.unwrap();

    let successes = [&result_a, &result_b]
        .iter()
        .filter(|result| result.is_ok())
        .count();
    assert_eq!(successes, 1);

    let failure = [result_a, result_b]
        .into_iter()
        .find(|result| result.is_err())
        .unwrap()
        .unwrap_err();
    assert!(matches!(
        failure.current_context(),
        KernelError::Unavailable
    ));
}
