//! Walkthroughs of the main registration and reallocation flows.

use amity_domain::RoomCategory;

use super::e2e_helpers::{deterministic_app, request};
use crate::use_cases::{
    AllocationError, AllocationOutcome, CreateRoomError, Filter, QueryError, ReallocationError,
};

#[tokio::test]
async fn duplicate_room_name_is_rejected() {
    let app = deterministic_app();
    let create = &app.use_cases.rooms.create;

    let valhalla = create.execute("Valhalla", "office").await.unwrap();
    assert_eq!(valhalla.capacity(), 6);

    let result = create.execute("Valhalla", "office").await;
    assert!(matches!(result, Err(CreateRoomError::DuplicateName(_))));

    let rooms = app.use_cases.queries.list_rooms(Filter::All).await.unwrap();
    assert_eq!(rooms, vec![valhalla]);
}

#[tokio::test]
async fn fellow_gets_one_office_and_one_living_space() {
    let app = deterministic_app();
    let office = app
        .use_cases
        .rooms
        .create
        .execute("Valhalla", "office")
        .await
        .unwrap();
    let living = app
        .use_cases
        .rooms
        .create
        .execute("Hogwarts", "living_space")
        .await
        .unwrap();

    let registration = app
        .use_cases
        .people
        .register
        .execute(request("Ada", "Lovelace", "fellow", true))
        .await
        .unwrap();
    let ada = registration.person.id();

    let queries = &app.use_cases.queries;
    assert_eq!(queries.office_for_person(ada).await.unwrap().id(), office.id());
    assert_eq!(
        queries.living_space_for_person(ada).await.unwrap().id(),
        living.id()
    );
    assert!(queries.person_detail(ada).await.unwrap().person.is_accommodated());

    let offices = queries
        .list_rooms(Filter::Only(RoomCategory::Office))
        .await
        .unwrap();
    let holding: usize = offices.iter().filter(|r| r.contains(ada)).count();
    assert_eq!(holding, 1);
}

#[tokio::test]
async fn staff_get_office_and_policy_notice() {
    let app = deterministic_app();
    app.use_cases
        .rooms
        .create
        .execute("Valhalla", "office")
        .await
        .unwrap();
    let living = app
        .use_cases
        .rooms
        .create
        .execute("Hogwarts", "living_space")
        .await
        .unwrap();

    let registration = app
        .use_cases
        .people
        .register
        .execute(request("Bob", "Stone", "staff", true))
        .await
        .unwrap();

    assert!(registration.office.is_allocated());
    assert!(matches!(
        registration.living_space,
        AllocationOutcome::NotEligible { .. }
    ));
    assert!(!registration.person.is_accommodated());

    let detail = app.use_cases.queries.room_detail(living.id()).await.unwrap();
    assert!(detail.occupants.is_empty());
}

#[tokio::test]
async fn registration_without_offices_still_registers() {
    let app = deterministic_app();

    let registration = app
        .use_cases
        .people
        .register
        .execute(request("Daniel", "Maina", "staff", false))
        .await
        .unwrap();

    assert!(matches!(
        registration.office,
        AllocationOutcome::Unavailable { .. }
    ));
    let people = app
        .use_cases
        .queries
        .list_people(Filter::All)
        .await
        .unwrap();
    assert_eq!(people, vec![registration.person]);
    assert!(matches!(
        app.use_cases.queries.allocated_people().await,
        Err(QueryError::Empty(_))
    ));
}

#[tokio::test]
async fn allocating_office_with_only_living_spaces_fails() {
    let app = deterministic_app();
    app.use_cases
        .rooms
        .create
        .execute("Hogwarts", "living_space")
        .await
        .unwrap();
    let grace = app
        .use_cases
        .people
        .register
        .add_person("Grace", "Hopper", "fellow")
        .await
        .unwrap();

    let result = app
        .use_cases
        .allocation
        .execute(grace.id(), RoomCategory::Office)
        .await;

    assert!(matches!(
        result,
        Err(AllocationError::NoAvailableRoom(RoomCategory::Office))
    ));
    let people = app.use_cases.queries.list_people(Filter::All).await.unwrap();
    assert_eq!(people, vec![grace]);
}

#[tokio::test]
async fn reallocating_into_full_office_keeps_person_in_place() {
    let app = deterministic_app();
    let create = &app.use_cases.rooms.create;
    let register = &app.use_cases.people.register;

    // First office fills up to capacity; FixedRandom(0) always picks the
    // first office with a free slot.
    let b = create.execute("Beta", "office").await.unwrap();
    for i in 0..6 {
        register
            .execute(request(&format!("Filler{}", i), "Person", "staff", false))
            .await
            .unwrap();
    }
    let a = create.execute("Alpha", "office").await.unwrap();
    let ada = register
        .execute(request("Ada", "Lovelace", "fellow", false))
        .await
        .unwrap();
    assert_eq!(
        ada.office.allocation().map(|alloc| alloc.room_id),
        Some(a.id())
    );

    let result = app
        .use_cases
        .reallocation
        .execute(ada.person.id(), b.id(), RoomCategory::Office)
        .await;

    assert!(matches!(result, Err(ReallocationError::RoomFull { .. })));
    let queries = &app.use_cases.queries;
    assert_eq!(
        queries.office_for_person(ada.person.id()).await.unwrap().id(),
        a.id()
    );
    assert_eq!(queries.room_detail(b.id()).await.unwrap().occupants.len(), 6);
}

#[tokio::test]
async fn reallocating_office_to_living_space_is_a_mismatch() {
    let app = deterministic_app();
    let create = &app.use_cases.rooms.create;
    create.execute("Alpha", "office").await.unwrap();
    let living = create.execute("Hogwarts", "living_space").await.unwrap();
    let ada = app
        .use_cases
        .people
        .register
        .execute(request("Ada", "Lovelace", "fellow", false))
        .await
        .unwrap();

    let result = app
        .use_cases
        .reallocation
        .execute(ada.person.id(), living.id(), RoomCategory::Office)
        .await;

    assert!(matches!(
        result,
        Err(ReallocationError::CategoryMismatch { .. })
    ));
    assert!(matches!(
        app.use_cases
            .queries
            .living_space_for_person(ada.person.id())
            .await,
        Err(QueryError::NotAllocated { .. })
    ));
}

#[tokio::test]
async fn successful_reallocation_moves_not_copies() {
    let app = deterministic_app();
    let create = &app.use_cases.rooms.create;
    let a = create.execute("Alpha", "office").await.unwrap();
    let b = create.execute("Beta", "office").await.unwrap();
    let ada = app
        .use_cases
        .people
        .register
        .execute(request("Ada", "Lovelace", "fellow", false))
        .await
        .unwrap();
    let ada_id = ada.person.id();

    let moved = app
        .use_cases
        .reallocation
        .execute(ada_id, b.id(), RoomCategory::Office)
        .await
        .unwrap();
    assert_eq!(moved.from_room_id, a.id());

    let queries = &app.use_cases.queries;
    assert!(queries.room_detail(a.id()).await.unwrap().occupants.is_empty());
    assert_eq!(
        queries.room_detail(b.id()).await.unwrap().occupants[0].id(),
        ada_id
    );
    assert_eq!(queries.office_for_person(ada_id).await.unwrap().id(), b.id());
}
