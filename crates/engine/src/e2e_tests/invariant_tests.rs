//! Occupancy invariants under randomized load.

use amity_domain::{PersonCategory, RoomCategory};

use super::e2e_helpers::{request, seeded_app};
use crate::use_cases::Filter;
use crate::App;

async fn populate(app: &App, people: usize) {
    let create = &app.use_cases.rooms.create;
    for name in ["Valhalla", "Ruby", "Python"] {
        create.execute(name, "office").await.unwrap();
    }
    for name in ["Hogwarts", "Narnia"] {
        create.execute(name, "living_space").await.unwrap();
    }
    for i in 0..people {
        let category = if i % 3 == 0 { "staff" } else { "fellow" };
        app.use_cases
            .people
            .register
            .execute(request(&format!("Person{}", i), "Load", category, true))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn capacity_is_never_exceeded() {
    for seed in 0..5 {
        let app = seeded_app(seed);
        // More people than slots in either category.
        populate(&app, 30).await;

        let rooms = app.use_cases.queries.list_rooms(Filter::All).await.unwrap();
        for room in &rooms {
            assert!(room.occupied_count() <= room.capacity());
        }
        let offices: u32 = rooms
            .iter()
            .filter(|r| r.category() == RoomCategory::Office)
            .map(|r| r.occupied_count())
            .sum();
        // Three offices of six, all taken.
        assert_eq!(offices, 18);
    }
}

#[tokio::test]
async fn staff_never_occupy_living_spaces() {
    let app = seeded_app(7);
    populate(&app, 12).await;
    let queries = &app.use_cases.queries;

    let staff = queries
        .list_people(Filter::Only(PersonCategory::Staff))
        .await
        .unwrap();
    let living = queries
        .list_rooms(Filter::Only(RoomCategory::LivingSpace))
        .await
        .unwrap();
    for person in &staff {
        assert!(!person.is_accommodated());
        assert!(living.iter().all(|room| !room.contains(person.id())));
    }
}

#[tokio::test]
async fn nobody_holds_two_rooms_of_one_category() {
    let app = seeded_app(11);
    populate(&app, 20).await;
    let queries = &app.use_cases.queries;

    let rooms = queries.list_rooms(Filter::All).await.unwrap();
    let people = queries.list_people(Filter::All).await.unwrap();
    for person in &people {
        for category in RoomCategory::ALL {
            let held = rooms
                .iter()
                .filter(|r| r.category() == category && r.contains(person.id()))
                .count();
            assert!(held <= 1);
        }
        // The accommodation flag agrees with living-space occupancy.
        let in_living = queries.living_space_for_person(person.id()).await.is_ok();
        assert_eq!(in_living, person.is_accommodated());
    }
}
