//! Amity Engine - demo runner.
//!
//! Seeds a few rooms and people into a fresh in-memory system and prints the
//! resulting listings.

use amity_domain::{Accommodation, PersonCategory, RoomCategory};
use amity_engine::infrastructure::config::AmityConfig;
use amity_engine::use_cases::{AllocationOutcome, Filter, RegisterPersonInput, Registration};
use amity_engine::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "amity_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Amity Engine");

    let config = AmityConfig::from_env();
    tracing::info!(
        office_capacity = config.capacities.office(),
        living_space_capacity = config.capacities.living_space(),
        seeded = config.random_seed.is_some(),
        "Configuration loaded"
    );

    let app = App::in_memory(&config);
    let rooms = &app.use_cases.rooms.create;
    let register = &app.use_cases.people.register;
    let queries = &app.use_cases.queries;

    let valhalla = rooms.execute("Valhalla", "office").await?;
    let ruby = rooms.execute("Ruby", "office").await?;
    rooms.execute("Python", "office").await?;
    rooms.execute("Hogwarts", "living_space").await?;

    if let Err(e) = rooms.execute("Valhalla", "office").await {
        println!("{}", e);
    }

    let daniel = register
        .execute(RegisterPersonInput {
            first_name: "Daniel".into(),
            last_name: "Maina".into(),
            category: PersonCategory::Staff.to_string(),
            accommodation: "yes".parse()?,
        })
        .await?;
    print_registration(&daniel);

    let ada = register
        .execute(RegisterPersonInput {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            category: PersonCategory::Fellow.to_string(),
            accommodation: Accommodation::Wanted,
        })
        .await?;
    print_registration(&ada);

    // Added first, allocated afterwards.
    let grace = register.add_person("Grace", "Hopper", "fellow").await?;
    match app
        .use_cases
        .allocation
        .execute(grace.id(), RoomCategory::Office)
        .await
    {
        Ok(allocation) => println!(
            "{} has been allocated to office {}",
            grace.full_name(),
            allocation.room_name
        ),
        Err(e) => println!("{}", e),
    }

    println!("\n== People");
    for person in queries.list_people(Filter::All).await? {
        println!("{}", person);
    }

    println!("\n== Rooms");
    for room in queries.list_rooms(Filter::All).await? {
        println!("{}", room);
    }

    println!("\n== {}", valhalla.name());
    print!("{}", queries.room_detail(valhalla.id()).await?);

    match queries.living_space_for_person(daniel.person.id()).await {
        Ok(room) => println!("\n{} lives in {}", daniel.person.full_name(), room.name()),
        Err(e) => println!("\n{}", e),
    }

    println!("\n== Allocated");
    for detail in queries.allocated_people().await? {
        println!("{}", detail);
    }

    let target = if daniel
        .office
        .allocation()
        .is_some_and(|a| a.room_id == ruby.id())
    {
        valhalla.id()
    } else {
        ruby.id()
    };
    match app
        .use_cases
        .reallocation
        .execute(daniel.person.id(), target, RoomCategory::Office)
        .await
    {
        Ok(moved) => println!(
            "\n{} moved from {} to {}",
            daniel.person.full_name(),
            moved.from_room_name,
            moved.to_room_name
        ),
        Err(e) => println!("\nReallocation failed: {}", e),
    }

    println!("\n== Rooms");
    for room in queries.list_rooms(Filter::All).await? {
        println!("{}", room);
    }

    Ok(())
}

fn print_registration(registration: &Registration) {
    let name = registration.person.full_name();
    for (label, outcome) in [
        ("office", &registration.office),
        ("living space", &registration.living_space),
    ] {
        match outcome {
            AllocationOutcome::Allocated(allocation) => println!(
                "{} has been allocated to {} {}",
                name, label, allocation.room_name
            ),
            AllocationOutcome::Unavailable { reason } => {
                println!("{} was not allocated a {}: {}", name, label, reason)
            }
            AllocationOutcome::NotEligible { notice } => println!("{}", notice),
            AllocationOutcome::NotRequested => {}
        }
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
