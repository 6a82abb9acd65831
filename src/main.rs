use fallible::{
    config::parse_config,
    users::{User, UserTable},
    Maybe, Outcome, OutcomeArms,
};
use log::{info, warn};

fn maybe_basics() {
    let name = Maybe::present("Alice");
    let empty = Maybe::<&str>::absent();

    info!(
        "name present: {}, empty absent: {}",
        name.is_present(),
        empty.is_absent()
    );
    info!(
        "unwrap: {}, unwrap_or: {}",
        name.unwrap(),
        empty.unwrap_or("default")
    );
    info!("upper: {}", name.map(|n| n.to_uppercase()).unwrap());
    info!("long name: {:?}", name.filter(|n| n.len() > 10));
    info!("zip: {:?}", Maybe::present(1).zip(Maybe::present(2)));
    info!(
        "as option: {:?}, as json: {}",
        name.into_option(),
        empty.into_json()
    );
}

fn outcome_basics() {
    let success: Outcome<i32, &str> = Outcome::success(42);
    let failure: Outcome<i32, &str> = Outcome::failure("not found");

    info!("doubled: {}", success.map(|n| n * 2).unwrap());
    info!("recovered: {}", failure.unwrap_or(0));
    info!(
        "mapped error: {}",
        failure.map_err(|e| format!("Error: {}", e)).unwrap_err()
    );

    let combined = Outcome::combine([
        Outcome::success(1),
        Outcome::failure("oops"),
        Outcome::success(3),
    ]);
    info!("combined: {:?}", combined);

    failure.match_with(OutcomeArms {
        success: |v| info!("Success: {}", v),
        failure: |e| warn!("Error: {}", e),
    });
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    maybe_basics();
    outcome_basics();

    let users = UserTable::new(vec![
        User {
            id: 1,
            name: "Alice".into(),
            email: Some("alice@example.com".into()),
        },
        User {
            id: 2,
            name: "Bob".into(),
            email: None,
        },
    ]);

    for id in [1, 2, 99] {
        info!(
            "user {}: {} / {}",
            id,
            users.email(id).unwrap_or("no email"),
            users.describe(id)
        );
    }

    for raw in ["not json", r#"{"port": 3000}"#] {
        if let Outcome::Failure(e) = parse_config(raw) {
            warn!("config {:?} rejected: {}", raw, e);
        }
    }

    let config = parse_config(r#"{"port": 3000, "host": "localhost"}"#).into_result()?;
    info!("listening on {}:{}", config.host, config.port);

    Ok(())
}
