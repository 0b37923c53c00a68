use armada::{EngineError, SessionStore, Status};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use uuid::Uuid;

#[test]
fn unknown_session_id_rejected_everywhere() {
    let mut store = SessionStore::new();
    let mut rng = SmallRng::seed_from_u64(30);
    let ghost = Uuid::new_v4();
    let player = Uuid::new_v4();

    assert_eq!(
        store.attach(ghost, player, "carol", &mut rng),
        Err(EngineError::SessionNotFound)
    );
    assert_eq!(
        store.challenge_ai(ghost, player, &mut rng),
        Err(EngineError::SessionNotFound)
    );
    assert_eq!(
        store.fire(ghost, player, 0, 0).unwrap_err(),
        EngineError::SessionNotFound
    );
    assert_eq!(
        store.ai_turn(ghost, &mut rng),
        Err(EngineError::SessionNotFound)
    );
    assert_eq!(
        store.view(ghost, None).unwrap_err(),
        EngineError::SessionNotFound
    );
    assert!(store.get(ghost).is_none());
}

#[test]
fn create_join_and_fire_through_the_store() {
    let mut store = SessionStore::new();
    let mut rng = SmallRng::seed_from_u64(31);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let id = store.create(alice, "alice", &mut rng).unwrap();
    assert_eq!(store.view(id, None).unwrap().status, Status::Open);

    store.attach(id, bob, "bob", &mut rng).unwrap();
    assert_eq!(store.view(id, None).unwrap().status, Status::Active);

    // joiner does not own the first turn
    assert_eq!(
        store.fire(id, bob, 0, 0).unwrap_err(),
        EngineError::NotYourTurn
    );
    let report = store.fire(id, alice, 0, 0).unwrap();
    assert!(!report.completed);
}

#[test]
fn list_is_newest_first_and_sanitized() {
    let mut store = SessionStore::new();
    let mut rng = SmallRng::seed_from_u64(32);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let first = store.create(alice, "alice", &mut rng).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = store.create(bob, "bob", &mut rng).unwrap();

    let listed = store.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second);
    assert_eq!(listed[1].id, first);
    assert_eq!(listed[0].player1.username, "bob");
    assert!(listed[0].player2.is_none());
    assert_eq!(listed[0].status, Status::Open);
    assert!(listed[0].winner.is_none());
}

#[test]
fn ai_challenge_and_turn_through_the_store() {
    let mut store = SessionStore::new();
    let mut rng = SmallRng::seed_from_u64(33);
    let alice = Uuid::new_v4();
    let id = store.create(alice, "alice", &mut rng).unwrap();

    assert_eq!(
        store.challenge_ai(id, Uuid::new_v4(), &mut rng),
        Err(EngineError::NotYourCreation)
    );
    store.challenge_ai(id, alice, &mut rng).unwrap();

    // human turn: AI invocation is an idempotent no-op
    assert_eq!(store.ai_turn(id, &mut rng), Ok(None));
    store.fire(id, alice, 0, 0).unwrap();
    let report = store.ai_turn(id, &mut rng).unwrap().expect("AI fired");
    assert!(report.target.in_bounds());
}
