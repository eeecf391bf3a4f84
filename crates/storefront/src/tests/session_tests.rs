use std::time::Duration;

use shared::{domain::ArtworkId, protocol::CheckoutStep};

use super::*;

#[tokio::test]
async fn sessions_are_isolated() {
    let catalog = Catalog::seeded();
    let sessions = Sessions::new();
    let first = sessions.create(&catalog).await.expect("first");
    let second = sessions.create(&catalog).await.expect("second");
    assert_ne!(first, second);
    assert_eq!(sessions.len().await, 2);

    {
        let session = sessions.get(first).await.expect("session");
        let mut session = session.lock().await;
        let artwork = catalog.artwork(ArtworkId(1)).expect("artwork");
        session.cart.add(artwork).expect("add");
        session.cart.proceed_to_checkout().expect("checkout");
    }

    let other = sessions.get(second).await.expect("session");
    let other = other.lock().await;
    assert!(other.cart.items().is_empty());
    assert_eq!(other.cart.step(), CheckoutStep::Cart);
}

#[tokio::test]
async fn unknown_sessions_are_reported() {
    let sessions = Sessions::new();
    let id = SessionId::new();
    assert!(matches!(sessions.get(id).await, Err(FlowError::UnknownSession(missing)) if missing == id));
    assert!(!sessions.remove(id).await);
    assert!(sessions.is_empty().await);
}

#[tokio::test]
async fn removed_sessions_are_gone() {
    let catalog = Catalog::seeded();
    let sessions = Sessions::new();
    let id = sessions.create(&catalog).await.expect("create");
    assert!(sessions.remove(id).await);
    assert!(sessions.get(id).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn idle_sessions_are_purged_and_active_ones_kept() {
    let catalog = Catalog::seeded();
    let sessions = Sessions::new();
    let idle = sessions.create(&catalog).await.expect("idle");
    let active = sessions.create(&catalog).await.expect("active");

    tokio::time::advance(Duration::from_secs(20 * 60)).await;
    sessions.get(active).await.expect("touch");
    tokio::time::advance(Duration::from_secs(15 * 60)).await;

    assert_eq!(sessions.purge_idle(Duration::from_secs(30 * 60)).await, 1);
    assert_eq!(sessions.len().await, 1);
    assert!(matches!(sessions.get(idle).await, Err(FlowError::UnknownSession(_))));
    assert!(sessions.get(active).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn sweeper_shrinks_the_table_and_stops_when_dropped() {
    let catalog = Catalog::seeded();
    let sessions = Sessions::new();
    for _ in 0..5 {
        sessions.create(&catalog).await.expect("create");
    }

    let sweeper = sessions.spawn_sweeper(Duration::from_secs(60), Duration::from_secs(10));
    tokio::time::sleep(Duration::from_secs(75)).await;
    assert!(sessions.is_empty().await);

    drop(sweeper);
    let late = sessions.create(&catalog).await.expect("create");
    tokio::time::sleep(Duration::from_secs(600)).await;
    assert_eq!(sessions.len().await, 1);
    assert!(sessions.get(late).await.is_ok());
}
