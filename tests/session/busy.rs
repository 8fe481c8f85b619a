use std::sync::Arc;

use crate::common::{client_for, mock_profile_page, setup_server};
use tiktok_profile::{Presenter, RegionTable, Session, TtError};

#[tokio::test]
async fn second_submit_while_pending_is_busy() {
    let server = setup_server();
    let mock = mock_profile_page(&server, "alice");
    let client = client_for(&server);
    let session = Session::new(
        client.clone(),
        Presenter::new(client, Arc::new(RegionTable::builtin())),
    );

    let first = session.submit("alice", false).unwrap();
    assert!(session.is_busy());
    assert!(matches!(session.submit("alice", false), Err(TtError::Busy)));

    let outcome = first.wait().await;
    assert!(outcome.is_success());
    assert!(!session.is_busy());

    let again = session.submit("alice", false).unwrap().wait().await;
    assert!(again.is_success());
    mock.assert_hits(2);
}

#[tokio::test]
async fn clones_share_the_in_flight_slot() {
    let server = setup_server();
    let _mock = mock_profile_page(&server, "alice");
    let client = client_for(&server);
    let session = Session::new(
        client.clone(),
        Presenter::new(client, Arc::new(RegionTable::builtin())),
    );
    let other = session.clone();

    let pending = session.submit("alice", false).unwrap();
    assert!(matches!(other.submit("alice", false), Err(TtError::Busy)));
    pending.wait().await;
    assert!(!other.is_busy());
}

#[test]
fn submit_outside_runtime_is_an_error() {
    let client = tiktok_profile::TtClient::default();
    let session = Session::new(
        client.clone(),
        Presenter::new(client, Arc::new(RegionTable::builtin())),
    );

    assert!(matches!(session.submit("alice", false), Err(TtError::NoRuntime)));
    assert!(!session.is_busy());
}
