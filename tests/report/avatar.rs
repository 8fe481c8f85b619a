use std::sync::Arc;

use crate::common::{alice_stats, alice_user, setup_server, user_detail};
use httpmock::Method::GET;
use serde_json::json;
use tiktok_profile::report::avatar_file_name;
use tiktok_profile::{AvatarSave, Presenter, ProfileSnapshot, RegionTable, TtClient, TtError};

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0xFF, 0xD9];

fn snapshot_with_avatar(url: &str) -> ProfileSnapshot {
    let mut user = alice_user();
    user["avatarLarger"] = json!(url);
    ProfileSnapshot::from_value(user_detail(user, alice_stats()))
}

fn presenter_in(dir: &std::path::Path) -> Presenter {
    Presenter::new(TtClient::default(), Arc::new(RegionTable::builtin())).output_dir(dir)
}

#[tokio::test]
async fn avatar_is_written_and_confirmed() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/avatar/alice.jpeg");
        then.status(200)
            .header("content-type", "image/jpeg")
            .body(JPEG_BYTES);
    });
    let dir = tempfile::tempdir().unwrap();

    let snapshot = snapshot_with_avatar(&server.url("/avatar/alice.jpeg"));
    let card = presenter_in(dir.path()).render(&snapshot, true).await.unwrap();
    mock.assert();

    let path = dir.path().join("alice_profile_pic.jpg");
    assert_eq!(std::fs::read(&path).unwrap(), JPEG_BYTES);
    assert!(card.avatar_saved());

    let text = card.to_string();
    assert!(text.contains("Followers: 10"));
    assert!(text.ends_with(&format!("Profile picture saved as {}\n", path.display())));
}

#[tokio::test]
async fn avatar_overwrites_existing_file() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/avatar/alice.jpeg");
        then.status(200).body(JPEG_BYTES);
    });
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(avatar_file_name("alice"));
    std::fs::write(&path, b"stale bytes from an older run").unwrap();

    let snapshot = snapshot_with_avatar(&server.url("/avatar/alice.jpeg"));
    presenter_in(dir.path()).render(&snapshot, true).await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), JPEG_BYTES);
}

#[tokio::test]
async fn avatar_failure_keeps_the_rest_of_the_report() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/avatar/alice.jpeg");
        then.status(500);
    });
    let dir = tempfile::tempdir().unwrap();

    let snapshot = snapshot_with_avatar(&server.url("/avatar/alice.jpeg"));
    let card = presenter_in(dir.path()).render(&snapshot, true).await.unwrap();
    mock.assert();

    assert!(matches!(
        card.avatar,
        Some(AvatarSave::Failed(TtError::Status { status: 500, .. }))
    ));
    assert!(!dir.path().join("alice_profile_pic.jpg").exists());

    let text = card.to_string();
    for line in [
        "Username: alice",
        "Nickname: Alice",
        "ID: 123",
        "Followers: 10",
        "Following: 2",
        "Likes: 100",
        "Videos: 5",
        "Bio: hi",
        "Country: United States 🇺🇸",
        "Error saving profile picture: ",
    ] {
        assert!(text.contains(line), "missing {line:?} in {text}");
    }
    assert!(!text.contains("Profile picture saved as"));
}

#[tokio::test]
async fn avatar_unreachable_host_is_soft_failure() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = snapshot_with_avatar("http://127.0.0.1:1/avatar.jpeg");

    let card = presenter_in(dir.path()).render(&snapshot, true).await.unwrap();
    assert!(matches!(card.avatar, Some(AvatarSave::Failed(TtError::Http(_)))));
    assert!(card.to_string().contains("Error saving profile picture: "));
}

#[tokio::test]
async fn avatar_write_failure_is_soft_failure() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/avatar/alice.jpeg");
        then.status(200).body(JPEG_BYTES);
    });
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let snapshot = snapshot_with_avatar(&server.url("/avatar/alice.jpeg"));
    let card = presenter_in(&missing).render(&snapshot, true).await.unwrap();

    assert!(matches!(card.avatar, Some(AvatarSave::Failed(TtError::Io(_)))));
}

#[tokio::test]
async fn avatar_not_requested_means_no_request() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/avatar/alice.jpeg");
        then.status(200).body(JPEG_BYTES);
    });
    let dir = tempfile::tempdir().unwrap();

    let snapshot = snapshot_with_avatar(&server.url("/avatar/alice.jpeg"));
    let card = presenter_in(dir.path()).render(&snapshot, false).await.unwrap();

    mock.assert_hits(0);
    assert!(card.avatar.is_none());
}

#[tokio::test]
async fn avatar_url_missing_fails_render_when_saving() {
    let mut user = alice_user();
    user.as_object_mut().unwrap().remove("avatarLarger");
    let snapshot = ProfileSnapshot::from_value(user_detail(user, alice_stats()));
    let dir = tempfile::tempdir().unwrap();

    let err = presenter_in(dir.path()).render(&snapshot, true).await.unwrap_err();
    assert!(matches!(err, TtError::MissingField(ref f) if f == "avatarLarger"));

    let card = presenter_in(dir.path()).render(&snapshot, false).await.unwrap();
    assert!(card.avatar.is_none());
}
