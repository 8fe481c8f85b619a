use crate::common::{client_for, fixture, mock_html, setup_server};
use serde_json::Value;
use tiktok_profile::fetch_profile;

#[tokio::test]
async fn debug_dumps_write_page_and_pretty_json() {
    let user = "dumpcheck_debug";
    let page = fixture("profile_html", "alice", "html");
    let server = setup_server();
    let _mock = mock_html(&server, user, 200, &page);
    let client = client_for(&server);

    let snapshot = fetch_profile(&client, user).await.unwrap();

    let tmp = std::env::temp_dir();
    let html_path = tmp.join(format!("tiktok_profile-{user}-page.html"));
    let json_path = tmp.join(format!("tiktok_profile-{user}-extracted.json"));

    assert_eq!(std::fs::read_to_string(&html_path).unwrap(), page);

    let dumped = std::fs::read_to_string(&json_path).unwrap();
    assert!(dumped.starts_with("{\n  \"__DEFAULT_SCOPE__\""), "not pretty: {dumped}");
    assert_eq!(&serde_json::from_str::<Value>(&dumped).unwrap(), snapshot.raw());

    let _ = std::fs::remove_file(html_path);
    let _ = std::fs::remove_file(json_path);
}
