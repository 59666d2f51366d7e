use domain::FeedItem;
use domain::tag::TagKind;
use infrastructure::{RecordingSdk, SdkCall};
use serde_json::json;
use std::sync::Arc;
use tag_console::{Command, Console};

fn console_with(sdk: &RecordingSdk, feeds: Vec<FeedItem>) -> Console {
    Console::new(
        Arc::new(sdk.clone()),
        Arc::new(RecordingSdk::with_feeds(feeds, 2)),
    )
}

async fn run(console: &Console, command: Command) -> (bool, String) {
    let mut out = Vec::new();
    let ok = console.execute(command, &mut out).await.unwrap();
    (ok, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_tag_command_prints_sent_dialog() {
    let sdk = RecordingSdk::new();
    let console = console_with(&sdk, Vec::new());

    let (ok, out) = run(
        &console,
        Command::Tag {
            kind: TagKind::String,
            key: Some("sh_email".to_string()),
            value: Some(" a@a.com ".to_string()),
        },
    )
    .await;

    assert!(ok);
    assert_eq!(out, "Tag sent to server.\n");
    assert_eq!(
        sdk.recorded().await,
        vec![SdkCall::TagString {
            key: "sh_email".to_string(),
            value: "a@a.com".to_string()
        }]
    );
}

#[tokio::test]
async fn test_invalid_tag_prints_prompt_and_fails() {
    let sdk = RecordingSdk::new();
    let console = console_with(&sdk, Vec::new());

    let (ok, out) = run(
        &console,
        Command::Tag {
            kind: TagKind::Increment,
            key: Some("   ".to_string()),
            value: None,
        },
    )
    .await;

    assert!(!ok);
    assert_eq!(out, "Please input key.\n");
    assert!(sdk.recorded().await.is_empty());
}

#[tokio::test]
async fn test_screens_and_open() {
    let console = console_with(&RecordingSdk::new(), Vec::new());

    let (_, out) = run(&console, Command::Screens).await;
    assert_eq!(out, "0\ttag\tTag Sample\n1\tfeed\tFeed Sample\n");

    let (ok, out) = run(&console, Command::Open { row: 1 }).await;
    assert!(ok);
    assert!(out.starts_with("Feed Sample\n"));
    assert!(out.contains("  - load more"));

    let mut sink = Vec::new();
    let err = console
        .execute(Command::Open { row: 5 }, &mut sink)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Unhandled sample case"));
}

#[tokio::test]
async fn test_feed_page() {
    let feeds = vec![
        FeedItem::new(1, "Welcome", "Thanks for installing"),
        FeedItem::new(2, "Offer", "10% off").with_content(json!({"code": "TEN"})),
        FeedItem::new(3, "Later", "not on this page"),
    ];
    let console = console_with(&RecordingSdk::new(), feeds);

    let (ok, out) = run(&console, Command::Feed { offset: 0 }).await;
    assert!(ok);
    assert_eq!(
        out,
        "[1] Welcome: Thanks for installing\n[2] Offer: 10% off\n    {\"code\":\"TEN\"}\n"
    );

    let (_, out) = run(&console, Command::Feed { offset: 10 }).await;
    assert_eq!(out, "No feeds.\n");
}
