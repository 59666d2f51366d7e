use application::tag::{SubmissionOutcome, TagSubmitter};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use domain::tag::{RawFieldInput, TagKind, TagValue};
use domain::{EngagementSdk, FeedItem, SdkError, ValidationError};
use infrastructure::{RecordingSdk, SdkCall};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// --- Facade that must never be reached ---

struct UnreachableSdk {
    calls: AtomicUsize,
}

impl UnreachableSdk {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    fn hit(&self) -> Result<(), SdkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SdkError::Rejected("should not be called".to_string()))
    }
}

#[async_trait]
impl EngagementSdk for UnreachableSdk {
    async fn tag_cuid(&self, _unique_id: &str) -> Result<(), SdkError> {
        self.hit()
    }
    async fn tag_string(&self, _key: &str, _value: &str) -> Result<(), SdkError> {
        self.hit()
    }
    async fn tag_numeric(&self, _key: &str, _value: f64) -> Result<(), SdkError> {
        self.hit()
    }
    async fn tag_datetime(&self, _key: &str, _value: DateTime<Utc>) -> Result<(), SdkError> {
        self.hit()
    }
    async fn increment_tag(&self, _key: &str) -> Result<(), SdkError> {
        self.hit()
    }
    async fn remove_tag(&self, _key: &str) -> Result<(), SdkError> {
        self.hit()
    }
    async fn fetch_feeds(&self, _offset: usize) -> Result<Vec<FeedItem>, SdkError> {
        self.hit().map(|_| Vec::new())
    }
}

#[tokio::test]
async fn test_rejected_input_never_reaches_sdk() {
    let sdk = UnreachableSdk::new();
    let submitter = TagSubmitter::new(sdk.clone());

    let cases = [
        (TagKind::Cuid, RawFieldInput::value_only("   ")),
        (TagKind::Numeric, RawFieldInput::pair("count", "abc")),
        (TagKind::String, RawFieldInput::key_only("name")),
        (
            TagKind::Datetime,
            RawFieldInput::pair("visit", "2024-13-40 99:99:99"),
        ),
        (TagKind::Increment, RawFieldInput::default()),
        (TagKind::Delete, RawFieldInput::value_only("x")),
    ];

    for (kind, input) in cases {
        let outcome = submitter.submit(kind, &input).await;
        assert!(
            matches!(outcome, SubmissionOutcome::Rejected(e) if e.kind() == kind),
            "{kind}"
        );
    }

    assert_eq!(sdk.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_rejection_dialogs() {
    let submitter = TagSubmitter::new(UnreachableSdk::new());

    let outcome = submitter
        .submit(TagKind::Numeric, &RawFieldInput::value_only("1"))
        .await;
    assert_eq!(outcome.dialog_message(), "Please input key.");
    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected(ValidationError::MissingKey(TagKind::Numeric))
    );

    let outcome = submitter
        .submit(TagKind::Datetime, &RawFieldInput::pair("visit", "soon"))
        .await;
    assert_eq!(
        outcome.dialog_message(),
        "Please input date value as format, or leave nil to tag current time."
    );
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn test_valid_input_is_dispatched_once() {
    let sdk = RecordingSdk::new();
    let submitter = TagSubmitter::new(Arc::new(sdk.clone()));

    let outcome = submitter
        .submit(TagKind::Numeric, &RawFieldInput::pair(" fave_product ", " 8 "))
        .await;
    assert!(outcome.is_success());
    assert_eq!(outcome.dialog_message(), "Tag sent to server.");

    submitter
        .submit(TagKind::Cuid, &RawFieldInput::value_only("user-42"))
        .await;
    submitter
        .submit(
            TagKind::Datetime,
            &RawFieldInput::pair("dob", "2012-12-12 11:11:11"),
        )
        .await;
    submitter
        .submit(TagKind::Delete, &RawFieldInput::pair("sh_email", "ignored"))
        .await;

    assert_eq!(
        sdk.recorded().await,
        vec![
            SdkCall::TagNumeric {
                key: "fave_product".to_string(),
                value: 8.0
            },
            SdkCall::TagCuid("user-42".to_string()),
            SdkCall::TagDatetime {
                key: "dob".to_string(),
                value: Utc.with_ymd_and_hms(2012, 12, 12, 11, 11, 11).unwrap()
            },
            SdkCall::RemoveTag("sh_email".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_sdk_failure_is_reported_not_retried() {
    let sdk = RecordingSdk::new();
    sdk.set_failing(true);
    let submitter = TagSubmitter::new(Arc::new(sdk.clone()));

    let outcome = submitter
        .submit(TagKind::Increment, &RawFieldInput::key_only("visits"))
        .await;

    match &outcome {
        SubmissionOutcome::Failed { request, error } => {
            assert_eq!(request.key(), Some("visits"));
            assert_eq!(request.value(), &TagValue::None);
            assert!(matches!(error, SdkError::Unavailable(_)));
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(
        outcome.dialog_message(),
        "Cannot send tag to server, please check console log."
    );
    assert_eq!(sdk.recorded().await.len(), 1);
}

#[tokio::test]
async fn test_empty_datetime_tags_current_time() {
    let sdk = RecordingSdk::new();
    let submitter = TagSubmitter::new(Arc::new(sdk.clone()));

    let before = Utc::now();
    let outcome = submitter
        .submit(TagKind::Datetime, &RawFieldInput::key_only("visit_time"))
        .await;
    assert!(outcome.is_success());

    match sdk.recorded().await.as_slice() {
        [SdkCall::TagDatetime { key, value }] => {
            assert_eq!(key, "visit_time");
            assert!(*value >= before && *value <= Utc::now());
        }
        other => panic!("unexpected calls {other:?}"),
    }
}
