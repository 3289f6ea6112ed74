use walletui_runtime::{ClipboardService, CopyStrategy};
use walletui_testing::assertions::{assert_legacy_copy_sequence, assert_no_attached_elements};
use walletui_testing::{DomStep, RecordingDocument, TestHost};
use walletui_types::ClipboardError;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_strategy_selection() {
    assert_eq!(
        TestHost::new().secure().with_native_clipboard().clipboard_service().strategy(),
        CopyStrategy::Native
    );
    // native clipboard present but context not secure
    assert_eq!(
        TestHost::new().with_native_clipboard().clipboard_service().strategy(),
        CopyStrategy::Legacy
    );
    // secure context without native clipboard
    assert_eq!(
        TestHost::new().secure().clipboard_service().strategy(),
        CopyStrategy::Legacy
    );
}

#[tokio::test]
async fn test_native_copy_writes_text() -> anyhow::Result<()> {
    init_tracing();
    let host = TestHost::new().secure().with_native_clipboard();
    let service = host.clipboard_service();

    service.copy("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh").await?;
    service.copy(150_000_000i64).await?;

    let native = host.native_clipboard().expect("native clipboard");
    assert_eq!(
        native.writes(),
        vec![
            "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh".to_string(),
            "150000000".to_string()
        ]
    );
    assert_eq!(native.last().as_deref(), Some("150000000"));
    assert!(host.document().steps().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_native_rejection_is_returned() {
    let host = TestHost::new().secure().with_native_clipboard();
    host.native_clipboard()
        .expect("native clipboard")
        .reject("permission denied");

    let err = host.clipboard_service().copy("secret").await.unwrap_err();
    assert_eq!(
        err,
        ClipboardError::NativeWriteFailed("permission denied".to_string())
    );
}

#[tokio::test]
async fn test_legacy_copy_success_cleans_up() -> anyhow::Result<()> {
    init_tracing();
    let host = TestHost::new();
    host.clipboard_service().copy("0.00012345").await?;

    assert_legacy_copy_sequence(host.document(), "0.00012345", true);
    assert_eq!(host.document().clipboard().as_deref(), Some("0.00012345"));
    Ok(())
}

#[tokio::test]
async fn test_legacy_copy_failure_still_cleans_up() {
    init_tracing();
    let host = TestHost::new().with_document(RecordingDocument::new().with_failing_copy());

    let result = host.clipboard_service().copy(42i64).await;

    assert_eq!(result, Err(ClipboardError::CopyCommandFailed));
    assert_legacy_copy_sequence(host.document(), "42", false);
    assert_eq!(host.document().clipboard(), None);
}

#[tokio::test]
async fn test_legacy_attach_failure_never_runs_copy() {
    let document = RecordingDocument::new().with_failing_attach();
    let service = ClipboardService::legacy(std::sync::Arc::new(document.clone()));

    let result = service.copy("text").await;

    assert!(matches!(result, Err(ClipboardError::DocumentUnavailable(_))));
    assert!(!document
        .steps()
        .iter()
        .any(|step| matches!(step, DomStep::ExecCopy { .. })));
    assert_no_attached_elements(&document);
}

#[tokio::test]
async fn test_repeated_legacy_copies_leave_nothing_attached() -> anyhow::Result<()> {
    let host = TestHost::new();
    let service = host.clipboard_service();

    for value in ["one", "two", "three"] {
        service.copy(value).await?;
        assert_no_attached_elements(host.document());
    }
    assert_eq!(host.document().clipboard().as_deref(), Some("three"));
    Ok(())
}
