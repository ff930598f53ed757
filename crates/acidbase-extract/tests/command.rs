#![cfg(unix)]

use std::time::Duration;

use acidbase_extract::Extractor;
use acidbase_extract::command::CommandExtractor;
use acidbase_extract::document::SourceDocument;
use acidbase_extract::error::ExtractError;

fn document() -> SourceDocument {
    SourceDocument::new("scan.png", b"\x89PNG".to_vec()).unwrap()
}

fn shell(script: &str) -> CommandExtractor {
    CommandExtractor::new("sh").args(["-c", script])
}

#[tokio::test]
async fn stdout_is_the_reply() {
    let extractor = shell(r#"cat > /dev/null; printf '{"mime": "%s"}' "$ACIDBASE_MIME_TYPE""#);

    let reply = extractor.extract(&document()).await.expect("success");
    assert_eq!(reply, r#"{"mime": "image/png"}"#);
}

#[tokio::test]
async fn document_bytes_arrive_on_stdin() {
    let extractor = shell("wc -c | tr -d ' '");

    let reply = extractor.extract(&document()).await.expect("success");
    assert_eq!(reply.trim(), "4");
}

#[tokio::test]
async fn large_output_before_reading_stdin_does_not_stall() {
    // Writes well past a pipe buffer before touching stdin.
    let extractor = shell("head -c 262144 /dev/zero | tr '\\0' x; cat > /dev/null");
    let document = SourceDocument::new("scan.pdf", vec![b'%'; 1 << 20]).unwrap();

    let reply = tokio::time::timeout(Duration::from_secs(10), extractor.extract(&document))
        .await
        .expect("extractor finished")
        .expect("success");
    assert_eq!(reply.len(), 262_144);
    assert!(reply.bytes().all(|b| b == b'x'));
}

#[tokio::test]
async fn failing_program_reports_stderr() {
    let extractor = shell("echo '503 overloaded' >&2; exit 1");

    let err = extractor.extract(&document()).await.unwrap_err();
    assert!(matches!(err, ExtractError::Invocation(ref m) if m == "503 overloaded"));
    assert!(err.is_overloaded());
}

#[tokio::test]
async fn missing_credential_stops_before_spawning() {
    let extractor = CommandExtractor::new("/nonexistent/extractor")
        .credential_var("ACIDBASE_TEST_CREDENTIAL_THAT_IS_NEVER_SET");

    let err = extractor.extract(&document()).await.unwrap_err();
    assert!(matches!(
        err,
        ExtractError::MissingCredential(ref var) if var == "ACIDBASE_TEST_CREDENTIAL_THAT_IS_NEVER_SET"
    ));
}

#[tokio::test]
async fn missing_program_is_an_invocation_error() {
    let err = CommandExtractor::new("/nonexistent/extractor")
        .extract(&document())
        .await
        .unwrap_err();
    assert!(matches!(err, ExtractError::Invocation(_)));
    assert!(!err.is_overloaded());
}
