//! Session tests against a mocked relay.

use redline_ai::Role;
use redline_client::{ChatSession, ReviewSession};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn review_streams_report_and_value_is_stable_after_completion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/review"))
        .and(body_partial_json(
            serde_json::json!({ "text": "The document." }),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("# Review\n\nNo critical findings."),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = ReviewSession::new(server.uri());
    let report = session.report();

    let final_text = session.submit("The document.").await;

    assert_eq!(final_text, "# Review\n\nNo critical findings.");
    assert_eq!(*report.borrow(), final_text);
    // Re-reading after completion never mutates the value.
    assert_eq!(*report.borrow(), final_text);
}

#[tokio::test]
async fn review_failure_synthesizes_an_error_report() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/review"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let session = ReviewSession::new(server.uri());
    let final_text = session.submit("The document.").await;

    assert_eq!(
        final_text,
        "# Error\n\nFailed to process document: API error: Internal Server Error"
    );
    assert_eq!(*session.report().borrow(), final_text);
}

#[tokio::test]
async fn chat_extracts_suggestions_and_keeps_one_assistant_entry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_partial_json(serde_json::json!({
            "messages": [{ "role": "user", "content": "Oxford comma?" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "Yes, always.\n\n---SUGGESTIONS---\n1. What about two items?\n2. Semicolons?\n3. Etc. usage?",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let session = ChatSession::new(server.uri());
    let answer = session.send("Oxford comma?").await;

    assert_eq!(answer, "Yes, always.");

    let conversation = session.conversation();
    let turns = conversation.borrow().turns().to_vec();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(turns[1].content, "Yes, always.");

    assert_eq!(
        *session.suggestions().borrow(),
        ["What about two items?", "Semicolons?", "Etc. usage?"]
    );
}

#[tokio::test]
async fn chat_resends_the_full_history_and_resets_suggestions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("First answer.\n---SUGGESTIONS---\n1. Next?"),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_partial_json(serde_json::json!({
            "messages": [
                { "role": "user", "content": "first" },
                { "role": "assistant", "content": "First answer." },
                { "role": "user", "content": "second" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Second answer."))
        .expect(1)
        .mount(&server)
        .await;

    let session = ChatSession::new(server.uri());

    session.send("first").await;
    assert_eq!(*session.suggestions().borrow(), ["Next?"]);

    let answer = session.send("second").await;
    assert_eq!(answer, "Second answer.");

    // The second answer carried no marker, so the suggestions reset at the
    // start of the exchange sticks.
    assert!(session.suggestions().borrow().is_empty());
    assert_eq!(session.conversation().borrow().turns().len(), 4);
}

#[tokio::test]
async fn chat_transport_failure_appends_a_synthesized_error_turn() {
    // Nothing listens here; the request itself fails.
    let session = ChatSession::new("http://127.0.0.1:9");

    let answer = session.send("hello?").await;

    assert!(answer.starts_with("Error: "));
    let conversation = session.conversation();
    let turns = conversation.borrow().turns().to_vec();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1].role, Role::Assistant);
    assert!(turns[1].content.starts_with("Error: "));
}

#[tokio::test]
async fn chat_ignores_blank_input() {
    let session = ChatSession::new("http://127.0.0.1:9");

    let answer = session.send("   ").await;

    assert_eq!(answer, "");
    assert!(session.conversation().borrow().turns().is_empty());
}
