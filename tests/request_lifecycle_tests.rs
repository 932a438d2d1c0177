use legal_qa::assistant::fsm::{RequestEvent, RequestLifecycle, RequestState};
use pretty_assertions::assert_eq;

#[test]
fn test_initial_state() {
    let lifecycle = RequestLifecycle::new();

    assert_eq!(lifecycle.current_state(), RequestState::Received);
    assert!(!lifecycle.is_terminal());
}

#[test]
fn test_successful_flow() {
    let mut lifecycle = RequestLifecycle::new();

    lifecycle.transition(RequestEvent::BeginAnswering).unwrap();
    assert_eq!(lifecycle.current_state(), RequestState::Answering);
    assert!(!lifecycle.is_terminal());

    lifecycle.transition(RequestEvent::AnswerProduced).unwrap();
    assert_eq!(lifecycle.current_state(), RequestState::Responded);
    assert!(lifecycle.is_terminal());
}

#[test]
fn test_failure_while_answering() {
    let mut lifecycle = RequestLifecycle::new();

    lifecycle.transition(RequestEvent::BeginAnswering).unwrap();
    lifecycle.transition(RequestEvent::ErrorOccurred).unwrap();

    assert_eq!(lifecycle.current_state(), RequestState::Failed);
    assert!(lifecycle.is_terminal());
}

#[test]
fn test_failure_before_answering() {
    let mut lifecycle = RequestLifecycle::new();

    lifecycle.transition(RequestEvent::ErrorOccurred).unwrap();

    assert_eq!(lifecycle.current_state(), RequestState::Failed);
}

#[test]
fn test_answer_without_answering_is_invalid() {
    let mut lifecycle = RequestLifecycle::new();

    let result = lifecycle.transition(RequestEvent::AnswerProduced);

    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Invalid transition")
    );
    assert_eq!(lifecycle.current_state(), RequestState::Received);
}

#[test]
fn test_terminal_states_accept_no_events() {
    let mut lifecycle = RequestLifecycle::new();
    lifecycle.transition(RequestEvent::BeginAnswering).unwrap();
    lifecycle.transition(RequestEvent::AnswerProduced).unwrap();

    for event in [
        RequestEvent::BeginAnswering,
        RequestEvent::AnswerProduced,
        RequestEvent::ErrorOccurred,
    ] {
        assert!(lifecycle.transition(event).is_err());
        assert_eq!(lifecycle.current_state(), RequestState::Responded);
    }
}

#[test]
fn test_request_ids_are_unique() {
    assert_ne!(RequestLifecycle::new().id(), RequestLifecycle::new().id());
}
