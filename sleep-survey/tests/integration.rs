//! Integration tests for sleep-survey

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use sleep_survey::test_support::complete_survey;
use sleep_survey::{
    Acknowledgement, ClientConfig, ClientError, Experience, HttpPredictionClient, Missing,
    MockPredictionClient, Notice, NoticeStyle, Outcome, Phase, PredictionClient,
    PredictionPayload, PredictionResponse, PresenterEvent, RatingField, RecordingPresenter,
    ScaleError, Severity, SubmissionController, SubmitError, SurveyField, SurveyState, TextField,
    transform,
};
use tokio::sync::Notify;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http_client(server: &MockServer) -> HttpPredictionClient {
    let config = ClientConfig::default().with_endpoint(format!("{}/predict", server.uri()));
    HttpPredictionClient::new(config).unwrap()
}

fn payload() -> PredictionPayload {
    transform(complete_survey().record()).unwrap()
}

// === Survey state ===

#[test]
fn test_all_fields_required() {
    let mut state = SurveyState::new();
    state.toggle_experience(Experience::SleepDisorder, true);

    for field in SurveyField::ALL {
        assert!(!state.is_valid(), "valid before {field} was set");
        match field {
            SurveyField::Rating(rating) => state.set_rating(rating, 1),
            SurveyField::Text(text) => state.set_text(text, "answer"),
        }
    }
    assert!(state.is_valid());
}

#[test]
fn test_none_replaces_every_other_experience() {
    let mut state = SurveyState::new();
    state.toggle_experience(Experience::SleepDisorder, true);
    state.toggle_experience(Experience::HealthCondition, true);
    state.toggle_experience(Experience::None, true);

    assert_eq!(
        state.experiences().iter().collect::<Vec<_>>(),
        vec![Experience::None]
    );
}

#[test]
fn test_other_experience_replaces_none() {
    let mut state = SurveyState::new();
    state.toggle_experience(Experience::None, true);
    state.toggle_experience(Experience::PartTimeJob, true);

    assert_eq!(
        state.experiences().iter().collect::<Vec<_>>(),
        vec![Experience::PartTimeJob]
    );
}

// === Scenario 1: complete survey with "None" ===

#[test]
fn test_complete_survey_transforms_with_none() {
    let state = complete_survey();
    assert!(state.is_valid());

    let payload = transform(state.record()).unwrap();
    assert_eq!(payload.experiences, "None");
    assert_eq!(payload.interest_rate, "Interested");
    assert_eq!(payload.toss_turn, "Often");
    assert_eq!(payload.lighting, "Average");
}

// === Scenario 2: missing sleep_hours ===

#[tokio::test]
async fn test_incomplete_survey_is_not_sent() {
    let client = MockPredictionClient::new().with_prediction("Good Sleep Quality");
    let presenter = RecordingPresenter::new();
    let controller = SubmissionController::new(client.clone(), presenter.clone());

    let mut state = complete_survey();
    state.set_text(TextField::SleepHours, "");
    assert!(!state.is_valid());

    let outcome = controller.submit(&mut state).await;

    assert_eq!(
        outcome,
        Outcome::Failed(SubmitError::IncompleteForm {
            missing: vec![Missing::Field(SurveyField::Text(TextField::SleepHours))],
        })
    );
    assert!(client.requests().is_empty());
    assert_eq!(client.health_checks(), 0);
    assert_eq!(presenter.progress_shown(), 0);

    let notices = presenter.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].style, NoticeStyle::Alert);
    assert_eq!(notices[0].severity, Severity::Warning);
    assert_eq!(controller.phase(), Phase::Idle);
}

// === Scenario 3: Lifestyle on, None on, None off ===

#[tokio::test]
async fn test_none_toggled_off_leaves_nothing_selected() {
    let mut state = complete_survey();
    state.toggle_experience(Experience::None, false);
    state.toggle_experience(Experience::LifestyleHabits, true);
    state.toggle_experience(Experience::None, true);
    state.toggle_experience(Experience::None, false);

    assert!(state.experiences().is_empty());
    assert!(!state.is_valid());

    let client = MockPredictionClient::new();
    let controller = SubmissionController::new(client.clone(), RecordingPresenter::new());
    let outcome = controller.submit(&mut state).await;

    let Outcome::Failed(err) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(
        err,
        SubmitError::IncompleteForm {
            missing: vec![Missing::Experiences],
        }
    );
    assert_eq!(err.to_string(), "Survey incomplete, missing: experiences");
    assert!(client.requests().is_empty());
}

// === Scenario 4: no response from the server ===

#[tokio::test]
async fn test_connectivity_failure_preserves_answers() {
    let client = MockPredictionClient::new()
        .with_error(ClientError::Connectivity("connection refused".into()));
    let presenter = RecordingPresenter::new();
    let controller = SubmissionController::new(client.clone(), presenter.clone());

    let mut state = complete_survey();
    let before = state.clone();

    let outcome = controller.submit(&mut state).await;

    assert!(matches!(
        outcome,
        Outcome::Failed(SubmitError::Connectivity(_))
    ));
    assert_eq!(state, before);
    assert_eq!(client.requests().len(), 1);
    assert_eq!(presenter.progress_shown(), 1);
    assert_eq!(presenter.progress_dismissed(), 1);
    assert_eq!(
        presenter.notices()[0].message,
        sleep_survey::CONNECTIVITY_MESSAGE
    );
    assert_eq!(controller.phase(), Phase::Idle);
}

#[tokio::test]
async fn test_unreachable_server_over_http() {
    // Bind and release a port so nothing is listening on it.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = ClientConfig::default().with_endpoint(format!("http://127.0.0.1:{port}/predict"));
    let client = HttpPredictionClient::new(config).unwrap();
    let presenter = RecordingPresenter::new();
    let controller = SubmissionController::new(client, presenter.clone());

    let mut state = complete_survey();
    let before = state.clone();

    let outcome = controller.submit(&mut state).await;

    assert!(matches!(
        outcome,
        Outcome::Failed(SubmitError::Connectivity(_))
    ));
    assert_eq!(state, before);
    assert_eq!(presenter.progress_dismissed(), 1);
}

// === Scenario 5: prediction received, user restarts ===

#[tokio::test]
async fn test_prediction_then_restart_resets_survey() {
    let client = MockPredictionClient::new().with_prediction("Good Sleep Quality");
    let presenter = RecordingPresenter::new().with_acknowledgement(Acknowledgement::Restart);
    let controller = SubmissionController::new(client.clone(), presenter.clone());

    let mut state = complete_survey();
    let outcome = controller.submit(&mut state).await;

    assert_eq!(
        outcome,
        Outcome::Succeeded {
            prediction: "Good Sleep Quality".into(),
            restarted: true,
        }
    );
    assert_eq!(presenter.predictions(), vec!["Good Sleep Quality"]);
    assert!(!state.is_valid());
    assert!(state.record().is_empty());

    // Progress goes away before the success toast and the result.
    let events = presenter.events();
    assert_eq!(
        events,
        vec![
            PresenterEvent::ShowProgress(sleep_survey::PROGRESS_MESSAGE.into()),
            PresenterEvent::DismissProgress,
            PresenterEvent::Notify(Notice::toast(
                sleep_survey::SUCCESS_MESSAGE,
                Severity::Success
            )),
            PresenterEvent::Prediction("Good Sleep Quality".into()),
        ]
    );
}

#[tokio::test]
async fn test_prediction_without_restart_keeps_answers() {
    let client = MockPredictionClient::new().with_prediction("Poor Sleep Quality");
    let controller = SubmissionController::new(client, RecordingPresenter::new());

    let mut state = complete_survey();
    let before = state.clone();
    let outcome = controller.submit(&mut state).await;

    assert_eq!(
        outcome,
        Outcome::Succeeded {
            prediction: "Poor Sleep Quality".into(),
            restarted: false,
        }
    );
    assert_eq!(state, before);
}

// === Other failure paths ===

#[tokio::test]
async fn test_out_of_range_rating_fails_before_network() {
    let client = MockPredictionClient::new().with_prediction("Good Sleep Quality");
    let presenter = RecordingPresenter::new();
    let controller = SubmissionController::new(client.clone(), presenter.clone());

    let mut state = complete_survey();
    state.set_rating(RatingField::NoiseLevel, 6);
    assert!(state.is_valid());

    let outcome = controller.submit(&mut state).await;

    let Outcome::Failed(err) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(
        err,
        SubmitError::UnknownRating(ScaleError::UnknownRating {
            field: RatingField::NoiseLevel.into(),
            value: Some(6),
        })
    );
    assert!(!err.is_recoverable());
    assert!(client.requests().is_empty());
    assert_eq!(presenter.progress_dismissed(), 1);
    assert_eq!(state.rating(RatingField::NoiseLevel), Some(6));
}

#[tokio::test]
async fn test_failed_health_check_short_circuits() {
    let client = MockPredictionClient::new()
        .with_prediction("Good Sleep Quality")
        .with_failing_health_check(ClientError::Connectivity("probe failed".into()));
    let presenter = RecordingPresenter::new();
    let controller = SubmissionController::new(client.clone(), presenter.clone());

    let mut state = complete_survey();
    let outcome = controller.submit(&mut state).await;

    assert!(matches!(
        outcome,
        Outcome::Failed(SubmitError::Connectivity(_))
    ));
    assert_eq!(client.health_checks(), 1);
    assert!(client.requests().is_empty());
    assert_eq!(presenter.progress_dismissed(), 1);
}

#[tokio::test]
async fn test_retry_after_failure_succeeds() {
    let client = MockPredictionClient::new()
        .with_error(ClientError::Server {
            status: 500,
            body: "internal error".into(),
        })
        .with_prediction("Good Sleep Quality");
    let presenter = RecordingPresenter::new().with_acknowledgement(Acknowledgement::Restart);
    let controller = SubmissionController::new(client.clone(), presenter.clone());

    let mut state = complete_survey();

    let first = controller.submit(&mut state).await;
    assert!(matches!(
        first,
        Outcome::Failed(SubmitError::Server { status: 500, .. })
    ));
    assert!(state.is_valid());

    let second = controller.submit(&mut state).await;
    assert_eq!(second.prediction(), Some("Good Sleep Quality"));

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert_eq!(presenter.progress_shown(), 2);
    assert_eq!(presenter.progress_dismissed(), 2);
}

// === Overlapping submissions ===

struct GatedClient {
    release: Arc<Notify>,
}

#[async_trait]
impl PredictionClient for GatedClient {
    async fn predict(&self, _: &PredictionPayload) -> Result<PredictionResponse, ClientError> {
        self.release.notified().await;
        Ok(PredictionResponse {
            prediction: "Good Sleep Quality".into(),
        })
    }
}

#[tokio::test]
async fn test_submit_while_sending_is_rejected() {
    let release = Arc::new(Notify::new());
    let presenter = RecordingPresenter::new();
    let controller = SubmissionController::new(
        GatedClient {
            release: release.clone(),
        },
        presenter.clone(),
    );

    let mut first = complete_survey();
    let mut second = complete_survey();

    let (first_outcome, second_outcome) = tokio::join!(controller.submit(&mut first), async {
        while controller.phase() != Phase::Sending {
            tokio::task::yield_now().await;
        }
        let outcome = controller.submit(&mut second).await;
        release.notify_one();
        outcome
    });

    assert_eq!(first_outcome.prediction(), Some("Good Sleep Quality"));
    assert_eq!(second_outcome, Outcome::Busy);
    assert_eq!(presenter.progress_shown(), 1);
    assert_eq!(controller.phase(), Phase::Idle);
}

// === HTTP client ===

#[tokio::test]
async fn test_http_posts_payload_as_json() {
    let server = MockServer::start().await;
    let payload = payload();

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(&payload))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "prediction": "Good Sleep Quality" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = http_client(&server).predict(&payload).await.unwrap();
    assert_eq!(response.prediction, "Good Sleep Quality");
}

#[tokio::test]
async fn test_http_error_statuses() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid data"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let payload = payload();

    assert_eq!(
        client.predict(&payload).await.unwrap_err(),
        ClientError::Server {
            status: 400,
            body: "invalid data".into(),
        }
    );
    assert!(matches!(
        client.predict(&payload).await,
        Err(ClientError::Server { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_http_missing_prediction_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let result = http_client(&server).predict(&payload()).await;
    assert!(matches!(result, Err(ClientError::MalformedResponse(_))));
}

#[tokio::test]
async fn test_http_timeout_is_connectivity_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "prediction": "Good Sleep Quality" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig {
        endpoint: format!("{}/predict", server.uri()),
        health_endpoint: None,
        timeout_secs: 1,
    };
    let result = HttpPredictionClient::new(config)
        .unwrap()
        .predict(&payload())
        .await;
    assert!(matches!(result, Err(ClientError::Connectivity(_))));
}

#[tokio::test]
async fn test_http_health_probe_failure_skips_post() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prediction": "x" })))
        .expect(0)
        .mount(&server)
        .await;

    let config = ClientConfig::default()
        .with_endpoint(format!("{}/predict", server.uri()))
        .with_health_endpoint(format!("{}/health", server.uri()));
    let presenter = RecordingPresenter::new();
    let controller =
        SubmissionController::new(HttpPredictionClient::new(config).unwrap(), presenter.clone());

    let mut state = complete_survey();
    let outcome = controller.submit(&mut state).await;

    assert!(matches!(
        outcome,
        Outcome::Failed(SubmitError::Connectivity(_))
    ));
    assert_eq!(presenter.progress_dismissed(), 1);
}

#[tokio::test]
async fn test_end_to_end_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(payload()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "prediction": "Good Sleep Quality" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::default()
        .with_endpoint(format!("{}/predict", server.uri()))
        .with_health_endpoint(format!("{}/health", server.uri()));
    let presenter = RecordingPresenter::new().with_acknowledgement(Acknowledgement::Restart);
    let controller =
        SubmissionController::new(HttpPredictionClient::new(config).unwrap(), presenter.clone());

    let mut state = complete_survey();
    let outcome = controller.submit(&mut state).await;

    assert_eq!(outcome.prediction(), Some("Good Sleep Quality"));
    assert_eq!(presenter.predictions(), vec!["Good Sleep Quality"]);
    assert!(!state.is_valid());
}
