use axum::{
    extract::RawQuery,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use omdb_probe::{
    run_probes, services::probe::ProbePlan, Credentials, MovieLookup, OmdbClient, OmdbError,
    Query,
};

/// Starts a stub OMDb server on an ephemeral port and returns its base URL
async fn spawn_stub_server() -> String {
    async fn echo(RawQuery(raw): RawQuery) -> impl IntoResponse {
        Json(json!({ "Response": "True", "raw_query": raw }))
    }

    async fn not_found() -> impl IntoResponse {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "Response": "False", "Error": "Movie not found!" })),
        )
    }

    async fn html() -> impl IntoResponse {
        (StatusCode::OK, "<html><body>maintenance</body></html>")
    }

    async fn bad_gateway() -> impl IntoResponse {
        (StatusCode::BAD_GATEWAY, "Bad Gateway")
    }

    async fn empty() -> impl IntoResponse {
        StatusCode::OK
    }

    let app = Router::new()
        .route("/", get(echo))
        .route("/not-found/", get(not_found))
        .route("/html/", get(html))
        .route("/bad-gateway/", get(bad_gateway))
        .route("/empty/", get(empty));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/", addr)
}

fn client_for(base_url: &str) -> OmdbClient {
    OmdbClient::new(Credentials::new("test_key"), base_url).unwrap()
}

#[tokio::test]
async fn test_search_query_reaches_server_encoded() {
    let base = spawn_stub_server().await;
    let client = client_for(&base);

    let body = client
        .fetch(&Query::movie_search("Guardians of the Galaxy"))
        .await
        .unwrap();

    assert_eq!(
        body["raw_query"],
        "apikey=test_key&s=Guardians+of+the+Galaxy&type=movie"
    );
}

#[tokio::test]
async fn test_id_and_title_queries() {
    let base = spawn_stub_server().await;
    let client = client_for(&base);

    let body = client.fetch(&Query::by_id("tt3896198")).await.unwrap();
    assert_eq!(body["raw_query"], "apikey=test_key&i=tt3896198");

    let body = client
        .fetch(&Query::by_title("Guardians of the Galaxy Vol. 2"))
        .await
        .unwrap();
    assert_eq!(
        body["raw_query"],
        "apikey=test_key&t=Guardians+of+the+Galaxy+Vol.+2"
    );
}

#[tokio::test]
async fn test_non_success_status_with_json_body_is_returned() {
    let base = spawn_stub_server().await;
    let client = client_for(&format!("{}not-found/", base));

    let body = client.fetch(&Query::by_id("tt0000000")).await.unwrap();

    assert_eq!(
        body,
        json!({ "Response": "False", "Error": "Movie not found!" })
    );
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let base = spawn_stub_server().await;

    for path in ["html/", "bad-gateway/", "empty/"] {
        let client = client_for(&format!("{}{}", base, path));
        let err = client
            .fetch(&Query::by_title("Alien"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, OmdbError::Decode(_)),
            "expected decode error for {}, got {:?}",
            path,
            err
        );
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Grab a free port, then close it so nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}/", addr));
    let err = client.fetch(&Query::by_id("tt3896198")).await.unwrap_err();

    assert!(matches!(err, OmdbError::Transport(_)));
}

#[tokio::test]
async fn test_run_probes_against_stub_server() {
    let base = spawn_stub_server().await;
    let client = client_for(&base);

    let mut out = Vec::new();
    let written = run_probes(&client, &ProbePlan::default(), &mut out)
        .await
        .unwrap();
    assert_eq!(written, 3);

    let report = String::from_utf8(out).unwrap();
    let expected_url = format!("URL: {}?apikey=test_key&i=tt3896198", base);
    assert!(report.contains(&expected_url));
    assert!(report.contains("  \"raw_query\": \"apikey=test_key&i=tt3896198\""));

    let headings: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with("Testing OMDB API"))
        .collect();
    assert_eq!(
        headings,
        vec![
            "Testing OMDB API search for: Guardians of the Galaxy",
            "Testing OMDB API for specific movie: tt3896198",
            "Testing OMDB API for specific movie title: Guardians of the Galaxy Vol. 2",
        ]
    );
}
