// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tests the transport against a local HTTP server.

use gax::options::RequestOptions;
use google_genomics_gax_internal::http::{NoBody, ReqwestClient};
use google_genomics_gax_internal::options::ClientConfig;
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::{Value, json};

type Result = anyhow::Result<()>;

async fn test_transport(server: &Server) -> anyhow::Result<ReqwestClient> {
    let config = ClientConfig {
        endpoint: Some(server.url_str("/")),
        ..ClientConfig::default()
    };
    let client = ReqwestClient::new(config, "https://unused.example.com/").await?;
    Ok(client)
}

#[tokio::test]
async fn every_request_carries_alt_json() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/datasets/123"),
            request::query(url_decoded(contains(("alt", "json")))),
        ])
        .respond_with(json_encoded(json!({"id": "123"}))),
    );

    let transport = test_transport(&server).await?;
    let builder = transport.builder(reqwest::Method::GET, "datasets/123".into());
    let response = transport
        .execute::<NoBody, Value>(builder, None, RequestOptions::default())
        .await?;
    assert_eq!(response.body(), &json!({"id": "123"}));
    Ok(())
}

#[tokio::test]
async fn success_preserves_response_headers() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/jobs/j1")).respond_with(
            status_code(200)
                .append_header("x-test-header", "echo")
                .append_header("content-type", "application/json")
                .body(r#"{"id": "j1"}"#),
        ),
    );

    let transport = test_transport(&server).await?;
    let builder = transport.builder(reqwest::Method::GET, "jobs/j1".into());
    let response = transport
        .execute::<NoBody, Value>(builder, None, RequestOptions::default())
        .await?;
    assert_eq!(
        response.headers().get("x-test-header").unwrap(),
        &"echo".parse::<http::HeaderValue>()?
    );
    Ok(())
}

#[tokio::test]
async fn request_body_is_sent_as_json() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/readsets/search"),
            request::headers(contains(("content-type", "application/json"))),
            request::body(json_decoded(eq(json!({"datasetIds": ["ds"]})))),
        ])
        .respond_with(json_encoded(json!({"readsets": []}))),
    );

    let transport = test_transport(&server).await?;
    let builder = transport.builder(reqwest::Method::POST, "readsets/search".into());
    transport
        .execute::<Value, Value>(
            builder,
            Some(json!({"datasetIds": ["ds"]})),
            RequestOptions::default(),
        )
        .await?;
    Ok(())
}

#[tokio::test]
async fn user_agent_option_reaches_the_wire() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/datasets"),
            request::headers(contains(("user-agent", "test-client/1.0"))),
        ])
        .respond_with(json_encoded(json!({"datasets": []}))),
    );

    let transport = test_transport(&server).await?;
    let builder = transport.builder(reqwest::Method::GET, "datasets".into());
    let mut options = RequestOptions::default();
    options.set_user_agent("test-client/1.0");
    transport
        .execute::<NoBody, Value>(builder, None, options)
        .await?;
    Ok(())
}

#[tokio::test]
async fn non_success_preserves_raw_body() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/datasets/none"))
            .respond_with(status_code(403).body("plain text denial")),
    );

    let transport = test_transport(&server).await?;
    let builder = transport.builder(reqwest::Method::GET, "datasets/none".into());
    let err = transport
        .execute::<NoBody, Value>(builder, None, RequestOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.http_status_code(), Some(403));
    assert_eq!(
        err.http_payload(),
        Some(bytes::Bytes::from_static(b"plain text denial")).as_ref()
    );
    Ok(())
}
