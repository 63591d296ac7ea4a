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

//! End to end tests over a local HTTP server.

use google_genomics_v1beta::client::Genomics;
use google_genomics_v1beta::model;
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;

type Result = anyhow::Result<()>;

async fn test_client(server: &Server) -> anyhow::Result<Genomics> {
    let client = Genomics::builder()
        .with_endpoint(server.url_str("/"))
        .build()
        .await?;
    Ok(client)
}

#[tokio::test]
async fn get_dataset_escapes_path_parameters() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/datasets/d%20s%2F1"),
            request::query(url_decoded(contains(("alt", "json")))),
        ])
        .respond_with(json_encoded(json!({"id": "d s/1", "isPublic": true}))),
    );

    let client = test_client(&server).await?;
    let dataset = client.datasets().get("d s/1").send().await?;
    assert_eq!(dataset.id, "d s/1");
    assert!(dataset.is_public);
    Ok(())
}

#[tokio::test]
async fn list_datasets_omits_unset_query_parameters() -> Result {
    let server = Server::run();
    // The only query parameter is the always-present alt=json.
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/datasets"),
            request::query("alt=json"),
        ])
        .respond_with(json_encoded(json!({
            "datasets": [{"id": "123", "projectId": "456"}]
        }))),
    );

    let client = test_client(&server).await?;
    let page = client.datasets().list().send().await?;
    assert_eq!(page.datasets.len(), 1);
    assert_eq!(page.datasets[0].project_id, Some(456));
    assert!(page.next_page_token.is_empty());
    Ok(())
}

#[tokio::test]
async fn list_datasets_sends_set_query_parameters() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/datasets"),
            request::query(url_decoded(contains(("projectId", "456")))),
            request::query(url_decoded(contains(("maxResults", "10")))),
            request::query(url_decoded(contains(("alt", "json")))),
        ])
        .respond_with(json_encoded(json!({"datasets": []}))),
    );

    let client = test_client(&server).await?;
    client
        .datasets()
        .list()
        .set_project_id(456)
        .set_max_results(10)
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn search_variants_decodes_string_encoded_numbers() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/variants/search"),
            request::body(json_decoded(eq(json!({
                "datasetId": "ds",
                "contig": "X",
                "startPosition": "100",
                "endPosition": "200",
            })))),
        ])
        .respond_with(json_encoded(json!({
            "variants": [{
                "contig": "X",
                "position": "150",
                "referenceBases": "A",
                "alternateBases": ["C"],
                "calls": [{"genotype": ["0", "1"]}],
            }]
        }))),
    );

    let client = test_client(&server).await?;
    let page = client.variants().search("ds", "X", 100, 200).send().await?;
    assert_eq!(page.variants.len(), 1);
    let variant = &page.variants[0];
    assert_eq!(variant.position, Some(150));
    assert_eq!(variant.calls[0].genotype, vec![0, 1]);
    Ok(())
}

#[tokio::test]
async fn error_preserves_status_and_payload() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/readsets/missing"))
            .respond_with(status_code(404).body(r#"{"error": {"message": "not found"}}"#)),
    );

    let client = test_client(&server).await?;
    let err = client.readsets().get("missing").send().await.unwrap_err();
    assert_eq!(err.http_status_code(), Some(404));
    assert_eq!(
        err.http_payload(),
        Some(bytes::Bytes::from_static(
            br#"{"error": {"message": "not found"}}"#
        ))
        .as_ref()
    );
    Ok(())
}

#[tokio::test]
#[test_case::test_case(401; "unauthorized")]
#[test_case::test_case(404; "not found")]
#[test_case::test_case(500; "server error")]
async fn non_success_statuses_become_http_errors(status: u16) -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/datasets/123"))
            .respond_with(status_code(status)),
    );

    let client = test_client(&server).await?;
    let err = client.datasets().get("123").send().await.unwrap_err();
    assert_eq!(err.http_status_code(), Some(status));
    Ok(())
}

#[tokio::test]
async fn delete_accepts_no_content() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("DELETE", "/datasets/123"))
            .respond_with(status_code(204)),
    );

    let client = test_client(&server).await?;
    client.datasets().delete("123").send().await?;
    Ok(())
}

#[tokio::test]
async fn bearer_credentials_reach_the_wire() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/jobs/job-1"),
            request::headers(contains(("authorization", "Bearer test-token"))),
        ])
        .respond_with(json_encoded(json!({"id": "job-1", "status": "success"}))),
    );

    let client = Genomics::builder()
        .with_endpoint(server.url_str("/"))
        .with_credentials(gax::credentials::bearer::Builder::new("test-token").build())
        .build()
        .await?;
    let job = client.jobs().get("job-1").send().await?;
    assert_eq!(job.status, "success");
    Ok(())
}

#[tokio::test]
async fn search_reads_threads_page_tokens_explicitly() -> Result {
    let mut server = Server::run();
    let base = json!({"readsetIds": ["rs-1"], "sequenceName": "X"});
    let with_token = |token: &str| {
        let mut body = base.clone();
        body["pageToken"] = json!(token);
        body
    };
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/reads/search"),
            request::body(json_decoded(eq(base.clone()))),
        ])
        .times(1)
        .respond_with(json_encoded(json!({
            "reads": [{"name": "read-1"}],
            "nextPageToken": "t2",
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/reads/search"),
            request::body(json_decoded(eq(with_token("t2")))),
        ])
        .times(1)
        .respond_with(json_encoded(json!({
            "reads": [{"name": "read-2"}],
            "nextPageToken": "t3",
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/reads/search"),
            request::body(json_decoded(eq(with_token("t3")))),
        ])
        .times(1)
        .respond_with(json_encoded(json!({
            "reads": [{"name": "read-3"}],
        }))),
    );

    let client = test_client(&server).await?;
    let mut names = vec![];
    let mut token = String::new();
    loop {
        let mut builder = client
            .reads()
            .search()
            .set_readset_ids(["rs-1"])
            .set_sequence_name("X");
        if !token.is_empty() {
            builder = builder.set_page_token(token);
        }
        let page = builder.send().await?;
        names.extend(page.reads.into_iter().map(|r| r.name));
        token = page.next_page_token;
        if token.is_empty() {
            break;
        }
    }
    assert_eq!(names, vec!["read-1", "read-2", "read-3"]);

    // An empty token ends the walk; no further request is made.
    server.verify_and_clear();
    Ok(())
}

#[tokio::test]
async fn concurrent_paginations_do_not_interfere() -> Result {
    let server = Server::run();
    for (dataset, tag) in [("ds-a", "a"), ("ds-b", "b")] {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/readsets/search"),
                request::body(json_decoded(eq(json!({"datasetIds": [dataset]})))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "readsets": [{"id": format!("{tag}-1")}],
                "nextPageToken": format!("{tag}-token"),
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/readsets/search"),
                request::body(json_decoded(eq(json!({
                    "datasetIds": [dataset],
                    "pageToken": format!("{tag}-token"),
                })))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "readsets": [{"id": format!("{tag}-2")}],
            }))),
        );
    }

    let client = test_client(&server).await?;
    let walk = |dataset: &str| {
        let client = client.clone();
        let dataset = dataset.to_string();
        async move {
            let mut ids = vec![];
            let mut token = String::new();
            loop {
                let mut builder = client.readsets().search([dataset.clone()]);
                if !token.is_empty() {
                    builder = builder.set_page_token(token);
                }
                let page = builder.send().await?;
                ids.extend(page.readsets.into_iter().map(|r| r.id));
                token = page.next_page_token;
                if token.is_empty() {
                    break;
                }
            }
            anyhow::Result::<Vec<String>>::Ok(ids)
        }
    };

    let (a, b) = futures::future::try_join(walk("ds-a"), walk("ds-b")).await?;
    assert_eq!(a, vec!["a-1", "a-2"]);
    assert_eq!(b, vec!["b-1", "b-2"]);
    Ok(())
}

#[tokio::test]
async fn import_readsets_returns_job_id() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/readsets/import"),
            request::body(json_decoded(eq(json!({
                "datasetId": "ds",
                "sourceUris": ["gs://bucket/sample.bam"],
            })))),
        ])
        .respond_with(json_encoded(json!({"jobId": "job-7"}))),
    );

    let client = test_client(&server).await?;
    let request = model::ImportReadsetsRequest {
        dataset_id: "ds".into(),
        source_uris: vec!["gs://bucket/sample.bam".into()],
    };
    let response = client.readsets().import(request).send().await?;
    assert_eq!(response.job_id, "job-7");
    Ok(())
}

#[tokio::test]
async fn get_beacon_sends_optional_query_parameters() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/beacons/ds-1"),
            request::query(url_decoded(contains(("allele", "A")))),
            request::query(url_decoded(contains(("contig", "X")))),
            request::query(url_decoded(contains(("position", "123")))),
        ])
        .respond_with(json_encoded(json!({"exists": true}))),
    );

    let client = test_client(&server).await?;
    let beacon = client
        .beacons()
        .get("ds-1")
        .set_allele("A")
        .set_contig("X")
        .set_position(123)
        .send()
        .await?;
    assert!(beacon.exists);
    Ok(())
}
