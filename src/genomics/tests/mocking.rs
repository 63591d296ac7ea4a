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

//! Shows how applications can mock the client without a server.

use gax::options::RequestOptions;
use gax::response::Response;
use google_genomics_v1beta::client::Genomics;
use google_genomics_v1beta::model;

mockall::mock! {
    #[derive(Debug)]
    Genomics {}
    impl google_genomics_v1beta::stub::Genomics for Genomics {
        async fn search_callsets(
            &self,
            request: model::SearchCallsetsRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<model::SearchCallsetsResponse>>;

        async fn get_job(
            &self,
            job_id: String,
            options: RequestOptions,
        ) -> gax::Result<Response<model::Job>>;
    }
}

#[tokio::test]
async fn search_callsets_through_a_mock() {
    let mut mock = MockGenomics::new();
    mock.expect_search_callsets()
        .withf(|request, _| request.dataset_ids == vec!["ds-1"] && request.name == "NA12878")
        .return_once(|_, _| {
            Ok(Response::from(model::SearchCallsetsResponse {
                callsets: vec![model::Callset {
                    id: "cs-1".into(),
                    name: "NA12878".into(),
                    ..Default::default()
                }],
                ..Default::default()
            }))
        });

    let client = Genomics::from_stub(mock);
    let page = client
        .callsets()
        .search()
        .set_dataset_ids(["ds-1"])
        .set_name("NA12878")
        .send()
        .await
        .unwrap();
    assert_eq!(page.callsets[0].id, "cs-1");
    assert!(page.next_page_token.is_empty());
}

#[tokio::test]
async fn get_job_through_a_mock() {
    let mut mock = MockGenomics::new();
    mock.expect_get_job()
        .withf(|job_id, _| job_id == "job-1")
        .return_once(|job_id, _| {
            Ok(Response::from(model::Job {
                id: job_id,
                status: "running".into(),
                ..Default::default()
            }))
        });

    let client = Genomics::from_stub(mock);
    let job = client.jobs().get("job-1").send().await.unwrap();
    assert_eq!(job.status, "running");
}

#[tokio::test]
async fn unmocked_operations_report_unimplemented() {
    let client = Genomics::from_stub(MockGenomics::new());
    let result = std::panic::AssertUnwindSafe(client.datasets().get("ds").send());
    let outcome = futures::FutureExt::catch_unwind(result).await;
    assert!(outcome.is_err());
}
