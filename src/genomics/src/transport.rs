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

//! The HTTP implementation of [crate::stub::Genomics].
//!
//! Every operation is one call to [Genomics::invoke] with its endpoint
//! descriptor: expand the path template, fold in the query parameters, and
//! run a single round trip through the shared transport.

use crate::Result;
use crate::endpoint::{self, Descriptor};
use crate::model::*;
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::http::NoBody;
use gaxi::query_parameter::QueryParameter;
use serde_json::json;

#[derive(Clone, Debug)]
pub struct Genomics {
    inner: gaxi::http::ReqwestClient,
}

impl Genomics {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        Ok(Self { inner })
    }

    async fn invoke<I, O>(
        &self,
        descriptor: &Descriptor,
        params: &[(&str, &str)],
        query: Vec<(&'static str, serde_json::Value)>,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        let path = gaxi::path_parameter::expand(descriptor.path, params)?;
        let builder = self.inner.builder(descriptor.method.clone(), path);
        let builder = query
            .into_iter()
            .fold(builder, |builder, (name, value)| value.add(builder, name));
        self.inner.execute(builder, body, options).await
    }
}

impl super::stub::Genomics for Genomics {
    async fn get_beacon(
        &self,
        dataset_id: String,
        allele: Option<String>,
        contig: Option<String>,
        position: Option<i64>,
        options: RequestOptions,
    ) -> Result<Response<Beacon>> {
        self.invoke(
            &endpoint::BEACONS_GET,
            &[("datasetId", &dataset_id)],
            vec![
                ("allele", json!(allele)),
                ("contig", json!(contig)),
                ("position", json!(position)),
            ],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn create_callset(
        &self,
        callset: Callset,
        options: RequestOptions,
    ) -> Result<Response<Callset>> {
        self.invoke(
            &endpoint::CALLSETS_CREATE,
            &[],
            vec![],
            Some(callset),
            options,
        )
        .await
    }

    async fn delete_callset(
        &self,
        callset_id: String,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        self.invoke(
            &endpoint::CALLSETS_DELETE,
            &[("callsetId", &callset_id)],
            vec![],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn get_callset(
        &self,
        callset_id: String,
        options: RequestOptions,
    ) -> Result<Response<Callset>> {
        self.invoke(
            &endpoint::CALLSETS_GET,
            &[("callsetId", &callset_id)],
            vec![],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn patch_callset(
        &self,
        callset_id: String,
        callset: Callset,
        options: RequestOptions,
    ) -> Result<Response<Callset>> {
        self.invoke(
            &endpoint::CALLSETS_PATCH,
            &[("callsetId", &callset_id)],
            vec![],
            Some(callset),
            options,
        )
        .await
    }

    async fn update_callset(
        &self,
        callset_id: String,
        callset: Callset,
        options: RequestOptions,
    ) -> Result<Response<Callset>> {
        self.invoke(
            &endpoint::CALLSETS_UPDATE,
            &[("callsetId", &callset_id)],
            vec![],
            Some(callset),
            options,
        )
        .await
    }

    async fn search_callsets(
        &self,
        request: SearchCallsetsRequest,
        options: RequestOptions,
    ) -> Result<Response<SearchCallsetsResponse>> {
        self.invoke(
            &endpoint::CALLSETS_SEARCH,
            &[],
            vec![],
            Some(request),
            options,
        )
        .await
    }

    async fn create_dataset(
        &self,
        dataset: Dataset,
        options: RequestOptions,
    ) -> Result<Response<Dataset>> {
        self.invoke(
            &endpoint::DATASETS_CREATE,
            &[],
            vec![],
            Some(dataset),
            options,
        )
        .await
    }

    async fn delete_dataset(
        &self,
        dataset_id: String,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        self.invoke(
            &endpoint::DATASETS_DELETE,
            &[("datasetId", &dataset_id)],
            vec![],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn get_dataset(
        &self,
        dataset_id: String,
        options: RequestOptions,
    ) -> Result<Response<Dataset>> {
        self.invoke(
            &endpoint::DATASETS_GET,
            &[("datasetId", &dataset_id)],
            vec![],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn list_datasets(
        &self,
        page_token: Option<String>,
        project_id: Option<i64>,
        max_results: Option<u64>,
        options: RequestOptions,
    ) -> Result<Response<ListDatasetsResponse>> {
        self.invoke(
            &endpoint::DATASETS_LIST,
            &[],
            vec![
                ("pageToken", json!(page_token)),
                ("projectId", json!(project_id)),
                ("maxResults", json!(max_results)),
            ],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn patch_dataset(
        &self,
        dataset_id: String,
        dataset: Dataset,
        options: RequestOptions,
    ) -> Result<Response<Dataset>> {
        self.invoke(
            &endpoint::DATASETS_PATCH,
            &[("datasetId", &dataset_id)],
            vec![],
            Some(dataset),
            options,
        )
        .await
    }

    async fn update_dataset(
        &self,
        dataset_id: String,
        dataset: Dataset,
        options: RequestOptions,
    ) -> Result<Response<Dataset>> {
        self.invoke(
            &endpoint::DATASETS_UPDATE,
            &[("datasetId", &dataset_id)],
            vec![],
            Some(dataset),
            options,
        )
        .await
    }

    async fn get_job(&self, job_id: String, options: RequestOptions) -> Result<Response<Job>> {
        self.invoke(
            &endpoint::JOBS_GET,
            &[("jobId", &job_id)],
            vec![],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn get_read(&self, read_id: String, options: RequestOptions) -> Result<Response<Read>> {
        self.invoke(
            &endpoint::READS_GET,
            &[("readId", &read_id)],
            vec![],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn search_reads(
        &self,
        request: SearchReadsRequest,
        options: RequestOptions,
    ) -> Result<Response<SearchReadsResponse>> {
        self.invoke(&endpoint::READS_SEARCH, &[], vec![], Some(request), options)
            .await
    }

    async fn create_readset(
        &self,
        readset: Readset,
        options: RequestOptions,
    ) -> Result<Response<Readset>> {
        self.invoke(
            &endpoint::READSETS_CREATE,
            &[],
            vec![],
            Some(readset),
            options,
        )
        .await
    }

    async fn delete_readset(
        &self,
        readset_id: String,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        self.invoke(
            &endpoint::READSETS_DELETE,
            &[("readsetId", &readset_id)],
            vec![],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn export_readsets(
        &self,
        request: ExportReadsetsRequest,
        options: RequestOptions,
    ) -> Result<Response<ExportReadsetsResponse>> {
        self.invoke(
            &endpoint::READSETS_EXPORT,
            &[],
            vec![],
            Some(request),
            options,
        )
        .await
    }

    async fn get_readset(
        &self,
        readset_id: String,
        options: RequestOptions,
    ) -> Result<Response<Readset>> {
        self.invoke(
            &endpoint::READSETS_GET,
            &[("readsetId", &readset_id)],
            vec![],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn import_readsets(
        &self,
        request: ImportReadsetsRequest,
        options: RequestOptions,
    ) -> Result<Response<ImportReadsetsResponse>> {
        self.invoke(
            &endpoint::READSETS_IMPORT,
            &[],
            vec![],
            Some(request),
            options,
        )
        .await
    }

    async fn patch_readset(
        &self,
        readset_id: String,
        readset: Readset,
        options: RequestOptions,
    ) -> Result<Response<Readset>> {
        self.invoke(
            &endpoint::READSETS_PATCH,
            &[("readsetId", &readset_id)],
            vec![],
            Some(readset),
            options,
        )
        .await
    }

    async fn search_readsets(
        &self,
        request: SearchReadsetsRequest,
        options: RequestOptions,
    ) -> Result<Response<SearchReadsetsResponse>> {
        self.invoke(
            &endpoint::READSETS_SEARCH,
            &[],
            vec![],
            Some(request),
            options,
        )
        .await
    }

    async fn update_readset(
        &self,
        readset_id: String,
        readset: Readset,
        options: RequestOptions,
    ) -> Result<Response<Readset>> {
        self.invoke(
            &endpoint::READSETS_UPDATE,
            &[("readsetId", &readset_id)],
            vec![],
            Some(readset),
            options,
        )
        .await
    }

    async fn create_variant(
        &self,
        variant: Variant,
        options: RequestOptions,
    ) -> Result<Response<Variant>> {
        self.invoke(
            &endpoint::VARIANTS_CREATE,
            &[],
            vec![],
            Some(variant),
            options,
        )
        .await
    }

    async fn delete_variant(
        &self,
        variant_id: String,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        self.invoke(
            &endpoint::VARIANTS_DELETE,
            &[("variantId", &variant_id)],
            vec![],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn export_variants(
        &self,
        request: ExportVariantsRequest,
        options: RequestOptions,
    ) -> Result<Response<ExportVariantsResponse>> {
        self.invoke(
            &endpoint::VARIANTS_EXPORT,
            &[],
            vec![],
            Some(request),
            options,
        )
        .await
    }

    async fn get_variant(
        &self,
        variant_id: String,
        options: RequestOptions,
    ) -> Result<Response<Variant>> {
        self.invoke(
            &endpoint::VARIANTS_GET,
            &[("variantId", &variant_id)],
            vec![],
            None::<NoBody>,
            options,
        )
        .await
    }

    async fn import_variants(
        &self,
        request: ImportVariantsRequest,
        options: RequestOptions,
    ) -> Result<Response<ImportVariantsResponse>> {
        self.invoke(
            &endpoint::VARIANTS_IMPORT,
            &[],
            vec![],
            Some(request),
            options,
        )
        .await
    }

    async fn patch_variant(
        &self,
        variant_id: String,
        variant: Variant,
        options: RequestOptions,
    ) -> Result<Response<Variant>> {
        self.invoke(
            &endpoint::VARIANTS_PATCH,
            &[("variantId", &variant_id)],
            vec![],
            Some(variant),
            options,
        )
        .await
    }

    async fn search_variants(
        &self,
        request: SearchVariantsRequest,
        options: RequestOptions,
    ) -> Result<Response<SearchVariantsResponse>> {
        self.invoke(
            &endpoint::VARIANTS_SEARCH,
            &[],
            vec![],
            Some(request),
            options,
        )
        .await
    }

    async fn update_variant(
        &self,
        variant_id: String,
        variant: Variant,
        options: RequestOptions,
    ) -> Result<Response<Variant>> {
        self.invoke(
            &endpoint::VARIANTS_UPDATE,
            &[("variantId", &variant_id)],
            vec![],
            Some(variant),
            options,
        )
        .await
    }
}
