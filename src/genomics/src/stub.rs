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

use crate::Result;
use crate::model::*;
use gax::options::RequestOptions;
use gax::response::Response;

/// Defines the trait used to implement [crate::client::Genomics].
///
/// Application developers may need to implement this trait to mock the
/// clients. In other use-cases, application developers only use the clients
/// and need not be concerned with this trait or its implementations.
///
/// Every method has a default implementation returning an error, so mocks
/// only need to implement the operations they exercise.
pub trait Genomics: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Beacons::get].
    fn get_beacon(
        &self,
        _dataset_id: String,
        _allele: Option<String>,
        _contig: Option<String>,
        _position: Option<i64>,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Beacon>>> + Send {
        unimplemented_stub::<Beacon>()
    }

    /// Implements [crate::client::Callsets::create].
    fn create_callset(
        &self,
        _callset: Callset,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Callset>>> + Send {
        unimplemented_stub::<Callset>()
    }

    /// Implements [crate::client::Callsets::delete].
    fn delete_callset(
        &self,
        _callset_id: String,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Empty>>> + Send {
        unimplemented_stub::<Empty>()
    }

    /// Implements [crate::client::Callsets::get].
    fn get_callset(
        &self,
        _callset_id: String,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Callset>>> + Send {
        unimplemented_stub::<Callset>()
    }

    /// Implements [crate::client::Callsets::patch].
    fn patch_callset(
        &self,
        _callset_id: String,
        _callset: Callset,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Callset>>> + Send {
        unimplemented_stub::<Callset>()
    }

    /// Implements [crate::client::Callsets::update].
    fn update_callset(
        &self,
        _callset_id: String,
        _callset: Callset,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Callset>>> + Send {
        unimplemented_stub::<Callset>()
    }

    /// Implements [crate::client::Callsets::search].
    fn search_callsets(
        &self,
        _request: SearchCallsetsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<SearchCallsetsResponse>>> + Send {
        unimplemented_stub::<SearchCallsetsResponse>()
    }

    /// Implements [crate::client::Datasets::create].
    fn create_dataset(
        &self,
        _dataset: Dataset,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Dataset>>> + Send {
        unimplemented_stub::<Dataset>()
    }

    /// Implements [crate::client::Datasets::delete].
    fn delete_dataset(
        &self,
        _dataset_id: String,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Empty>>> + Send {
        unimplemented_stub::<Empty>()
    }

    /// Implements [crate::client::Datasets::get].
    fn get_dataset(
        &self,
        _dataset_id: String,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Dataset>>> + Send {
        unimplemented_stub::<Dataset>()
    }

    /// Implements [crate::client::Datasets::list].
    fn list_datasets(
        &self,
        _page_token: Option<String>,
        _project_id: Option<i64>,
        _max_results: Option<u64>,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<ListDatasetsResponse>>> + Send {
        unimplemented_stub::<ListDatasetsResponse>()
    }

    /// Implements [crate::client::Datasets::patch].
    fn patch_dataset(
        &self,
        _dataset_id: String,
        _dataset: Dataset,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Dataset>>> + Send {
        unimplemented_stub::<Dataset>()
    }

    /// Implements [crate::client::Datasets::update].
    fn update_dataset(
        &self,
        _dataset_id: String,
        _dataset: Dataset,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Dataset>>> + Send {
        unimplemented_stub::<Dataset>()
    }

    /// Implements [crate::client::Jobs::get].
    fn get_job(
        &self,
        _job_id: String,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Job>>> + Send {
        unimplemented_stub::<Job>()
    }

    /// Implements [crate::client::Reads::get].
    fn get_read(
        &self,
        _read_id: String,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Read>>> + Send {
        unimplemented_stub::<Read>()
    }

    /// Implements [crate::client::Reads::search].
    fn search_reads(
        &self,
        _request: SearchReadsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<SearchReadsResponse>>> + Send {
        unimplemented_stub::<SearchReadsResponse>()
    }

    /// Implements [crate::client::Readsets::create].
    fn create_readset(
        &self,
        _readset: Readset,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Readset>>> + Send {
        unimplemented_stub::<Readset>()
    }

    /// Implements [crate::client::Readsets::delete].
    fn delete_readset(
        &self,
        _readset_id: String,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Empty>>> + Send {
        unimplemented_stub::<Empty>()
    }

    /// Implements [crate::client::Readsets::export].
    fn export_readsets(
        &self,
        _request: ExportReadsetsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<ExportReadsetsResponse>>> + Send {
        unimplemented_stub::<ExportReadsetsResponse>()
    }

    /// Implements [crate::client::Readsets::get].
    fn get_readset(
        &self,
        _readset_id: String,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Readset>>> + Send {
        unimplemented_stub::<Readset>()
    }

    /// Implements [crate::client::Readsets::import].
    fn import_readsets(
        &self,
        _request: ImportReadsetsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<ImportReadsetsResponse>>> + Send {
        unimplemented_stub::<ImportReadsetsResponse>()
    }

    /// Implements [crate::client::Readsets::patch].
    fn patch_readset(
        &self,
        _readset_id: String,
        _readset: Readset,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Readset>>> + Send {
        unimplemented_stub::<Readset>()
    }

    /// Implements [crate::client::Readsets::search].
    fn search_readsets(
        &self,
        _request: SearchReadsetsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<SearchReadsetsResponse>>> + Send {
        unimplemented_stub::<SearchReadsetsResponse>()
    }

    /// Implements [crate::client::Readsets::update].
    fn update_readset(
        &self,
        _readset_id: String,
        _readset: Readset,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Readset>>> + Send {
        unimplemented_stub::<Readset>()
    }

    /// Implements [crate::client::Variants::create].
    fn create_variant(
        &self,
        _variant: Variant,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Variant>>> + Send {
        unimplemented_stub::<Variant>()
    }

    /// Implements [crate::client::Variants::delete].
    fn delete_variant(
        &self,
        _variant_id: String,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Empty>>> + Send {
        unimplemented_stub::<Empty>()
    }

    /// Implements [crate::client::Variants::export].
    fn export_variants(
        &self,
        _request: ExportVariantsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<ExportVariantsResponse>>> + Send {
        unimplemented_stub::<ExportVariantsResponse>()
    }

    /// Implements [crate::client::Variants::get].
    fn get_variant(
        &self,
        _variant_id: String,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Variant>>> + Send {
        unimplemented_stub::<Variant>()
    }

    /// Implements [crate::client::Variants::import].
    fn import_variants(
        &self,
        _request: ImportVariantsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<ImportVariantsResponse>>> + Send {
        unimplemented_stub::<ImportVariantsResponse>()
    }

    /// Implements [crate::client::Variants::patch].
    fn patch_variant(
        &self,
        _variant_id: String,
        _variant: Variant,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Variant>>> + Send {
        unimplemented_stub::<Variant>()
    }

    /// Implements [crate::client::Variants::search].
    fn search_variants(
        &self,
        _request: SearchVariantsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<SearchVariantsResponse>>> + Send {
        unimplemented_stub::<SearchVariantsResponse>()
    }

    /// Implements [crate::client::Variants::update].
    fn update_variant(
        &self,
        _variant_id: String,
        _variant: Variant,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<Variant>>> + Send {
        unimplemented_stub::<Variant>()
    }
}

async fn unimplemented_stub<T>() -> Result<Response<T>> {
    unimplemented!("this method is not implemented by the stub")
}

/// A dyn-compatible version of [Genomics].
///
/// The clients hold `Arc<dyn dynamic::Genomics>`. Any implementation of the
/// [Genomics] trait, including mocks, converts automatically.
pub mod dynamic {
    use super::*;

    #[async_trait::async_trait]
    pub trait Genomics: std::fmt::Debug + Send + Sync {
        async fn get_beacon(
            &self,
            dataset_id: String,
            allele: Option<String>,
            contig: Option<String>,
            position: Option<i64>,
            options: RequestOptions,
        ) -> Result<Response<Beacon>>;

        async fn create_callset(
            &self,
            callset: Callset,
            options: RequestOptions,
        ) -> Result<Response<Callset>>;

        async fn delete_callset(
            &self,
            callset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Empty>>;

        async fn get_callset(
            &self,
            callset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Callset>>;

        async fn patch_callset(
            &self,
            callset_id: String,
            callset: Callset,
            options: RequestOptions,
        ) -> Result<Response<Callset>>;

        async fn update_callset(
            &self,
            callset_id: String,
            callset: Callset,
            options: RequestOptions,
        ) -> Result<Response<Callset>>;

        async fn search_callsets(
            &self,
            request: SearchCallsetsRequest,
            options: RequestOptions,
        ) -> Result<Response<SearchCallsetsResponse>>;

        async fn create_dataset(
            &self,
            dataset: Dataset,
            options: RequestOptions,
        ) -> Result<Response<Dataset>>;

        async fn delete_dataset(
            &self,
            dataset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Empty>>;

        async fn get_dataset(
            &self,
            dataset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Dataset>>;

        async fn list_datasets(
            &self,
            page_token: Option<String>,
            project_id: Option<i64>,
            max_results: Option<u64>,
            options: RequestOptions,
        ) -> Result<Response<ListDatasetsResponse>>;

        async fn patch_dataset(
            &self,
            dataset_id: String,
            dataset: Dataset,
            options: RequestOptions,
        ) -> Result<Response<Dataset>>;

        async fn update_dataset(
            &self,
            dataset_id: String,
            dataset: Dataset,
            options: RequestOptions,
        ) -> Result<Response<Dataset>>;

        async fn get_job(&self, job_id: String, options: RequestOptions)
        -> Result<Response<Job>>;

        async fn get_read(
            &self,
            read_id: String,
            options: RequestOptions,
        ) -> Result<Response<Read>>;

        async fn search_reads(
            &self,
            request: SearchReadsRequest,
            options: RequestOptions,
        ) -> Result<Response<SearchReadsResponse>>;

        async fn create_readset(
            &self,
            readset: Readset,
            options: RequestOptions,
        ) -> Result<Response<Readset>>;

        async fn delete_readset(
            &self,
            readset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Empty>>;

        async fn export_readsets(
            &self,
            request: ExportReadsetsRequest,
            options: RequestOptions,
        ) -> Result<Response<ExportReadsetsResponse>>;

        async fn get_readset(
            &self,
            readset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Readset>>;

        async fn import_readsets(
            &self,
            request: ImportReadsetsRequest,
            options: RequestOptions,
        ) -> Result<Response<ImportReadsetsResponse>>;

        async fn patch_readset(
            &self,
            readset_id: String,
            readset: Readset,
            options: RequestOptions,
        ) -> Result<Response<Readset>>;

        async fn search_readsets(
            &self,
            request: SearchReadsetsRequest,
            options: RequestOptions,
        ) -> Result<Response<SearchReadsetsResponse>>;

        async fn update_readset(
            &self,
            readset_id: String,
            readset: Readset,
            options: RequestOptions,
        ) -> Result<Response<Readset>>;

        async fn create_variant(
            &self,
            variant: Variant,
            options: RequestOptions,
        ) -> Result<Response<Variant>>;

        async fn delete_variant(
            &self,
            variant_id: String,
            options: RequestOptions,
        ) -> Result<Response<Empty>>;

        async fn export_variants(
            &self,
            request: ExportVariantsRequest,
            options: RequestOptions,
        ) -> Result<Response<ExportVariantsResponse>>;

        async fn get_variant(
            &self,
            variant_id: String,
            options: RequestOptions,
        ) -> Result<Response<Variant>>;

        async fn import_variants(
            &self,
            request: ImportVariantsRequest,
            options: RequestOptions,
        ) -> Result<Response<ImportVariantsResponse>>;

        async fn patch_variant(
            &self,
            variant_id: String,
            variant: Variant,
            options: RequestOptions,
        ) -> Result<Response<Variant>>;

        async fn search_variants(
            &self,
            request: SearchVariantsRequest,
            options: RequestOptions,
        ) -> Result<Response<SearchVariantsResponse>>;

        async fn update_variant(
            &self,
            variant_id: String,
            variant: Variant,
            options: RequestOptions,
        ) -> Result<Response<Variant>>;
    }

    /// All implementations of [super::Genomics] are [dynamic::Genomics](Genomics).
    #[async_trait::async_trait]
    impl<T: super::Genomics> Genomics for T {
        async fn get_beacon(
            &self,
            dataset_id: String,
            allele: Option<String>,
            contig: Option<String>,
            position: Option<i64>,
            options: RequestOptions,
        ) -> Result<Response<Beacon>> {
            T::get_beacon(self, dataset_id, allele, contig, position, options).await
        }

        async fn create_callset(
            &self,
            callset: Callset,
            options: RequestOptions,
        ) -> Result<Response<Callset>> {
            T::create_callset(self, callset, options).await
        }

        async fn delete_callset(
            &self,
            callset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Empty>> {
            T::delete_callset(self, callset_id, options).await
        }

        async fn get_callset(
            &self,
            callset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Callset>> {
            T::get_callset(self, callset_id, options).await
        }

        async fn patch_callset(
            &self,
            callset_id: String,
            callset: Callset,
            options: RequestOptions,
        ) -> Result<Response<Callset>> {
            T::patch_callset(self, callset_id, callset, options).await
        }

        async fn update_callset(
            &self,
            callset_id: String,
            callset: Callset,
            options: RequestOptions,
        ) -> Result<Response<Callset>> {
            T::update_callset(self, callset_id, callset, options).await
        }

        async fn search_callsets(
            &self,
            request: SearchCallsetsRequest,
            options: RequestOptions,
        ) -> Result<Response<SearchCallsetsResponse>> {
            T::search_callsets(self, request, options).await
        }

        async fn create_dataset(
            &self,
            dataset: Dataset,
            options: RequestOptions,
        ) -> Result<Response<Dataset>> {
            T::create_dataset(self, dataset, options).await
        }

        async fn delete_dataset(
            &self,
            dataset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Empty>> {
            T::delete_dataset(self, dataset_id, options).await
        }

        async fn get_dataset(
            &self,
            dataset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Dataset>> {
            T::get_dataset(self, dataset_id, options).await
        }

        async fn list_datasets(
            &self,
            page_token: Option<String>,
            project_id: Option<i64>,
            max_results: Option<u64>,
            options: RequestOptions,
        ) -> Result<Response<ListDatasetsResponse>> {
            T::list_datasets(self, page_token, project_id, max_results, options).await
        }

        async fn patch_dataset(
            &self,
            dataset_id: String,
            dataset: Dataset,
            options: RequestOptions,
        ) -> Result<Response<Dataset>> {
            T::patch_dataset(self, dataset_id, dataset, options).await
        }

        async fn update_dataset(
            &self,
            dataset_id: String,
            dataset: Dataset,
            options: RequestOptions,
        ) -> Result<Response<Dataset>> {
            T::update_dataset(self, dataset_id, dataset, options).await
        }

        async fn get_job(
            &self,
            job_id: String,
            options: RequestOptions,
        ) -> Result<Response<Job>> {
            T::get_job(self, job_id, options).await
        }

        async fn get_read(
            &self,
            read_id: String,
            options: RequestOptions,
        ) -> Result<Response<Read>> {
            T::get_read(self, read_id, options).await
        }

        async fn search_reads(
            &self,
            request: SearchReadsRequest,
            options: RequestOptions,
        ) -> Result<Response<SearchReadsResponse>> {
            T::search_reads(self, request, options).await
        }

        async fn create_readset(
            &self,
            readset: Readset,
            options: RequestOptions,
        ) -> Result<Response<Readset>> {
            T::create_readset(self, readset, options).await
        }

        async fn delete_readset(
            &self,
            readset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Empty>> {
            T::delete_readset(self, readset_id, options).await
        }

        async fn export_readsets(
            &self,
            request: ExportReadsetsRequest,
            options: RequestOptions,
        ) -> Result<Response<ExportReadsetsResponse>> {
            T::export_readsets(self, request, options).await
        }

        async fn get_readset(
            &self,
            readset_id: String,
            options: RequestOptions,
        ) -> Result<Response<Readset>> {
            T::get_readset(self, readset_id, options).await
        }

        async fn import_readsets(
            &self,
            request: ImportReadsetsRequest,
            options: RequestOptions,
        ) -> Result<Response<ImportReadsetsResponse>> {
            T::import_readsets(self, request, options).await
        }

        async fn patch_readset(
            &self,
            readset_id: String,
            readset: Readset,
            options: RequestOptions,
        ) -> Result<Response<Readset>> {
            T::patch_readset(self, readset_id, readset, options).await
        }

        async fn search_readsets(
            &self,
            request: SearchReadsetsRequest,
            options: RequestOptions,
        ) -> Result<Response<SearchReadsetsResponse>> {
            T::search_readsets(self, request, options).await
        }

        async fn update_readset(
            &self,
            readset_id: String,
            readset: Readset,
            options: RequestOptions,
        ) -> Result<Response<Readset>> {
            T::update_readset(self, readset_id, readset, options).await
        }

        async fn create_variant(
            &self,
            variant: Variant,
            options: RequestOptions,
        ) -> Result<Response<Variant>> {
            T::create_variant(self, variant, options).await
        }

        async fn delete_variant(
            &self,
            variant_id: String,
            options: RequestOptions,
        ) -> Result<Response<Empty>> {
            T::delete_variant(self, variant_id, options).await
        }

        async fn export_variants(
            &self,
            request: ExportVariantsRequest,
            options: RequestOptions,
        ) -> Result<Response<ExportVariantsResponse>> {
            T::export_variants(self, request, options).await
        }

        async fn get_variant(
            &self,
            variant_id: String,
            options: RequestOptions,
        ) -> Result<Response<Variant>> {
            T::get_variant(self, variant_id, options).await
        }

        async fn import_variants(
            &self,
            request: ImportVariantsRequest,
            options: RequestOptions,
        ) -> Result<Response<ImportVariantsResponse>> {
            T::import_variants(self, request, options).await
        }

        async fn patch_variant(
            &self,
            variant_id: String,
            variant: Variant,
            options: RequestOptions,
        ) -> Result<Response<Variant>> {
            T::patch_variant(self, variant_id, variant, options).await
        }

        async fn search_variants(
            &self,
            request: SearchVariantsRequest,
            options: RequestOptions,
        ) -> Result<Response<SearchVariantsResponse>> {
            T::search_variants(self, request, options).await
        }

        async fn update_variant(
            &self,
            variant_id: String,
            variant: Variant,
            options: RequestOptions,
        ) -> Result<Response<Variant>> {
            T::update_variant(self, variant_id, variant, options).await
        }
    }
}
