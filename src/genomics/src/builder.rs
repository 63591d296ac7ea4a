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

//! Request builders for the Genomics service.
//!
//! Each client method returns one of the builders defined here. A builder
//! collects the optional parameters for its operation, plus the per-request
//! options from [gax::options::RequestOptionsBuilder], and issues the request
//! when `send()` is called. Builders own all their state; sending one never
//! mutates the client handle.

/// Builds the [Genomics][crate::client::Genomics] client itself.
pub mod genomics {
    /// A builder for [Genomics][crate::client::Genomics].
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<Factory, gaxi::options::Credentials>;

    #[doc(hidden)]
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = crate::client::Genomics;
        type Credentials = gaxi::options::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

/// Request builders for [Beacons][crate::client::Beacons].
pub mod beacons {
    use crate::Result;
    use crate::model;
    use crate::stub::dynamic;
    use gax::options::RequestOptions;
    use std::sync::Arc;

    /// The request builder for [Beacons::get][crate::client::Beacons::get].
    #[derive(Clone, Debug)]
    pub struct Get {
        stub: Arc<dyn dynamic::Genomics>,
        dataset_id: String,
        allele: Option<String>,
        contig: Option<String>,
        position: Option<i64>,
        options: RequestOptions,
    }

    impl Get {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, dataset_id: String) -> Self {
            Self {
                stub,
                dataset_id,
                allele: None,
                contig: None,
                position: None,
                options: RequestOptions::default(),
            }
        }

        /// Restricts the query to this allele, e.g. `A` or `AC`.
        pub fn set_allele<V: Into<String>>(mut self, v: V) -> Self {
            self.allele = Some(v.into());
            self
        }

        /// Restricts the query to this contig.
        pub fn set_contig<V: Into<String>>(mut self, v: V) -> Self {
            self.contig = Some(v.into());
            self
        }

        /// Restricts the query to this position (0-based).
        pub fn set_position(mut self, v: i64) -> Self {
            self.position = Some(v);
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Beacon> {
            self.stub
                .get_beacon(
                    self.dataset_id,
                    self.allele,
                    self.contig,
                    self.position,
                    self.options,
                )
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

/// Request builders for [Callsets][crate::client::Callsets].
pub mod callsets {
    use crate::Result;
    use crate::model;
    use crate::stub::dynamic;
    use gax::options::RequestOptions;
    use gax::paginator::Paginator;
    use std::sync::Arc;

    /// The request builder for [Callsets::create][crate::client::Callsets::create].
    #[derive(Clone, Debug)]
    pub struct Create {
        stub: Arc<dyn dynamic::Genomics>,
        callset: model::Callset,
        options: RequestOptions,
    }

    impl Create {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, callset: model::Callset) -> Self {
            Self {
                stub,
                callset,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Callset> {
            self.stub
                .create_callset(self.callset, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Create {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Callsets::delete][crate::client::Callsets::delete].
    #[derive(Clone, Debug)]
    pub struct Delete {
        stub: Arc<dyn dynamic::Genomics>,
        callset_id: String,
        options: RequestOptions,
    }

    impl Delete {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, callset_id: String) -> Self {
            Self {
                stub,
                callset_id,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.stub
                .delete_callset(self.callset_id, self.options)
                .await
                .map(|_| ())
        }
    }

    impl gax::options::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Callsets::get][crate::client::Callsets::get].
    #[derive(Clone, Debug)]
    pub struct Get {
        stub: Arc<dyn dynamic::Genomics>,
        callset_id: String,
        options: RequestOptions,
    }

    impl Get {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, callset_id: String) -> Self {
            Self {
                stub,
                callset_id,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Callset> {
            self.stub
                .get_callset(self.callset_id, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Callsets::patch][crate::client::Callsets::patch].
    #[derive(Clone, Debug)]
    pub struct Patch {
        stub: Arc<dyn dynamic::Genomics>,
        callset_id: String,
        callset: model::Callset,
        options: RequestOptions,
    }

    impl Patch {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            callset_id: String,
            callset: model::Callset,
        ) -> Self {
            Self {
                stub,
                callset_id,
                callset,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Callset> {
            self.stub
                .patch_callset(self.callset_id, self.callset, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Patch {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Callsets::update][crate::client::Callsets::update].
    #[derive(Clone, Debug)]
    pub struct Update {
        stub: Arc<dyn dynamic::Genomics>,
        callset_id: String,
        callset: model::Callset,
        options: RequestOptions,
    }

    impl Update {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            callset_id: String,
            callset: model::Callset,
        ) -> Self {
            Self {
                stub,
                callset_id,
                callset,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Callset> {
            self.stub
                .update_callset(self.callset_id, self.callset, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Update {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Callsets::search][crate::client::Callsets::search].
    #[derive(Clone, Debug)]
    pub struct Search {
        stub: Arc<dyn dynamic::Genomics>,
        request: model::SearchCallsetsRequest,
        options: RequestOptions,
    }

    impl Search {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>) -> Self {
            Self {
                stub,
                request: model::SearchCallsetsRequest::default(),
                options: RequestOptions::default(),
            }
        }

        /// Restricts the query to callsets within the given datasets.
        pub fn set_dataset_ids<I, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.request.dataset_ids = v.into_iter().map(|v| v.into()).collect();
            self
        }

        /// Only return callsets with names matching this substring.
        pub fn set_name<V: Into<String>>(mut self, v: V) -> Self {
            self.request.name = v.into();
            self
        }

        /// Resumes from the token returned by a previous page.
        pub fn set_page_token<V: Into<String>>(mut self, v: V) -> Self {
            self.request.page_token = v.into();
            self
        }

        /// Sends the request. Returns one page; the caller threads
        /// `next_page_token` into the follow-up request.
        pub async fn send(self) -> Result<model::SearchCallsetsResponse> {
            self.stub
                .search_callsets(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams all pages, starting from the current page token.
        pub fn paginator(self) -> Paginator<model::SearchCallsetsResponse, gax::error::Error> {
            let token = self.request.page_token.clone();
            let builder = self;
            let execute = move |token: String| {
                let mut builder = builder.clone();
                builder.request.page_token = token;
                builder.send()
            };
            Paginator::new(token, execute)
        }
    }

    impl gax::options::RequestBuilder for Search {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

/// Request builders for [Datasets][crate::client::Datasets].
pub mod datasets {
    use crate::Result;
    use crate::model;
    use crate::stub::dynamic;
    use gax::options::RequestOptions;
    use gax::paginator::Paginator;
    use std::sync::Arc;

    /// The request builder for [Datasets::create][crate::client::Datasets::create].
    #[derive(Clone, Debug)]
    pub struct Create {
        stub: Arc<dyn dynamic::Genomics>,
        dataset: model::Dataset,
        options: RequestOptions,
    }

    impl Create {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, dataset: model::Dataset) -> Self {
            Self {
                stub,
                dataset,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Dataset> {
            self.stub
                .create_dataset(self.dataset, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Create {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Datasets::delete][crate::client::Datasets::delete].
    #[derive(Clone, Debug)]
    pub struct Delete {
        stub: Arc<dyn dynamic::Genomics>,
        dataset_id: String,
        options: RequestOptions,
    }

    impl Delete {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, dataset_id: String) -> Self {
            Self {
                stub,
                dataset_id,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.stub
                .delete_dataset(self.dataset_id, self.options)
                .await
                .map(|_| ())
        }
    }

    impl gax::options::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Datasets::get][crate::client::Datasets::get].
    #[derive(Clone, Debug)]
    pub struct Get {
        stub: Arc<dyn dynamic::Genomics>,
        dataset_id: String,
        options: RequestOptions,
    }

    impl Get {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, dataset_id: String) -> Self {
            Self {
                stub,
                dataset_id,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Dataset> {
            self.stub
                .get_dataset(self.dataset_id, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Datasets::list][crate::client::Datasets::list].
    #[derive(Clone, Debug)]
    pub struct List {
        stub: Arc<dyn dynamic::Genomics>,
        page_token: Option<String>,
        project_id: Option<i64>,
        max_results: Option<u64>,
        options: RequestOptions,
    }

    impl List {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>) -> Self {
            Self {
                stub,
                page_token: None,
                project_id: None,
                max_results: None,
                options: RequestOptions::default(),
            }
        }

        /// Resumes from the token returned by a previous page.
        pub fn set_page_token<V: Into<String>>(mut self, v: V) -> Self {
            self.page_token = Some(v.into());
            self
        }

        /// Restricts the query to datasets owned by this project.
        pub fn set_project_id(mut self, v: i64) -> Self {
            self.project_id = Some(v);
            self
        }

        /// The maximum number of results per page.
        pub fn set_max_results(mut self, v: u64) -> Self {
            self.max_results = Some(v);
            self
        }

        /// Sends the request. Returns one page; the caller threads
        /// `next_page_token` into the follow-up request.
        pub async fn send(self) -> Result<model::ListDatasetsResponse> {
            self.stub
                .list_datasets(
                    self.page_token,
                    self.project_id,
                    self.max_results,
                    self.options,
                )
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams all pages, starting from the current page token.
        pub fn paginator(self) -> Paginator<model::ListDatasetsResponse, gax::error::Error> {
            let token = self.page_token.clone().unwrap_or_default();
            let builder = self;
            let execute = move |token: String| {
                let mut builder = builder.clone();
                builder.page_token = if token.is_empty() { None } else { Some(token) };
                builder.send()
            };
            Paginator::new(token, execute)
        }
    }

    impl gax::options::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Datasets::patch][crate::client::Datasets::patch].
    #[derive(Clone, Debug)]
    pub struct Patch {
        stub: Arc<dyn dynamic::Genomics>,
        dataset_id: String,
        dataset: model::Dataset,
        options: RequestOptions,
    }

    impl Patch {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            dataset_id: String,
            dataset: model::Dataset,
        ) -> Self {
            Self {
                stub,
                dataset_id,
                dataset,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Dataset> {
            self.stub
                .patch_dataset(self.dataset_id, self.dataset, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Patch {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Datasets::update][crate::client::Datasets::update].
    #[derive(Clone, Debug)]
    pub struct Update {
        stub: Arc<dyn dynamic::Genomics>,
        dataset_id: String,
        dataset: model::Dataset,
        options: RequestOptions,
    }

    impl Update {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            dataset_id: String,
            dataset: model::Dataset,
        ) -> Self {
            Self {
                stub,
                dataset_id,
                dataset,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Dataset> {
            self.stub
                .update_dataset(self.dataset_id, self.dataset, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Update {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

/// Request builders for [Jobs][crate::client::Jobs].
pub mod jobs {
    use crate::Result;
    use crate::model;
    use crate::stub::dynamic;
    use gax::options::RequestOptions;
    use std::sync::Arc;

    /// The request builder for [Jobs::get][crate::client::Jobs::get].
    #[derive(Clone, Debug)]
    pub struct Get {
        stub: Arc<dyn dynamic::Genomics>,
        job_id: String,
        options: RequestOptions,
    }

    impl Get {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, job_id: String) -> Self {
            Self {
                stub,
                job_id,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Job> {
            self.stub
                .get_job(self.job_id, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

/// Request builders for [Reads][crate::client::Reads].
pub mod reads {
    use crate::Result;
    use crate::model;
    use crate::stub::dynamic;
    use gax::options::RequestOptions;
    use gax::paginator::Paginator;
    use std::sync::Arc;

    /// The request builder for [Reads::get][crate::client::Reads::get].
    #[derive(Clone, Debug)]
    pub struct Get {
        stub: Arc<dyn dynamic::Genomics>,
        read_id: String,
        options: RequestOptions,
    }

    impl Get {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, read_id: String) -> Self {
            Self {
                stub,
                read_id,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Read> {
            self.stub
                .get_read(self.read_id, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Reads::search][crate::client::Reads::search].
    #[derive(Clone, Debug)]
    pub struct Search {
        stub: Arc<dyn dynamic::Genomics>,
        request: model::SearchReadsRequest,
        options: RequestOptions,
    }

    impl Search {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>) -> Self {
            Self {
                stub,
                request: model::SearchReadsRequest::default(),
                options: RequestOptions::default(),
            }
        }

        /// Restricts the query to reads within the given datasets.
        pub fn set_dataset_ids<I, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.request.dataset_ids = v.into_iter().map(|v| v.into()).collect();
            self
        }

        /// Restricts the query to reads within the given readsets.
        pub fn set_readset_ids<I, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.request.readset_ids = v.into_iter().map(|v| v.into()).collect();
            self
        }

        /// The sequence to query, e.g. `X`. Blank matches all sequences,
        /// including unmapped reads.
        pub fn set_sequence_name<V: Into<String>>(mut self, v: V) -> Self {
            self.request.sequence_name = v.into();
            self
        }

        /// The start position (1-based) of this query.
        pub fn set_sequence_start(mut self, v: u64) -> Self {
            self.request.sequence_start = Some(v);
            self
        }

        /// The end position (1-based, inclusive) of this query.
        pub fn set_sequence_end(mut self, v: u64) -> Self {
            self.request.sequence_end = Some(v);
            self
        }

        /// Resumes from the token returned by a previous page.
        pub fn set_page_token<V: Into<String>>(mut self, v: V) -> Self {
            self.request.page_token = v.into();
            self
        }

        /// Sends the request. Returns one page; the caller threads
        /// `next_page_token` into the follow-up request.
        pub async fn send(self) -> Result<model::SearchReadsResponse> {
            self.stub
                .search_reads(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams all pages, starting from the current page token.
        pub fn paginator(self) -> Paginator<model::SearchReadsResponse, gax::error::Error> {
            let token = self.request.page_token.clone();
            let builder = self;
            let execute = move |token: String| {
                let mut builder = builder.clone();
                builder.request.page_token = token;
                builder.send()
            };
            Paginator::new(token, execute)
        }
    }

    impl gax::options::RequestBuilder for Search {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

/// Request builders for [Readsets][crate::client::Readsets].
pub mod readsets {
    use crate::Result;
    use crate::model;
    use crate::stub::dynamic;
    use gax::options::RequestOptions;
    use gax::paginator::Paginator;
    use std::sync::Arc;

    /// The request builder for [Readsets::create][crate::client::Readsets::create].
    #[derive(Clone, Debug)]
    pub struct Create {
        stub: Arc<dyn dynamic::Genomics>,
        readset: model::Readset,
        options: RequestOptions,
    }

    impl Create {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, readset: model::Readset) -> Self {
            Self {
                stub,
                readset,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Readset> {
            self.stub
                .create_readset(self.readset, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Create {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Readsets::delete][crate::client::Readsets::delete].
    #[derive(Clone, Debug)]
    pub struct Delete {
        stub: Arc<dyn dynamic::Genomics>,
        readset_id: String,
        options: RequestOptions,
    }

    impl Delete {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, readset_id: String) -> Self {
            Self {
                stub,
                readset_id,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.stub
                .delete_readset(self.readset_id, self.options)
                .await
                .map(|_| ())
        }
    }

    impl gax::options::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Readsets::export][crate::client::Readsets::export].
    #[derive(Clone, Debug)]
    pub struct Export {
        stub: Arc<dyn dynamic::Genomics>,
        request: model::ExportReadsetsRequest,
        options: RequestOptions,
    }

    impl Export {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            request: model::ExportReadsetsRequest,
        ) -> Self {
            Self {
                stub,
                request,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ExportReadsetsResponse> {
            self.stub
                .export_readsets(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Export {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Readsets::get][crate::client::Readsets::get].
    #[derive(Clone, Debug)]
    pub struct Get {
        stub: Arc<dyn dynamic::Genomics>,
        readset_id: String,
        options: RequestOptions,
    }

    impl Get {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, readset_id: String) -> Self {
            Self {
                stub,
                readset_id,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Readset> {
            self.stub
                .get_readset(self.readset_id, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Readsets::import][crate::client::Readsets::import].
    #[derive(Clone, Debug)]
    pub struct Import {
        stub: Arc<dyn dynamic::Genomics>,
        request: model::ImportReadsetsRequest,
        options: RequestOptions,
    }

    impl Import {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            request: model::ImportReadsetsRequest,
        ) -> Self {
            Self {
                stub,
                request,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ImportReadsetsResponse> {
            self.stub
                .import_readsets(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Import {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Readsets::patch][crate::client::Readsets::patch].
    #[derive(Clone, Debug)]
    pub struct Patch {
        stub: Arc<dyn dynamic::Genomics>,
        readset_id: String,
        readset: model::Readset,
        options: RequestOptions,
    }

    impl Patch {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            readset_id: String,
            readset: model::Readset,
        ) -> Self {
            Self {
                stub,
                readset_id,
                readset,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Readset> {
            self.stub
                .patch_readset(self.readset_id, self.readset, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Patch {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Readsets::search][crate::client::Readsets::search].
    #[derive(Clone, Debug)]
    pub struct Search {
        stub: Arc<dyn dynamic::Genomics>,
        request: model::SearchReadsetsRequest,
        options: RequestOptions,
    }

    impl Search {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, dataset_ids: Vec<String>) -> Self {
            Self {
                stub,
                request: model::SearchReadsetsRequest {
                    dataset_ids,
                    ..Default::default()
                },
                options: RequestOptions::default(),
            }
        }

        /// Only return readsets with names matching this substring.
        pub fn set_name<V: Into<String>>(mut self, v: V) -> Self {
            self.request.name = v.into();
            self
        }

        /// Resumes from the token returned by a previous page.
        pub fn set_page_token<V: Into<String>>(mut self, v: V) -> Self {
            self.request.page_token = v.into();
            self
        }

        /// Sends the request. Returns one page; the caller threads
        /// `next_page_token` into the follow-up request.
        pub async fn send(self) -> Result<model::SearchReadsetsResponse> {
            self.stub
                .search_readsets(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams all pages, starting from the current page token.
        pub fn paginator(self) -> Paginator<model::SearchReadsetsResponse, gax::error::Error> {
            let token = self.request.page_token.clone();
            let builder = self;
            let execute = move |token: String| {
                let mut builder = builder.clone();
                builder.request.page_token = token;
                builder.send()
            };
            Paginator::new(token, execute)
        }
    }

    impl gax::options::RequestBuilder for Search {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Readsets::update][crate::client::Readsets::update].
    #[derive(Clone, Debug)]
    pub struct Update {
        stub: Arc<dyn dynamic::Genomics>,
        readset_id: String,
        readset: model::Readset,
        options: RequestOptions,
    }

    impl Update {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            readset_id: String,
            readset: model::Readset,
        ) -> Self {
            Self {
                stub,
                readset_id,
                readset,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Readset> {
            self.stub
                .update_readset(self.readset_id, self.readset, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Update {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

/// Request builders for [Variants][crate::client::Variants].
pub mod variants {
    use crate::Result;
    use crate::model;
    use crate::stub::dynamic;
    use gax::options::RequestOptions;
    use gax::paginator::Paginator;
    use std::sync::Arc;

    /// The request builder for [Variants::create][crate::client::Variants::create].
    #[derive(Clone, Debug)]
    pub struct Create {
        stub: Arc<dyn dynamic::Genomics>,
        variant: model::Variant,
        options: RequestOptions,
    }

    impl Create {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, variant: model::Variant) -> Self {
            Self {
                stub,
                variant,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Variant> {
            self.stub
                .create_variant(self.variant, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Create {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Variants::delete][crate::client::Variants::delete].
    #[derive(Clone, Debug)]
    pub struct Delete {
        stub: Arc<dyn dynamic::Genomics>,
        variant_id: String,
        options: RequestOptions,
    }

    impl Delete {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, variant_id: String) -> Self {
            Self {
                stub,
                variant_id,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.stub
                .delete_variant(self.variant_id, self.options)
                .await
                .map(|_| ())
        }
    }

    impl gax::options::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Variants::export][crate::client::Variants::export].
    #[derive(Clone, Debug)]
    pub struct Export {
        stub: Arc<dyn dynamic::Genomics>,
        request: model::ExportVariantsRequest,
        options: RequestOptions,
    }

    impl Export {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            request: model::ExportVariantsRequest,
        ) -> Self {
            Self {
                stub,
                request,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ExportVariantsResponse> {
            self.stub
                .export_variants(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Export {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Variants::get][crate::client::Variants::get].
    #[derive(Clone, Debug)]
    pub struct Get {
        stub: Arc<dyn dynamic::Genomics>,
        variant_id: String,
        options: RequestOptions,
    }

    impl Get {
        pub(crate) fn new(stub: Arc<dyn dynamic::Genomics>, variant_id: String) -> Self {
            Self {
                stub,
                variant_id,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Variant> {
            self.stub
                .get_variant(self.variant_id, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Variants::import][crate::client::Variants::import].
    #[derive(Clone, Debug)]
    pub struct Import {
        stub: Arc<dyn dynamic::Genomics>,
        request: model::ImportVariantsRequest,
        options: RequestOptions,
    }

    impl Import {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            request: model::ImportVariantsRequest,
        ) -> Self {
            Self {
                stub,
                request,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ImportVariantsResponse> {
            self.stub
                .import_variants(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Import {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Variants::patch][crate::client::Variants::patch].
    #[derive(Clone, Debug)]
    pub struct Patch {
        stub: Arc<dyn dynamic::Genomics>,
        variant_id: String,
        variant: model::Variant,
        options: RequestOptions,
    }

    impl Patch {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            variant_id: String,
            variant: model::Variant,
        ) -> Self {
            Self {
                stub,
                variant_id,
                variant,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Variant> {
            self.stub
                .patch_variant(self.variant_id, self.variant, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Patch {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Variants::search][crate::client::Variants::search].
    #[derive(Clone, Debug)]
    pub struct Search {
        stub: Arc<dyn dynamic::Genomics>,
        request: model::SearchVariantsRequest,
        options: RequestOptions,
    }

    impl Search {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            dataset_id: String,
            contig: String,
            start_position: i64,
            end_position: i64,
        ) -> Self {
            Self {
                stub,
                request: model::SearchVariantsRequest {
                    dataset_id,
                    contig,
                    start_position: Some(start_position),
                    end_position: Some(end_position),
                    ..Default::default()
                },
                options: RequestOptions::default(),
            }
        }

        /// Only return variant calls belonging to callsets with these IDs.
        pub fn set_callset_ids<I, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.request.callset_ids = v.into_iter().map(|v| v.into()).collect();
            self
        }

        /// Only return variant calls belonging to callsets with these names.
        pub fn set_callset_names<I, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.request.callset_names = v.into_iter().map(|v| v.into()).collect();
            self
        }

        /// Only return variants with exactly this name.
        pub fn set_variant_name<V: Into<String>>(mut self, v: V) -> Self {
            self.request.variant_name = v.into();
            self
        }

        /// The maximum number of variants to return per page.
        pub fn set_max_results(mut self, v: u64) -> Self {
            self.request.max_results = Some(v);
            self
        }

        /// Resumes from the token returned by a previous page.
        pub fn set_page_token<V: Into<String>>(mut self, v: V) -> Self {
            self.request.page_token = v.into();
            self
        }

        /// Sends the request. Returns one page; the caller threads
        /// `next_page_token` into the follow-up request.
        pub async fn send(self) -> Result<model::SearchVariantsResponse> {
            self.stub
                .search_variants(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams all pages, starting from the current page token.
        pub fn paginator(self) -> Paginator<model::SearchVariantsResponse, gax::error::Error> {
            let token = self.request.page_token.clone();
            let builder = self;
            let execute = move |token: String| {
                let mut builder = builder.clone();
                builder.request.page_token = token;
                builder.send()
            };
            Paginator::new(token, execute)
        }
    }

    impl gax::options::RequestBuilder for Search {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Variants::update][crate::client::Variants::update].
    #[derive(Clone, Debug)]
    pub struct Update {
        stub: Arc<dyn dynamic::Genomics>,
        variant_id: String,
        variant: model::Variant,
        options: RequestOptions,
    }

    impl Update {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::Genomics>,
            variant_id: String,
            variant: model::Variant,
        ) -> Self {
            Self {
                stub,
                variant_id,
                variant,
                options: RequestOptions::default(),
            }
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Variant> {
            self.stub
                .update_variant(self.variant_id, self.variant, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    impl gax::options::RequestBuilder for Update {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model;
    use gax::Result;
    use gax::options::{RequestOptions, RequestOptionsBuilder};
    use gax::response::Response;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct PagingStub {
        seen_tokens: Mutex<Vec<String>>,
        pages: Mutex<VecDeque<model::SearchReadsetsResponse>>,
    }

    impl crate::stub::Genomics for PagingStub {
        async fn search_readsets(
            &self,
            request: model::SearchReadsetsRequest,
            _options: RequestOptions,
        ) -> Result<Response<model::SearchReadsetsResponse>> {
            self.seen_tokens.lock().unwrap().push(request.page_token);
            let page = self.pages.lock().unwrap().pop_front().unwrap();
            Ok(Response::from(page))
        }
    }

    fn page(ids: &[&str], token: &str) -> model::SearchReadsetsResponse {
        model::SearchReadsetsResponse {
            readsets: ids
                .iter()
                .map(|id| model::Readset {
                    id: id.to_string(),
                    ..Default::default()
                })
                .collect(),
            next_page_token: token.to_string(),
        }
    }

    #[tokio::test]
    async fn paginator_threads_tokens() {
        let stub = PagingStub::default();
        stub.pages
            .lock()
            .unwrap()
            .extend([page(&["r1"], "t2"), page(&["r2"], "t3"), page(&["r3"], "")]);
        let stub = Arc::new(stub);

        let builder = super::readsets::Search::new(stub.clone(), vec!["ds".to_string()]);
        let mut paginator = builder.paginator();
        let mut ids = vec![];
        while let Some(result) = paginator.next().await {
            let page = result.unwrap();
            ids.extend(page.readsets.into_iter().map(|r| r.id));
        }

        assert_eq!(ids, vec!["r1", "r2", "r3"]);
        let tokens = stub.seen_tokens.lock().unwrap().clone();
        assert_eq!(tokens, vec!["", "t2", "t3"]);
    }

    #[tokio::test]
    async fn paginator_starts_from_explicit_token() {
        let stub = PagingStub::default();
        stub.pages.lock().unwrap().extend([page(&["r9"], "")]);
        let stub = Arc::new(stub);

        let builder = super::readsets::Search::new(stub.clone(), vec!["ds".to_string()])
            .set_page_token("resume");
        let mut paginator = builder.paginator();
        assert!(paginator.next().await.is_some());
        assert!(paginator.next().await.is_none());

        let tokens = stub.seen_tokens.lock().unwrap().clone();
        assert_eq!(tokens, vec!["resume"]);
    }

    #[tokio::test]
    async fn send_consumes_builder_without_touching_others() {
        let stub = PagingStub::default();
        stub.pages
            .lock()
            .unwrap()
            .extend([page(&["a"], "next-a"), page(&["b"], "")]);
        let stub = Arc::new(stub);

        let first = super::readsets::Search::new(stub.clone(), vec!["ds".to_string()])
            .send()
            .await
            .unwrap();
        assert_eq!(first.next_page_token, "next-a");

        // A second builder starts from a clean token unless the caller
        // threads the previous one in.
        let second = super::readsets::Search::new(stub.clone(), vec!["ds".to_string()])
            .send()
            .await
            .unwrap();
        assert_eq!(second.next_page_token, "");

        let tokens = stub.seen_tokens.lock().unwrap().clone();
        assert_eq!(tokens, vec!["", ""]);
    }

    #[tokio::test]
    async fn request_options_compose_with_setters() {
        #[derive(Debug)]
        struct CaptureStub(Mutex<Option<RequestOptions>>);
        impl crate::stub::Genomics for CaptureStub {
            async fn get_dataset(
                &self,
                dataset_id: String,
                options: RequestOptions,
            ) -> Result<Response<model::Dataset>> {
                *self.0.lock().unwrap() = Some(options);
                Ok(Response::from(model::Dataset {
                    id: dataset_id,
                    ..Default::default()
                }))
            }
        }

        let stub = Arc::new(CaptureStub(Mutex::new(None)));
        let d = std::time::Duration::from_secs(7);
        let dataset = super::datasets::Get::new(stub.clone(), "ds-1".into())
            .with_attempt_timeout(d)
            .send()
            .await
            .unwrap();
        assert_eq!(dataset.id, "ds-1");

        let captured = stub.0.lock().unwrap().take().unwrap();
        assert_eq!(captured.attempt_timeout(), &Some(d));
    }
}
