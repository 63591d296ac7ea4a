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

//! Google Genomics API client, v1beta.
//!
//! Provides access to Genomics data: datasets, readsets, reads, callsets,
//! variants, jobs, and beacons. The entry point is [client::Genomics]; one
//! handle is shared by all the per-resource clients:
//!
//! ```no_run
//! # use google_genomics_v1beta as genomics;
//! # tokio_test::block_on(async {
//! use genomics::client::Genomics;
//! let client = Genomics::builder().build().await?;
//! let datasets = client.datasets().list().send().await?;
//! for dataset in datasets.datasets {
//!     println!("{dataset:?}");
//! }
//! # anyhow::Result::<()>::Ok(()) });
//! ```
//!
//! Each client method returns a request builder. Required parameters are
//! arguments of the method, optional parameters are chained setters, and
//! `send()` makes exactly one request. List and search responses return one
//! page at a time; thread the continuation token through `set_page_token`,
//! or use `paginator()` to iterate all pages as a stream.

/// The default service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/genomics/v1beta/";

/// OAuth2 scopes used by this API.
pub mod scope {
    /// View and manage Genomics data.
    pub const GENOMICS: &str = "https://www.googleapis.com/auth/genomics";

    /// Manage data in Google Cloud Storage, required by import and export
    /// operations.
    pub const DEVSTORAGE_READ_WRITE: &str =
        "https://www.googleapis.com/auth/devstorage.read_write";
}

pub use gax::Result;

pub mod builder;
pub mod client;
pub mod model;
pub mod stub;

pub(crate) mod endpoint;
pub(crate) mod transport;
