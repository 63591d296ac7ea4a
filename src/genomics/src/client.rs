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

//! The Genomics service handle and the per-resource clients.

use crate::builder;
use crate::model::*;
use crate::stub;
use std::sync::Arc;

/// A handle to the Genomics service.
///
/// The handle is immutable and cheap to clone: all the per-resource clients
/// obtained from it share one transport, and the handle keeps no per-request
/// state. In particular, pagination tokens never live on the handle; they
/// are threaded through each request explicitly.
///
/// # Example
/// ```no_run
/// # use google_genomics_v1beta::client::Genomics;
/// # tokio_test::block_on(async {
/// let client = Genomics::builder().build().await?;
/// let dataset = client.datasets().get("376902546192").send().await?;
/// # anyhow::Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct Genomics {
    inner: Arc<dyn stub::dynamic::Genomics>,
}

impl Genomics {
    /// Returns a builder for [Genomics].
    ///
    /// ```no_run
    /// # use google_genomics_v1beta::client::Genomics;
    /// # tokio_test::block_on(async {
    /// let client = Genomics::builder().build().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> builder::genomics::ClientBuilder {
        gax::client_builder::internal::new_builder(builder::genomics::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::Genomics + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = crate::transport::Genomics::new(config).await?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// The client for beacon queries.
    pub fn beacons(&self) -> Beacons {
        Beacons {
            inner: self.inner.clone(),
        }
    }

    /// The client for callset operations.
    pub fn callsets(&self) -> Callsets {
        Callsets {
            inner: self.inner.clone(),
        }
    }

    /// The client for dataset operations.
    pub fn datasets(&self) -> Datasets {
        Datasets {
            inner: self.inner.clone(),
        }
    }

    /// The client for job status queries.
    pub fn jobs(&self) -> Jobs {
        Jobs {
            inner: self.inner.clone(),
        }
    }

    /// The client for read operations.
    pub fn reads(&self) -> Reads {
        Reads {
            inner: self.inner.clone(),
        }
    }

    /// The client for readset operations.
    pub fn readsets(&self) -> Readsets {
        Readsets {
            inner: self.inner.clone(),
        }
    }

    /// The client for variant operations.
    pub fn variants(&self) -> Variants {
        Variants {
            inner: self.inner.clone(),
        }
    }
}

/// Queries the existence of alleles in public datasets.
///
/// Beacon queries work over public datasets without authentication.
#[derive(Clone, Debug)]
pub struct Beacons {
    pub(crate) inner: Arc<dyn stub::dynamic::Genomics>,
}

impl Beacons {
    /// Queries whether any variant call in the dataset carries an allele.
    pub fn get<V: Into<String>>(&self, dataset_id: V) -> builder::beacons::Get {
        builder::beacons::Get::new(self.inner.clone(), dataset_id.into())
    }
}

/// Works with callsets: groups of variant calls.
#[derive(Clone, Debug)]
pub struct Callsets {
    pub(crate) inner: Arc<dyn stub::dynamic::Genomics>,
}

impl Callsets {
    /// Creates a new callset.
    pub fn create(&self, callset: Callset) -> builder::callsets::Create {
        builder::callsets::Create::new(self.inner.clone(), callset)
    }

    /// Deletes a callset.
    pub fn delete<V: Into<String>>(&self, callset_id: V) -> builder::callsets::Delete {
        builder::callsets::Delete::new(self.inner.clone(), callset_id.into())
    }

    /// Gets a callset by ID.
    pub fn get<V: Into<String>>(&self, callset_id: V) -> builder::callsets::Get {
        builder::callsets::Get::new(self.inner.clone(), callset_id.into())
    }

    /// Updates a callset. This method supports patch semantics.
    pub fn patch<V: Into<String>>(&self, callset_id: V, callset: Callset) -> builder::callsets::Patch {
        builder::callsets::Patch::new(self.inner.clone(), callset_id.into(), callset)
    }

    /// Updates a callset.
    pub fn update<V: Into<String>>(
        &self,
        callset_id: V,
        callset: Callset,
    ) -> builder::callsets::Update {
        builder::callsets::Update::new(self.inner.clone(), callset_id.into(), callset)
    }

    /// Searches for callsets matching the criteria.
    pub fn search(&self) -> builder::callsets::Search {
        builder::callsets::Search::new(self.inner.clone())
    }
}

/// Works with datasets: the containers of genomics data.
#[derive(Clone, Debug)]
pub struct Datasets {
    pub(crate) inner: Arc<dyn stub::dynamic::Genomics>,
}

impl Datasets {
    /// Creates a new dataset.
    pub fn create(&self, dataset: Dataset) -> builder::datasets::Create {
        builder::datasets::Create::new(self.inner.clone(), dataset)
    }

    /// Deletes a dataset.
    pub fn delete<V: Into<String>>(&self, dataset_id: V) -> builder::datasets::Delete {
        builder::datasets::Delete::new(self.inner.clone(), dataset_id.into())
    }

    /// Gets a dataset by ID.
    pub fn get<V: Into<String>>(&self, dataset_id: V) -> builder::datasets::Get {
        builder::datasets::Get::new(self.inner.clone(), dataset_id.into())
    }

    /// Lists all datasets, one page at a time.
    pub fn list(&self) -> builder::datasets::List {
        builder::datasets::List::new(self.inner.clone())
    }

    /// Updates a dataset. This method supports patch semantics.
    pub fn patch<V: Into<String>>(&self, dataset_id: V, dataset: Dataset) -> builder::datasets::Patch {
        builder::datasets::Patch::new(self.inner.clone(), dataset_id.into(), dataset)
    }

    /// Updates a dataset.
    pub fn update<V: Into<String>>(
        &self,
        dataset_id: V,
        dataset: Dataset,
    ) -> builder::datasets::Update {
        builder::datasets::Update::new(self.inner.clone(), dataset_id.into(), dataset)
    }
}

/// Polls the status of asynchronous import and export jobs.
#[derive(Clone, Debug)]
pub struct Jobs {
    pub(crate) inner: Arc<dyn stub::dynamic::Genomics>,
}

impl Jobs {
    /// Gets a job by ID.
    pub fn get<V: Into<String>>(&self, job_id: V) -> builder::jobs::Get {
        builder::jobs::Get::new(self.inner.clone(), job_id.into())
    }
}

/// Works with reads: individual read alignments.
#[derive(Clone, Debug)]
pub struct Reads {
    pub(crate) inner: Arc<dyn stub::dynamic::Genomics>,
}

impl Reads {
    /// Gets a read by ID.
    pub fn get<V: Into<String>>(&self, read_id: V) -> builder::reads::Get {
        builder::reads::Get::new(self.inner.clone(), read_id.into())
    }

    /// Searches for reads matching the criteria. At least one dataset ID or
    /// one readset ID must be set before sending.
    pub fn search(&self) -> builder::reads::Search {
        builder::reads::Search::new(self.inner.clone())
    }
}

/// Works with readsets: collections of reads, usually one BAM file each.
#[derive(Clone, Debug)]
pub struct Readsets {
    pub(crate) inner: Arc<dyn stub::dynamic::Genomics>,
}

impl Readsets {
    /// Creates a new readset.
    pub fn create(&self, readset: Readset) -> builder::readsets::Create {
        builder::readsets::Create::new(self.inner.clone(), readset)
    }

    /// Deletes a readset.
    pub fn delete<V: Into<String>>(&self, readset_id: V) -> builder::readsets::Delete {
        builder::readsets::Delete::new(self.inner.clone(), readset_id.into())
    }

    /// Starts an asynchronous export of readsets to Google Cloud Storage.
    ///
    /// The returned export ID can be polled through [Jobs::get].
    pub fn export(&self, request: ExportReadsetsRequest) -> builder::readsets::Export {
        builder::readsets::Export::new(self.inner.clone(), request)
    }

    /// Gets a readset by ID.
    pub fn get<V: Into<String>>(&self, readset_id: V) -> builder::readsets::Get {
        builder::readsets::Get::new(self.inner.clone(), readset_id.into())
    }

    /// Starts an asynchronous import of BAM or FASTQ files.
    ///
    /// The returned job ID can be polled through [Jobs::get].
    pub fn import(&self, request: ImportReadsetsRequest) -> builder::readsets::Import {
        builder::readsets::Import::new(self.inner.clone(), request)
    }

    /// Updates a readset. This method supports patch semantics.
    pub fn patch<V: Into<String>>(&self, readset_id: V, readset: Readset) -> builder::readsets::Patch {
        builder::readsets::Patch::new(self.inner.clone(), readset_id.into(), readset)
    }

    /// Searches for readsets within the given datasets.
    pub fn search<I, V>(&self, dataset_ids: I) -> builder::readsets::Search
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        builder::readsets::Search::new(
            self.inner.clone(),
            dataset_ids.into_iter().map(|v| v.into()).collect(),
        )
    }

    /// Updates a readset.
    pub fn update<V: Into<String>>(
        &self,
        readset_id: V,
        readset: Readset,
    ) -> builder::readsets::Update {
        builder::readsets::Update::new(self.inner.clone(), readset_id.into(), readset)
    }
}

/// Works with variants and their calls.
#[derive(Clone, Debug)]
pub struct Variants {
    pub(crate) inner: Arc<dyn stub::dynamic::Genomics>,
}

impl Variants {
    /// Creates a new variant.
    pub fn create(&self, variant: Variant) -> builder::variants::Create {
        builder::variants::Create::new(self.inner.clone(), variant)
    }

    /// Deletes a variant.
    pub fn delete<V: Into<String>>(&self, variant_id: V) -> builder::variants::Delete {
        builder::variants::Delete::new(self.inner.clone(), variant_id.into())
    }

    /// Starts an asynchronous export of variant data.
    pub fn export(&self, request: ExportVariantsRequest) -> builder::variants::Export {
        builder::variants::Export::new(self.inner.clone(), request)
    }

    /// Gets a variant by ID.
    pub fn get<V: Into<String>>(&self, variant_id: V) -> builder::variants::Get {
        builder::variants::Get::new(self.inner.clone(), variant_id.into())
    }

    /// Starts an asynchronous import of VCF files.
    pub fn import(&self, request: ImportVariantsRequest) -> builder::variants::Import {
        builder::variants::Import::new(self.inner.clone(), request)
    }

    /// Updates a variant. This method supports patch semantics.
    pub fn patch<V: Into<String>>(&self, variant_id: V, variant: Variant) -> builder::variants::Patch {
        builder::variants::Patch::new(self.inner.clone(), variant_id.into(), variant)
    }

    /// Searches for variants overlapping a window of one contig.
    pub fn search<D, C>(
        &self,
        dataset_id: D,
        contig: C,
        start_position: i64,
        end_position: i64,
    ) -> builder::variants::Search
    where
        D: Into<String>,
        C: Into<String>,
    {
        builder::variants::Search::new(
            self.inner.clone(),
            dataset_id.into(),
            contig.into(),
            start_position,
            end_position,
        )
    }

    /// Updates a variant.
    pub fn update<V: Into<String>>(
        &self,
        variant_id: V,
        variant: Variant,
    ) -> builder::variants::Update {
        builder::variants::Update::new(self.inner.clone(), variant_id.into(), variant)
    }
}
