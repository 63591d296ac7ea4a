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

//! The endpoint catalog.
//!
//! Each API operation is described by one [Descriptor]: the HTTP method, the
//! path template relative to the service endpoint, and the OAuth2 scopes the
//! operation requires. The descriptors are consumed by a single generic
//! invoke path in the transport; no operation carries its own request
//! building code.

use crate::scope;
use http::Method;

/// Static metadata describing one API operation.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Descriptor {
    pub method: Method,
    pub path: &'static str,
    pub scopes: &'static [&'static str],
}

const GENOMICS: &[&str] = &[scope::GENOMICS];
const GENOMICS_AND_STORAGE: &[&str] = &[scope::GENOMICS, scope::DEVSTORAGE_READ_WRITE];

macro_rules! descriptor {
    ($name:ident, $method:ident, $path:literal) => {
        descriptor!($name, $method, $path, GENOMICS);
    };
    ($name:ident, $method:ident, $path:literal, $scopes:expr) => {
        pub(crate) const $name: Descriptor = Descriptor {
            method: Method::$method,
            path: $path,
            scopes: $scopes,
        };
    };
}

descriptor!(BEACONS_GET, GET, "beacons/{datasetId}");

descriptor!(CALLSETS_CREATE, POST, "callsets");
descriptor!(CALLSETS_DELETE, DELETE, "callsets/{callsetId}");
descriptor!(CALLSETS_GET, GET, "callsets/{callsetId}");
descriptor!(CALLSETS_PATCH, PATCH, "callsets/{callsetId}");
descriptor!(CALLSETS_SEARCH, POST, "callsets/search");
descriptor!(CALLSETS_UPDATE, PUT, "callsets/{callsetId}");

descriptor!(DATASETS_CREATE, POST, "datasets");
descriptor!(DATASETS_DELETE, DELETE, "datasets/{datasetId}");
descriptor!(DATASETS_GET, GET, "datasets/{datasetId}");
descriptor!(DATASETS_LIST, GET, "datasets");
descriptor!(DATASETS_PATCH, PATCH, "datasets/{datasetId}");
descriptor!(DATASETS_UPDATE, PUT, "datasets/{datasetId}");

descriptor!(JOBS_GET, GET, "jobs/{jobId}");

descriptor!(READS_GET, GET, "reads/{readId}");
descriptor!(READS_SEARCH, POST, "reads/search");

descriptor!(READSETS_CREATE, POST, "readsets");
descriptor!(READSETS_DELETE, DELETE, "readsets/{readsetId}");
descriptor!(
    READSETS_EXPORT,
    POST,
    "readsets/export",
    GENOMICS_AND_STORAGE
);
descriptor!(READSETS_GET, GET, "readsets/{readsetId}");
descriptor!(
    READSETS_IMPORT,
    POST,
    "readsets/import",
    GENOMICS_AND_STORAGE
);
descriptor!(READSETS_PATCH, PATCH, "readsets/{readsetId}");
descriptor!(READSETS_SEARCH, POST, "readsets/search");
descriptor!(READSETS_UPDATE, PUT, "readsets/{readsetId}");

descriptor!(VARIANTS_CREATE, POST, "variants");
descriptor!(VARIANTS_DELETE, DELETE, "variants/{variantId}");
descriptor!(
    VARIANTS_EXPORT,
    POST,
    "variants/export",
    GENOMICS_AND_STORAGE
);
descriptor!(VARIANTS_GET, GET, "variants/{variantId}");
descriptor!(
    VARIANTS_IMPORT,
    POST,
    "variants/import",
    GENOMICS_AND_STORAGE
);
descriptor!(VARIANTS_PATCH, PATCH, "variants/{variantId}");
descriptor!(VARIANTS_SEARCH, POST, "variants/search");
descriptor!(VARIANTS_UPDATE, PUT, "variants/{variantId}");
