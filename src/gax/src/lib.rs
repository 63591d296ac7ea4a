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

//! Request/response helpers for the Google Genomics client library.
//!
//! This crate contains the types shared by every part of the Genomics client
//! library: the error type, the response wrapper, per-request options, the
//! client builder, the credentials seam, and the pagination adapter. None of
//! these types are specific to any one API operation; the per-operation
//! surface lives in the `google-genomics-v1beta` crate.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod client_builder;
pub mod credentials;
pub mod error;
pub mod options;
pub mod paginator;
pub mod response;
