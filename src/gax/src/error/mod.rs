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

//! Errors returned when making API calls.
//!
//! The library distinguishes errors detected before the request is sent
//! (serialization, missing path parameters, credentials), errors in the
//! transport (broken connections, timeouts), and non-success responses from
//! the service itself. The service does not return a uniformly structured
//! error payload, so HTTP errors carry the raw response body for the caller
//! to interpret.

mod core_error;
mod credentials;
pub use core_error::*;
pub use credentials::*;
