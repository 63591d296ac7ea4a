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

//! Per-request options.
//!
//! Applications can tweak individual requests without changing the client
//! configuration. The request builders returned by each client method
//! implement [RequestOptionsBuilder], so the options compose with the
//! operation parameters:
//!
//! ```ignore
//! use google_genomics_gax::options::RequestOptionsBuilder;
//! let job = client.jobs().get("job-id")
//!     .with_attempt_timeout(std::time::Duration::from_secs(5))
//!     .send()
//!     .await?;
//! ```

/// The per-request options.
///
/// There is a single timeout and it bounds the full request, including any
/// time spent producing authentication headers. The library makes exactly one
/// attempt per request; a timed-out request is reported as a timeout error,
/// never silently retried.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
}

impl RequestOptions {
    /// Sets an extra value to prepend to the `User-Agent` header.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix, if any.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for this request.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the timeout for this request, if any.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }
}

/// Implementations of this trait can configure the options in a request.
pub trait RequestOptionsBuilder {
    /// Set a value to prepend to the `User-Agent` header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Set the timeout for this request.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;
}

/// Simplify implementation of the [RequestOptionsBuilder] trait in the
/// request builders.
///
/// This is an implementation detail, most applications have little need to
/// use or even know about this trait.
pub trait RequestBuilder {
    fn request_options(&mut self) -> &mut RequestOptions;
}

/// Request builders implement [RequestOptionsBuilder] via the blanket
/// implementation.
impl<T> RequestOptionsBuilder for T
where
    T: RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }
}
