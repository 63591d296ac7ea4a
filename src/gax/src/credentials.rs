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

//! Authentication credentials.
//!
//! The client library does not implement any OAuth2 flow. Instead it accepts
//! [Credentials]: a capability that produces the authentication headers for
//! each outgoing request. Applications that already hold an OAuth2 access
//! token can use [Bearer tokens](bearer::Builder); applications querying
//! public data can use [anonymous credentials](anonymous::Builder); anything
//! more elaborate (token refresh, service accounts) plugs in through the
//! [CredentialsProvider] trait.
//!
//! # Example
//! ```
//! # use google_genomics_gax::credentials::bearer;
//! # tokio_test::block_on(async {
//! let credentials = bearer::Builder::new("ya29.test-token").build();
//! let headers = credentials.headers().await.unwrap();
//! assert_eq!(
//!     headers.get(http::header::AUTHORIZATION).unwrap(),
//!     "Bearer ya29.test-token",
//! );
//! # });
//! ```

use crate::error::CredentialsError;
use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use std::sync::Arc;

/// The result type for credentials operations.
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// Produces the authentication headers for outgoing requests.
///
/// Implement this trait to integrate an external token source, for example a
/// refreshing OAuth2 flow. The transport calls [headers][Self::headers]
/// before every request; implementations that cache tokens should handle
/// expiry internally.
pub trait CredentialsProvider: std::fmt::Debug + Send + Sync {
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result};

    /// A dyn-compatible version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: std::fmt::Debug + Send + Sync {
        async fn headers(&self) -> Result<HeaderMap>;
    }

    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// The authentication capability injected into a client.
///
/// This is a thin wrapper around a [CredentialsProvider], cheap to clone and
/// share between clients.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> From<T> for Credentials
where
    T: CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to attach to the next request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Credentials for anonymous access.
pub mod anonymous {
    use super::*;

    /// Creates credentials that attach no authentication headers.
    ///
    /// Useful for beacon queries over public datasets and for tests.
    #[derive(Debug, Default)]
    pub struct Builder;

    impl Builder {
        pub fn new() -> Self {
            Self
        }

        pub fn build(self) -> Credentials {
            Credentials::from(AnonymousCredentials)
        }
    }

    #[derive(Debug)]
    struct AnonymousCredentials;

    impl CredentialsProvider for AnonymousCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            Ok(HeaderMap::new())
        }
    }
}

/// Credentials backed by a fixed OAuth2 access token.
pub mod bearer {
    use super::*;

    /// Creates credentials that send `Authorization: Bearer <token>`.
    ///
    /// The token is used as-is. It is the application's responsibility to
    /// obtain a token with the required scopes and to replace the
    /// credentials when the token expires.
    #[derive(Debug)]
    pub struct Builder {
        token: String,
    }

    impl Builder {
        pub fn new<T: Into<String>>(token: T) -> Self {
            Self {
                token: token.into(),
            }
        }

        pub fn build(self) -> Credentials {
            Credentials::from(BearerCredentials { token: self.token })
        }
    }

    struct BearerCredentials {
        token: String,
    }

    impl std::fmt::Debug for BearerCredentials {
        // The token is secret material, keep it out of logs.
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("BearerCredentials").finish_non_exhaustive()
        }
    }

    impl CredentialsProvider for BearerCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            let value = HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|e| {
                CredentialsError::from_source(false, e)
            })?;
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, value);
            Ok(headers)
        }
    }
}
