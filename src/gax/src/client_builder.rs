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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. The Genomics client library uses a generic builder type to
//! provide such functionality.
//!
//! Applications should not create builders directly, instead the client type
//! defines a `builder()` function to obtain the correct type of builder:
//!
//! ```ignore
//! let client = Genomics::builder()
//!     .with_endpoint("https://www.googleapis.com/genomics/v1beta/")
//!     .build()
//!     .await?;
//! ```

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize its credentials.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create the credentials")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// The builder collects the endpoint and credentials overrides and then
/// constructs the client via a factory supplied by the client crate. The
/// generic parameters keep this crate independent of any concrete client or
/// credentials type.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The default endpoint points to the production service. Override it to
    /// target a test server or an alternate deployment.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Most operations require OAuth2 authorization, though a few (such as
    /// beacon queries on public datasets) allow anonymous access.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// The default configuration should work for most applications, but some
    /// may need to override the endpoint or the authentication credentials.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::{ClientConfig, ClientFactory, new_builder};
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeCredentials(String);

    #[derive(Debug)]
    struct FakeClient {
        endpoint: Option<String>,
        cred: Option<FakeCredentials>,
    }

    struct Factory;
    impl ClientFactory for Factory {
        type Client = FakeClient;
        type Credentials = FakeCredentials;
        async fn build(self, config: ClientConfig<FakeCredentials>) -> Result<FakeClient> {
            Ok(FakeClient {
                endpoint: config.endpoint,
                cred: config.cred,
            })
        }
    }

    #[tokio::test]
    async fn default_config() -> Result<()> {
        let client = new_builder(Factory).build().await?;
        assert_eq!(client.endpoint, None);
        assert_eq!(client.cred, None);
        Ok(())
    }

    #[tokio::test]
    async fn full_config() -> Result<()> {
        let client = new_builder(Factory)
            .with_endpoint("http://localhost:8080")
            .with_credentials(FakeCredentials("token".into()))
            .build()
            .await?;
        assert_eq!(client.endpoint.as_deref(), Some("http://localhost:8080"));
        assert_eq!(client.cred, Some(FakeCredentials("token".into())));
        Ok(())
    }

    #[test]
    fn error_predicates() {
        let err = Error::cred("no token source");
        assert!(err.is_credentials(), "{err:?}");
        assert!(!err.is_transport(), "{err:?}");

        let err = Error::transport("bad TLS configuration");
        assert!(err.is_transport(), "{err:?}");
        assert!(!err.is_credentials(), "{err:?}");
    }
}
