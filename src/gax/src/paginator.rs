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

//! Pagination adapter for list and search RPCs.
//!
//! The Genomics list and search operations return at most one page of results
//! per request, along with a `nextPageToken` that the caller must copy into
//! the follow-up request. [Paginator] wraps that token-threading into a
//! [futures::Stream] of pages. The token state lives entirely inside the
//! stream; the client handle itself never stores a page token, so concurrent
//! paginations over the same client cannot interfere with each other.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// A response that carries a continuation token for the next page.
///
/// An empty token means the current page is the last one.
pub trait PageableResponse {
    fn next_page_token(&self) -> String;
}

/// Converts a page-at-a-time RPC into a [futures::Stream] of pages.
///
/// The stream issues one request per page, starting from the seed token, and
/// ends after the first page whose token is empty or after the first error.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>>>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// that fetches the page identified by a token.
    pub fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let tok = page.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct TestPage {
        names: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestPage {
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn page(names: &[&str], token: &str) -> TestPage {
        TestPage {
            names: names.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        }
    }

    #[tokio::test]
    async fn stops_on_empty_token() {
        let pages = VecDeque::from([
            page(&["dataset-1", "dataset-2"], "token2"),
            page(&["dataset-3"], ""),
        ]);
        let expected_tokens = VecDeque::from(["".to_string(), "token2".to_string()]);

        let pages = Arc::new(Mutex::new(pages));
        let tokens = Arc::new(Mutex::new(expected_tokens));
        let execute = move |token: String| {
            let expected = tokens.lock().unwrap().pop_front().unwrap();
            assert_eq!(token, expected);
            let page = pages.lock().unwrap().pop_front().unwrap();
            async move { Ok::<_, Box<dyn std::error::Error>>(page) }
        };

        let mut got = vec![];
        let mut paginator = Paginator::new(String::new(), execute);
        while let Some(page) = paginator.next().await {
            got.push(page.unwrap());
        }
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].names, vec!["dataset-1", "dataset-2"]);
        assert_eq!(got[1].names, vec!["dataset-3"]);
    }

    #[tokio::test]
    async fn seed_token_reaches_first_request() {
        let pages = Arc::new(Mutex::new(VecDeque::from([page(&["readset-9"], "")])));
        let execute = move |token: String| {
            assert_eq!(token, "resume-here");
            let page = pages.lock().unwrap().pop_front().unwrap();
            async move { Ok::<_, Box<dyn std::error::Error>>(page) }
        };

        let mut paginator = Paginator::new("resume-here".to_string(), execute);
        let first = paginator.next().await.unwrap().unwrap();
        assert_eq!(first.names, vec!["readset-9"]);
        assert!(paginator.next().await.is_none());
    }

    #[tokio::test]
    async fn stops_after_error() {
        let execute = |_| async { Err::<TestPage, Box<dyn std::error::Error>>("boom".into()) };

        let mut paginator = Paginator::new(String::new(), execute);
        let mut count = 0;
        while let Some(result) = paginator.next().await {
            match result {
                Ok(_) => panic!("should not produce a page"),
                Err(e) => {
                    assert_eq!(e.to_string(), "boom");
                    count += 1;
                }
            }
        }
        assert_eq!(count, 1);
    }
}
