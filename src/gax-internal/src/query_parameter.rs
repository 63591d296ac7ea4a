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

//! Serialization of query parameters.
//!
//! The optional query parameters live in `Option<_>` fields of the request
//! builders, and an unset parameter must be omitted from the URL entirely:
//! the service distinguishes an absent parameter from one sent with an empty
//! value. Routing every parameter through [serde_json::Value] lets the
//! request builders treat all parameter types uniformly.

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl QueryParameter for serde_json::Value {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            Self::Object(object) => object.into_iter().fold(builder, |builder, (k, v)| {
                v.add(builder, format!("{name}.{k}").as_str())
            }),
            Self::Array(array) => array
                .into_iter()
                .fold(builder, |builder, v| v.add(builder, name)),
            Self::Null => builder,
            Self::String(s) => builder.query(&[(name, s)]),
            Self::Number(n) => builder.query(&[(name, format!("{n}"))]),
            Self::Bool(b) => builder.query(&[(name, b)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split("&")
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn test_builder() -> Result<reqwest::RequestBuilder, reqwest::Error> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://www.googleapis.com/genomics/v1beta/unused"))
    }

    #[test]
    fn null_is_omitted() -> TestResult {
        let builder = json!(null).add(test_builder()?, "pageToken");
        let request = builder.build()?;
        assert_eq!(split_query(&request), Vec::<&str>::new());
        Ok(())
    }

    #[test]
    fn string() -> TestResult {
        let builder = json!("chr17").add(test_builder()?, "contig");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["contig=chr17"]);
        Ok(())
    }

    #[test]
    fn string_is_escaped() -> TestResult {
        let builder = json!("a&b=c").add(test_builder()?, "pageToken");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["pageToken=a%26b%3Dc"]);
        Ok(())
    }

    #[test]
    fn number() -> TestResult {
        let builder = json!(41196407_u64).add(test_builder()?, "position");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["position=41196407"]);
        Ok(())
    }

    #[test]
    fn boolean() -> TestResult {
        let builder = json!(true).add(test_builder()?, "flag");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["flag=true"]);
        Ok(())
    }

    #[test]
    fn repeated() -> TestResult {
        let builder = json!(["A", "C"]).add(test_builder()?, "allele");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["allele=A", "allele=C"]);
        Ok(())
    }

    #[test]
    fn several() -> TestResult {
        let builder = json!("chr17").add(test_builder()?, "contig");
        let builder = json!(41196407_u64).add(builder, "position");
        let builder = json!(null).add(builder, "allele");
        let request = builder.build()?;
        assert_eq!(
            split_query(&request),
            vec!["contig=chr17", "position=41196407"]
        );
        Ok(())
    }
}
