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

//! Expansion of request path templates.
//!
//! The request paths embed resource identifiers, for example
//! `datasets/{datasetId}`. The identifiers are chosen by the service and may
//! contain characters that are not safe in a URL path, so each value is
//! percent-encoded as a single path segment. An identifier the application
//! left empty can never form a valid path; that is reported as an error
//! before any request is sent.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Everything except the characters in the "unreserved" set of RFC 3986.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'!')
    .add(b'$')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*');

/// Expands `template`, replacing each `{name}` placeholder with the
/// percent-encoded value of the matching parameter.
///
/// # Example
/// ```
/// # use google_genomics_gax_internal::path_parameter::expand;
/// let path = expand("datasets/{datasetId}", &[("datasetId", "abc/123")]).unwrap();
/// assert_eq!(path, "datasets/abc%2F123");
/// ```
pub fn expand(template: &str, params: &[(&str, &str)]) -> gax::Result<String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let close = rest[open..]
            .find('}')
            .map(|i| open + i)
            .ok_or_else(|| malformed(template))?;
        path.push_str(&rest[..open]);
        let name = &rest[open + 1..close];
        let value = params
            .iter()
            .find_map(|(n, v)| (*n == name).then_some(*v))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| missing(name))?;
        path.extend(utf8_percent_encode(value, SEGMENT));
        rest = &rest[close + 1..];
    }
    path.push_str(rest);
    Ok(path)
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("malformed path template {0}")]
    MalformedTemplate(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

fn malformed(template: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MalformedTemplate(template.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("datasets/{datasetId}", "376902546192", "datasets/376902546192")]
    #[test_case("datasets/{datasetId}", "a b", "datasets/a%20b")]
    #[test_case("datasets/{datasetId}", "a/b", "datasets/a%2Fb")]
    #[test_case("datasets/{datasetId}", "a?b=c", "datasets/a%3Fb%3Dc")]
    #[test_case("datasets/{datasetId}", "a%2Fb", "datasets/a%252Fb")]
    #[test_case("datasets/{datasetId}", "A-z0.9_~", "datasets/A-z0.9_~")]
    fn expand_encodes_segment(template: &str, value: &str, want: &str) {
        let got = expand(template, &[("datasetId", value)]).unwrap();
        assert_eq!(got, want);
    }

    #[test]
    fn expand_without_placeholders() {
        let got = expand("datasets", &[]).unwrap();
        assert_eq!(got, "datasets");
    }

    #[test_case(&[]; "absent")]
    #[test_case(&[("datasetId", "")]; "empty")]
    fn expand_missing_parameter(params: &[(&str, &str)]) {
        let e = expand("datasets/{datasetId}", params).unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "datasetId"),
            "{e:?}"
        );
    }

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }
}
