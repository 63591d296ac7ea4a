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

//! Walks the reads of the first readset in a dataset.
//!
//! Finds a readset in the given dataset, prints its file header metadata, and
//! fetches two pages of reads from its first reference sequence, threading the
//! continuation token by hand so the token flow is visible.

use clap::Parser;
use genomics::client::Genomics;

#[derive(Debug, Parser)]
#[command(about = "Walk the reads of a readset in a Genomics dataset")]
struct Args {
    /// The dataset to inspect. The default is a public 1000 Genomes dataset.
    #[arg(long, default_value = "376902546192")]
    dataset_id: String,

    /// A file containing an OAuth2 access token. Without it the requests are
    /// anonymous, which public datasets allow.
    #[arg(long)]
    access_token_file: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let builder = Genomics::builder();
    let builder = match &args.access_token_file {
        Some(path) => {
            let token = tokio::fs::read_to_string(path).await?;
            builder
                .with_credentials(gax::credentials::bearer::Builder::new(token.trim()).build())
        }
        None => builder,
    };
    let client = builder.build().await?;

    let readsets = client
        .readsets()
        .search([args.dataset_id.clone()])
        .send()
        .await?;
    let summary = readsets
        .readsets
        .first()
        .ok_or_else(|| anyhow::anyhow!("dataset {} has no readsets", args.dataset_id))?;
    println!("readset {} ({})", summary.id, summary.name);

    // The search result omits file data; a get returns the full record.
    let readset = client.readsets().get(&summary.id).send().await?;
    let sequence = readset
        .file_data
        .first()
        .and_then(|f| f.ref_sequences.first())
        .ok_or_else(|| anyhow::anyhow!("readset {} has no reference sequences", summary.id))?;
    println!(
        "first reference sequence: {} (length {:?})",
        sequence.name, sequence.length
    );

    let mut token = String::new();
    for page_number in 1..=2 {
        let mut search = client
            .reads()
            .search()
            .set_readset_ids([summary.id.clone()])
            .set_sequence_name(sequence.name.clone())
            .set_sequence_start(1)
            .set_sequence_end(u64::MAX);
        if !token.is_empty() {
            search = search.set_page_token(token.clone());
        }
        let page = search.send().await?;

        println!("page {page_number}: {} reads", page.reads.len());
        for read in &page.reads {
            println!(
                "  {} @ {:?}: {}",
                read.name,
                read.position,
                clip(&read.aligned_bases, 36)
            );
        }

        token = page.next_page_token;
        if token.is_empty() {
            println!("no more pages");
            break;
        }
    }

    Ok(())
}

/// Returns at most `n` characters of `s`, never splitting a character.
fn clip(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::clip;

    #[test]
    fn clip_short_and_long() {
        assert_eq!(clip("ACGT", 36), "ACGT");
        assert_eq!(clip(&"A".repeat(40), 36), "A".repeat(36));
        assert_eq!(clip("", 36), "");
    }

    #[test]
    fn clip_does_not_split_characters() {
        // A response with unexpected content must not panic the walker.
        assert_eq!(clip("αβγ", 2), "αβ");
        assert_eq!(clip("AβC", 3), "AβC");
    }
}
