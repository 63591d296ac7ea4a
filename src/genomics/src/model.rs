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

//! The messages exchanged with the Genomics v1beta service.
//!
//! All types serialize to the camelCase JSON wire format. Fields left at
//! their default value are omitted from request bodies, and unknown fields in
//! responses are ignored. Several 64-bit fields travel as JSON strings on the
//! wire (`created`, `projectId`, `readCount`, `exportId`, the sequence and
//! variant positions); the Rust types expose them as integers.

use gax::paginator::PageableResponse;
use std::collections::HashMap;

/// A genomics dataset: a container of readsets, callsets, and variants.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dataset {
    /// The dataset ID.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// If true, the dataset is viewable by anyone. Otherwise it inherits
    /// viewing permissions from its project.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_public: bool,

    /// The Google Cloud Console project number that owns this dataset.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub project_id: Option<i64>,
}

/// The response for a beacon query: does any variant call carry the allele?
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Beacon {
    /// True if the allele exists on any variant call.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub exists: bool,
}

/// A group of variant calls, typically for one sample.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Callset {
    /// Creation time, in milliseconds from the epoch.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub created: Option<i64>,

    /// The ID of the dataset this callset belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dataset_id: String,

    /// The callset ID.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Additional callset information.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub info: HashMap<String, Vec<String>>,

    /// The callset name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// One determination of genotype with respect to a variant.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Call {
    /// The ID of the callset this call belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub callset_id: String,

    /// The name of the callset this call belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub callset_name: String,

    /// The genotype values. Each value is either 0 for the reference bases
    /// or a 1-based index into the alternate bases. Encoded as strings on
    /// the wire.
    #[serde_as(as = "Vec<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genotype: Vec<i64>,

    /// The genotype likelihoods, ordered as the GL tag in the VCF spec.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genotype_likelihood: Vec<f64>,

    /// Additional variant call information.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub info: HashMap<String, Vec<String>>,

    /// When present, the genotype ordering implies the phase of the bases,
    /// consistent with other calls on the same contig with the same
    /// phaseset value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phaseset: String,
}

/// A variant: a change with respect to a reference sequence.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Variant {
    /// The bases that appear instead of the reference bases.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_bases: Vec<String>,

    /// The variant calls for this variant.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub calls: Vec<Call>,

    /// The contig on which this variant occurs, e.g. `chr20` or `X`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contig: String,

    /// Creation time, in milliseconds from the epoch.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub created: Option<i64>,

    /// The ID of the dataset this variant belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dataset_id: String,

    /// The variant ID.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Additional variant information.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub info: HashMap<String, Vec<String>>,

    /// Names for the variant, for example a RefSNP ID.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,

    /// The 1-based position of the first reference base.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub position: Option<i64>,

    /// The reference bases, starting at the given position.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reference_bases: String,
}

/// The status of an asynchronous import or export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    /// A detailed description of this job's current status.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// The job ID.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// For import jobs, the IDs of the objects that were successfully
    /// imported.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imported_ids: Vec<String>,

    /// The Google Cloud Console project number that owns this job.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub project_id: Option<i64>,

    /// The status of this job.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
}

/// A single read alignment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Read {
    /// The original bases after the cigar field has been applied.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub aligned_bases: String,

    /// The quality of each base, one character per base (QUAL).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub base_quality: String,

    /// How this read matches up to the reference (CIGAR).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cigar: String,

    /// The BAM flag bits (FLAG).
    pub flags: Option<i64>,

    /// The read ID.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// How likely the aligned position is correct, up to 255 (MAPQ).
    pub mapping_quality: Option<i64>,

    /// The 1-based start position of the paired read (PNEXT).
    pub mate_position: Option<i64>,

    /// The name of the sequence the paired read is aligned to (RNEXT).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mate_reference_sequence_name: String,

    /// The name of the read; the query template name in BAM (QNAME).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The bases this read represents, e.g. `CATCGA` (SEQ).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub original_bases: String,

    /// The 1-based start position of the aligned read (POS).
    pub position: Option<i64>,

    /// The ID of the readset this read belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub readset_id: String,

    /// The name of the sequence this read is aligned to (RNAME).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reference_sequence_name: String,

    /// Additional read information (TAG).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, Vec<String>>,

    /// Length of the DNA fragment that produced this read and its pair
    /// (TLEN).
    pub template_length: Option<i64>,
}

/// A collection of reads, usually one imported BAM file.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Readset {
    /// Creation time, in milliseconds from the epoch.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub created: Option<i64>,

    /// The ID of the dataset this readset belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dataset_id: String,

    /// File information from the original BAM import.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_data: Vec<HeaderSection>,

    /// The readset ID.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The readset name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The number of reads in this readset.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub read_count: Option<u64>,
}

/// The header section of a BAM file.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderSection {
    /// One-line text comments (@CO).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,

    /// The file URI this data was imported from.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file_uri: String,

    /// The header lines (@HD).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    /// Programs (@PG).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub programs: Vec<Program>,

    /// Read groups (@RG).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub read_groups: Vec<ReadGroup>,

    /// The reference sequence dictionary (@SQ).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ref_sequences: Vec<ReferenceSequence>,
}

/// A BAM header line (@HD).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Header {
    /// Sorting order of alignments (SO).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sorting_order: String,

    /// BAM format version (VN).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// A BAM program record (@PG).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Program {
    /// Command line (CL).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command_line: String,

    /// Program record identifier (ID).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Program name (PN).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Previous program ID (PP).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prev_program_id: String,

    /// Program version (VN).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// A BAM read group (@RG).
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadGroup {
    /// Date the run was produced (DT).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub date: String,

    /// Description (DS).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Flow order (FO).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub flow_order: String,

    /// Read group identifier (ID).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Key sequence (KS).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key_sequence: String,

    /// Library (LS).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub library: String,

    /// Platform unit (PU).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub platform_unit: String,

    /// Predicted median insert size (PI).
    pub predicted_insert_size: Option<i64>,

    /// Programs used for processing the read group (PG).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub processing_program: String,

    /// Sample (SM).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sample: String,

    /// Name of the sequencing center producing the read (CN).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sequencing_center_name: String,

    /// Platform or technology used to produce the reads (PL).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sequencing_technology: String,
}

/// A BAM reference sequence dictionary entry (@SQ).
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferenceSequence {
    /// Genome assembly identifier (AS).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub assembly_id: String,

    /// Reference sequence length (LN).
    pub length: Option<i64>,

    /// MD5 checksum of the sequence (M5).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub md5_checksum: String,

    /// Reference sequence name (SN).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Species (SP).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub species: String,

    /// URI of the sequence (UR).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uri: String,
}

/// The response for operations that return no payload.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Empty {}

/// One page of datasets.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDatasetsResponse {
    /// The matching datasets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub datasets: Vec<Dataset>,

    /// The continuation token. Empty when there are no further results.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

/// The request for a callset search.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchCallsetsRequest {
    /// Restricts the query to callsets within the given datasets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dataset_ids: Vec<String>,

    /// Only return callsets with names matching this substring.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The continuation token from the previous response.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

/// One page of callsets.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchCallsetsResponse {
    /// The matching callsets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub callsets: Vec<Callset>,

    /// The continuation token. Empty when there are no further results.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

/// The request for a read search.
///
/// At least one dataset ID or one readset ID must be provided.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchReadsRequest {
    /// Restricts the query to reads within the given datasets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dataset_ids: Vec<String>,

    /// The continuation token from the previous response.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,

    /// Restricts the query to reads within the given readsets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub readset_ids: Vec<String>,

    /// The end position (1-based, inclusive) of this query.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub sequence_end: Option<u64>,

    /// The sequence to query, e.g. `X` for the X chromosome. Blank returns
    /// results from all sequences, including unmapped reads.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sequence_name: String,

    /// The start position (1-based) of this query.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub sequence_start: Option<u64>,
}

/// One page of reads, sorted by position; unmapped reads last.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchReadsResponse {
    /// The continuation token. Empty when there are no further results.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,

    /// The matching reads.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reads: Vec<Read>,
}

/// The request for a readset search.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchReadsetsRequest {
    /// Restricts the query to readsets within the given datasets. At least
    /// one ID must be provided.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dataset_ids: Vec<String>,

    /// Only return readsets with names matching this substring.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The continuation token from the previous response.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

/// One page of readsets.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchReadsetsResponse {
    /// The continuation token. Empty when there are no further results.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,

    /// The matching readsets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub readsets: Vec<Readset>,
}

/// The request for a variant search over a window of one contig.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchVariantsRequest {
    /// Only return variant calls belonging to callsets with these IDs. At
    /// most one of `callset_names` or `callset_ids` should be provided.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub callset_ids: Vec<String>,

    /// Only return variant calls belonging to callsets with exactly these
    /// names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub callset_names: Vec<String>,

    /// Required. Only return variants on this contig.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contig: String,

    /// Required. The ID of the dataset to search.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dataset_id: String,

    /// Required. The end of the window (1-based, inclusive).
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub end_position: Option<i64>,

    /// The maximum number of variants to return.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub max_results: Option<u64>,

    /// The continuation token from the previous response.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,

    /// Required. The beginning of the window (1-based).
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub start_position: Option<i64>,

    /// Only return variants with exactly this name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub variant_name: String,
}

/// One page of variants.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchVariantsResponse {
    /// The continuation token. Empty when there are no further results.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,

    /// The matching variants.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
}

/// The request to import readsets from BAM or FASTQ files.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportReadsetsRequest {
    /// Required. The ID of the dataset the readsets belong to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dataset_id: String,

    /// URIs pointing at BAM or FASTQ files in Google Cloud Storage.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_uris: Vec<String>,
}

/// The job handle for an asynchronous readset import.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportReadsetsResponse {
    /// A job ID that can be used to get status information.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub job_id: String,
}

/// The request to export readsets to a BAM file in Google Cloud Storage.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportReadsetsRequest {
    /// The Google Cloud Storage URI where the exported BAM file is created.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub export_uri: String,

    /// The Google Cloud project number billed for this export.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub project_id: Option<i64>,

    /// The IDs of the readsets to export.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub readset_ids: Vec<String>,
}

/// The export handle for an asynchronous readset export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportReadsetsResponse {
    /// An export ID that can be used to get status information.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub export_id: Option<u64>,
}

/// The request to import variants from VCF files.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportVariantsRequest {
    /// Required. The dataset to which variant data should be imported.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dataset_id: String,

    /// URIs pointing at VCF files in Google Cloud Storage.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_uris: Vec<String>,
}

/// The job handle for an asynchronous variant import.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportVariantsResponse {
    /// A job ID that can be used to get status information.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub job_id: String,
}

/// The request to export variant data.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportVariantsRequest {
    /// If provided, only variant call information from these callsets is
    /// exported. By default all variant calls are exported.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub callset_ids: Vec<String>,

    /// The datasets containing the variant data to export. At least one
    /// dataset ID must be provided.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dataset_ids: Vec<String>,

    /// The URI to export to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub export_uri: String,

    /// The format for the exported data.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub format: String,

    /// The Google Cloud project number billed for this export.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub project_id: Option<i64>,
}

/// The job handle for an asynchronous variant export.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportVariantsResponse {
    /// A job ID that can be used to get status information.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub job_id: String,
}

impl PageableResponse for ListDatasetsResponse {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

impl PageableResponse for SearchCallsetsResponse {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

impl PageableResponse for SearchReadsResponse {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

impl PageableResponse for SearchReadsetsResponse {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

impl PageableResponse for SearchVariantsResponse {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn dataset_serialize_omits_defaults() -> TestResult {
        let got = serde_json::to_value(Dataset::default())?;
        assert_eq!(got, json!({}));

        let dataset = Dataset {
            id: "d1".into(),
            is_public: true,
            project_id: Some(376902546192),
        };
        let got = serde_json::to_value(&dataset)?;
        assert_eq!(
            got,
            json!({"id": "d1", "isPublic": true, "projectId": "376902546192"})
        );
        Ok(())
    }

    #[test]
    fn dataset_deserialize_int64_as_string() -> TestResult {
        let got: Dataset = serde_json::from_value(json!({
            "id": "d1",
            "projectId": "376902546192",
        }))?;
        assert_eq!(got.project_id, Some(376902546192));
        assert!(!got.is_public);
        Ok(())
    }

    #[test]
    fn unknown_fields_are_ignored() -> TestResult {
        let got: Readset = serde_json::from_value(json!({
            "id": "rs1",
            "readCount": "123456",
            "someFutureField": {"a": 1},
        }))?;
        assert_eq!(got.id, "rs1");
        assert_eq!(got.read_count, Some(123456));
        Ok(())
    }

    #[test]
    fn search_reads_request_wire_format() -> TestResult {
        let request = SearchReadsRequest {
            readset_ids: vec!["rs1".into()],
            sequence_name: "chr17".into(),
            sequence_start: Some(1),
            sequence_end: Some(u64::MAX),
            ..Default::default()
        };
        let got = serde_json::to_value(&request)?;
        assert_eq!(
            got,
            json!({
                "readsetIds": ["rs1"],
                "sequenceName": "chr17",
                "sequenceStart": "1",
                "sequenceEnd": "18446744073709551615",
            })
        );
        Ok(())
    }

    #[test]
    fn search_variants_request_wire_format() -> TestResult {
        let request = SearchVariantsRequest {
            dataset_id: "d1".into(),
            contig: "chr20".into(),
            start_position: Some(100),
            end_position: Some(200),
            max_results: Some(50),
            ..Default::default()
        };
        let got = serde_json::to_value(&request)?;
        assert_eq!(
            got,
            json!({
                "datasetId": "d1",
                "contig": "chr20",
                "startPosition": "100",
                "endPosition": "200",
                "maxResults": "50",
            })
        );
        Ok(())
    }

    #[test]
    fn call_genotype_as_strings() -> TestResult {
        let got: Call = serde_json::from_value(json!({
            "callsetId": "cs1",
            "genotype": ["2", "1"],
        }))?;
        assert_eq!(got.genotype, vec![2, 1]);

        let round = serde_json::to_value(&got)?;
        assert_eq!(round, json!({"callsetId": "cs1", "genotype": ["2", "1"]}));
        Ok(())
    }

    #[test]
    fn readset_file_data() -> TestResult {
        let got: Readset = serde_json::from_value(json!({
            "id": "rs1",
            "fileData": [{
                "fileUri": "gs://bucket/sample.bam",
                "refSequences": [
                    {"name": "chr17", "length": 81195210},
                ],
            }],
        }))?;
        let refs = &got.file_data[0].ref_sequences;
        assert_eq!(refs[0].name, "chr17");
        assert_eq!(refs[0].length, Some(81195210));
        Ok(())
    }

    #[test]
    fn pageable_responses() {
        let page = SearchReadsetsResponse {
            next_page_token: "tok".into(),
            ..Default::default()
        };
        assert_eq!(PageableResponse::next_page_token(&page), "tok");
        let page = ListDatasetsResponse::default();
        assert_eq!(PageableResponse::next_page_token(&page), "");
    }

    #[test]
    fn export_readsets_response_export_id() -> TestResult {
        let got: ExportReadsetsResponse =
            serde_json::from_value(json!({"exportId": "18446744073709551615"}))?;
        assert_eq!(got.export_id, Some(u64::MAX));
        Ok(())
    }
}
