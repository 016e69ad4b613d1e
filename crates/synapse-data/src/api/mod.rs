//! Typed client for the document-processing REST API.
//!
//! Every call resolves to an [`ApiResponse`](synapse_core::types::ApiResponse):
//! failures are reported in the envelope rather than as `Err`.

pub mod client;
pub mod dto;

pub use client::ApiClient;
pub use dto::{
    AnalyzeDocumentResponse, GenerateDocumentRequest, GenerateDocumentResponse,
    GetDocumentsResponse, UpdateProject, UploadDocumentRequest, UploadDocumentResponse,
};
