//! Turning replies into view-model values or one error message
//!
//! Transport failures, non-2xx replies, `success: false` and bodies that do
//! not parse all end up as a single string. A server-supplied message wins
//! over the generic one when it could be read.

use super::status::Operation;
use crate::api::HttpReply;
use crate::error::Result;
use crate::save::filename_from_disposition;
use legalease_common::{GenerateResponse, GeneratedDocument, UploadResponse, UploadResult};

type Outcome<T> = std::result::Result<T, String>;

fn generic(op: Operation) -> String {
    op.failure_message().to_string()
}

fn reply_or_message(op: Operation, outcome: Result<HttpReply>) -> Outcome<HttpReply> {
    outcome.map_err(|err| {
        log::warn!("{} request failed: {}", op.as_str(), err);
        generic(op)
    })
}

fn server_message(op: Operation, error: Option<String>) -> String {
    error
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| generic(op))
}

pub fn interpret_generate(outcome: Result<HttpReply>) -> Outcome<GeneratedDocument> {
    let op = Operation::Generate;
    let reply = reply_or_message(op, outcome)?;
    let response: GenerateResponse = serde_json::from_slice(&reply.body).map_err(|err| {
        log::warn!("generate reply {} is not JSON: {}", reply.status, err);
        generic(op)
    })?;

    if !reply.is_success() || !response.success {
        log::warn!("generate rejected with status {}", reply.status);
        return Err(server_message(op, response.error));
    }
    response.into_document().ok_or_else(|| {
        log::warn!("generate reply is missing document fields");
        generic(op)
    })
}

/// Bytes to save and the name to save them under
pub fn interpret_download(
    outcome: Result<HttpReply>,
    fallback_filename: &str,
) -> Outcome<(Vec<u8>, String)> {
    let op = Operation::Download;
    let reply = reply_or_message(op, outcome)?;
    if !reply.is_success() {
        log::warn!("download rejected with status {}", reply.status);
        return Err(generic(op));
    }

    let filename = reply
        .content_disposition
        .as_deref()
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| fallback_filename.to_string());
    Ok((reply.body, filename))
}

pub fn interpret_upload(outcome: Result<HttpReply>) -> Outcome<UploadResult> {
    let op = Operation::Upload;
    let reply = reply_or_message(op, outcome)?;
    let response: UploadResponse = serde_json::from_slice(&reply.body).map_err(|err| {
        log::warn!("upload reply {} is not JSON: {}", reply.status, err);
        generic(op)
    })?;

    if !reply.is_success() || !response.success {
        log::warn!("upload rejected with status {}", reply.status);
        return Err(server_message(op, response.error));
    }
    response.into_result().ok_or_else(|| {
        log::warn!("upload reply is missing filename or extracted text");
        generic(op)
    })
}
