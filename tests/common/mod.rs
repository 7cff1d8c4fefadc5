//! Shared fixtures: zip builders, multipart bodies and a server state rooted in a temp dir.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use reviewlyzer::services::file_reviewer::FileReviewer;
use reviewlyzer::structs::app_state::AppState;
use reviewlyzer::structs::config::config::Config;
use reviewlyzer::workers::command_runner::CommandRunner;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const BOUNDARY: &str = "reviewlyzer-test-boundary";

pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub enum FormPart<'a> {
    File(&'a [u8]),
    Text(&'a str, &'a str),
}

pub fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            FormPart::File(bytes) => {
                body.extend_from_slice(b"Content-Disposition: form-data; name=\"file\"; filename=\"project.zip\"\r\n");
                body.extend_from_slice(b"Content-Type: application/zip\r\n\r\n");
                body.extend_from_slice(bytes);
            }
            FormPart::Text(name, value) => {
                body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes());
                body.extend_from_slice(value.as_bytes());
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

pub fn state_in(dir: &TempDir, reviewer: Option<FileReviewer>) -> AppState {
    let mut config = Config::default();
    config.server.work_dir = dir.path().join("extracted");
    config.server.upload_dir = dir.path().join("uploads");
    CommandRunner::app_state(&config, reviewer)
}

/// True when no per-request directory or spooled archive is left behind.
pub fn scratch_is_empty(dir: &TempDir) -> bool {
    is_empty_or_missing(&dir.path().join("extracted")) && is_empty_or_missing(&dir.path().join("uploads"))
}

fn is_empty_or_missing(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => true,
    }
}
