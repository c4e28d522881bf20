//! Fixtures shared by integration tests across the workspace.

use std::sync::Arc;

use bersih_cleansing::{Kamus, KamusKind, Normaliser};
use bersih_db::{Database, TweetRepository};
use tempfile::TempDir;

pub use pretty_assertions;

/// Boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "bersih-test-boundary";

/// Small alay kamus covering the words the fixtures use.
pub const ALAY_CSV: &str = "gw,saya\ngak,tidak\nbgt,banget\nlo,kamu\n";

/// Abusive list with its header row.
pub const ABUSIVE_CSV: &str = "ABUSIVE\nbego\ngoblok\n";

/// Normaliser over the fixture kamus.
pub fn sample_normaliser() -> Normaliser {
    let alay = Kamus::alay_from_csv(ALAY_CSV.as_bytes()).expect("fixture alay kamus parses");
    let abusive = Kamus::abusive_from_csv(ABUSIVE_CSV.as_bytes()).expect("fixture abusive kamus parses");
    Normaliser::new(Arc::new(alay), Arc::new(abusive))
}

/// A repository over a fresh SQLite file. Keep the `TempDir` alive for the
/// duration of the test.
pub fn temp_repository() -> (TempDir, TweetRepository) {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let db = Database::new(dir.path().join("result/data_text_result.db"));
    (dir, TweetRepository::new(Arc::new(db)))
}

/// CSV upload with a `Tweet` column followed by a label column.
pub fn tweet_csv(tweets: &[&str]) -> Vec<u8> {
    let mut out = String::from("Tweet,HS\n");
    for tweet in tweets {
        out.push('"');
        out.push_str(&tweet.replace('"', "\"\""));
        out.push_str("\",0\n");
    }
    out.into_bytes()
}

/// One part of a multipart/form-data body.
pub enum Part<'a> {
    Text { name: &'a str, value: &'a str },
    File { name: &'a str, filename: &'a str, content: &'a [u8] },
}

/// Encode parts as a multipart/form-data body using [`BOUNDARY`].
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File { name, filename, content } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: text/csv\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(content);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Content-Type header value matching [`multipart_body`].
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
