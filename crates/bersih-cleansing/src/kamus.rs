//! Kamus (substitution dictionaries).
//!
//! Two tables are used by the pipeline:
//! - alay: informal spelling → standard spelling, CSV `find,replace` with no header
//! - abusive: one word per row after a header row, every word maps to ""
//!
//! Both files are latin-1 encoded. Build once at startup and share as
//! `Arc<Kamus>`.

use std::collections::HashMap;
use std::path::Path;

use bersih_common::{BersihError, Result};

use crate::table::decode_latin1;

/// Which reference file a kamus was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KamusKind {
    Alay,
    Abusive,
}

impl KamusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KamusKind::Alay => "alay",
            KamusKind::Abusive => "abusive",
        }
    }
}

/// Immutable token → replacement table.
#[derive(Debug, Clone)]
pub struct Kamus {
    kind: KamusKind,
    mapping: HashMap<String, String>,
}

impl Kamus {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Build from explicit pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(kind: KamusKind, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mapping = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { kind, mapping }
    }

    /// Parse the alay dictionary: no header, two columns `find,replace`.
    pub fn alay_from_csv(bytes: &[u8]) -> Result<Self> {
        let text = decode_latin1(bytes);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut mapping = HashMap::new();
        for (line_no, record) in reader.records().enumerate() {
            let record = record?;
            match (record.get(0), record.get(1)) {
                (Some(find), Some(replace)) if !find.is_empty() && !replace.is_empty() => {
                    mapping.insert(find.to_string(), replace.to_string());
                }
                _ => tracing::debug!(line = line_no + 1, "Skipping incomplete alay entry"),
            }
        }

        Ok(Self { kind: KamusKind::Alay, mapping })
    }

    /// Parse the abusive word list: header row skipped, first column is the
    /// word, every word is suppressed.
    pub fn abusive_from_csv(bytes: &[u8]) -> Result<Self> {
        let text = decode_latin1(bytes);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut mapping = HashMap::new();
        for record in reader.records() {
            let record = record?;
            if let Some(word) = record.get(0).filter(|w| !w.is_empty()) {
                mapping.insert(word.to_string(), String::new());
            }
        }

        Ok(Self { kind: KamusKind::Abusive, mapping })
    }

    /// Load a kamus file of the given kind from disk.
    pub fn load(kind: KamusKind, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            BersihError::Kamus(format!("cannot read {} kamus {}: {}", kind.as_str(), path.display(), e))
        })?;

        let kamus = match kind {
            KamusKind::Alay => Self::alay_from_csv(&bytes)?,
            KamusKind::Abusive => Self::abusive_from_csv(&bytes)?,
        };

        tracing::info!(
            kind = kind.as_str(),
            entries = kamus.len(),
            path = %path.display(),
            "Loaded kamus"
        );
        Ok(kamus)
    }

    // ── Lookup ────────────────────────────────────────────────────────────────

    pub fn kind(&self) -> KamusKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.mapping.get(token).map(String::as_str)
    }

    /// Replace each whitespace-separated token through the table and join
    /// with single spaces. Unknown tokens pass through; suppressed tokens
    /// become empty and still take a slot in the join.
    pub fn substitute(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| self.get(token).unwrap_or(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
