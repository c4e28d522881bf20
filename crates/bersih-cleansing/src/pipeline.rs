//! Normalisation pipeline.
//!
//! lowercase → rule-chain cleansing → alay substitution → abusive suppression.
//!
//! The abusive step reads the cleansed text, not the alay-corrected text, so
//! alay corrections never reach the final output. Callers that persist or
//! return results rely on that exact output; the alay result is still
//! computed and exposed on [`NormalisedText`].

use std::sync::Arc;

use bersih_common::Result;

use crate::kamus::Kamus;
use crate::rules::{remove_unnecessary_char, text_lower};
use crate::table::{TweetTable, TWEET_COLUMN};

/// Every intermediate of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalisedText {
    pub lowered: String,
    pub cleansed: String,
    pub alay_corrected: String,
    /// Final output.
    pub cleaned: String,
}

/// Pipeline bound to the two process-wide kamus tables.
#[derive(Debug, Clone)]
pub struct Normaliser {
    alay: Arc<Kamus>,
    abusive: Arc<Kamus>,
}

impl Normaliser {
    pub fn new(alay: Arc<Kamus>, abusive: Arc<Kamus>) -> Self {
        Self { alay, abusive }
    }

    pub fn alay(&self) -> &Kamus {
        &self.alay
    }

    pub fn abusive(&self) -> &Kamus {
        &self.abusive
    }

    pub fn handle_from_kamusalay(&self, text: &str) -> String {
        self.alay.substitute(text)
    }

    pub fn handle_from_kamusabusive(&self, text: &str) -> String {
        self.abusive.substitute(text)
    }

    /// Run all four steps and keep the intermediates.
    pub fn normalise_detailed(&self, raw: &str) -> NormalisedText {
        let lowered = text_lower(raw);
        let cleansed = remove_unnecessary_char(&lowered);
        let alay_corrected = self.handle_from_kamusalay(&cleansed);
        let cleaned = self.handle_from_kamusabusive(&cleansed);
        NormalisedText { lowered, cleansed, alay_corrected, cleaned }
    }

    /// Final cleaned text for one input.
    pub fn normalise(&self, raw: &str) -> String {
        self.normalise_detailed(raw).cleaned
    }

    /// Cleanse a whole upload: drop duplicate rows, then run the pipeline on
    /// each `Tweet` cell. Fails before touching any row if the column is
    /// missing.
    pub fn apply_cleansing_file(&self, table: TweetTable) -> Result<Vec<String>> {
        table.require_column(TWEET_COLUMN)?;

        let before = table.len();
        let table = table.drop_duplicates();
        tracing::debug!(rows = before, unique = table.len(), "Deduplicated upload");

        let cleaned = table
            .column(TWEET_COLUMN)?
            .into_iter()
            .map(|tweet| self.normalise(tweet))
            .collect();
        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kamus::KamusKind;
    use bersih_common::BersihError;

    fn normaliser() -> Normaliser {
        let alay = Kamus::from_pairs(KamusKind::Alay, [("gw", "saya"), ("gak", "tidak")]);
        let abusive = Kamus::from_pairs(KamusKind::Abusive, [("bego", "")]);
        Normaliser::new(Arc::new(alay), Arc::new(abusive))
    }

    #[test]
    fn test_alay_step_replaces_but_final_ignores_it() {
        let out = normaliser().normalise_detailed("Gw gak TAU");
        assert_eq!(out.lowered, "gw gak tau");
        assert_eq!(out.cleansed, "gw gak tau");
        assert_eq!(out.alay_corrected, "saya tidak tau");
        assert_eq!(out.cleaned, "gw gak tau");
    }

    #[test]
    fn test_abusive_words_suppressed() {
        assert_eq!(normaliser().normalise("Dasar BEGO lo!"), "dasar  lo");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let out = normaliser().normalise_detailed("");
        assert_eq!(out.cleaned, "");
        assert_eq!(out.alay_corrected, "");
    }

    #[test]
    fn test_file_dedup_then_cleanse() {
        let table = TweetTable::from_csv_bytes(
            b"Tweet,HS\nRT @user: gw bego!,1\nhalo,0\nRT @user: gw bego!,1\nhalo,1\n",
        )
        .unwrap();
        let out = normaliser().apply_cleansing_file(table).unwrap();
        assert_eq!(out, vec!["gw ", "halo", "halo"]);
    }

    #[test]
    fn test_file_missing_tweet_column() {
        let table = TweetTable::from_csv_bytes(b"text\nhalo\n").unwrap();
        let err = normaliser().apply_cleansing_file(table).unwrap_err();
        assert!(matches!(err, BersihError::MissingColumn(_)));
    }
}
