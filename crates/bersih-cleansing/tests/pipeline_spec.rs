//! End-to-end pipeline checks against the kamus files shipped in `data/`.

use std::path::PathBuf;
use std::sync::Arc;

use bersih_cleansing::{Kamus, KamusKind, Normaliser, TweetTable};
use pretty_assertions::assert_eq;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn shipped_normaliser() -> Normaliser {
    let alay = Kamus::load(KamusKind::Alay, data_dir().join("new_kamusalay.csv"))
        .expect("alay kamus must load");
    let abusive = Kamus::load(KamusKind::Abusive, data_dir().join("abusive.csv"))
        .expect("abusive kamus must load");
    Normaliser::new(Arc::new(alay), Arc::new(abusive))
}

#[test]
fn shipped_kamus_files_load() {
    let normaliser = shipped_normaliser();
    assert!(!normaliser.alay().is_empty());
    assert!(!normaliser.abusive().is_empty());
    assert_eq!(normaliser.alay().get("gw"), Some("saya"));
}

#[test]
fn alay_correction_is_computed_but_not_persisted() {
    let out = shipped_normaliser().normalise_detailed("Gw gak ngerti deh");
    assert!(out.alay_corrected.split(' ').any(|t| t == "saya"));
    assert!(out.cleaned.split(' ').any(|t| t == "gw"));
    assert_eq!(out.cleaned, out.cleansed);
}

#[test]
fn batch_output_matches_unique_rows() {
    let csv = "Tweet,HS,Abusive\n\
               \"RT USER: Gw kesel bgt sama lo, bego!!\",1,1\n\
               \"Selamat pagi &amp; semangat kerja\",0,0\n\
               \"RT USER: Gw kesel bgt sama lo, bego!!\",1,1\n\
               \"Diskon 50% cek https://t.co/abc\",0,0\n";
    let table = TweetTable::from_csv_bytes(csv.as_bytes()).unwrap();
    let out = shipped_normaliser().apply_cleansing_file(table).unwrap();

    assert_eq!(out.len(), 3);
    assert_eq!(out[1], "selamat pagi dan semangat kerja");
    assert_eq!(out[2], "diskon persen cek");
    assert!(!out[0].split(' ').any(|t| t == "bego"), "got {:?}", out[0]);
}
