
use crate::{kana_to_romaji, romaji_to_kana};

#[test]
fn test_round_trip_place_names() {
    for kana in ["トウキョウ", "クッチャン", "カンオンジ", "ゼンツウジ", "ホッタ", "シンバシ"] {
        let romaji = kana_to_romaji(kana);
        let candidates = romaji_to_kana(&romaji);
        assert!(
            candidates.iter().any(|k| k == kana),
            "{kana} -> {romaji} not recovered from {candidates:?}"
        );
    }
}

#[test]
fn test_every_candidate_reads_back() {
    // Each spelling of TOKYO converts back to TOKYO.
    for kana in romaji_to_kana("TOKYO") {
        assert_eq!(kana_to_romaji(&kana), "TOKYO", "{kana}");
    }
}
