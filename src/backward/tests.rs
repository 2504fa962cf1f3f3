use super::*;

fn convert(input: &str) -> Vec<String> {
    romaji_to_kana(MoraTable::hepburn(), input)
}

#[test]
fn test_meiwa_order() {
    assert_eq!(convert("MEIWA"), ["メーワー", "メーワ", "メイワー", "メイワ"]);
}

#[test]
fn test_kii_prolonged_consumes_i() {
    assert_eq!(convert("KII"), ["キー", "キイ"]);
}

#[test]
fn test_kutchan() {
    assert_eq!(
        convert("KUTCHAN"),
        [
            // クウ|TCHAN
            "クウッチャーンー",
            "クウッチャーン",
            "クウッチャンー",
            "クウッチャン",
            // クー|TCHAN
            "クーッチャーンー",
            "クーッチャーン",
            "クーッチャンー",
            "クーッチャン",
            // ク|TCHAN
            "クッチャーンー",
            "クッチャーン",
            "クッチャンー",
            "クッチャン",
        ]
    );
}

#[test]
fn test_hoo_skips_duplicate_state() {
    let out = convert("HOO");
    assert_eq!(
        out,
        [
            // ホウ|O
            "ホウヲウ",
            "ホウヲオ",
            "ホウヲー",
            "ホウヲ",
            "ホウオウ",
            "ホウオオ",
            "ホウオー",
            "ホウオ",
            // ホオ|O
            "ホオヲウ",
            "ホオヲオ",
            "ホオヲー",
            "ホオヲ",
            "ホオオウ",
            "ホオオオ",
            "ホオオー",
            "ホオオ",
            // ホー|O
            "ホーヲウ",
            "ホーヲオ",
            "ホーヲー",
            "ホーヲ",
            "ホーオウ",
            "ホーオオ",
            "ホーオー",
            "ホーオ",
            // ホ|O, where ホオオ was already reached via ホオ|O
            "ホヲウ",
            "ホヲオ",
            "ホヲー",
            "ホヲ",
            "ホオウ",
            "ホオー",
            "ホオ",
        ]
    );
}

#[test]
fn test_kubetsu() {
    // ベー needs a following I, so those branches die at TSU.
    assert_eq!(
        convert("KUBETSU"),
        [
            "クウベツウ",
            "クウベツー",
            "クウベツ",
            "クーベツウ",
            "クーベツー",
            "クーベツ",
            "クベツウ",
            "クベツー",
            "クベツ",
        ]
    );
}

#[test]
fn test_kan_onji() {
    assert_eq!(
        convert("KAN-ONJI"),
        [
            "カーンオウンヂ",
            "カーンオウンジ",
            "カーンオオンヂ",
            "カーンオオンジ",
            "カーンオーンヂ",
            "カーンオーンジ",
            "カーンオンヂ",
            "カーンオンジ",
            "カンオウンヂ",
            "カンオウンジ",
            "カンオオンヂ",
            "カンオオンジ",
            "カンオーンヂ",
            "カンオーンジ",
            "カンオンヂ",
            "カンオンジ",
        ]
    );
}

#[test]
fn test_zentsuji() {
    assert_eq!(
        convert("ZENTSUJI"),
        [
            "ゼンツウヂ",
            "ゼンツウジ",
            "ゼンツーヂ",
            "ゼンツージ",
            "ゼンツヂ",
            "ゼンツジ",
        ]
    );
}

#[test]
fn test_nasal_before_vowel_is_also_tried() {
    assert_eq!(
        convert("NAMBA"),
        [
            "ナーンバー",
            "ナーンバ",
            "ナンバー",
            "ナンバ",
            "ンアーンバー",
            "ンアーンバ",
            "ンアンバー",
            "ンアンバ",
        ]
    );
}

#[test]
fn test_geminate() {
    assert_eq!(
        convert("HOTTA"),
        [
            "ホウッター",
            "ホウッタ",
            "ホオッター",
            "ホオッタ",
            "ホーッター",
            "ホーッタ",
            "ホッター",
            "ホッタ",
        ]
    );
    assert_eq!(convert("MATCHI"), ["マーッチ", "マッチ"]);
}

#[test]
fn test_labial_nasal() {
    assert_eq!(convert("SHIMBASHI"), ["シンバーシ", "シンバシ"]);
}

#[test]
fn test_trailing_n() {
    assert_eq!(convert("NN"), ["ンンー", "ンン"]);
}

#[test]
fn test_empty_input() {
    assert_eq!(convert(""), [""]);
}

#[test]
fn test_no_segmentation() {
    assert!(convert("XYZ").is_empty());
    assert!(convert("tokyo").is_empty());
    assert!(convert("東京").is_empty());
}

#[test]
fn test_tokyo_spellings() {
    let out = convert("TOKYO");
    assert_eq!(out.len(), 16);
    assert_eq!(out.first().map(String::as_str), Some("トウキョウ"));
    assert_eq!(out.last().map(String::as_str), Some("トキョ"));
    assert!(out.iter().any(|k| k == "トーキョー"));
}

#[test]
fn test_repeated_calls_identical() {
    assert_eq!(convert("KAN-ONJI"), convert("KAN-ONJI"));
}

#[test]
fn test_custom_table() {
    let table = MoraTable::build([("ス", "SU"), ("ズ", "ZU"), ("ヅ", "ZU")]);
    assert_eq!(
        romaji_to_kana(&table, "SUZU"),
        [
            "スウヅウ",
            "スウヅー",
            "スウヅ",
            "スウズウ",
            "スウズー",
            "スウズ",
            "スーヅウ",
            "スーヅー",
            "スーヅ",
            "スーズウ",
            "スーズー",
            "スーズ",
            "スヅウ",
            "スヅー",
            "スヅ",
            "スズウ",
            "スズー",
            "スズ",
        ]
    );
}

#[test]
fn test_trace_matches_untraced() {
    let mut events = Vec::new();
    let traced = romaji_to_kana_traced(MoraTable::hepburn(), "MEIWA", |e: &SearchEvent<'_>| {
        events.push(format!("{e:?}"))
    });
    assert_eq!(traced, convert("MEIWA"));
    assert!(!events.is_empty());
}

#[test]
fn test_trace_events() {
    let mut completes = Vec::new();
    let mut dead_ends = 0;
    let mut duplicates = 0;
    romaji_to_kana_traced(MoraTable::hepburn(), "HOO", |e: &SearchEvent<'_>| match e {
        SearchEvent::Complete { output } => completes.push(output.to_string()),
        SearchEvent::DeadEnd { .. } => dead_ends += 1,
        SearchEvent::Duplicate { .. } => duplicates += 1,
        SearchEvent::Visit { .. } => {}
    });
    assert_eq!(completes, convert("HOO"));
    // ホオオ is reached twice
    assert_eq!(duplicates, 1);
    assert_eq!(dead_ends, 0);
}

#[test]
fn test_trace_dead_end() {
    let mut dead = Vec::new();
    romaji_to_kana_traced(MoraTable::hepburn(), "ME", |e: &SearchEvent<'_>| {
        if let SearchEvent::DeadEnd {
            output, expected, ..
        } = e
        {
            dead.push((output.to_string(), *expected));
        }
    });
    assert_eq!(dead, [("メー".to_string(), 'I')]);
}

#[test]
fn test_trace_serializes() {
    let event = SearchEvent::Visit {
        offset: 2,
        output: "メ",
        remaining: "IWA",
        depth: 1,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["event"], "visit");
    assert_eq!(json["output"], "メ");
    assert_eq!(json["remaining"], "IWA");
    assert_eq!(json["depth"], 1);
}

#[test]
fn test_segment() {
    assert_eq!(segment("KYOTO"), "KYO");
    assert_eq!(segment("TCHAN"), "TCHA");
    assert_eq!(segment("N-O"), "N-O");
    assert_eq!(segment("N"), "N");
    assert_eq!(segment("A"), "A");
}
