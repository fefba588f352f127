use tennis_tournament_web::logic::rounds::{
    base_round, classify, match_label, match_sequence, BaseRound, RoundStage,
};

#[test]
fn classifies_canonical_labels() {
    assert_eq!(classify("Group A"), Some(RoundStage::Group));
    assert_eq!(classify("Round of 32"), Some(RoundStage::RoundOf32));
    assert_eq!(classify("Round of 16 – Match 4"), Some(RoundStage::RoundOf16));
    assert_eq!(classify("Quarterfinal"), Some(RoundStage::QuarterFinal));
    assert_eq!(classify("Semifinal"), Some(RoundStage::SemiFinal));
    assert_eq!(classify("Final"), Some(RoundStage::Final));
    assert_eq!(classify("Warmup"), None);
}

#[test]
fn classifies_legacy_labels() {
    assert_eq!(classify("Grupa B"), Some(RoundStage::Group));
    assert_eq!(classify("1/64 finału"), Some(RoundStage::RoundOf128));
    assert_eq!(classify("1/32 finału"), Some(RoundStage::RoundOf64));
    assert_eq!(classify("1/16 finału"), Some(RoundStage::RoundOf32));
    assert_eq!(classify("1/8 finału"), Some(RoundStage::RoundOf16));
    assert_eq!(classify("Ćwierćfinał"), Some(RoundStage::QuarterFinal));
    assert_eq!(classify("Półfinał"), Some(RoundStage::SemiFinal));
    assert_eq!(classify("Finał"), Some(RoundStage::Final));
}

#[test]
fn fraction_rounds_do_not_classify_as_the_final() {
    // Labels like "1/8 finału" contain the word for "final" after folding;
    // the depth must still win.
    assert_ne!(classify("1/8 finału"), Some(RoundStage::Final));
    assert_ne!(classify("Ćwierćfinał"), Some(RoundStage::Final));
}

#[test]
fn base_round_distinguishes_stages_and_merges_sequences() {
    let eighth = base_round("1/8 finału – Mecz 3");
    let quarter = base_round("Ćwierćfinał – Mecz 1");
    assert_eq!(eighth, BaseRound::Stage(RoundStage::RoundOf16));
    assert_eq!(quarter, BaseRound::Stage(RoundStage::QuarterFinal));
    assert_ne!(eighth, quarter);
    assert!(eighth < quarter);

    // Labels differing only in the sequence number share a base round.
    assert_eq!(
        base_round("Quarterfinal – Match 1"),
        base_round("Quarterfinal – Match 2")
    );
}

#[test]
fn hyphens_inside_a_round_name_do_not_merge_base_rounds() {
    // Only a trailing sequence suffix is stripped; a hyphen that is part
    // of the round name itself stays.
    assert_eq!(base_round("Pre-Season"), BaseRound::Other("Pre-Season".to_string()));
    assert_eq!(
        base_round("Pre-Qualifying – Match 2"),
        BaseRound::Other("Pre-Qualifying".to_string())
    );
    assert_ne!(base_round("Pre-Season"), base_round("Pre-Qualifying – Match 2"));

    // A hyphenated name keeps its full prefix when a suffix is stripped.
    assert_eq!(
        base_round("Pre-Season – Match 1"),
        base_round("Pre-Season – Match 2")
    );
    assert_eq!(
        base_round("Pre-Season – Match 1"),
        BaseRound::Other("Pre-Season".to_string())
    );
}

#[test]
fn unknown_labels_sort_after_known_stages() {
    let known = base_round("Final");
    let unknown = base_round("Consolation – Match 1");
    assert!(known < unknown);
    assert_eq!(unknown, BaseRound::Other("Consolation".to_string()));
}

#[test]
fn sequence_numbers_are_parsed_from_both_label_families() {
    assert_eq!(match_sequence("Quarterfinal – Match 3"), Some(3));
    assert_eq!(match_sequence("1/8 finału – Mecz 12"), Some(12));
    assert_eq!(match_sequence("Semifinal – MATCH 2 "), Some(2));
    assert_eq!(match_sequence("Group A"), None);
    // The number must end the label.
    assert_eq!(match_sequence("Match 3 of 5"), None);
}

#[test]
fn stage_ordering_and_progression() {
    assert!(RoundStage::Group < RoundStage::RoundOf16);
    assert!(RoundStage::RoundOf16 < RoundStage::QuarterFinal);
    assert!(RoundStage::SemiFinal < RoundStage::Final);

    assert_eq!(RoundStage::QuarterFinal.next(), Some(RoundStage::SemiFinal));
    assert_eq!(RoundStage::Final.next(), None);
    assert_eq!(RoundStage::Group.next(), None);
}

#[test]
fn entry_stage_fits_the_entrant_count() {
    assert_eq!(RoundStage::entry_stage_for(2), RoundStage::Final);
    assert_eq!(RoundStage::entry_stage_for(3), RoundStage::SemiFinal);
    assert_eq!(RoundStage::entry_stage_for(4), RoundStage::SemiFinal);
    assert_eq!(RoundStage::entry_stage_for(5), RoundStage::QuarterFinal);
    assert_eq!(RoundStage::entry_stage_for(16), RoundStage::RoundOf16);
    assert_eq!(RoundStage::entry_stage_for(100), RoundStage::RoundOf128);
}

#[test]
fn generated_labels_round_trip_through_the_classifier() {
    let label = match_label(RoundStage::SemiFinal, 2);
    assert_eq!(label, "Semifinal – Match 2");
    assert_eq!(classify(&label), Some(RoundStage::SemiFinal));
    assert_eq!(match_sequence(&label), Some(2));
    assert_eq!(base_round(&label), BaseRound::Stage(RoundStage::SemiFinal));
}
