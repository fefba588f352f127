//! Round mapper: classify free-text round labels into canonical stages.
//!
//! Newly generated matches get canonical labels from `match_label`; the
//! substring classifier doubles as a compatibility shim for externally
//! supplied legacy labels (including the Polish ones, e.g. "Ćwierćfinał").

use serde::{Deserialize, Serialize};

/// Canonical stage of a round, ordered for display (group stage first,
/// then elimination depths from earliest to the final).
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RoundStage {
    Group,
    RoundOf128,
    RoundOf64,
    RoundOf32,
    RoundOf16,
    QuarterFinal,
    SemiFinal,
    Final,
}

/// Elimination depths from earliest to the final.
pub const ELIMINATION_STAGES: [RoundStage; 7] = [
    RoundStage::RoundOf128,
    RoundStage::RoundOf64,
    RoundStage::RoundOf32,
    RoundStage::RoundOf16,
    RoundStage::QuarterFinal,
    RoundStage::SemiFinal,
    RoundStage::Final,
];

impl RoundStage {
    pub fn is_elimination(self) -> bool {
        self != RoundStage::Group
    }

    /// Players entering this elimination round (2 for the final).
    pub fn bracket_size(self) -> u32 {
        match self {
            RoundStage::Group => 0,
            RoundStage::RoundOf128 => 128,
            RoundStage::RoundOf64 => 64,
            RoundStage::RoundOf32 => 32,
            RoundStage::RoundOf16 => 16,
            RoundStage::QuarterFinal => 8,
            RoundStage::SemiFinal => 4,
            RoundStage::Final => 2,
        }
    }

    pub fn matches_in_round(self) -> u32 {
        self.bracket_size() / 2
    }

    /// Next elimination round toward the final.
    pub fn next(self) -> Option<RoundStage> {
        let idx = ELIMINATION_STAGES.iter().position(|s| *s == self)?;
        ELIMINATION_STAGES.get(idx + 1).copied()
    }

    /// Smallest elimination round whose bracket fits `entrants` players.
    pub fn entry_stage_for(entrants: usize) -> RoundStage {
        for stage in ELIMINATION_STAGES.iter().rev() {
            if stage.bracket_size() as usize >= entrants {
                return *stage;
            }
        }
        RoundStage::RoundOf128
    }

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            RoundStage::Group => "Group",
            RoundStage::RoundOf128 => "Round of 128",
            RoundStage::RoundOf64 => "Round of 64",
            RoundStage::RoundOf32 => "Round of 32",
            RoundStage::RoundOf16 => "Round of 16",
            RoundStage::QuarterFinal => "Quarterfinal",
            RoundStage::SemiFinal => "Semifinal",
            RoundStage::Final => "Final",
        }
    }
}

/// Base-round equivalence key: the stage when the label is recognized,
/// otherwise the label itself with any sequence suffix stripped.
/// Unrecognized labels sort after every known stage.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum BaseRound {
    Stage(RoundStage),
    Other(String),
}

impl std::fmt::Display for BaseRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseRound::Stage(stage) => f.write_str(stage.label()),
            BaseRound::Other(raw) => f.write_str(raw),
        }
    }
}

/// Lowercase and fold the diacritics that occur in the legacy labels.
fn fold(label: &str) -> String {
    label
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'ą' => 'a',
            'ć' => 'c',
            'ę' => 'e',
            'ł' => 'l',
            'ń' => 'n',
            'ó' => 'o',
            'ś' => 's',
            'ż' | 'ź' => 'z',
            other => other,
        })
        .collect()
}

/// Map a round label to its canonical stage, if recognized.
///
/// Fraction and quarter/semi checks must run before the plain "final"
/// check: their folded forms ("1/8 finalu", "cwiercfinal") contain it.
pub fn classify(label: &str) -> Option<RoundStage> {
    let s = fold(label);
    if s.contains("grupa") || s.contains("group") {
        return Some(RoundStage::Group);
    }
    if s.contains("1/64") || s.contains("round of 128") {
        return Some(RoundStage::RoundOf128);
    }
    if s.contains("1/32") || s.contains("round of 64") {
        return Some(RoundStage::RoundOf64);
    }
    if s.contains("1/16") || s.contains("round of 32") {
        return Some(RoundStage::RoundOf32);
    }
    if s.contains("1/8") || s.contains("round of 16") {
        return Some(RoundStage::RoundOf16);
    }
    if s.contains("cwiercfina") || s.contains("quarter") {
        return Some(RoundStage::QuarterFinal);
    }
    if s.contains("polfina") || s.contains("semi") {
        return Some(RoundStage::SemiFinal);
    }
    if s.contains("final") {
        return Some(RoundStage::Final);
    }
    None
}

/// Base-round equivalence key for a label.
pub fn base_round(label: &str) -> BaseRound {
    match classify(label) {
        Some(stage) => BaseRound::Stage(stage),
        None => BaseRound::Other(strip_sequence_suffix(label).to_string()),
    }
}

/// Trailing match-sequence number ("Quarterfinal – Match 3" -> 3,
/// "1/8 finału – Mecz 12" -> 12), None when absent.
pub fn match_sequence(label: &str) -> Option<u32> {
    let s = fold(label);
    let pos = s.rfind("match").or_else(|| s.rfind("mecz"))?;
    let tail = &s[pos..];
    let digits: String = tail
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }
    // The number must end the label (trailing whitespace allowed).
    let mut after = tail
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .skip(digits.len());
    if after.any(|c| !c.is_whitespace()) {
        return None;
    }
    digits.parse().ok()
}

/// Label with a trailing " – Match N" style suffix removed. Hyphens inside
/// the round name itself are left alone; only a label that actually ends in
/// a sequence number gets cut, at its last separator.
fn strip_sequence_suffix(label: &str) -> &str {
    if match_sequence(label).is_none() {
        return label.trim();
    }
    let cut = label.rfind(['-', '–']).unwrap_or(label.len());
    let head = label[..cut].trim();
    if head.is_empty() {
        label.trim()
    } else {
        head
    }
}

/// Canonical label for the n-th match (1-based) of an elimination round.
pub fn match_label(stage: RoundStage, n: u32) -> String {
    format!("{} – Match {}", stage.label(), n)
}
