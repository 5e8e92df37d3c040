use serde::{Deserialize, Serialize};

/// Coarse five-level difficulty bucket derived from a problem rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    None,
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    /// Stable identifier used as the filter value
    pub fn slug(&self) -> &'static str {
        match self {
            Difficulty::None => "none",
            Difficulty::VeryEasy => "very-easy",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "very-hard",
        }
    }

    /// Display label shown in the UI
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::None => "Не указана",
            Difficulty::VeryEasy => "Очень легкая",
            Difficulty::Easy => "Легкая",
            Difficulty::Medium => "Средняя",
            Difficulty::Hard => "Сложная",
            Difficulty::VeryHard => "Очень сложная",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::None => "#9ca3af",
            Difficulty::VeryEasy => "#00DD00",
            Difficulty::Easy => "#a3e635",
            Difficulty::Medium => "#eab308",
            Difficulty::Hard => "#ef4444",
            Difficulty::VeryHard => "#7f1d1d",
        }
    }

    pub const ALL: [Difficulty; 5] = [
        Difficulty::VeryEasy,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];
}

/// Buckets a problem rating.
///
/// A rating of zero counts as "not specified", same as an absent one.
pub fn difficulty_bucket(rating: Option<u32>) -> Difficulty {
    match rating {
        None | Some(0) => Difficulty::None,
        Some(r) if r <= 1000 => Difficulty::VeryEasy,
        Some(r) if r <= 1400 => Difficulty::Easy,
        Some(r) if r <= 1900 => Difficulty::Medium,
        Some(r) if r <= 2800 => Difficulty::Hard,
        Some(_) => Difficulty::VeryHard,
    }
}

/// Contest tier derived from the contest name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    Div1,
    Div2,
    Div3,
    Div4,
    Other,
}

impl Division {
    pub fn label(&self) -> &'static str {
        match self {
            Division::Div1 => "Div. 1",
            Division::Div2 => "Div. 2",
            Division::Div3 => "Div. 3",
            Division::Div4 => "Div. 4",
            Division::Other => "Other",
        }
    }

    pub const ALL: [Division; 5] = [
        Division::Div1,
        Division::Div2,
        Division::Div3,
        Division::Div4,
        Division::Other,
    ];
}

/// Extracts the division from a contest name.
///
/// Matching is case-sensitive on the literal markers and first match wins,
/// so a name carrying several markers classifies by the Div. 1 > Div. 2 >
/// Div. 3 > Div. 4 priority.
pub fn division(name: &str) -> Division {
    if name.contains("Div. 1") {
        Division::Div1
    } else if name.contains("Div. 2") {
        Division::Div2
    } else if name.contains("Div. 3") {
        Division::Div3
    } else if name.contains("Div. 4") {
        Division::Div4
    } else {
        Division::Other
    }
}

/// Rank ladder position derived from a free-text rank string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankTier {
    LegendaryGrandmaster,
    InternationalGrandmaster,
    Grandmaster,
    InternationalMaster,
    CandidateMaster,
    Master,
    Expert,
    Specialist,
    Pupil,
    Newbie,
    Unrated,
}

impl RankTier {
    pub fn label(&self) -> &'static str {
        match self {
            RankTier::LegendaryGrandmaster => "Legendary Grandmaster",
            RankTier::InternationalGrandmaster => "International Grandmaster",
            RankTier::Grandmaster => "Grandmaster",
            RankTier::InternationalMaster => "International Master",
            RankTier::CandidateMaster => "Candidate Master",
            RankTier::Master => "Master",
            RankTier::Expert => "Expert",
            RankTier::Specialist => "Specialist",
            RankTier::Pupil => "Pupil",
            RankTier::Newbie => "Newbie",
            RankTier::Unrated => "Без ранга",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RankTier::LegendaryGrandmaster => "#aa0000",
            RankTier::InternationalGrandmaster => "#ff0000",
            RankTier::Grandmaster
            | RankTier::InternationalMaster
            | RankTier::Master => "#ff8c00",
            RankTier::CandidateMaster => "#aa00aa",
            RankTier::Expert => "#0000ff",
            RankTier::Specialist => "#03a89e",
            RankTier::Pupil => "#008000",
            RankTier::Newbie | RankTier::Unrated => "#808080",
        }
    }
}

// The ladder is checked top tier first, and the composite names before the
// bare ones they contain ("international grandmaster" before "grandmaster",
// "candidate master" before "master"). Both the English and the Russian
// rank spellings appear in the wild.
const RANK_LADDER: [(&[&str], RankTier); 10] = [
    (
        &["легендарный гроссмейстер", "legendary grandmaster"],
        RankTier::LegendaryGrandmaster,
    ),
    (
        &["международный гроссмейстер", "international grandmaster"],
        RankTier::InternationalGrandmaster,
    ),
    (&["гроссмейстер", "grandmaster"], RankTier::Grandmaster),
    (
        &["международный мастер", "international master"],
        RankTier::InternationalMaster,
    ),
    (
        &["кандидат в мастера", "candidate master"],
        RankTier::CandidateMaster,
    ),
    (&["мастер", "master"], RankTier::Master),
    (&["эксперт", "expert"], RankTier::Expert),
    (&["специалист", "specialist"], RankTier::Specialist),
    (&["ученик", "pupil"], RankTier::Pupil),
    (&["новобранец", "newbie"], RankTier::Newbie),
];

/// Places a free-text rank string on the ladder.
///
/// Case-insensitive substring match; unmatched or absent ranks are `Unrated`.
pub fn rank_tier(rank: Option<&str>) -> RankTier {
    let rank = match rank {
        Some(r) if !r.is_empty() => r.to_lowercase(),
        _ => return RankTier::Unrated,
    };

    for (needles, tier) in RANK_LADDER {
        if needles.iter().any(|needle| rank.contains(needle)) {
            return tier;
        }
    }
    RankTier::Unrated
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(None, Difficulty::None)]
    #[case(Some(0), Difficulty::None)]
    #[case(Some(800), Difficulty::VeryEasy)]
    #[case(Some(1000), Difficulty::VeryEasy)]
    #[case(Some(1001), Difficulty::Easy)]
    #[case(Some(1400), Difficulty::Easy)]
    #[case(Some(1401), Difficulty::Medium)]
    #[case(Some(1900), Difficulty::Medium)]
    #[case(Some(1901), Difficulty::Hard)]
    #[case(Some(2800), Difficulty::Hard)]
    #[case(Some(2801), Difficulty::VeryHard)]
    #[case(Some(3500), Difficulty::VeryHard)]
    fn test_difficulty_boundaries(#[case] rating: Option<u32>, #[case] expected: Difficulty) {
        assert_eq!(difficulty_bucket(rating), expected);
    }

    #[test]
    fn test_division_from_name() {
        assert_eq!(division("Codeforces Round 917 (Div. 2)"), Division::Div2);
        assert_eq!(division("Codeforces Round 918 (Div. 4)"), Division::Div4);
        assert_eq!(division("Good Bye 2023"), Division::Other);
    }

    #[test]
    fn test_division_first_match_priority() {
        // A name carrying several markers classifies by the fixed
        // Div. 1 > Div. 2 > Div. 3 > Div. 4 order, not by string position
        assert_eq!(
            division("Codeforces Round 900 (Div. 1, Div. 2)"),
            Division::Div1
        );
        assert_eq!(
            division("Codeforces Round 903 (Div. 3, based on Div. 2 rules)"),
            Division::Div2
        );
        assert_eq!(
            division("Codeforces Round 905 (Div. 4, rated for Div. 3)"),
            Division::Div3
        );
    }

    #[test]
    fn test_division_is_case_sensitive() {
        assert_eq!(division("codeforces round (div. 2)"), Division::Other);
    }

    #[test]
    fn test_rank_ladder_composite_before_bare() {
        assert_eq!(
            rank_tier(Some("International Grandmaster")),
            RankTier::InternationalGrandmaster
        );
        assert_eq!(rank_tier(Some("grandmaster")), RankTier::Grandmaster);
        assert_eq!(
            rank_tier(Some("candidate master")),
            RankTier::CandidateMaster
        );
        assert_eq!(rank_tier(Some("master")), RankTier::Master);
    }

    #[test]
    fn test_rank_russian_spellings() {
        assert_eq!(
            rank_tier(Some("Легендарный гроссмейстер")),
            RankTier::LegendaryGrandmaster
        );
        assert_eq!(rank_tier(Some("специалист")), RankTier::Specialist);
    }

    #[test]
    fn test_rank_unmatched_or_absent_is_unrated() {
        assert_eq!(rank_tier(None), RankTier::Unrated);
        assert_eq!(rank_tier(Some("")), RankTier::Unrated);
        assert_eq!(rank_tier(Some("headquarters")), RankTier::Unrated);
    }

    #[test]
    fn test_colors_match_ladder() {
        assert_eq!(RankTier::LegendaryGrandmaster.color(), "#aa0000");
        assert_eq!(RankTier::Expert.color(), "#0000ff");
        assert_eq!(rank_tier(None).color(), "#808080");
    }
}
