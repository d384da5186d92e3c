//! Keyword-based practice-area classification.

use billable_core::{PracticeArea, PracticeAreaScoring};
use serde::Serialize;

/// Characteristic task words per practice area, in scan order.
pub const LEGAL_TASKS: &[(PracticeArea, &[&str])] = &[
    (
        PracticeArea::Corporate,
        &[
            "drafting",
            "review",
            "amendment",
            "incorporation",
            "merger",
            "acquisition",
            "due diligence",
            "compliance",
        ],
    ),
    (
        PracticeArea::Litigation,
        &[
            "pleading",
            "motion",
            "discovery",
            "deposition",
            "trial prep",
            "court appearance",
            "research",
        ],
    ),
    (
        PracticeArea::Contract,
        &["negotiation", "review", "drafting", "amendment", "execution"],
    ),
    (
        PracticeArea::RealEstate,
        &[
            "closing",
            "title search",
            "lease review",
            "purchase agreement",
            "mortgage",
        ],
    ),
    (
        PracticeArea::Family,
        &["custody", "divorce", "separation", "support", "mediation"],
    ),
    (
        PracticeArea::Criminal,
        &["arraignment", "bail", "plea", "sentencing", "appeal"],
    ),
    (
        PracticeArea::Employment,
        &["termination", "discrimination", "harassment", "contract review"],
    ),
    (
        PracticeArea::Ip,
        &["patent", "trademark", "copyright", "licensing", "infringement"],
    ),
];

/// Keywords for `area`; `None` for [`PracticeArea::General`].
pub fn keywords_for(area: PracticeArea) -> Option<&'static [&'static str]> {
    LEGAL_TASKS
        .iter()
        .find(|(a, _)| *a == area)
        .map(|(_, keywords)| *keywords)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PracticeAreaMatch {
    pub area: PracticeArea,
    pub confidence: f64,
    /// Keyword that decided the area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<&'static str>,
}

impl PracticeAreaMatch {
    pub fn general() -> Self {
        Self {
            area: PracticeArea::General,
            confidence: 0.0,
            keyword: None,
        }
    }
}

/// Classify with the default scoring constants.
pub fn detect_practice_area(text: &str) -> PracticeAreaMatch {
    detect_practice_area_with(text, &PracticeAreaScoring::default())
}

/// Scan every keyword of every area; the highest score wins, then the
/// longer keyword, then the earlier table entry.
pub fn detect_practice_area_with(text: &str, scoring: &PracticeAreaScoring) -> PracticeAreaMatch {
    let text_lower = text.to_lowercase();
    let mut best = PracticeAreaMatch::general();

    for &(area, keywords) in LEGAL_TASKS {
        for &keyword in keywords {
            if !text_lower.contains(keyword) {
                continue;
            }
            let confidence = scoring.score(keyword);
            let longer = best
                .keyword
                .map_or(true, |k| keyword.chars().count() > k.chars().count());
            if confidence > best.confidence || (confidence == best.confidence && longer) {
                best = PracticeAreaMatch {
                    area,
                    confidence,
                    keyword: Some(keyword),
                };
            }
        }
    }

    best
}
