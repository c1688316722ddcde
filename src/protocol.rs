//! Serde DTOs handed to the presentation layer.
//! Keep this small and stable to evolve the engine and the UI independently.

use serde::Serialize;

use crate::config::IssueTemplates;
use crate::diff::{all_solutions_diff, highlight, SolutionWordParts};
use crate::dictionary::DictionaryStats;
use crate::domain::{Puzzle, Scores, Settings};
use crate::feedback::{general_feedback_report, wiktionary_url, word_issue_report};
use crate::taxonomy::{gender_label, CaseSlot, GenderFilter};

/// One case checkbox on the welcome screen.
#[derive(Debug, Serialize)]
pub struct CaseOption {
    pub slot: u8,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Serialize)]
pub struct GenderOption {
    pub filter: GenderFilter,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeView {
    pub words: usize,
    pub declensions: usize,
    pub cases: Vec<CaseOption>,
    pub genders: Vec<GenderOption>,
    pub can_start: bool,
    pub feedback_url: String,
}

/// The round as the practice screen draws it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub round_id: String,
    pub word: String,
    pub gender: &'static str,
    pub case_name: &'static str,
    pub preposition: &'static str,
    pub guess: String,
    pub scores: Scores,
    /// Present once the answer has been checked.
    pub reveal: Option<RevealView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealView {
    pub correct: bool,
    /// One entry per accepted solution, one part per word.
    pub solutions: Vec<Vec<SolutionWordParts>>,
    /// Cue word plus solutions with endings wrapped in `**`.
    pub answer_text: String,
    pub wiktionary_url: String,
    pub report_issue_url: String,
}

pub fn to_welcome_view(
    stats: DictionaryStats,
    selectable: &[CaseSlot],
    settings: &Settings,
    issues: &IssueTemplates,
) -> WelcomeView {
    WelcomeView {
        words: stats.words,
        declensions: stats.declensions,
        cases: selectable
            .iter()
            .map(|s| CaseOption {
                slot: s.get(),
                label: s.name(),
                checked: settings.selected_cases.contains(s),
            })
            .collect(),
        genders: GenderFilter::ALL
            .into_iter()
            .map(|g| GenderOption {
                filter: g,
                label: g.label(),
                checked: settings.selected_genders.contains(&g),
            })
            .collect(),
        can_start: settings.can_start(),
        feedback_url: general_feedback_report(issues).url(issues),
    }
}

pub fn to_reveal_view(puzzle: &Puzzle, correct: bool, issues: &IssueTemplates) -> RevealView {
    let solutions = all_solutions_diff(&puzzle.word, &puzzle.solutions);
    let highlighted = highlight(&solutions, "**", "**");
    let preposition = puzzle.case_slot.preposition();
    let answer_text = if preposition.is_empty() {
        highlighted
    } else {
        format!("{} {}", preposition, highlighted)
    };
    RevealView {
        correct,
        solutions,
        answer_text,
        wiktionary_url: wiktionary_url(&puzzle.word),
        report_issue_url: word_issue_report(puzzle, issues).url(issues),
    }
}

pub fn to_round_view(
    round_id: String,
    puzzle: &Puzzle,
    guess: &str,
    scores: Scores,
    reveal: Option<RevealView>,
) -> RoundView {
    RoundView {
        round_id,
        word: puzzle.word.clone(),
        gender: gender_label(puzzle.info.gender, puzzle.info.is_animate),
        case_name: puzzle.case_slot.name(),
        preposition: puzzle.case_slot.preposition(),
        guess: guess.to_string(),
        scores,
        reveal,
    }
}
