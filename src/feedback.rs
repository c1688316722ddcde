//! Links out of the app: Wiktionary pages for headwords and pre-filled
//! issue reports for the general feedback link and "wrong solution" reports.

use crate::config::IssueTemplates;
use crate::domain::Puzzle;
use crate::taxonomy::gender_label;
use crate::util::{encode_uri_component, fill_template};

pub fn wiktionary_url(word: &str) -> String {
  format!("https://cs.wiktionary.org/wiki/{}", word)
}

/// New-issue URL with an encoded title and body; a label goes first when given.
pub fn create_issue_url(base: &str, title: &str, body: &str, label: Option<&str>) -> String {
  let label_param = label.map(|l| format!("labels={}&", l)).unwrap_or_default();
  format!(
    "{}?{}title={}&body={}",
    base,
    label_param,
    encode_uri_component(title),
    encode_uri_component(body)
  )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssueReport {
  pub title: String,
  pub body: String,
  pub label: Option<String>,
}

impl IssueReport {
  pub fn url(&self, templates: &IssueTemplates) -> String {
    create_issue_url(&templates.new_issue_url, &self.title, &self.body, self.label.as_deref())
  }
}

pub fn general_feedback_report(templates: &IssueTemplates) -> IssueReport {
  IssueReport {
    title: templates.feedback_title.clone(),
    body: templates.feedback_body.clone(),
    label: None,
  }
}

/// Report disputing the accepted forms of the current puzzle.
pub fn word_issue_report(puzzle: &Puzzle, templates: &IssueTemplates) -> IssueReport {
  let url = wiktionary_url(&puzzle.word);
  let solutions = puzzle.solutions.join(", ");
  let pairs = [
    ("word", puzzle.word.as_str()),
    ("url", url.as_str()),
    ("gender", gender_label(puzzle.info.gender, puzzle.info.is_animate)),
    ("case", puzzle.case_slot.name()),
    ("solutions", solutions.as_str()),
  ];
  let label = Some(templates.word_label.clone()).filter(|l| !l.is_empty());
  IssueReport {
    title: fill_template(&templates.word_title, &pairs),
    body: fill_template(&templates.word_body, &pairs),
    label,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Gender, WordEntry};
  use crate::taxonomy::CaseSlot;

  fn puzzle() -> Puzzle {
    Puzzle {
      word: "pes".into(),
      info: WordEntry { gender: Some(Gender::Masculine), is_animate: true, ..Default::default() },
      case_slot: CaseSlot::new(3).unwrap(),
      solutions: vec!["psovi".into(), "psu".into()],
    }
  }

  #[test]
  fn issue_url_encodes_and_orders_params() {
    assert_eq!(
      create_issue_url("https://x/issues/new", "a b", "c&d", Some("word")),
      "https://x/issues/new?labels=word&title=a%20b&body=c%26d"
    );
    assert_eq!(create_issue_url("https://x/new", "t", "b", None), "https://x/new?title=t&body=b");
  }

  #[test]
  fn word_report_mentions_everything() {
    let templates = IssueTemplates::default();
    let report = word_issue_report(&puzzle(), &templates);
    assert_eq!(report.title, "Wrong solution for \"pes\"");
    assert_eq!(
      report.body,
      "The word [pes](https://cs.wiktionary.org/wiki/pes) `(Masculine - animate)` in the case `Dative (3.) – singular` is specified as `psovi, psu`, but I think it is incorrect because... <fill in why>"
    );
    assert_eq!(report.label.as_deref(), Some("word"));
    let url = report.url(&templates);
    assert!(url.starts_with("https://github.com/mdanka/czech/issues/new?labels=word&title=Wrong%20solution%20for%20%22pes%22&body="));
  }

  #[test]
  fn general_feedback_has_no_label() {
    let templates = IssueTemplates::default();
    let url = general_feedback_report(&templates).url(&templates);
    assert_eq!(
      url,
      "https://github.com/mdanka/czech/issues/new?title=Feedback%20about%20%3Cfill%20in%20here%3E&body=%3Cfill%20in%20here%3E"
    );
  }
}
