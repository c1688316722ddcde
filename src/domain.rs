//! Domain models: dictionary records, the transient puzzle, scores and settings.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::taxonomy::{selectable_slots, Case, CaseSlot, GenderFilter, Number};

/// Grammatical gender as stored in the word database (`"m"`, `"f"`, `"n"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
  #[serde(rename = "m")]
  Masculine,
  #[serde(rename = "f")]
  Feminine,
  #[serde(rename = "n")]
  Neuter,
}

/// Accepted forms of one case, split by number. An empty list means the word
/// has no attested form for that case/number combination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseForms {
  #[serde(default, deserialize_with = "forms_list")]
  pub singular: Vec<String>,
  #[serde(default, deserialize_with = "forms_list")]
  pub plural: Vec<String>,
}

impl CaseForms {
  pub fn number(&self, number: Number) -> &[String] {
    match number {
      Number::Singular => &self.singular,
      Number::Plural => &self.plural,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.singular.is_empty() && self.plural.is_empty()
  }
}

// Older databases stored one string (or null) per case/number; newer ones a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum FormsRepr {
  Many(Vec<String>),
  One(String),
}

fn forms_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
  Ok(match Option::<FormsRepr>::deserialize(d)? {
    None => Vec::new(),
    Some(FormsRepr::One(s)) if s.trim().is_empty() => Vec::new(),
    Some(FormsRepr::One(s)) => vec![s],
    Some(FormsRepr::Many(v)) => v,
  })
}

fn null_as_false<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
  Ok(Option::<bool>::deserialize(d)?.unwrap_or(false))
}

/// One dictionary record, keyed by its headword in the database.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
  #[serde(default)]
  pub gender: Option<Gender>,
  /// Only meaningful for masculine nouns.
  #[serde(default, rename = "isAnimated", alias = "isAnimate", deserialize_with = "null_as_false")]
  pub is_animate: bool,
  #[serde(default)] pub nominative: Option<CaseForms>,
  #[serde(default)] pub genitive: Option<CaseForms>,
  #[serde(default)] pub dative: Option<CaseForms>,
  #[serde(default)] pub accusative: Option<CaseForms>,
  #[serde(default)] pub vocative: Option<CaseForms>,
  #[serde(default)] pub locative: Option<CaseForms>,
  #[serde(default)] pub instrumental: Option<CaseForms>,
}

impl WordEntry {
  pub fn case(&self, case: Case) -> Option<&CaseForms> {
    match case {
      Case::Nominative => self.nominative.as_ref(),
      Case::Genitive => self.genitive.as_ref(),
      Case::Dative => self.dative.as_ref(),
      Case::Accusative => self.accusative.as_ref(),
      Case::Vocative => self.vocative.as_ref(),
      Case::Locative => self.locative.as_ref(),
      Case::Instrumental => self.instrumental.as_ref(),
    }
  }

  /// Accepted solutions for a case slot; empty when the slot is inapplicable.
  pub fn forms(&self, slot: CaseSlot) -> &[String] {
    self
      .case(slot.case())
      .map(|c| c.number(slot.number()))
      .unwrap_or(&[])
  }

  /// Number of case slots with at least one attested form.
  pub fn declension_count(&self) -> usize {
    CaseSlot::all().filter(|s| !self.forms(*s).is_empty()).count()
  }
}

/// One quiz round's word, case slot and accepted answers. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
  pub word: String,
  pub info: WordEntry,
  pub case_slot: CaseSlot,
  pub solutions: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreKind {
  Correct,
  Wrong,
  Skipped,
}

/// Running tallies. Only ever incremented, except on explicit reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
  pub correct: u32,
  pub wrong: u32,
  pub skipped: u32,
}

impl Scores {
  pub fn record(&mut self, kind: ScoreKind) {
    let counter = match kind {
      ScoreKind::Correct => &mut self.correct,
      ScoreKind::Wrong => &mut self.wrong,
      ScoreKind::Skipped => &mut self.skipped,
    };
    *counter = counter.saturating_add(1);
  }

  /// Saturates at `u32::MAX`; stored tallies can be arbitrarily large.
  pub fn total(&self) -> u32 {
    self.correct.saturating_add(self.wrong).saturating_add(self.skipped)
  }
}

/// User's case and gender filters. Updates produce a new value instead of
/// mutating in place, so the displayed and the stored selection never alias.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
  pub selected_cases: BTreeSet<CaseSlot>,
  pub selected_genders: BTreeSet<GenderFilter>,
}

impl Settings {
  /// Every selectable slot and every gender.
  pub fn defaults(include_nominative_singular: bool) -> Self {
    Self {
      selected_cases: selectable_slots(include_nominative_singular).into_iter().collect(),
      selected_genders: GenderFilter::ALL.into_iter().collect(),
    }
  }

  pub fn with_case_toggled(&self, slot: CaseSlot) -> Self {
    let mut selected_cases = self.selected_cases.clone();
    if !selected_cases.remove(&slot) {
      selected_cases.insert(slot);
    }
    Self { selected_cases, ..self.clone() }
  }

  pub fn with_gender_toggled(&self, filter: GenderFilter) -> Self {
    let mut selected_genders = self.selected_genders.clone();
    if !selected_genders.remove(&filter) {
      selected_genders.insert(filter);
    }
    Self { selected_genders, ..self.clone() }
  }

  pub fn with_cases(&self, cases: impl IntoIterator<Item = CaseSlot>) -> Self {
    Self { selected_cases: cases.into_iter().collect(), ..self.clone() }
  }

  pub fn with_genders(&self, genders: impl IntoIterator<Item = GenderFilter>) -> Self {
    Self { selected_genders: genders.into_iter().collect(), ..self.clone() }
  }

  pub fn can_start(&self) -> bool {
    !self.selected_cases.is_empty()
  }
}
