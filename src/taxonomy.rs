//! Case and gender taxonomy: the 14 case slots, their labels and cue words,
//! the curated checkbox order, and the four selectable gender categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Gender;
use crate::error::InvalidCaseSlot;

/// Slot labels, indexed by slot number. Index 0 is a placeholder.
pub const ALL_CASE_NAMES: [&str; 15] = [
  "",
  "Nominative (1.) – singular",
  "Genitive (2.) – singular",
  "Dative (3.) – singular",
  "Accusative (4.) – singular",
  "Vocative (5.) – singular",
  "Locative (6.) – singular",
  "Instrumental (7.) – singular",
  "Nominative (1.) – plural",
  "Genitive (2.) – plural",
  "Dative (3.) – plural",
  "Accusative (4.) – plural",
  "Vocative (5.) – plural",
  "Locative (6.) – plural",
  "Instrumental (7.) – plural",
];

/// Word shown in front of the answer box to cue the case.
pub const CASE_PREPOSITIONS: [&str; 15] = [
  "",
  "to je",
  "bez",
  "k/ke",
  "vidím",
  "ahoj",
  "o",
  "s/se",
  "to jsou",
  "bez",
  "k/ke",
  "vidím",
  "ahoj",
  "o",
  "s/se",
];

// Singular and plural of the same case sit next to each other.
const SELECTABLE_ORDER: [u8; 13] = [8, 2, 9, 3, 10, 4, 11, 5, 12, 6, 13, 7, 14];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
  Nominative = 1,
  Genitive = 2,
  Dative = 3,
  Accusative = 4,
  Vocative = 5,
  Locative = 6,
  Instrumental = 7,
}

impl Case {
  pub const ALL: [Case; 7] = [
    Case::Nominative,
    Case::Genitive,
    Case::Dative,
    Case::Accusative,
    Case::Vocative,
    Case::Locative,
    Case::Instrumental,
  ];

  /// Traditional Czech case number (1.–7.).
  pub const fn ordinal(self) -> u8 {
    self as u8
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
  Singular,
  Plural,
}

/// A (case, number) combination numbered 1–14: 1–7 singular, 8–14 plural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CaseSlot(u8);

impl CaseSlot {
  pub const fn new(n: u8) -> Option<Self> {
    if n >= 1 && n <= 14 { Some(Self(n)) } else { None }
  }

  pub const fn from_parts(case: Case, number: Number) -> Self {
    match number {
      Number::Singular => Self(case.ordinal()),
      Number::Plural => Self(case.ordinal() + 7),
    }
  }

  pub fn all() -> impl Iterator<Item = CaseSlot> {
    (1..=14).map(CaseSlot)
  }

  pub const fn get(self) -> u8 {
    self.0
  }

  pub fn case(self) -> Case {
    Case::ALL[((self.0 - 1) % 7) as usize]
  }

  pub fn number(self) -> Number {
    if self.0 <= 7 { Number::Singular } else { Number::Plural }
  }

  pub fn name(self) -> &'static str {
    ALL_CASE_NAMES[self.0 as usize]
  }

  pub fn preposition(self) -> &'static str {
    CASE_PREPOSITIONS[self.0 as usize]
  }
}

impl TryFrom<u8> for CaseSlot {
  type Error = InvalidCaseSlot;

  fn try_from(n: u8) -> Result<Self, Self::Error> {
    Self::new(n).ok_or(InvalidCaseSlot(n))
  }
}

impl From<CaseSlot> for u8 {
  fn from(slot: CaseSlot) -> u8 {
    slot.0
  }
}

impl fmt::Display for CaseSlot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Label for a raw slot number; empty for 0 and anything out of range.
pub fn case_name(slot: u8) -> &'static str {
  ALL_CASE_NAMES.get(slot as usize).copied().unwrap_or("")
}

/// Cue word for a raw slot number; empty for 0 and anything out of range.
pub fn case_preposition(slot: u8) -> &'static str {
  CASE_PREPOSITIONS.get(slot as usize).copied().unwrap_or("")
}

/// Checkbox order for the case selection. Nominative singular is left out
/// unless asked for, since the headword already gives it away.
pub fn selectable_slots(include_nominative_singular: bool) -> Vec<CaseSlot> {
  let nominative = include_nominative_singular.then_some(1);
  nominative
    .into_iter()
    .chain(SELECTABLE_ORDER)
    .map(CaseSlot)
    .collect()
}

/// Selectable gender category; masculine splits on animacy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderFilter {
  MasculineAnimate,
  MasculineInanimate,
  Feminine,
  Neuter,
}

impl GenderFilter {
  pub const ALL: [GenderFilter; 4] = [
    GenderFilter::MasculineAnimate,
    GenderFilter::MasculineInanimate,
    GenderFilter::Feminine,
    GenderFilter::Neuter,
  ];

  /// The `(gender, animate)` pair this category stands for.
  pub const fn parts(self) -> (Gender, bool) {
    match self {
      GenderFilter::MasculineAnimate => (Gender::Masculine, true),
      GenderFilter::MasculineInanimate => (Gender::Masculine, false),
      GenderFilter::Feminine => (Gender::Feminine, false),
      GenderFilter::Neuter => (Gender::Neuter, false),
    }
  }

  pub fn matches(self, gender: Option<Gender>, is_animate: bool) -> bool {
    let (want, animate) = self.parts();
    match gender {
      Some(Gender::Masculine) => want == Gender::Masculine && animate == is_animate,
      Some(g) => g == want,
      None => false,
    }
  }

  pub fn label(self) -> &'static str {
    let (gender, animate) = self.parts();
    gender_label(Some(gender), animate)
  }
}

/// Human-readable gender; animacy only matters for masculine.
pub fn gender_label(gender: Option<Gender>, is_animate: bool) -> &'static str {
  match gender {
    None => "",
    Some(Gender::Feminine) => "Feminine",
    Some(Gender::Neuter) => "Neuter",
    Some(Gender::Masculine) if is_animate => "Masculine - animate",
    Some(Gender::Masculine) => "Masculine - inanimate",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn slot_numbers_map_to_case_and_number() {
    let gen_pl = CaseSlot::new(9).unwrap();
    assert_eq!(gen_pl.case(), Case::Genitive);
    assert_eq!(gen_pl.number(), Number::Plural);
    assert_eq!(CaseSlot::from_parts(Case::Instrumental, Number::Singular).get(), 7);
    assert_eq!(CaseSlot::from_parts(Case::Instrumental, Number::Plural).get(), 14);
    assert!(CaseSlot::new(0).is_none());
    assert!(CaseSlot::new(15).is_none());
    assert_eq!(CaseSlot::try_from(0u8), Err(InvalidCaseSlot(0)));
    assert_eq!(CaseSlot::all().count(), 14);
  }

  #[test]
  fn names_and_prepositions() {
    assert_eq!(case_name(9), "Genitive (2.) – plural");
    assert_eq!(case_name(0), "");
    assert_eq!(case_name(42), "");
    assert_eq!(case_preposition(7), "s/se");
    assert_eq!(case_preposition(0), "");
    assert_eq!(CaseSlot::new(2).unwrap().to_string(), "Genitive (2.) – singular");
  }

  #[test]
  fn selectable_order_interleaves_numbers() {
    let order: Vec<u8> = selectable_slots(false).into_iter().map(CaseSlot::get).collect();
    assert_eq!(order, [8, 2, 9, 3, 10, 4, 11, 5, 12, 6, 13, 7, 14]);
    let with_nom: Vec<u8> = selectable_slots(true).into_iter().map(CaseSlot::get).collect();
    assert_eq!(with_nom.len(), 14);
    assert_eq!(with_nom[0], 1);
  }

  #[test]
  fn gender_filters_split_masculine_on_animacy() {
    use GenderFilter::*;
    assert!(MasculineAnimate.matches(Some(Gender::Masculine), true));
    assert!(!MasculineAnimate.matches(Some(Gender::Masculine), false));
    assert!(MasculineInanimate.matches(Some(Gender::Masculine), false));
    assert!(Feminine.matches(Some(Gender::Feminine), true), "animacy ignored outside masculine");
    assert!(!Neuter.matches(Some(Gender::Feminine), false));
    assert!(!Neuter.matches(None, false));
  }

  #[test]
  fn gender_labels() {
    assert_eq!(gender_label(None, true), "");
    assert_eq!(gender_label(Some(Gender::Masculine), false), "Masculine - inanimate");
    assert_eq!(GenderFilter::MasculineAnimate.label(), "Masculine - animate");
    assert_eq!(GenderFilter::Neuter.label(), "Neuter");
  }

  #[test]
  fn slots_serialize_as_numbers() {
    let json = serde_json::to_string(&CaseSlot::new(12).unwrap()).unwrap();
    assert_eq!(json, "12");
    assert!(serde_json::from_str::<CaseSlot>("0").is_err());
  }
}
