//! Built-in seed words that keep the practice usable when no dictionary
//! asset is configured or it fails to load.

use crate::dictionary::WordDatabase;
use crate::domain::{CaseForms, Gender, WordEntry};

fn forms(singular: &[&str], plural: &[&str]) -> Option<CaseForms> {
  Some(CaseForms {
    singular: singular.iter().map(|s| s.to_string()).collect(),
    plural: plural.iter().map(|s| s.to_string()).collect(),
  })
}

// Seven (singular, plural) pairs in case order.
type Paradigm<'a> = [(&'a [&'a str], &'a [&'a str]); 7];

fn entry(gender: Gender, is_animate: bool, p: Paradigm<'_>) -> WordEntry {
  WordEntry {
    gender: Some(gender),
    is_animate,
    nominative: forms(p[0].0, p[0].1),
    genitive: forms(p[1].0, p[1].1),
    dative: forms(p[2].0, p[2].1),
    accusative: forms(p[3].0, p[3].1),
    vocative: forms(p[4].0, p[4].1),
    locative: forms(p[5].0, p[5].1),
    instrumental: forms(p[6].0, p[6].1),
  }
}

/// A handful of nouns covering every gender category, multiple accepted
/// forms, a singular-only word, a word with no declension and a null entry.
pub fn seed_dictionary() -> WordDatabase {
  let words = vec![
    ("pes".to_string(), Some(entry(Gender::Masculine, true, [
      (&["pes"], &["psi", "psové"]),
      (&["psa"], &["psů"]),
      (&["psovi", "psu"], &["psům"]),
      (&["psa"], &["psy"]),
      (&["pse"], &["psi", "psové"]),
      (&["psovi", "psu"], &["psech"]),
      (&["psem"], &["psy"]),
    ]))),
    ("absolvent".to_string(), Some(entry(Gender::Masculine, true, [
      (&["absolvent"], &["absolventi"]),
      (&["absolventa"], &["absolventů"]),
      (&["absolventu", "absolventovi"], &["absolventům"]),
      (&["absolventa"], &["absolventy"]),
      (&["absolvente"], &["absolventi"]),
      (&["absolventu", "absolventovi"], &["absolventech"]),
      (&["absolventem"], &["absolventy"]),
    ]))),
    ("kandelábr".to_string(), Some(entry(Gender::Masculine, false, [
      (&["kandelábr"], &["kandelábry"]),
      (&["kandelábru"], &["kandelábrů"]),
      (&["kandelábru"], &["kandelábrům"]),
      (&["kandelábr"], &["kandelábry"]),
      (&["kandelábre", "kandelábře"], &["kandelábry"]),
      (&["kandelábru"], &["kandelábrech"]),
      (&["kandelábrem"], &["kandelábry"]),
    ]))),
    ("Ahaggar".to_string(), Some(entry(Gender::Masculine, false, [
      (&["Ahaggar"], &[]),
      (&["Ahaggaru"], &[]),
      (&["Ahaggaru"], &[]),
      (&["Ahaggar"], &[]),
      (&["Ahaggare"], &[]),
      (&["Ahaggaru"], &[]),
      (&["Ahaggarem"], &[]),
    ]))),
    ("jalovice".to_string(), Some(entry(Gender::Feminine, false, [
      (&["jalovice"], &["jalovice"]),
      (&["jalovice"], &["jalovic"]),
      (&["jalovici"], &["jalovicím"]),
      (&["jalovici"], &["jalovice"]),
      (&["jalovice"], &["jalovice"]),
      (&["jalovici"], &["jalovicích"]),
      (&["jalovicí"], &["jalovicemi"]),
    ]))),
    ("město".to_string(), Some(entry(Gender::Neuter, false, [
      (&["město"], &["města"]),
      (&["města"], &["měst"]),
      (&["městu"], &["městům"]),
      (&["město"], &["města"]),
      (&["město"], &["města"]),
      (&["městě", "městu"], &["městech"]),
      (&["městem"], &["městy"]),
    ]))),
    ("aha".to_string(), Some(entry(Gender::Neuter, false, [
      (&["aha"], &[]),
      (&[], &[]),
      (&[], &[]),
      (&[], &[]),
      (&[], &[]),
      (&[], &[]),
      (&[], &[]),
    ]))),
    ("naplat".to_string(), None),
  ];
  WordDatabase::from_entries(words)
}
