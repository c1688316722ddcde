//! Solution diffing: split an inflected form into the part it shares with the
//! headword and the changed ending, so the ending can be emphasised on reveal.

use serde::Serialize;

/// Ending shown when the inflected form drops the headword's ending.
pub const ZERO_ENDING: &str = " + ø";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolutionWordParts {
  pub beginning: String,
  pub ending: String,
}

impl SolutionWordParts {
  fn split(solution: &str, at: usize) -> Self {
    Self { beginning: solution[..at].to_string(), ending: solution[at..].to_string() }
  }
}

/// Compare one word of the headword with one word of the solution.
///
/// Characters are compared left to right. If the solution runs out while the
/// headword still has characters left, the solution is a strict prefix and the
/// ending becomes [`ZERO_ENDING`]. Otherwise the solution splits at the first
/// mismatch.
pub fn word_diff(original: &str, solution: &str) -> SolutionWordParts {
  let mut sol = solution.char_indices();
  let mut split_at = 0;
  for o in original.chars() {
    match sol.next() {
      None => {
        return SolutionWordParts { beginning: solution.to_string(), ending: ZERO_ENDING.to_string() };
      }
      Some((i, c)) if c != o => return SolutionWordParts::split(solution, i),
      Some((i, c)) => split_at = i + c.len_utf8(),
    }
  }
  SolutionWordParts::split(solution, split_at)
}

/// Word-by-word diff of a multi-word headword. When the word counts differ no
/// alignment is possible and the whole solution comes back unhighlighted.
pub fn phrase_diff(original: &str, solution: &str) -> Vec<SolutionWordParts> {
  let original_words: Vec<&str> = original.split(' ').map(str::trim).collect();
  let solution_words: Vec<&str> = solution.split(' ').map(str::trim).collect();
  if original_words.len() != solution_words.len() {
    return vec![SolutionWordParts { beginning: solution.to_string(), ending: String::new() }];
  }
  original_words
    .iter()
    .zip(&solution_words)
    .map(|(o, s)| word_diff(o, s))
    .collect()
}

/// One phrase diff per accepted solution, in order.
pub fn all_solutions_diff(original: &str, solutions: &[String]) -> Vec<Vec<SolutionWordParts>> {
  solutions.iter().map(|s| phrase_diff(original, s)).collect()
}

/// Render diffs as text: words joined by a space, alternatives by " / ",
/// every ending wrapped in `open`/`close`.
pub fn highlight(diffs: &[Vec<SolutionWordParts>], open: &str, close: &str) -> String {
  diffs
    .iter()
    .map(|words| {
      words
        .iter()
        .map(|p| format!("{}{}{}{}", p.beginning, open, p.ending, close))
        .collect::<Vec<_>>()
        .join(" ")
    })
    .collect::<Vec<_>>()
    .join(" / ")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parts(beginning: &str, ending: &str) -> SolutionWordParts {
    SolutionWordParts { beginning: beginning.into(), ending: ending.into() }
  }

  #[test]
  fn splits_at_first_mismatch() {
    assert_eq!(word_diff("pes", "psa"), parts("p", "sa"));
    assert_eq!(word_diff("absolvent", "absolventovi"), parts("absolvent", "ovi"));
    assert_eq!(word_diff("kandelábr", "kandelábře"), parts("kandeláb", "ře"));
  }

  #[test]
  fn dropped_ending_uses_zero_marker() {
    assert_eq!(word_diff("auto", "aut"), parts("aut", ZERO_ENDING));
    assert_eq!(word_diff("jalovice", "jalovic"), parts("jalovic", " + ø"));
  }

  #[test]
  fn identity_and_empty_original() {
    assert_eq!(word_diff("město", "město"), parts("město", ""));
    assert_eq!(word_diff("", "psa"), parts("", "psa"));
  }

  #[test]
  fn beginning_and_ending_rebuild_the_solution() {
    let pairs = [
      ("pes", "psa"),
      ("auto", "aut"),
      ("žena", "ženou"),
      ("", "x"),
      ("kůň", "koně"),
      ("ř", ""),
      ("dítě", "děti"),
    ];
    for (original, solution) in pairs {
      let p = word_diff(original, solution);
      let ending = p.ending.strip_prefix(ZERO_ENDING).unwrap_or(&p.ending);
      assert_eq!(format!("{}{}", p.beginning, ending), solution, "{original} -> {solution}");
    }
  }

  #[test]
  fn phrases_diff_per_word_or_fall_back() {
    assert_eq!(
      phrase_diff("hlavní město", "hlavního města"),
      vec![parts("hlavní", "ho"), parts("měst", "a")]
    );
    assert_eq!(phrase_diff("hlavní město", "Praha"), vec![parts("Praha", "")]);
  }

  #[test]
  fn all_solutions_keep_order_and_highlight() {
    let solutions = vec!["absolventu".to_string(), "absolventovi".to_string()];
    let diffs = all_solutions_diff("absolvent", &solutions);
    assert_eq!(diffs, vec![vec![parts("absolvent", "u")], vec![parts("absolvent", "ovi")]]);
    assert_eq!(highlight(&diffs, "*", "*"), "absolvent*u* / absolvent*ovi*");
  }
}
