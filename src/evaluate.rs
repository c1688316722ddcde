//! Answer evaluation: literal comparison after trimming and Unicode lowercasing.
//! Diacritics are significant; there is no fuzzy matching.

/// Trim surrounding whitespace and lowercase. `str::to_lowercase` is
/// locale-independent and keeps accents (`Č` → `č`).
pub fn normalize(s: &str) -> String {
  s.trim().to_lowercase()
}

/// True iff the normalised guess equals at least one normalised solution.
pub fn is_correct(guess: &str, solutions: &[String]) -> bool {
  let guess = normalize(guess);
  solutions.iter().any(|s| normalize(s) == guess)
}
