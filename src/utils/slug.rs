use std::sync::OnceLock;

use regex::Regex;
use unidecode::unidecode;

#[derive(Debug)]
pub struct Slug {
  pub lowercase: bool,
  pub trim: bool,
  pub max_length: Option<usize>,
}

impl Default for Slug {
  fn default() -> Self {
    Self { lowercase: true, trim: true, max_length: None }
  }
}

// Anything outside word characters, whitespace and hyphens is dropped
// outright rather than replaced, so "2.0" becomes "20", not "2-0".
fn strip_regex() -> &'static Regex {
  static RE_STRIP: OnceLock<Regex> = OnceLock::new();
  RE_STRIP.get_or_init(|| Regex::new(r"[^\w\s-]+").unwrap())
}

// Runs of whitespace, underscores and hyphens collapse to a single hyphen.
fn separators_regex() -> &'static Regex {
  static RE_SEPARATORS: OnceLock<Regex> = OnceLock::new();
  RE_SEPARATORS.get_or_init(|| Regex::new(r"[\s_-]+").unwrap())
}

impl Slug {
  /// Input: " Café Zelda 2.0: Special_Edition! "
  /// Steps:
  ///   unidecode: " Cafe Zelda 2.0: Special_Edition! "
  ///   Strip disallowed characters: " Cafe Zelda 20 Special_Edition "
  ///   Collapse separators: "-Cafe-Zelda-20-Special-Edition-"
  ///   Trim: "Cafe-Zelda-20-Special-Edition"
  ///   Lowercase: "cafe-zelda-20-special-edition"
  pub fn generate_slug(&self, input: &str) -> String {
    let mut slug = unidecode(input);

    slug = strip_regex().replace_all(&slug, "").to_string();
    slug = separators_regex().replace_all(&slug, "-").to_string();

    if self.trim {
      slug = slug.trim_matches('-').to_string();
    }

    if self.lowercase {
      slug = slug.to_lowercase();
    }

    if let Some(max) = self.max_length {
      if slug.len() > max {
        slug = slug.chars().take(max).collect();
      }
    }

    // Final trim, the length cut can leave a trailing hyphen
    if self.trim {
      slug = slug.trim_matches('-').to_string();
    }
    slug
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_slug() {
    let slug = Slug::default();
    assert_eq!(slug.generate_slug("My _Fancy_ Product!"), "my-fancy-product");
  }

  #[test]
  fn test_unicode_chars() {
    let slug = Slug::default();
    assert_eq!(slug.generate_slug("Café au Lait"), "cafe-au-lait");
  }

  #[test]
  fn test_mixed_case() {
    let slug = Slug::default();
    assert_eq!(slug.generate_slug("MixED CaSe"), "mixed-case");
  }

  #[test]
  fn test_numbers() {
    let slug = Slug::default();
    assert_eq!(slug.generate_slug("Product 2023 v2"), "product-2023-v2");
  }

  #[test]
  fn test_special_chars_are_dropped() {
    let slug = Slug::default();
    assert_eq!(slug.generate_slug("Hello@World#123"), "helloworld123");
  }

  #[test]
  fn test_leading_trailing_special() {
    let slug = Slug::default();
    assert_eq!(slug.generate_slug("!!Hello World!!"), "hello-world");
  }

  #[test]
  fn test_multiple_hyphens() {
    let slug = Slug::default();
    assert_eq!(slug.generate_slug("Hello---World"), "hello-world");
  }

  #[test]
  fn test_empty_string() {
    let slug = Slug::default();
    assert_eq!(slug.generate_slug(""), "");
  }

  #[test]
  fn test_whitespace_only() {
    let slug = Slug::default();
    assert_eq!(slug.generate_slug("   "), "");
  }

  #[test]
  fn test_symbols_only_produce_empty_slug() {
    let slug = Slug::default();
    assert_eq!(slug.generate_slug("!!!"), "");
  }

  #[test]
  fn test_stable_on_own_output() {
    let slug = Slug::default();
    let once = slug.generate_slug("Red Shirt");
    assert_eq!(once, "red-shirt");
    assert_eq!(slug.generate_slug(&once), once);
  }

  #[test]
  fn test_max_length_trims_cut_hyphen() {
    let slug = Slug { max_length: Some(10), ..Slug::default() };
    assert_eq!(slug.generate_slug("Very Long Product Name"), "very-long");
  }
}
