//! # Header Module
//!
//! Detection and replacement of MIT-style license headers.
//!
//! Detection is two-staged: a cheap substring test for the MIT grant
//! language, then a structural regex match against the expected comment
//! block. Only the first matching block is replaced.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Phrase that marks a file as carrying an MIT-style license grant.
pub const MIT_SIGNATURE: &str = "Permission is hereby granted";

/// The proprietary notice written in place of the MIT header.
pub const PROPRIETARY_HEADER: &str = "/**
 * Copyright (c) 2025 Philip L. Giacalone. All Rights Reserved.
 *
 * This software and associated documentation files (the \"Software\") are the
 * proprietary and confidential property of Philip L. Giacalone.
 *
 * Unauthorized copying, modification, distribution, or use of this Software,
 * via any medium, is strictly prohibited and may be subject to civil and
 * criminal penalties.
 *
 * The Software is protected by copyright laws and international copyright
 * treaties, as well as other intellectual property laws and treaties.
 */";

/// Source of [`MIT_HEADER_PATTERN`].
///
/// Matches a `/**` block whose first line is the copyright line for the fixed
/// holder, followed by a bare ` *` line, any number of further comment lines
/// (lazily), and the closing `*/` plus the whitespace up to the last newline
/// before the code resumes.
pub const MIT_HEADER_PATTERN_SOURCE: &str =
  r"(?s)/\*\*\s*\n\s*\*\s*Copyright \(c\) \d{4} Philip L\. Giacalone\s*\n\s*\*\s*\n(\s*\*.*?\n)*?\s*\*/\s*\n";

/// Compiled structural pattern for the MIT header block.
pub static MIT_HEADER_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(MIT_HEADER_PATTERN_SOURCE).expect("MIT header regex must compile"));

/// Result of attempting to rewrite one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite<'a> {
  /// The header matched and was replaced.
  Replaced(Cow<'a, str>),
  /// The content does not contain the signature substring.
  NoSignature,
  /// The signature is present but no block has the expected shape.
  PatternMismatch,
}

/// Replaces MIT-style headers with a fixed replacement block.
#[derive(Debug, Clone)]
pub struct HeaderRewriter {
  signature: String,
  pattern: Regex,
  replacement: String,
}

impl HeaderRewriter {
  /// Creates a rewriter using the built-in signature, pattern and
  /// proprietary header.
  pub fn new() -> Self {
    Self::with_replacement(PROPRIETARY_HEADER)
  }

  /// Creates a rewriter with a custom replacement header.
  ///
  /// Trailing whitespace is trimmed from the text; the rewriter always
  /// appends exactly one blank line after the header.
  pub fn with_replacement(header: &str) -> Self {
    Self {
      signature: MIT_SIGNATURE.to_string(),
      pattern: MIT_HEADER_PATTERN.clone(),
      replacement: format!("{}\n\n", header.trim_end()),
    }
  }

  /// The text inserted in place of a matched header, including the trailing
  /// blank line.
  pub fn replacement(&self) -> &str {
    &self.replacement
  }

  /// Returns `true` if the content carries the MIT signature phrase.
  pub fn has_signature(&self, content: &str) -> bool {
    content.contains(&self.signature)
  }

  /// Replaces the first MIT header block in `content`.
  pub fn rewrite<'a>(&self, content: &'a str) -> Rewrite<'a> {
    if !self.has_signature(content) {
      return Rewrite::NoSignature;
    }

    let rewritten = self.pattern.replacen(content, 1, NoExpand(&self.replacement));
    match rewritten {
      Cow::Borrowed(_) => Rewrite::PatternMismatch,
      Cow::Owned(ref new_content) if new_content == content => Rewrite::PatternMismatch,
      Cow::Owned(_) => Rewrite::Replaced(rewritten),
    }
  }
}

impl Default for HeaderRewriter {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const MIT_HEADER: &str = "/**
 * Copyright (c) 2023 Philip L. Giacalone
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the \"Software\"), to deal
 * in the Software without restriction.
 *
 * THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND.
 */
";

  fn expected_with_body(body: &str) -> String {
    format!("{}\n\n{}", PROPRIETARY_HEADER, body)
  }

  #[test]
  fn test_replaces_mit_header() {
    let rewriter = HeaderRewriter::new();
    let content = format!("{}export const x = 1;\n", MIT_HEADER);

    match rewriter.rewrite(&content) {
      Rewrite::Replaced(new_content) => {
        assert_eq!(new_content, expected_with_body("export const x = 1;\n"));
      }
      other => panic!("expected replacement, got {:?}", other),
    }
  }

  #[test]
  fn test_blank_lines_after_header_collapse_to_one() {
    let rewriter = HeaderRewriter::new();
    let content = format!("{}\n\nimport React from 'react';\n", MIT_HEADER);

    let Rewrite::Replaced(new_content) = rewriter.rewrite(&content) else {
      panic!("expected replacement");
    };
    assert_eq!(new_content, expected_with_body("import React from 'react';\n"));
  }

  #[test]
  fn test_no_signature() {
    let rewriter = HeaderRewriter::new();
    let content = "/**\n * Just a doc comment\n */\nexport const y = 2;\n";
    assert_eq!(rewriter.rewrite(content), Rewrite::NoSignature);
  }

  #[test]
  fn test_signature_in_string_literal_only() {
    let rewriter = HeaderRewriter::new();
    let content = "const notice = \"Permission is hereby granted\";\nexport default notice;\n";
    assert!(rewriter.has_signature(content));
    assert_eq!(rewriter.rewrite(content), Rewrite::PatternMismatch);
  }

  #[test]
  fn test_only_first_header_replaced() {
    let rewriter = HeaderRewriter::new();
    let content = format!("{}const a = 1;\n{}const b = 2;\n", MIT_HEADER, MIT_HEADER);

    let Rewrite::Replaced(new_content) = rewriter.rewrite(&content) else {
      panic!("expected replacement");
    };
    let expected_tail = format!("const a = 1;\n{}const b = 2;\n", MIT_HEADER);
    assert_eq!(new_content, expected_with_body(&expected_tail));
  }

  #[test]
  fn test_header_not_at_file_start() {
    let rewriter = HeaderRewriter::new();
    let content = format!("'use strict';\n{}module.exports = {{}};\n", MIT_HEADER);

    let Rewrite::Replaced(new_content) = rewriter.rewrite(&content) else {
      panic!("expected replacement");
    };
    assert_eq!(
      new_content,
      format!("'use strict';\n{}\n\nmodule.exports = {{}};\n", PROPRIETARY_HEADER)
    );
  }

  #[test]
  fn test_any_four_digit_year_matches() {
    let rewriter = HeaderRewriter::new();
    let content = MIT_HEADER.replace("2023", "1999") + "let z;\n";
    assert!(matches!(rewriter.rewrite(&content), Rewrite::Replaced(_)));
  }

  #[test]
  fn test_rewritten_content_has_no_signature() {
    let rewriter = HeaderRewriter::new();
    let content = format!("{}export {{}};\n", MIT_HEADER);

    let Rewrite::Replaced(new_content) = rewriter.rewrite(&content) else {
      panic!("expected replacement");
    };
    assert!(!rewriter.has_signature(&new_content));
    assert_eq!(rewriter.rewrite(&new_content), Rewrite::NoSignature);
  }

  #[test]
  fn test_custom_replacement_is_trimmed() {
    let rewriter = HeaderRewriter::with_replacement("/* Proprietary */\n\n\n");
    assert_eq!(rewriter.replacement(), "/* Proprietary */\n\n");

    let content = format!("{}export {{}};\n", MIT_HEADER);
    let Rewrite::Replaced(new_content) = rewriter.rewrite(&content) else {
      panic!("expected replacement");
    };
    assert_eq!(new_content, "/* Proprietary */\n\nexport {};\n");
  }

  #[test]
  fn test_replacement_with_dollar_sign_is_literal() {
    let rewriter = HeaderRewriter::with_replacement("/* costs $1 and ${name} */");
    let content = format!("{}x();\n", MIT_HEADER);
    let Rewrite::Replaced(new_content) = rewriter.rewrite(&content) else {
      panic!("expected replacement");
    };
    assert!(new_content.starts_with("/* costs $1 and ${name} */\n\n"));
  }

  // Variants that carry the signature but deviate from the expected shape.
  // These stay untouched; the pattern is deliberately not widened.

  #[test]
  fn test_variant_different_holder_not_matched() {
    let rewriter = HeaderRewriter::new();
    let content = MIT_HEADER.replace("Philip L. Giacalone", "Someone Else") + "x();\n";
    assert_eq!(rewriter.rewrite(&content), Rewrite::PatternMismatch);
  }

  #[test]
  fn test_variant_single_star_opener_not_matched() {
    let rewriter = HeaderRewriter::new();
    let content = MIT_HEADER.replacen("/**", "/*", 1) + "x();\n";
    assert_eq!(rewriter.rewrite(&content), Rewrite::PatternMismatch);
  }

  #[test]
  fn test_variant_missing_blank_comment_line_not_matched() {
    let rewriter = HeaderRewriter::new();
    let content = "/**
 * Copyright (c) 2023 Philip L. Giacalone
 * Permission is hereby granted, free of charge.
 */
x();
";
    assert_eq!(rewriter.rewrite(content), Rewrite::PatternMismatch);
  }

  #[test]
  fn test_variant_uppercase_c_not_matched() {
    let rewriter = HeaderRewriter::new();
    let content = MIT_HEADER.replace("(c)", "(C)") + "x();\n";
    assert_eq!(rewriter.rewrite(&content), Rewrite::PatternMismatch);
  }

  #[test]
  fn test_variant_unterminated_comment_not_matched() {
    let rewriter = HeaderRewriter::new();
    let content = MIT_HEADER.replace(" */\n", "");
    assert_eq!(rewriter.rewrite(&content), Rewrite::PatternMismatch);
  }

  #[test]
  fn test_variant_crlf_line_endings_matched() {
    // `\s*` before each `\n` absorbs the carriage returns.
    let rewriter = HeaderRewriter::new();
    let content = MIT_HEADER.replace('\n', "\r\n") + "x();\r\n";
    let Rewrite::Replaced(new_content) = rewriter.rewrite(&content) else {
      panic!("expected replacement");
    };
    assert_eq!(new_content, expected_with_body("x();\r\n"));
  }
}
