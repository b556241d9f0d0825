//! Input checks applied before user text reaches a subprocess argument list.
//!
//! Remote URLs are checked against a fixed scheme allow-list plus a shell
//! metacharacter denylist. Free-form prompt answers (names, emails) go
//! through [`sanitize_input`]. Project names become directory names and are
//! limited to a conservative character set.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Maximum accepted length of a git remote URL, in bytes
pub const MAX_URL_LENGTH: usize = 2048;

/// Characters with special meaning to a shell
pub const SHELL_METACHARS: [char; 13] =
  [';', '&', '|', '$', '`', '\n', '\r', '<', '>', '(', ')', '{', '}'];

/// Accepted remote URL prefixes, matched case-sensitively
pub const ALLOWED_URL_PREFIXES: [&str; 3] = ["https://", "git@", "ssh://"];

/// Maximum length of a git user name or email typed at a prompt or flag
pub const MAX_USER_INPUT_LENGTH: usize = 256;

static PROJECT_NAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("project name pattern is valid"));

/// Why a remote URL was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlRejection {
  #[error("URL cannot be empty")]
  Empty,

  #[error("URL exceeds maximum length of {} characters", MAX_URL_LENGTH)]
  TooLong,

  #[error("URL contains shell metacharacters")]
  ForbiddenCharacters,

  #[error("invalid git URL format; must start with https://, git@, or ssh://")]
  InvalidScheme,
}

/// Why a prompt answer was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRejection {
  #[error("input cannot be empty or whitespace only")]
  EmptyAfterTrim,

  #[error("input exceeds maximum length of {max} characters")]
  TooLong { max: usize },

  #[error("multiline input not allowed")]
  Multiline,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectNameError {
  #[error("project name cannot be empty")]
  Empty,

  #[error("invalid project name '{0}': use only letters, digits, '-' and '_'")]
  InvalidCharacters(String),
}

/// Accept names made of ASCII letters, digits, `-` and `_`
pub fn validate_project_name(name: &str) -> Result<(), ProjectNameError> {
  if name.is_empty() {
    return Err(ProjectNameError::Empty);
  }
  if !PROJECT_NAME.is_match(name) {
    return Err(ProjectNameError::InvalidCharacters(name.to_string()));
  }
  Ok(())
}

/// Loose email shape check: an `@` and a `.` somewhere
pub fn is_plausible_email(email: &str) -> bool {
  email.contains('@') && email.contains('.')
}

/// Check that `url` is safe to hand to `git remote add` as a single argument.
///
/// Checks run in a fixed order and the first failure is reported: empty,
/// length, metacharacters, scheme. The accepted URL is returned unchanged.
pub fn validate_git_url(url: &str) -> Result<&str, UrlRejection> {
  if url.is_empty() {
    return Err(UrlRejection::Empty);
  }

  if url.len() > MAX_URL_LENGTH {
    return Err(UrlRejection::TooLong);
  }

  if contains_shell_metachars(url) {
    return Err(UrlRejection::ForbiddenCharacters);
  }

  if !ALLOWED_URL_PREFIXES.iter().any(|prefix| url.starts_with(prefix)) {
    return Err(UrlRejection::InvalidScheme);
  }

  Ok(url)
}

/// Trim surrounding whitespace and enforce a non-empty, single-line value of
/// at most `max_len` bytes.
pub fn sanitize_input(input: &str, max_len: usize) -> Result<String, InputRejection> {
  let sanitized = input.trim();

  if sanitized.is_empty() {
    return Err(InputRejection::EmptyAfterTrim);
  }

  if sanitized.len() > max_len {
    return Err(InputRejection::TooLong { max: max_len });
  }

  if sanitized.contains('\n') {
    return Err(InputRejection::Multiline);
  }

  Ok(sanitized.to_string())
}

/// True when any character of [`SHELL_METACHARS`] occurs in `s`
pub fn contains_shell_metachars(s: &str) -> bool {
  s.chars().any(|c| SHELL_METACHARS.contains(&c))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_accepts_allowed_schemes() {
    let urls = [
      "https://github.com/user/repo.git",
      "git@github.com:user/repo.git",
      "ssh://git@github.com/user/repo.git",
      "https://gitlab.com/group/sub/repo",
    ];
    for url in urls {
      assert_eq!(validate_git_url(url), Ok(url), "{url}");
    }
  }

  #[test]
  fn test_accepted_url_is_unchanged_and_revalidates() {
    let url = "https://github.com/user/repo.git";
    let accepted = validate_git_url(url).unwrap();
    assert_eq!(accepted, url);
    assert_eq!(validate_git_url(accepted), Ok(url));
  }

  #[test]
  fn test_no_trimming_or_normalization() {
    // leading whitespace means the prefix does not match
    assert_eq!(validate_git_url(" https://github.com/u/r.git"), Err(UrlRejection::InvalidScheme));
    let trailing = "https://github.com/u/r.git ";
    assert_eq!(validate_git_url(trailing), Ok(trailing));
  }

  #[test]
  fn test_rejects_empty() {
    assert_eq!(validate_git_url(""), Err(UrlRejection::Empty));
  }

  #[test]
  fn test_rejects_command_injection() {
    assert_eq!(
      validate_git_url("https://github.com/user/repo.git; rm -rf /"),
      Err(UrlRejection::ForbiddenCharacters)
    );
    assert_eq!(
      validate_git_url("https://github.com/test/`whoami`.git"),
      Err(UrlRejection::ForbiddenCharacters)
    );
    assert_eq!(
      validate_git_url("https://github.com/test/repo.git | cat /etc/passwd"),
      Err(UrlRejection::ForbiddenCharacters)
    );
  }

  #[test]
  fn test_every_metachar_detected_at_every_position() {
    let base = "https://example.com/repo.git";
    for c in SHELL_METACHARS {
      let at_start = format!("{c}{base}");
      let in_middle = format!("https://example.com/{c}/repo.git");
      let at_end = format!("{base}{c}");
      for candidate in [&at_start, &in_middle, &at_end] {
        assert!(contains_shell_metachars(candidate), "{candidate:?}");
        assert_eq!(
          validate_git_url(candidate),
          Err(UrlRejection::ForbiddenCharacters),
          "{candidate:?}"
        );
      }
    }
  }

  #[test]
  fn test_single_metachar_string() {
    for c in SHELL_METACHARS {
      assert_eq!(validate_git_url(&c.to_string()), Err(UrlRejection::ForbiddenCharacters));
    }
  }

  #[test]
  fn test_rejects_unknown_scheme() {
    let urls = [
      "ftp://example.com/repo.git",
      "http://github.com/user/repo.git",
      "file:///tmp/repo",
      "not-a-url",
      "github.com/user/repo",
      "HTTPS://github.com/user/repo.git",
      "Git@github.com:user/repo.git",
    ];
    for url in urls {
      assert_eq!(validate_git_url(url), Err(UrlRejection::InvalidScheme), "{url}");
    }
  }

  #[test]
  fn test_length_limit_boundary() {
    let prefix = "https://example.com/";
    let at_limit = format!("{prefix}{}", "a".repeat(MAX_URL_LENGTH - prefix.len()));
    assert_eq!(at_limit.len(), MAX_URL_LENGTH);
    assert!(validate_git_url(&at_limit).is_ok());

    let over_limit = format!("{at_limit}a");
    assert_eq!(validate_git_url(&over_limit), Err(UrlRejection::TooLong));
  }

  #[test]
  fn test_rejection_precedence() {
    // too long wins over metacharacters and scheme
    let long_and_dirty = format!("ftp://{};", "a".repeat(MAX_URL_LENGTH));
    assert_eq!(validate_git_url(&long_and_dirty), Err(UrlRejection::TooLong));

    // metacharacters win over scheme
    assert_eq!(validate_git_url("ftp://host/$(id)"), Err(UrlRejection::ForbiddenCharacters));

    // a lone newline is forbidden, not a bad scheme
    assert_eq!(validate_git_url("\n"), Err(UrlRejection::ForbiddenCharacters));
  }

  #[test]
  fn test_rejection_messages() {
    assert_eq!(UrlRejection::Empty.to_string(), "URL cannot be empty");
    assert!(UrlRejection::TooLong.to_string().contains("2048"));
    assert!(UrlRejection::InvalidScheme.to_string().contains("https://"));
  }

  #[test]
  fn test_sanitize_trims() {
    assert_eq!(sanitize_input("  hello  ", 100), Ok("hello".to_string()));
    assert_eq!(sanitize_input("\tJane Doe\n", 100), Ok("Jane Doe".to_string()));
  }

  #[test]
  fn test_sanitize_round_trip() {
    for s in ["hello", "Jane Doe", "jane@example.com", "a"] {
      assert_eq!(sanitize_input(s, 100), Ok(s.to_string()));
    }
    assert_eq!(sanitize_input("abc", 3), Ok("abc".to_string()));
  }

  #[test]
  fn test_sanitize_rejects_empty() {
    assert_eq!(sanitize_input("", 100), Err(InputRejection::EmptyAfterTrim));
    assert_eq!(sanitize_input("   \t\n ", 100), Err(InputRejection::EmptyAfterTrim));
  }

  #[test]
  fn test_sanitize_rejects_too_long() {
    assert_eq!(sanitize_input("abcd", 3), Err(InputRejection::TooLong { max: 3 }));
    // length is checked after trimming
    assert_eq!(sanitize_input("  abc  ", 3), Ok("abc".to_string()));
  }

  #[test]
  fn test_sanitize_rejects_multiline() {
    assert_eq!(sanitize_input("hello\nworld", 100), Err(InputRejection::Multiline));
  }

  #[test]
  fn test_project_names() {
    for name in ["my-project", "my_project", "Project123", "a", "ABC-def_9"] {
      assert_eq!(validate_project_name(name), Ok(()), "{name}");
    }
    assert_eq!(validate_project_name(""), Err(ProjectNameError::Empty));
    for name in ["my project", "../escape", "a/b", "name.ext", "naïve", "x;rm"] {
      assert!(
        matches!(validate_project_name(name), Err(ProjectNameError::InvalidCharacters(_))),
        "{name}"
      );
    }
  }

  #[test]
  fn test_plausible_email() {
    assert!(is_plausible_email("user@example.com"));
    assert!(!is_plausible_email("user@localhost"));
    assert!(!is_plausible_email("user.example.com"));
  }
}
