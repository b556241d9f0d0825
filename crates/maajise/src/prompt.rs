//! Interactive questions asked during `init`.

use anyhow::{anyhow, Result};
use dialoguer::{Confirm, Input};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::IsTerminal;

pub trait Prompter {
  /// Whether questions can be answered at all
  fn is_interactive(&self) -> bool;

  /// Free-text answer; may be empty
  fn input(&self, label: &str) -> Result<String>;

  fn confirm(&self, label: &str, default: bool) -> Result<bool>;
}

/// Asks on the terminal through `dialoguer`
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
  fn is_interactive(&self) -> bool {
    std::io::stdin().is_terminal()
  }

  fn input(&self, label: &str) -> Result<String> {
    if !self.is_interactive() {
      return Err(anyhow!("cannot prompt for '{label}': stdin is not a terminal"));
    }
    let answer: String = Input::new().with_prompt(label).allow_empty(true).interact_text()?;
    Ok(answer)
  }

  fn confirm(&self, label: &str, default: bool) -> Result<bool> {
    if !self.is_interactive() {
      return Err(anyhow!("cannot prompt for '{label}': stdin is not a terminal"));
    }
    Ok(Confirm::new().with_prompt(label).default(default).interact()?)
  }
}

/// Replays canned answers in order; used where no terminal exists
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
  answers: RefCell<VecDeque<String>>,
  asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
  pub fn new<I, S>(answers: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
      asked: RefCell::new(Vec::new()),
    }
  }

  /// Labels of every question asked so far
  pub fn asked(&self) -> Vec<String> {
    self.asked.borrow().clone()
  }

  fn next(&self, label: &str) -> Result<String> {
    self.asked.borrow_mut().push(label.to_string());
    self.answers.borrow_mut().pop_front().ok_or_else(|| anyhow!("no scripted answer for '{label}'"))
  }
}

impl Prompter for ScriptedPrompter {
  fn is_interactive(&self) -> bool {
    !self.answers.borrow().is_empty()
  }

  fn input(&self, label: &str) -> Result<String> {
    self.next(label)
  }

  fn confirm(&self, label: &str, default: bool) -> Result<bool> {
    let answer = self.next(label)?;
    match answer.trim().to_lowercase().as_str() {
      "" => Ok(default),
      "y" | "yes" => Ok(true),
      _ => Ok(false),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_scripted_answers_in_order() {
    let prompter = ScriptedPrompter::new(["y", "https://github.com/u/r", ""]);
    assert!(prompter.is_interactive());
    assert!(prompter.confirm("Add git remote?", false).unwrap());
    assert_eq!(prompter.input("Remote URL").unwrap(), "https://github.com/u/r");
    assert!(prompter.confirm("Again?", true).unwrap());
    assert!(!prompter.is_interactive());
    assert!(prompter.input("More").is_err());
    assert_eq!(prompter.asked(), vec!["Add git remote?", "Remote URL", "Again?", "More"]);
  }

  #[test]
  fn test_scripted_confirm_only_yes_is_true() {
    let prompter = ScriptedPrompter::new(["N", "maybe", "YES"]);
    assert!(!prompter.confirm("q", true).unwrap());
    assert!(!prompter.confirm("q", true).unwrap());
    assert!(prompter.confirm("q", false).unwrap());
  }
}
