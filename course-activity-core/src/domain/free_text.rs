use super::validation::IssueKind;
use crate::traits::{EvaluationError, Outcome, Question, QuestionKind};
use regex::{Regex, RegexBuilder};
use std::fmt;

/// Answer pattern in `/source/flags` form, compiled once when loaded
///
/// Matching is unanchored: the pattern may match anywhere in the answer.
/// Flags `i`, `m` and `s` change matching. Without `u`, `\d`, `\w` and `\b`
/// only know ASCII. `g` and `d` are accepted and have no effect on a single
/// test. Look-around and backreferences are not available.
#[derive(Debug, Clone)]
pub struct AnswerPattern {
    source: String,
    flags: String,
    regex: Regex,
}

impl AnswerPattern {
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Result<Self, IssueKind> {
        let source = source.into();
        let flags = flags.into();

        let unicode = flags.contains('u');
        let mut builder = RegexBuilder::new(&to_regex_syntax(&source, unicode));
        let mut seen = Vec::with_capacity(flags.len());
        for flag in flags.chars() {
            if seen.contains(&flag) {
                return Err(IssueKind::RepeatedFlag { flag });
            }
            seen.push(flag);

            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'g' | 'u' | 'd' => {}
                other => return Err(IssueKind::UnsupportedFlag { flag: other }),
            }
        }

        let regex = builder.build().map_err(|e| IssueKind::InvalidPattern {
            pattern: source.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source,
            flags,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn is_match(&self, answer: &str) -> bool {
        self.regex.is_match(answer)
    }
}

impl PartialEq for AnswerPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for AnswerPattern {}

impl fmt::Display for AnswerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// Rewrite the parts of JS pattern syntax that `regex` reads differently
fn to_regex_syntax(source: &str, unicode: bool) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut in_class = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '\\' => {
                let Some(&next) = chars.get(i) else {
                    out.push('\\');
                    break;
                };
                i += 1;
                let ascii = match (next, in_class) {
                    ('b', true) => Some(r"\x08"),
                    _ if unicode => None,
                    ('d', false) => Some("[0-9]"),
                    ('D', false) => Some("[^0-9]"),
                    ('w', false) => Some("[0-9A-Za-z_]"),
                    ('W', false) => Some("[^0-9A-Za-z_]"),
                    ('b', false) => Some(r"(?-u:\b)"),
                    ('B', false) => Some(r"(?-u:\B)"),
                    ('d', true) => Some("[:digit:]"),
                    ('D', true) => Some("[:^digit:]"),
                    ('w', true) => Some("[:word:]"),
                    ('W', true) => Some("[:^word:]"),
                    _ => None,
                };
                match ascii {
                    Some(replacement) => out.push_str(replacement),
                    None => {
                        out.push('\\');
                        out.push(next);
                    }
                }
            }
            '[' if !in_class => match (chars.get(i), chars.get(i + 1)) {
                // `[]` never matches, `[^]` matches any character
                (Some(']'), _) => {
                    out.push_str(r"[^\s\S]");
                    i += 1;
                }
                (Some('^'), Some(']')) => {
                    out.push_str(r"[\s\S]");
                    i += 2;
                }
                _ => {
                    out.push('[');
                    in_class = true;
                    if chars.get(i) == Some(&'^') {
                        out.push('^');
                        i += 1;
                    }
                }
            },
            ']' if in_class => {
                out.push(']');
                in_class = false;
            }
            // Literal inside a JS class, set syntax inside a `regex` class
            '[' | '&' | '~' if in_class => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

/// Question answered by typing text that is checked against a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeTextQuestion {
    pattern: AnswerPattern,
    correct: String,
    incorrect: String,
    help: String,
}

impl FreeTextQuestion {
    pub fn new(
        pattern: AnswerPattern,
        correct: impl Into<String>,
        incorrect: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        Self {
            pattern,
            correct: correct.into(),
            incorrect: incorrect.into(),
            help: help.into(),
        }
    }

    pub fn pattern(&self) -> &AnswerPattern {
        &self.pattern
    }

    pub fn correct_feedback(&self) -> &str {
        &self.correct
    }

    pub fn incorrect_feedback(&self) -> &str {
        &self.incorrect
    }

    /// Shown when the student asks for the answer; independent of any submission
    pub fn help(&self) -> &str {
        &self.help
    }
}

impl Question for FreeTextQuestion {
    type Submission = str;

    fn kind(&self) -> QuestionKind {
        QuestionKind::FreeText
    }

    fn evaluate(&self, answer: &str) -> Result<Outcome<'_>, EvaluationError> {
        let outcome = if self.pattern.is_match(answer) {
            Outcome::new(true, &self.correct)
        } else {
            Outcome::new(false, &self.incorrect)
        };
        Ok(outcome)
    }
}
