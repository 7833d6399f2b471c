//! Predicates that decide whether a reported window belongs to a request.
//!
//! Titles are free text, so every matcher is fuzzy to some degree. The
//! coordinator only sees the [`Matcher`] trait; new strategies plug in
//! without touching the polling loop.

use std::fmt;

use regex::Regex;
use stagehand_ipc::Client;

/// Which window property a matcher inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Title,
    Class,
    Any,
}

pub trait Matcher: fmt::Debug {
    fn matches(&self, client: &Client) -> bool;

    /// The pattern text, for logs and overlap detection.
    fn pattern(&self) -> &str;

    fn field(&self) -> MatchField;
}

/// Two matchers could claim the same window: same field and one pattern
/// contains the other.
pub fn overlapping(a: &dyn Matcher, b: &dyn Matcher) -> bool {
    let fields_meet = a.field() == b.field()
        || a.field() == MatchField::Any
        || b.field() == MatchField::Any;
    fields_meet && (a.pattern().contains(b.pattern()) || b.pattern().contains(a.pattern()))
}

/// Substring of the current or initial title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleContains(pub String);

impl Matcher for TitleContains {
    fn matches(&self, client: &Client) -> bool {
        client.title_contains(&self.0)
    }

    fn pattern(&self) -> &str {
        &self.0
    }

    fn field(&self) -> MatchField {
        MatchField::Title
    }
}

/// Substring of the current or initial class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassContains(pub String);

impl Matcher for ClassContains {
    fn matches(&self, client: &Client) -> bool {
        client.class_contains(&self.0)
    }

    fn pattern(&self) -> &str {
        &self.0
    }

    fn field(&self) -> MatchField {
        MatchField::Class
    }
}

/// Current or initial title equals the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleExact(pub String);

impl Matcher for TitleExact {
    fn matches(&self, client: &Client) -> bool {
        client.title == self.0 || client.initial_title == self.0
    }

    fn pattern(&self) -> &str {
        &self.0
    }

    fn field(&self) -> MatchField {
        MatchField::Title
    }
}

/// Regular expression over the current or initial title.
#[derive(Debug, Clone)]
pub struct TitleRegex(pub Regex);

impl TitleRegex {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }
}

impl Matcher for TitleRegex {
    fn matches(&self, client: &Client) -> bool {
        self.0.is_match(&client.title) || self.0.is_match(&client.initial_title)
    }

    fn pattern(&self) -> &str {
        self.0.as_str()
    }

    fn field(&self) -> MatchField {
        MatchField::Title
    }
}

/// Substring of title, initial title or class. Used to sweep orphans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyFieldContains(pub String);

impl Matcher for AnyFieldContains {
    fn matches(&self, client: &Client) -> bool {
        client.title_contains(&self.0) || client.class_contains(&self.0)
    }

    fn pattern(&self) -> &str {
        &self.0
    }

    fn field(&self) -> MatchField {
        MatchField::Any
    }
}
