//! Per-language rule tables.
//!
//! Each table is an ordered list of (pattern, span kind) pairs; earlier
//! rules win conflicts. The tables are deliberately tiny — this is
//! display decoration, not lexing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Language;

/// What a matched range renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpanKind {
    Tag,
    Selector,
    Comment,
    Keyword,
}

impl SpanKind {
    pub(crate) fn css_class(self) -> &'static str {
        match self {
            SpanKind::Tag => "syntax-tag",
            SpanKind::Selector => "syntax-selector",
            SpanKind::Comment => "syntax-comment",
            SpanKind::Keyword => "syntax-keyword",
        }
    }
}

pub(crate) struct Rule {
    pub pattern: Regex,
    pub kind: SpanKind,
    /// Capture group whose range becomes the span (0 = whole match).
    pub group: usize,
}

impl Rule {
    fn new(pattern: &str, kind: SpanKind) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("rule pattern is valid"),
            kind,
            group: 0,
        }
    }

    fn group(pattern: &str, group: usize, kind: SpanKind) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("rule pattern is valid"),
            kind,
            group,
        }
    }
}

static MARKUP_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Tag-open and tag-close angle-bracket runs.
        Rule::new(r"<[^<>]*>", SpanKind::Tag),
        // The value of a class attribute, nested inside the tag span.
        Rule::group(r#"class="([^"]*)""#, 1, SpanKind::Selector),
    ]
});

static STYLE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Class/id selector tokens. Also matches hex colors; accepted
        // approximation inherited from the rule-chain design.
        Rule::new(r"[.#][A-Za-z0-9_-]+", SpanKind::Selector),
        Rule::new(r"(?s)/\*.*?\*/", SpanKind::Comment),
    ]
});

static SCRIPT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(r"//[^\n]*", SpanKind::Comment),
        Rule::new(
            r"\b(?:function|const|let|var|if|else|for|while)\b",
            SpanKind::Keyword,
        ),
    ]
});

pub(crate) fn rules_for(language: Language) -> &'static [Rule] {
    match language {
        Language::Markup => &MARKUP_RULES,
        Language::Style => &STYLE_RULES,
        Language::Script => &SCRIPT_RULES,
    }
}
