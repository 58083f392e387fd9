//! # Snipvault Highlighter
//!
//! Best-effort display decoration for snippet source code. This is not a
//! lexer: each language has a short ordered rule table of regex patterns,
//! and matches become `<span class="syntax-…">` wrappers in the output.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ tokenize: rules → spans over original text  │
//! │  (nested spans allowed, overlaps dropped)   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: walk text once, entity-escape       │
//! │ literal runs, emit span tags at boundaries  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Because spans are byte ranges over the original text and escaping
//! happens only while rendering literal runs, the structural span markup
//! can never be corrupted by escaping, and inputs that already contain
//! entities (e.g. a literal `&lt;`) are escaped exactly once.
//!
//! Idempotence is NOT guaranteed: re-highlighting an already highlighted
//! string double-wraps. Always highlight from the original source.

mod rules;

use rules::{rules_for, SpanKind};

/// Language tag selecting the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// HTML fragments.
    Markup,
    /// CSS fragments.
    Style,
    /// JavaScript fragments.
    Script,
}

/// A decoration over a byte range of the original code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
    kind: SpanKind,
}

/// Decorate `code` for read-only display.
///
/// Never fails; text not claimed by any rule passes through with only
/// entity escaping applied. The output is display-safe: every `&`, `<`
/// and `>` of the original code appears as an entity.
pub fn highlight(code: &str, language: Language) -> String {
    let spans = collect_spans(code, language);
    render(code, &spans)
}

/// Apply the rule table in order, collecting non-conflicting spans.
///
/// A candidate is kept if, against every span already collected, it is
/// disjoint or strictly nested (either way around). Partial overlaps and
/// exact duplicates lose to the earlier rule.
fn collect_spans(code: &str, language: Language) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();

    for rule in rules_for(language) {
        for captures in rule.pattern.captures_iter(code) {
            let matched = match captures.get(rule.group) {
                Some(m) if !m.is_empty() => m,
                _ => continue,
            };
            let candidate = Span {
                start: matched.start(),
                end: matched.end(),
                kind: rule.kind,
            };
            if spans.iter().all(|existing| compatible(existing, &candidate)) {
                spans.push(candidate);
            }
        }
    }

    // Openers in document order; at equal starts the enclosing span first.
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    spans
}

fn compatible(existing: &Span, candidate: &Span) -> bool {
    if candidate.start == existing.start && candidate.end == existing.end {
        return false;
    }
    let disjoint = candidate.end <= existing.start || candidate.start >= existing.end;
    let nested = (candidate.start >= existing.start && candidate.end <= existing.end)
        || (existing.start >= candidate.start && existing.end <= candidate.end);

    disjoint || nested
}

/// Single pass over the original text. Span tags are emitted at range
/// boundaries; everything else is entity-escaped character by character.
fn render(code: &str, spans: &[Span]) -> String {
    let mut out = String::with_capacity(code.len() + spans.len() * 32);
    let mut open_ends: Vec<usize> = Vec::new();
    let mut next_span = 0;
    let mut pos = 0;

    loop {
        while open_ends.last() == Some(&pos) {
            out.push_str("</span>");
            open_ends.pop();
        }
        if pos >= code.len() {
            break;
        }
        while next_span < spans.len() && spans[next_span].start == pos {
            out.push_str("<span class=\"");
            out.push_str(spans[next_span].kind.css_class());
            out.push_str("\">");
            open_ends.push(spans[next_span].end);
            next_span += 1;
        }

        let Some(ch) = code[pos..].chars().next() else {
            break;
        };
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
        pos += ch.len_utf8();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_wraps_tags_and_class_values() {
        let out = highlight("<div class=\"a\">x</div>", Language::Markup);

        // Both angle-bracket runs are tag spans, entity-escaped inside.
        assert!(out.contains("<span class=\"syntax-tag\">&lt;div class="));
        assert!(out.contains("<span class=\"syntax-tag\">&lt;/div&gt;</span>"));
        // The class value nests inside the opening tag span.
        assert!(out.contains("<span class=\"syntax-selector\">a</span>"));
        // No raw angle brackets from the source survive outside span tags.
        let stripped = out.replace("<span class=\"syntax-tag\">", "")
            .replace("<span class=\"syntax-selector\">", "")
            .replace("</span>", "");
        assert!(!stripped.contains('<') && !stripped.contains('>'));
    }

    #[test]
    fn style_wraps_selectors_and_comments() {
        let out = highlight(".btn { color: red; } /* note */", Language::Style);

        assert!(out.contains("<span class=\"syntax-selector\">.btn</span>"));
        assert!(out.contains("<span class=\"syntax-comment\">/* note */</span>"));
    }

    #[test]
    fn style_wraps_id_selectors() {
        let out = highlight("#header { top: 0 }", Language::Style);
        assert!(out.contains("<span class=\"syntax-selector\">#header</span>"));
    }

    #[test]
    fn script_wraps_comments_and_keywords() {
        let out = highlight("// hi\nfunction f(){}", Language::Script);

        assert!(out.contains("<span class=\"syntax-comment\">// hi</span>"));
        assert!(out.contains("<span class=\"syntax-keyword\">function</span>"));
    }

    #[test]
    fn keyword_must_be_a_whole_word() {
        let out = highlight("iffy.forEach(functional)", Language::Script);
        assert!(!out.contains("syntax-keyword"));
    }

    #[test]
    fn literal_entities_escape_exactly_once() {
        // Code that already contains entity text must not double-escape.
        let out = highlight("a &lt; b", Language::Script);
        assert_eq!(out, "a &amp;lt; b");
    }

    #[test]
    fn unmatched_text_passes_through() {
        let out = highlight("plain text only", Language::Style);
        assert_eq!(out, "plain text only");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(highlight("", Language::Markup), "");
        assert_eq!(highlight("", Language::Style), "");
        assert_eq!(highlight("", Language::Script), "");
    }

    #[test]
    fn script_comment_claims_line_before_keywords() {
        // A keyword inside a line comment nests inside the comment span
        // rather than splitting it.
        let out = highlight("// const note", Language::Script);
        assert!(out.starts_with("<span class=\"syntax-comment\">"));
        assert!(out.ends_with("</span>"));
    }

    #[test]
    fn multiline_block_comment_is_one_span() {
        let out = highlight("/* a\n   b */ .x {}", Language::Style);
        assert!(out.contains("<span class=\"syntax-comment\">/* a\n   b */</span>"));
        assert!(out.contains("<span class=\"syntax-selector\">.x</span>"));
    }

    #[test]
    fn broken_markup_never_panics() {
        let out = highlight("<div <span class=\"", Language::Markup);
        assert!(!out.is_empty());
    }
}
