//! # Snipvault Preview Compiler
//!
//! Assembles a component's (or a draft's) markup/style/script fragments
//! into one self-contained HTML document for live preview.
//!
//! The compiler is a pure string transformation: no parsing, no
//! validation, never fails, cheap enough to run on every keystroke. The
//! fragments are arbitrary and unsanitized — callers must direct the
//! output into an isolated rendering surface (see [`sandbox_embed`]),
//! never into the hosting page.

use snipvault_common::Fragments;

/// Baseline reset prepended to every preview so user styles render against
/// a consistent canvas.
pub const BASE_STYLE: &str =
    "body { margin: 0; padding: 20px; font-family: system-ui; background: white; }";

/// Compile a fragment triple into a complete document string.
///
/// The style fragment lands verbatim in a `<style>` block after the
/// baseline reset, the markup fragment verbatim in the body, and the
/// script fragment verbatim inside a try/catch guard so a faulty script
/// logs to the preview surface's own console instead of blanking out the
/// rendered markup and style.
pub fn compile(fragments: &Fragments) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <style>\n\
         {base}\n\
         {style}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         {markup}\n\
         <script>\n\
         try {{\n\
         {script}\n\
         }} catch (e) {{\n\
         console.error('JS Error:', e);\n\
         }}\n\
         </script>\n\
         </body>\n\
         </html>\n",
        base = BASE_STYLE,
        style = fragments.style,
        markup = fragments.markup,
        script = fragments.script,
    )
}

/// Wrap a compiled document in a sandboxed iframe.
///
/// The iframe is the isolated rendering surface: `sandbox="allow-scripts"`
/// grants script execution but no ambient access to the hosting
/// application, so a runaway user script can hang only the frame.
pub fn sandbox_embed(document: &str) -> String {
    format!(
        "<iframe sandbox=\"allow-scripts\" srcdoc=\"{}\" \
         style=\"border: 0; width: 100%; height: 100%;\"></iframe>",
        escape_attribute(document)
    )
}

/// Entity-escape a string for use inside a double-quoted HTML attribute.
fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
