//! Statement scanner for target-definition text.
//!
//! The export file is a sequence of CMake-style command invocations. Only
//! two productions matter here:
//!
//! ```text
//! add_library( <subject> <link-type> ... )
//! set_target_properties( <subject> PROPERTIES <key> <value> ... )
//! ```
//!
//! The scanner walks the text once, recognizes those two verbs at word
//! boundaries, and captures each balanced parenthesized argument list as an
//! opaque `&str` slice. Nesting and double-quoted strings are tracked so a
//! `)` inside a quoted value or a nested generator expression never
//! terminates the capture early. Statements may span any number of lines.
//!
//! Anything else in the file (version guards, `foreach` loops, comments) is
//! skipped without being parsed.

/// Which of the two recognized statement shapes was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// `add_library(...)`: declares a library target and its link type
    DeclareLibrary,
    /// `set_target_properties(...)`: assigns interface properties
    SetProperties,
}

/// One recognized statement. Borrows the source text; exists only during a
/// single extraction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetStatement<'a> {
    /// Statement shape
    pub kind: StatementKind,
    /// Argument list body, parentheses excluded, whitespace preserved
    pub raw_args: &'a str,
}

const VERBS: [(&str, StatementKind); 2] = [
    ("add_library", StatementKind::DeclareLibrary),
    ("set_target_properties", StatementKind::SetProperties),
];

/// Iterator over the recognized statements of a source text, in textual
/// order.
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = TargetStatement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.src[self.pos..];

            // Earliest occurrence of either verb in the remaining text.
            let mut earliest: Option<(usize, StatementKind, usize)> = None;
            for (verb, kind) in VERBS {
                if let Some(off) = rest.find(verb) {
                    let at = self.pos + off;
                    if earliest.is_none_or(|(best, _, _)| at < best) {
                        earliest = Some((at, kind, verb.len()));
                    }
                }
            }
            let (start, kind, verb_len) = earliest?;
            self.pos = start + verb_len;

            if !word_boundary_before(self.src, start) || in_line_comment(self.src, start) {
                continue;
            }

            let bytes = self.src.as_bytes();
            let mut i = start + verb_len;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i >= bytes.len() || bytes[i] != b'(' {
                continue;
            }

            let args_start = i + 1;
            let Some(args_end) = closing_paren(self.src, args_start) else {
                // Unbalanced argument list runs to end of file; no further
                // complete statement can follow it.
                tracing::debug!(position = start, "unterminated argument list, stopping scan");
                self.pos = self.src.len();
                return None;
            };

            self.pos = args_end + 1;
            return Some(TargetStatement {
                kind,
                raw_args: &self.src[args_start..args_end],
            });
        }
    }
}

fn word_boundary_before(src: &str, idx: usize) -> bool {
    if idx == 0 {
        return true;
    }
    let prev = src.as_bytes()[idx - 1];
    !(prev.is_ascii_alphanumeric() || prev == b'_')
}

fn in_line_comment(src: &str, idx: usize) -> bool {
    let line_start = src[..idx].rfind('\n').map_or(0, |p| p + 1);
    src[line_start..idx].contains('#')
}

/// Index of the `)` closing the list that opened just before `from`,
/// accounting for nested parentheses, quoted strings, and comments.
fn closing_paren(src: &str, from: usize) -> Option<usize> {
    let bytes = src.as_bytes();
    let mut depth = 1usize;
    let mut in_quote = false;
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if in_quote => i += 1,
            b'"' => in_quote = !in_quote,
            b'(' if !in_quote => depth += 1,
            b')' if !in_quote => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            b'#' if !in_quote => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str) -> Vec<TargetStatement<'_>> {
        Scanner::new(src).collect()
    }

    #[test]
    fn test_single_statement() {
        let statements = scan("add_library(absl::base STATIC IMPORTED)");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].kind, StatementKind::DeclareLibrary);
        assert_eq!(statements[0].raw_args, "absl::base STATIC IMPORTED");
    }

    #[test]
    fn test_multiline_statement() {
        let src = "set_target_properties(absl::base PROPERTIES\n  INTERFACE_LINK_LIBRARIES \"absl::config\"\n)";
        let statements = scan(src);
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].kind, StatementKind::SetProperties);
        assert!(statements[0].raw_args.contains("INTERFACE_LINK_LIBRARIES"));
    }

    #[test]
    fn test_statements_in_textual_order() {
        let src = "\
set_target_properties(absl::a PROPERTIES X \"1\")
add_library(absl::b STATIC IMPORTED)
add_library(absl::c INTERFACE IMPORTED)
";
        let kinds: Vec<_> = scan(src).iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StatementKind::SetProperties,
                StatementKind::DeclareLibrary,
                StatementKind::DeclareLibrary
            ]
        );
    }

    #[test]
    fn test_paren_inside_quotes() {
        let src = r#"set_target_properties(t PROPERTIES DESC "closing ) inside" X "y")"#;
        let statements = scan(src);
        assert_eq!(statements.len(), 1);
        assert!(statements[0].raw_args.ends_with(r#"X "y""#));
    }

    #[test]
    fn test_nested_parens() {
        let src = "add_library(t STATIC $<IF:$<BOOL:(a)>,(b),(c)>)";
        let statements = scan(src);
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].raw_args, "t STATIC $<IF:$<BOOL:(a)>,(b),(c)>");
    }

    #[test]
    fn test_verb_in_comment_skipped() {
        let src = "# add_library(absl::ghost STATIC)\nadd_library(absl::real STATIC IMPORTED)\n";
        let statements = scan(src);
        assert_eq!(statements.len(), 1);
        assert!(statements[0].raw_args.starts_with("absl::real"));
    }

    #[test]
    fn test_word_boundary_respected() {
        let src = "my_add_library(absl::x STATIC)\nadd_library2(absl::y STATIC)\n";
        assert!(scan(src).is_empty());
    }

    #[test]
    fn test_verb_without_parens_skipped() {
        let src = "add_library\nadd_library(absl::z SHARED IMPORTED)";
        let statements = scan(src);
        assert_eq!(statements.len(), 1);
        assert!(statements[0].raw_args.starts_with("absl::z"));
    }

    #[test]
    fn test_unterminated_args_stop_scan() {
        let src = "add_library(absl::ok STATIC IMPORTED)\nadd_library(absl::broken STATIC";
        let statements = scan(src);
        assert_eq!(statements.len(), 1);
        assert!(statements[0].raw_args.starts_with("absl::ok"));
    }

    #[test]
    fn test_unrelated_commands_ignored() {
        let src = "\
if(NOT TARGET absl::base)
  message(FATAL_ERROR \"missing\")
endif()
foreach(_target absl::base)
endforeach()
";
        assert!(scan(src).is_empty());
    }
}
