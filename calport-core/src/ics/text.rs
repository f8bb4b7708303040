//! Text escaping and line handling for iCalendar content.
//!
//! RFC 5545 TEXT values escape backslash, semicolon, comma and newline.
//! Content lines longer than 75 octets are folded: fragments are joined
//! by a CRLF plus a single space, and unfolding strips the line break
//! together with that one leading space or tab.

/// Maximum octets per content line fragment before folding kicks in.
const FOLD_LIMIT: usize = 75;

/// Escape a text value for use in a property.
///
/// Each character is handled exactly once, so the backslashes introduced
/// for `;`, `,` and newline are never escaped a second time.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

/// Undo [`escape_text`] in a single left-to-right pass.
///
/// Every escape pair is consumed atomically: `\\` followed by `n` yields a
/// literal backslash and the letter, never a newline. `\n` and `\N` both
/// decode to a newline. Unknown pairs and a trailing lone backslash are
/// kept verbatim.
pub fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(';') => out.push(';'),
            Some(',') => out.push(','),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Fold a content line into fragments of at most 75 octets, joined by
/// CRLF plus a single space.
///
/// Splits stay on character boundaries, so a fragment comes up short when
/// a multi-byte character would straddle the limit.
pub fn fold_line(line: &str) -> String {
    if line.len() <= FOLD_LIMIT {
        return line.to_string();
    }

    let mut fragments: Vec<&str> = Vec::new();
    let mut rest = line;
    while rest.len() > FOLD_LIMIT {
        let mut split = FOLD_LIMIT;
        while !rest.is_char_boundary(split) {
            split -= 1;
        }
        let (head, tail) = rest.split_at(split);
        fragments.push(head);
        rest = tail;
    }
    fragments.push(rest);
    fragments.join("\r\n ")
}

/// Join folded continuation lines back into logical lines.
///
/// A line starting with a space or tab continues the previous line with
/// that single leading character removed. Both CRLF and bare LF input are
/// accepted; a continuation with nothing before it stands on its own.
pub fn logical_lines(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for raw in input.lines() {
        if let Some(rest) = raw.strip_prefix(' ').or_else(|| raw.strip_prefix('\t')) {
            match lines.last_mut() {
                Some(last) => last.push_str(rest),
                None => lines.push(rest.to_string()),
            }
        } else {
            lines.push(raw.to_string());
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_all_special_characters() {
        assert_eq!(escape_text("a;b,c\\d\ne"), "a\\;b\\,c\\\\d\\ne");
    }

    #[test]
    fn escape_does_not_double_escape() {
        // A literal backslash-n must not collapse into an escaped newline.
        assert_eq!(escape_text(r"\n"), r"\\n");
        assert_eq!(escape_text(r"\;"), r"\\\;");
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape_text("Quarterly review 2026"), "Quarterly review 2026");
    }

    #[test]
    fn unescape_inverts_escape() {
        let samples = [
            "plain text",
            "semi; colon",
            "comma, separated",
            "back\\slash",
            "multi\nline\ntext",
            "all; of, it\\ at\nonce",
        ];
        for s in samples {
            assert_eq!(unescape_text(&escape_text(s)), s, "failed for {s:?}");
        }
    }

    #[test]
    fn unescape_newline_is_case_insensitive() {
        assert_eq!(unescape_text(r"a\nb"), "a\nb");
        assert_eq!(unescape_text(r"a\Nb"), "a\nb");
    }

    #[test]
    fn unescape_consumes_pairs_atomically() {
        // Wire `\\n` is an escaped backslash followed by a plain `n`.
        assert_eq!(unescape_text(r"C:\\nested"), r"C:\nested");
        assert_eq!(unescape_text(r"\\\\"), r"\\");
    }

    #[test]
    fn unescape_preserves_unknown_pairs() {
        assert_eq!(unescape_text(r"five \x five"), r"five \x five");
        assert_eq!(unescape_text(r"dangling\"), r"dangling\");
    }

    #[test]
    fn short_lines_are_not_folded() {
        assert_eq!(fold_line("SUMMARY:Short"), "SUMMARY:Short");

        let exactly_75 = "a".repeat(75);
        assert_eq!(fold_line(&exactly_75), exactly_75);
    }

    #[test]
    fn long_lines_fold_into_bounded_fragments() {
        let line = "a".repeat(200);
        let folded = fold_line(&line);

        let fragments: Vec<&str> = folded.split("\r\n ").collect();
        assert_eq!(fragments.len(), 3);
        assert!(fragments.iter().all(|f| f.len() <= 75));
        assert_eq!(fragments.concat(), line);
    }

    #[test]
    fn folding_respects_character_boundaries() {
        // Two-octet characters cannot split at 75, so fragments stop at 74.
        let line = "é".repeat(60);
        let folded = fold_line(&line);

        let fragments: Vec<&str> = folded.split("\r\n ").collect();
        assert!(fragments.iter().all(|f| f.len() <= 75));
        assert_eq!(fragments[0].len(), 74);
        assert_eq!(fragments.concat(), line);
    }

    #[test]
    fn unfold_joins_space_and_tab_continuations() {
        let lines = logical_lines("SUMMARY:Hel\r\n lo\r\nDESCRIPTION:a\r\n\tb");
        assert_eq!(lines, vec!["SUMMARY:Hello", "DESCRIPTION:ab"]);
    }

    #[test]
    fn unfold_keeps_extra_leading_whitespace() {
        // Only the first space is part of the fold marker.
        let lines = logical_lines("SUMMARY:Hello\r\n  world");
        assert_eq!(lines, vec!["SUMMARY:Hello world"]);
    }

    #[test]
    fn unfold_accepts_bare_lf() {
        let lines = logical_lines("SUMMARY:Hel\n lo\nUID:1");
        assert_eq!(lines, vec!["SUMMARY:Hello", "UID:1"]);
    }

    #[test]
    fn fold_then_unfold_round_trips() {
        let line = format!("DESCRIPTION:{}", "word étude ".repeat(30));
        let folded = fold_line(&line);
        assert_eq!(logical_lines(&folded), vec![line]);
    }
}
