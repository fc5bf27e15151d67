/// Which per-line outputs a run should produce, read from an optional first
/// line of space-separated tokens drawn from `{PARSE, SAT}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    pub parse: bool,
    pub sat: bool,
}

impl DirectiveSet {
    /// Parses the directive line. An unrecognized token is logged and
    /// otherwise ignored, rather than failing the whole run — directives are
    /// advisory, not part of the formula grammar.
    pub fn parse(first_line: &str) -> Self {
        let mut directives = DirectiveSet::default();
        for token in first_line.split_whitespace() {
            match token {
                "PARSE" => directives.parse = true,
                "SAT" => directives.sat = true,
                other => log::warn!("unrecognized directive {other:?}, ignoring"),
            }
        }
        directives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_directives() {
        let directives = DirectiveSet::parse("PARSE SAT");
        assert!(directives.parse);
        assert!(directives.sat);
    }

    #[test]
    fn single_directive() {
        let directives = DirectiveSet::parse("SAT");
        assert!(!directives.parse);
        assert!(directives.sat);
    }

    #[test]
    fn empty_line_means_no_directives() {
        let directives = DirectiveSet::parse("");
        assert_eq!(directives, DirectiveSet::default());
    }

    #[test]
    fn unknown_token_is_ignored_not_fatal() {
        let directives = DirectiveSet::parse("PARSE FOO SAT");
        assert!(directives.parse);
        assert!(directives.sat);
    }
}
