mod grammar;
mod recovery;

use crate::parser::{Parse, parse};

impl Parse {
    #[track_caller]
    pub fn expect_valid(src: &str) -> Self {
        let parse = parse(src);
        if !parse.is_valid() {
            panic!(
                "Expected valid input, got error:\n{}",
                parse.diagnostics().render(src)
            );
        }
        parse
    }

    #[track_caller]
    pub fn expect_valid_cst(src: &str) -> String {
        Self::expect_valid(src).dump_cst()
    }

    #[track_caller]
    pub fn expect_valid_cst_full(src: &str) -> String {
        Self::expect_valid(src).dump_cst_full()
    }

    /// Plain diagnostics of input that must not parse cleanly.
    #[track_caller]
    pub fn expect_invalid(src: &str) -> String {
        let parse = parse(src);
        if parse.is_valid() {
            panic!("Expected invalid input, got valid:\n{}", parse.dump_cst());
        }
        parse.diagnostics().render_plain()
    }

    /// CST dump followed by plain diagnostics, for recovery tests.
    #[track_caller]
    pub fn expect_recovered(src: &str) -> String {
        let parse = parse(src);
        if parse.is_valid() {
            panic!("Expected invalid input, got valid:\n{}", parse.dump_cst());
        }
        format!(
            "{}---\n{}",
            parse.dump_cst(),
            parse.diagnostics().render_plain()
        )
    }
}
