/// Asserts that an expression matches a pattern, optionally guarded by a
/// predicate over the bindings of the pattern.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables)]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[derive(Debug)]
    enum Banner {
        Hidden,
        Visible(&'static str),
    }

    #[test]
    fn matches_pattern() {
        assert_matches!(Banner::Hidden, Banner::Hidden);
        assert_matches!(Banner::Visible("ok"), Banner::Visible(text) if *text == "ok");
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn rejects_other_variant() {
        assert_matches!(Banner::Visible("ok"), Banner::Hidden);
    }

    #[test]
    #[should_panic(expected = "does not match predicate")]
    fn rejects_failed_predicate() {
        assert_matches!(Banner::Visible("ok"), Banner::Visible(text) if text.is_empty());
    }
}
