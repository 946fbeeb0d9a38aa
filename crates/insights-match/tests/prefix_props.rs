use proptest::prelude::*;

use insights_match::extract_zip_prefix;

proptest! {
    /// The extracted prefix is exactly the first maximal digit run.
    #[test]
    fn prefix_equals_first_digit_run(
        head in "[a-zA-Z /#-]{0,4}",
        run in "[0-9]{1,6}",
        tail in "([a-zA-Z-][0-9]{0,4})?",
    ) {
        let raw = format!("{head}{run}{tail}");
        prop_assert_eq!(extract_zip_prefix(&raw), Some(run));
    }

    /// Inputs without digits never produce a prefix.
    #[test]
    fn digitless_inputs_have_no_prefix(raw in "[a-zA-Z /#-]{0,12}") {
        prop_assert_eq!(extract_zip_prefix(&raw), None);
    }
}
