use weft_shared_tests::test_suite0;
use weft_shared_tests::utils::localized_input;


#[test]
fn suites() {
    test_suite0(&localized_input());
}
