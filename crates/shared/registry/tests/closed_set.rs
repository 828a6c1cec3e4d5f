#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/closed_pass.rs");
}
