#[test]
fn canon_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/canon_error_pass.rs");
    t.pass("tests/ui/canon_error_context.rs");
}
