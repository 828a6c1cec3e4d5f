use canon_derive::canon_error;
use std::borrow::Cow;

#[canon_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

fn open() -> Result<(), DemoError> {
    let io: Result<(), std::io::Error> = Err(std::io::Error::other("disk"));
    io.context("Opening the catalog")?;
    Ok(())
}

fn main() {
    let err = open().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Opening the catalog): disk");
}
