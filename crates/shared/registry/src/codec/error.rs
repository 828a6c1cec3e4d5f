use canon_derive::canon_error;
use std::borrow::Cow;

#[canon_error]
pub enum DecodeError {
    #[error("Unrecognized representation `{input}` for `{set}`{}", format_context(.context))]
    UnrecognizedRepresentation {
        set: Cow<'static, str>,
        input: String,
        context: Option<Cow<'static, str>>,
    },
}

impl DecodeError {
    #[must_use]
    pub fn set_name(&self) -> &str {
        match self {
            Self::UnrecognizedRepresentation { set, .. } => set,
        }
    }

    /// The exact string that failed to decode.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::UnrecognizedRepresentation { input, .. } => input,
        }
    }
}
