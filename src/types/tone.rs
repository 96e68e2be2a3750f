/// Display tone for a status or outcome badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Neutral,
}

impl Tone {
    /// Marker used by the terminal renderer in front of a badge label.
    pub fn marker(&self) -> &'static str {
        match self {
            Tone::Info => "*",
            Tone::Success => "+",
            Tone::Warning => "!",
            Tone::Neutral => "-",
        }
    }
}
