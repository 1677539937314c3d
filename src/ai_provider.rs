use clap::ValueEnum;

/// Backend that answers generation and chat requests
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AiProvider {
    /// Gemini REST API (needs an API key)
    Gemini,
    /// `claude -p`
    Claude,
    /// `codex exec`
    Codex,
}

impl AiProvider {
    /// External command for CLI-backed providers
    pub fn command_name(&self) -> Option<&'static str> {
        match self {
            AiProvider::Gemini => None,
            AiProvider::Claude => Some("claude"),
            AiProvider::Codex => Some("codex"),
        }
    }
}
