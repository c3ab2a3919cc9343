/// One recommendation action, regardless of which trigger produced it.
///
/// Every input modality resolves to a `Command` before dispatch, so the
/// action code never knows whether a blank line, a shortcut key, or a full
/// word fired it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Recommend,
    List,
    Quit,
}

impl Command {
    /// Maps one line of user input to a command, `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "" | "r" | "again" => Some(Self::Recommend),
            "l" | "list" => Some(Self::List),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}
