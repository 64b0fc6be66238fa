/// Top-level menu entries, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    SendThankYou,
    CreateReport,
    WriteThankYous,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::SendThankYou,
        MenuChoice::CreateReport,
        MenuChoice::WriteThankYous,
        MenuChoice::Quit,
    ];

    /// The number typed to pick this entry.
    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::SendThankYou => "1",
            MenuChoice::CreateReport => "2",
            MenuChoice::WriteThankYous => "3",
            MenuChoice::Quit => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::SendThankYou => "Send a Thank You",
            MenuChoice::CreateReport => "Create a Report",
            MenuChoice::WriteThankYous => "Write Thank Yous",
            MenuChoice::Quit => "Quit",
        }
    }

    /// Match a typed selection. Anything unrecognized is `None`.
    pub fn parse(answer: &str) -> Option<Self> {
        let answer = answer.trim();
        Self::ALL.into_iter().find(|choice| choice.key() == answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keys() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::SendThankYou));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::CreateReport));
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::WriteThankYous));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Quit));
    }

    #[test]
    fn unknown_selection() {
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("quit"), None);
    }
}
