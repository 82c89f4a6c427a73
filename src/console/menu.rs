/// Menu choice parsing
///
/// Both applications share the same five-entry menu shape: four CRUD
/// actions plus Exit. Anything that is not exactly one of "1".."5" is an
/// invalid choice and the caller re-displays the menu.

/// One iteration's worth of user intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::ViewAll),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::ViewAll));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Update));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Delete));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        assert_eq!(MenuChoice::parse("  3 \n"), Some(MenuChoice::Update));
    }

    #[test]
    fn test_out_of_range_and_junk_are_rejected() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
        assert_eq!(MenuChoice::parse("two"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
