use {
    crate::error::Error,
    std::str::FromStr,
    strum_macros::{Display, EnumIter},
};

/// The three computations offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuChoice {
    #[strum(to_string = "Theoretical result")]
    Theoretical,
    #[strum(to_string = "Monte Carlo simulation")]
    Simulation,
    #[strum(to_string = "Event space display")]
    EventSpace,
}

impl MenuChoice {
    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::Theoretical => "1",
            MenuChoice::Simulation => "2",
            MenuChoice::EventSpace => "3",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Theoretical),
            "2" => Ok(MenuChoice::Simulation),
            "3" => Ok(MenuChoice::EventSpace),
            other => Err(Error::InvalidSelection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn keys_parse_back() {
        for choice in MenuChoice::iter() {
            assert_eq!(choice.key().parse::<MenuChoice>().unwrap(), choice);
        }
        assert_eq!(" 2\n".parse::<MenuChoice>().unwrap(), MenuChoice::Simulation);
    }

    #[test]
    fn anything_else_is_invalid() {
        for bad in ["", "0", "4", "one", "1 2"] {
            assert!(matches!(bad.parse::<MenuChoice>(), Err(Error::InvalidSelection(_))));
        }
    }
}
