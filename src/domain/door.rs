use {
    crate::error::{Error, Result},
    rand::Rng,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// One of the three doors. Carries no identity beyond its label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Door {
    #[strum(to_string = "1")]
    One,
    #[strum(to_string = "2")]
    Two,
    #[strum(to_string = "3")]
    Three,
}

impl Door {
    pub const ALL: [Door; 3] = [Door::One, Door::Two, Door::Three];

    pub fn label(self) -> u8 {
        match self {
            Door::One => 1,
            Door::Two => 2,
            Door::Three => 3,
        }
    }

    /// Uniform draw from the three doors.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Door {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> u8 {
        door.label()
    }
}

impl TryFrom<u8> for Door {
    type Error = Error;

    fn try_from(label: u8) -> Result<Door> {
        match label {
            1 => Ok(Door::One),
            2 => Ok(Door::Two),
            3 => Ok(Door::Three),
            other => Err(Error::InvalidDoor(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use strum::IntoEnumIterator;
    use rand::rngs::SmallRng;

    #[test]
    fn labels_round_trip_and_reject_out_of_domain() {
        for door in Door::iter() {
            assert_eq!(Door::try_from(door.label()).unwrap(), door);
            assert_eq!(door.to_string(), door.label().to_string());
        }
        assert!(Door::try_from(0).is_err());
        assert!(Door::try_from(4).is_err());
    }

    #[test]
    fn random_hits_every_door() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[(Door::random(&mut rng).label() - 1) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }
}
