use {
    super::Door,
    crate::utils::Fraction,
    serde::Serialize,
    std::fmt,
    strum_macros::Display,
};

/// Leaf weight when the first pick already hides the prize.
pub const CORRECT_PICK_LEAF: Fraction = Fraction::from_parts(1, 9);
/// Leaf weight when the first pick misses.
pub const WRONG_PICK_LEAF: Fraction = Fraction::from_parts(1, 18);

/// One branch of the decision tree. Orders lexicographically on
/// (prize, initial_choice, final_choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Outcome {
    pub prize: Door,
    pub initial_choice: Door,
    pub final_choice: Door,
}

impl Outcome {
    pub fn new(prize: Door, initial_choice: Door, final_choice: Door) -> Self {
        Self {
            prize,
            initial_choice,
            final_choice,
        }
    }

    pub fn is_switch(&self) -> bool {
        self.initial_choice != self.final_choice
    }

    pub fn first_pick_correct(&self) -> bool {
        self.prize == self.initial_choice
    }

    /// First pick missed and the final pick lands on the prize.
    pub fn is_win_configuration(&self) -> bool {
        self.final_choice == self.prize && !self.first_pick_correct()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.prize, self.initial_choice, self.final_choice)
    }
}

/// Classification tag carried by a weighted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
pub enum EventClass {
    #[strum(to_string = "W")]
    Win,
    #[strum(to_string = "L")]
    Loss,
}

/// An outcome with its leaf probability and classification tag.
///
/// Both are derived only from whether the first pick was correct: a correct
/// first pick gets 1/9 and [`EventClass::Win`], a wrong one 1/18 and
/// [`EventClass::Loss`]. The final choice plays no part, so the `Win` tag
/// marks the branches where *staying* would have won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WeightedEvent {
    pub outcome: Outcome,
    pub probability: Fraction,
    pub class: EventClass,
}

impl WeightedEvent {
    pub fn assign(outcome: Outcome) -> Self {
        let (probability, class) = if outcome.first_pick_correct() {
            (CORRECT_PICK_LEAF, EventClass::Win)
        } else {
            (WRONG_PICK_LEAF, EventClass::Loss)
        };
        Self {
            outcome,
            probability,
            class,
        }
    }

    /// Bare tuple form: `(prob, prize, initial, final, class)`.
    pub fn as_tuple(&self) -> String {
        format!(
            "('{}', {}, {}, {}, '{}')",
            self.probability,
            self.outcome.prize,
            self.outcome.initial_choice,
            self.outcome.final_choice,
            self.class
        )
    }
}

impl fmt::Display for WeightedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WeightedEvent(prob='{}', prize_door={}, player_choice={}, final_choice={}, result='{}')",
            self.probability,
            self.outcome.prize,
            self.outcome.initial_choice,
            self.outcome.final_choice,
            self.class
        )
    }
}
