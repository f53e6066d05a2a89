use std::fmt;

/// Proof of purchased parking time, handed to the patron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    minutes_purchased: u64,
}

impl Receipt {
    pub fn new(minutes_purchased: u64) -> Self {
        Self { minutes_purchased }
    }

    pub fn minutes_purchased(&self) -> u64 {
        self.minutes_purchased
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes_purchased)
    }
}
