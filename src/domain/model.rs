use std::fmt;

/// Two operands and their sum, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sum {
    pub x: i32,
    pub y: i32,
    pub total: i32,
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The result of {} + {} = {}", self.x, self.y, self.total)
    }
}
