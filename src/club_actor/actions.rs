/// Space operations a club accepts. Each one is applied by the club store actor
/// as a single atomic read-modify-write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceOp {
    /// Subtract the amount, but only if at least that much space remains.
    ///
    /// When the guard fails the operation is reported as not applied; it is
    /// not an error.
    Decrease(u32),
    /// Add the amount. Used to return seats and to compensate a debit.
    ///
    /// # Errors
    /// Rejected if the counter would overflow.
    Increase(u32),
    /// Assign the amount unconditionally.
    Set(u32),
}

/// Outcome of a [`SpaceOp`], carrying the space left after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceUpdate {
    Applied { available_space: u32 },
    NotApplied { available_space: u32 },
}

impl SpaceUpdate {
    pub fn is_applied(&self) -> bool {
        matches!(self, SpaceUpdate::Applied { .. })
    }

    pub fn available_space(&self) -> u32 {
        match self {
            SpaceUpdate::Applied { available_space } | SpaceUpdate::NotApplied { available_space } => {
                *available_space
            }
        }
    }
}
