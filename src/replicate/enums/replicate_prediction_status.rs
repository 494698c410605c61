/// The statuses a prediction ends in. Anything else (`starting`,
/// `processing`) means it is still running.
pub enum ReplicatePredictionStatus {
    Succeeded,
    Failed,
    Canceled,
}

impl ReplicatePredictionStatus {
    pub fn value(&self) -> &str {
        match *self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
        }
    }

    pub fn is_terminal(status: &str) -> bool {
        status == Self::Succeeded.value()
            || status == Self::Failed.value()
            || status == Self::Canceled.value()
    }
}
