//! Require/un-require decisions

/// Outcome of evaluating one dependency link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Require,
    Unrequire,
}

/// Decide whether the observed value triggers the requirement.
///
/// Pure function of the value and the trigger set: comparison is
/// case-insensitive and carries no memory of earlier decisions.
pub fn evaluate(value: &str, accepted_values: &[String]) -> Decision {
    let value = value.to_lowercase();
    if accepted_values.iter().any(|v| *v == value) {
        Decision::Require
    } else {
        Decision::Unrequire
    }
}
