use serde::{Deserialize, Serialize};

/// Outcome of a call to an external provider. Callers always get a usable
/// value; `Fallback` tells them it did not come from live data and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Lookup<T> {
    Live(T),
    Fallback { value: T, reason: String },
}

impl<T> Lookup<T> {
    pub fn fallback(value: T, reason: impl Into<String>) -> Self {
        Lookup::Fallback {
            value,
            reason: reason.into(),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Lookup::Live(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Lookup::Live(v) => v,
            Lookup::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Lookup::Live(v) => v,
            Lookup::Fallback { value, .. } => value,
        }
    }
}
