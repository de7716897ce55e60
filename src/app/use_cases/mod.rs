//! Use-Cases: fachliche Operationen auf dem AppState.

pub mod features;
