mod synonym;

pub use synonym::*;
