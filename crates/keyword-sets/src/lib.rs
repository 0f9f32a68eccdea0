// Matchers generated at build time from data/keywords/*.def

pub mod lox;
pub mod overlap;
