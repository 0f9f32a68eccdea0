include!(concat!(env!("OUT_DIR"), "/lox.rs"));

#[cfg(test)]
mod tests;
