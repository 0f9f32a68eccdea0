include!(concat!(env!("OUT_DIR"), "/overlap.rs"));

#[cfg(test)]
mod tests;
