pub mod leaderboards;
pub mod ranks;

#[cfg(test)]
pub(crate) mod testing;
