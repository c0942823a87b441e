pub mod queue;
pub mod storage;

#[cfg(test)]
pub mod mock;
