pub mod dashboard;
pub mod directory;
pub mod health;
pub mod permissions;
pub mod shell;

#[cfg(test)]
pub(crate) mod test_support;
