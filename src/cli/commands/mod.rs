pub mod projects;
pub mod repos;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "repos_test.rs"]
mod repos_test;
