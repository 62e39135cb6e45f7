pub mod time;

#[cfg(test)]
pub(crate) mod headless;
