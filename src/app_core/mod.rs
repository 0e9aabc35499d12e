mod app;
pub use app::Scrubline;

#[cfg(test)]
pub(crate) use app::test_state;
