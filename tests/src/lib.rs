//! End-to-end checks of the scan pipeline against scripted capabilities.

#[cfg(test)]
mod scenarios;

#[cfg(test)]
mod properties;
