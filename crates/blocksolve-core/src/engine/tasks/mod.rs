//! The two data-parallel phases of a run.
//!
//! Both tasks fan an outer collection out over the rayon pool (or iterate it sequentially
//! without the `parallel` feature) and run their inner loop on a single worker. Their
//! updates are set insertion and set union, so the table they leave behind does not depend
//! on scheduling or thread count.

pub mod absorption;
pub mod discovery;
