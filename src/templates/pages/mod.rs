pub mod estimator;

pub use estimator::estimator_page;
