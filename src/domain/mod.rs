pub mod pricing;
pub mod record;
