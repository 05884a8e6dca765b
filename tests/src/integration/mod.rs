pub mod flows;
pub mod runtime;
