//! Calculator inputs and the UI bounds applied to them

mod data;
pub mod limits;

pub use data::InvestmentInput;
pub use limits::InputLimits;
