//! Shared test harness for normalization stages.
pub mod stage_contract;
