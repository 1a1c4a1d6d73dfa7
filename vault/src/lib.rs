#![no_std]

mod contract;
mod dependencies;
mod errors;
mod events;
mod storage;

pub use contract::{VaultClient, VaultContract, VaultContractClient};
pub use errors::VaultError;
