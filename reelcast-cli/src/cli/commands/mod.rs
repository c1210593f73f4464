pub mod balance;
pub mod faucet;
pub mod history;
pub mod review;
