pub mod balance;
pub mod expected;
pub mod worked;
