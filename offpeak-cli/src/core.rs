pub mod aggregator;
pub mod capacity;
pub mod price;
pub mod report;
pub mod row;
pub mod tariff;
pub mod window;
