pub mod shared;
pub mod tariff_file;
