pub mod gateway;
pub mod grade;
