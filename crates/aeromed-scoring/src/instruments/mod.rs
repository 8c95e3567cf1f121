pub mod ipaq;
pub mod nasa_tlx;
