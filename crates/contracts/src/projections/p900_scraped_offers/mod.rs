pub mod dto;
pub mod grouping;
