pub mod error_mapper;
pub mod view;
