pub mod api;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod presenter;
pub mod recommender;
pub mod scorer;
