pub mod app;
pub mod data;
pub mod model;
pub mod score;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
