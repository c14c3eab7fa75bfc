mod app;
mod commit;
mod logging;

pub use app::run_app;
