mod dashboard;

pub use dashboard::FrecuenciaUsoDashboard;
