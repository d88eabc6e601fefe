mod dashboard;

pub use dashboard::RendimientoCombustibleDashboard;
