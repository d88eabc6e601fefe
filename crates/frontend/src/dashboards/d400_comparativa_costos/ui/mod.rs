mod dashboard;

pub use dashboard::ComparativaCostosDashboard;
