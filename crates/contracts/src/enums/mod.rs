pub mod dashboard_section;

pub use dashboard_section::DashboardSection;
