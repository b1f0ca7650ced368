mod chart;

pub use chart::ProductMixChart;
