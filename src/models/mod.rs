pub mod answer;
pub mod assessment;
pub mod coverage;
pub mod grade;
