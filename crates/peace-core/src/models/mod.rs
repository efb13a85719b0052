pub mod assessment;
pub mod draft;
pub mod goal;
pub mod instrument;
pub mod schedule;
pub mod severity;
