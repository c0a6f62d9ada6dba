pub mod native;
pub mod traits;
