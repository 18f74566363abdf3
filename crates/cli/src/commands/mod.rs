pub mod bundle;
pub mod scan;

pub use bundle::*;
pub use scan::*;
