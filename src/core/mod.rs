pub mod config;
pub mod constants;
pub mod flow;
pub mod meter;
pub mod normalize;
pub mod page;
pub mod placement;
pub mod surface;

pub use config::*;
pub use constants::*;
pub use flow::*;
pub use meter::*;
pub use normalize::*;
pub use page::*;
pub use placement::*;
pub use surface::*;
