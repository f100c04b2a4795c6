pub mod response;
pub mod stock;
pub mod theme;

pub use response::*;
pub use stock::*;
pub use theme::*;
