//! Order, trade and notification types shared by the codec and the order service.

mod notification;
mod orders;
mod requests;
mod trades;

pub use notification::*;
pub use orders::*;
pub use requests::*;
pub use trades::*;
