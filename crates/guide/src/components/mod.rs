mod app;
mod banner;
mod nav;
mod page;

pub use app::*;
pub use banner::*;
pub use nav::*;
pub use page::*;
