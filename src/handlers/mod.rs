// Handlers module

pub mod api_ask;
pub mod ask;
pub mod index;

pub use api_ask::api_ask_handler;
pub use ask::ask_handler;
pub use index::index_handler;
