mod asset_delta;
mod balance;
mod order;
mod order_type;
mod side;
mod tick;

pub use asset_delta::AssetDelta;
pub use balance::{Balance, Holding};
pub use order::{Order, OrderId, OrderIdSequence};
pub use order_type::OrderType;
pub use side::{Side, side_sign};
pub use tick::Tick;
