mod calculate;
mod eta;
mod point;
mod provider;

pub use calculate::Calculate;
pub use eta::EtaResult;
pub use point::Point;
pub use provider::{Provider, SERVICE_A_TOKEN, SERVICE_B_TOKEN, UNSPECIFIED_TOKEN};
