mod api_url;
mod enums;
mod ids;
mod strings;

pub use api_url::*;
pub use enums::*;
pub use ids::*;
pub use strings::*;
