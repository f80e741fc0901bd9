mod ids;
mod video;

pub use ids::VideoId;
pub use video::{Video, DEFAULT_FLAG_REASON};
