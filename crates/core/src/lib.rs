pub mod audio;
pub mod faq;
pub mod pipeline;
pub mod segmenting;
pub mod shared;
pub mod speech;
