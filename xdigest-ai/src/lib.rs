pub mod claude;
mod error;
mod prompt;

pub use error::*;
pub use prompt::{NO_POSTS_MESSAGE, build_prompt, render_transcript};
use xdigest_common::Post;

pub trait Summarizer {
    fn summarize(&self, posts: &[Post]) -> impl Future<Output = DigestAiResult<String>> + Send;
}
