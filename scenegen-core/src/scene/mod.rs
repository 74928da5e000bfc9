//! Scene prompt assembly engine.
//!
//! Resources are loaded once into [`SceneResources`]. Each invocation samples
//! a context window from every corpus, enriches the lines with outfit and
//! partner fragments, joins them with `/` and pairs the result with a
//! character tag string from the [`TagResolver`](crate::tags::TagResolver).

pub mod assembler;
pub mod composer;
pub mod corpus;
pub mod sampler;

pub use assembler::{SceneAssembler, ScenePrompt, SceneRequest, clamp_count};
pub use composer::{ComposedSegments, Composer, PartnerSpec};
pub use corpus::{
    ClosingClothing, ClothingConfig, Corpus, CorpusRole, MiddleClothing, OpeningClothing,
    ResourceError, ResourceKind, SceneResources, load_characters, load_clothing_config,
    load_corpus, parse_lines,
};
pub use sampler::{context_window, sample, sample_chunked, sample_window};
