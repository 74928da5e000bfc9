pub mod character;
pub mod resources;
pub mod sampling;
pub mod tags;

pub use character::{CharacterConfig, OrganizationProfile};
pub use resources::ResourcesConfig;
pub use sampling::{SamplingConfig, SamplingMode};
pub use tags::TagsConfig;
