//! Scene prompt assembly: sample, compose, join, resolve the character.

use super::composer::{Composer, PartnerSpec};
use super::corpus::{ResourceError, SceneResources};
use super::sampler::sample;
use crate::config::constants::{delimiters, scene};
use crate::config::{SamplingMode, ScenegenConfig};
use crate::prompts::format::{CharacterOverrides, SceneOutput, format_scene_output};
use crate::tags::{DanbooruTagProvider, TagResolver};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info};

/// `/`-joined scene plus the character it was paired with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenePrompt {
    pub prompt: String,
    pub character_id: String,
    pub character_tags: String,
}

/// Raw host inputs; counts are clamped before use
#[derive(Debug, Clone, Default)]
pub struct SceneRequest {
    pub opening: i64,
    pub middle: i64,
    pub closing: i64,
    pub partner: String,
}

impl SceneRequest {
    pub fn new(opening: i64, middle: i64, closing: i64, partner: impl Into<String>) -> Self {
        Self {
            opening,
            middle,
            closing,
            partner: partner.into(),
        }
    }
}

/// Clamp a requested section size into `0..=MAX_SECTION_COUNT`
pub fn clamp_count(count: i64) -> usize {
    count.clamp(0, scene::MAX_SECTION_COUNT) as usize
}

pub struct SceneAssembler {
    resources: SceneResources,
    mode: SamplingMode,
    resolver: TagResolver,
}

impl SceneAssembler {
    pub fn new(resources: SceneResources, mode: SamplingMode, resolver: TagResolver) -> Self {
        Self {
            resources,
            mode,
            resolver,
        }
    }

    /// Load every resource up front and wire the scraping tag provider.
    /// A missing resource aborts construction.
    pub fn from_config(config: &ScenegenConfig) -> Result<Self, ResourceError> {
        let resources = SceneResources::load(&config.resources)?;
        let provider = Arc::new(DanbooruTagProvider::new(&config.tags));
        let resolver = TagResolver::new(provider, config.tags.clone());
        Ok(Self::new(resources, config.sampling.mode, resolver))
    }

    pub fn resources(&self) -> &SceneResources {
        &self.resources
    }

    /// The `/`-joined prompt only; no character lookup
    pub fn compose_scene<R: Rng + ?Sized>(&self, request: &SceneRequest, rng: &mut R) -> String {
        let opening = sample(
            self.mode,
            self.resources.opening.lines(),
            clamp_count(request.opening),
            rng,
        );
        let middle = sample(
            self.mode,
            self.resources.middle.lines(),
            clamp_count(request.middle),
            rng,
        );
        let closing = sample(
            self.mode,
            self.resources.closing.lines(),
            clamp_count(request.closing),
            rng,
        );
        debug!(
            opening = opening.len(),
            middle = middle.len(),
            closing = closing.len(),
            "sampled windows"
        );

        let partner = PartnerSpec::parse(&request.partner);
        let separator = delimiters::SEGMENT.to_string();
        Composer::new(&self.resources.clothing)
            .compose(&opening, &middle, &closing, &partner, rng)
            .into_lines()
            .join(separator.as_str())
    }

    /// Compose a scene and pair it with a randomly selected character
    pub async fn assemble<R: Rng + ?Sized>(
        &self,
        request: &SceneRequest,
        rng: &mut R,
    ) -> ScenePrompt {
        let prompt = self.compose_scene(request, rng);
        let character = self
            .resolver
            .resolve_random(&self.resources.characters, rng)
            .await;
        info!(character = %character.id, fell_back = character.fell_back, "scene assembled");

        ScenePrompt {
            prompt,
            character_id: character.id,
            character_tags: character.tags,
        }
    }

    /// Host entry: seed a fresh generator, assemble, then apply output cleanup.
    /// Non-blank overrides replace the resolved name or tags in the output only.
    pub async fn generate(
        &self,
        request: &SceneRequest,
        seed: u64,
        overrides: &CharacterOverrides,
    ) -> SceneOutput {
        let mut rng = StdRng::seed_from_u64(seed);
        let scene = self.assemble(request, &mut rng).await;
        format_scene_output(&scene, overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TagsConfig;
    use crate::scene::corpus::{
        ClosingClothing, ClothingConfig, Corpus, CorpusRole, MiddleClothing, OpeningClothing,
    };
    use crate::tags::StaticTagProvider;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn resources() -> SceneResources {
        SceneResources {
            opening: Corpus::new(CorpusRole::Opening, strings(&["o1", "o2", "o3", "o4"])),
            middle: Corpus::new(CorpusRole::Middle, strings(&["m1", "m2", "m3", "m4"])),
            closing: Corpus::new(CorpusRole::Closing, strings(&["c1", "c2"])),
            clothing: ClothingConfig {
                opening: OpeningClothing {
                    colors: strings(&["white"]),
                    clothing: strings(&["shirt"]),
                },
                middle: MiddleClothing {
                    part1: strings(&["skirt"]),
                    part2: strings(&["bare"]),
                },
                closing: ClosingClothing {
                    tag: "end".to_string(),
                },
            },
            characters: strings(&["rem_(re:zero)"]),
        }
    }

    fn assembler() -> SceneAssembler {
        let provider = StaticTagProvider::new().with(
            "rem_(re:zero)",
            "rem (re:zero), 1girl, blue hair, maid, solo",
        );
        let resolver = TagResolver::new(Arc::new(provider), TagsConfig::default());
        SceneAssembler::new(resources(), SamplingMode::Window, resolver)
    }

    #[test]
    fn counts_are_clamped() {
        assert_eq!(clamp_count(-5), 0);
        assert_eq!(clamp_count(7), 7);
        assert_eq!(clamp_count(1_000), 100);
    }

    #[tokio::test]
    async fn segments_are_joined_in_section_order() {
        let assembler = assembler();
        let mut rng = StdRng::seed_from_u64(1);

        let scene = assembler
            .assemble(&SceneRequest::new(4, 0, 2, ""), &mut rng)
            .await;

        let segments: Vec<&str> = scene.prompt.split('/').collect();
        assert_eq!(
            segments,
            vec![
                "white, shirt, o1",
                "white, shirt, o2",
                "white, shirt, o3",
                "white, shirt, o4",
                "end, c1",
                "end, c2",
            ]
        );
        assert_eq!(scene.character_id, "rem_(re:zero)");
        assert_eq!(scene.character_tags, "rem (re:zero), 1girl, blue hair, maid, solo");
    }

    #[tokio::test]
    async fn zero_counts_give_empty_prompt() {
        let assembler = assembler();
        let scene = assembler
            .assemble(&SceneRequest::new(0, -3, 0, "X"), &mut StdRng::seed_from_u64(0))
            .await;
        assert_eq!(scene.prompt, "");
    }

    #[tokio::test]
    async fn supplied_values_only_replace_the_output() {
        let assembler = assembler();
        let overrides = CharacterOverrides {
            name: Some("Emilia (Re:Zero)".to_string()),
            tags: Some("emilia (re:zero), silver hair".to_string()),
        };

        let output = assembler
            .generate(&SceneRequest::new(1, 1, 1, "X"), 3, &overrides)
            .await;

        assert_eq!(output.character, "EmiliaReZero");
        assert_eq!(output.character_tags, "emilia \\(re:zero\\), silver hair");
        assert_eq!(output.scene_prompt.split('/').count(), 3);
    }

    #[tokio::test]
    async fn supplied_name_keeps_randomly_resolved_tags() {
        let assembler = assembler();
        let overrides = CharacterOverrides {
            name: Some("Frieren".to_string()),
            tags: None,
        };

        let output = assembler
            .generate(&SceneRequest::new(1, 0, 0, ""), 0, &overrides)
            .await;

        assert_eq!(output.character, "Frieren");
        assert_eq!(
            output.character_tags,
            "rem \\(re:zero\\), 1girl, blue hair, maid, solo"
        );
    }

    #[tokio::test]
    async fn overrides_do_not_change_the_scene() {
        let assembler = assembler();
        let request = SceneRequest::new(2, 2, 1, "X/Y");
        let overrides = CharacterOverrides {
            name: Some("Frieren".to_string()),
            tags: Some("frieren, elf".to_string()),
        };

        let plain = assembler
            .generate(&request, 9, &CharacterOverrides::default())
            .await;
        let overridden = assembler.generate(&request, 9, &overrides).await;

        assert_eq!(plain.scene_prompt, overridden.scene_prompt);
        assert_eq!(plain.character, "rem_rezero");
    }

    #[tokio::test]
    async fn same_seed_same_output() {
        let assembler = assembler();
        let request = SceneRequest::new(2, 3, 1, "X/Y/Z");

        let first = assembler
            .generate(&request, 42, &CharacterOverrides::default())
            .await;
        let second = assembler
            .generate(&request, 42, &CharacterOverrides::default())
            .await;
        assert_eq!(first, second);
    }
}
