//! End-to-end scene assembly over on-disk resources

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use scenegen_core::config::{ConfigManager, ResourcesConfig, SamplingMode, TagsConfig};
use scenegen_core::prompts::CharacterOverrides;
use scenegen_core::scene::{
    ResourceError, ResourceKind, SceneAssembler, SceneRequest, SceneResources,
};
use scenegen_core::tags::{StaticTagProvider, TagError, TagProvider, TagResolver};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

const CLOTHING: &str = r#"{
    "opening": { "colors": ["red"], "clothing": ["dress"] },
    "middle": { "part1": ["apron"], "part2": ["towel"] },
    "closing": { "tag": "afterglow" }
}"#;

fn write_resources(dir: &Path, characters: &str) {
    fs::write(dir.join("start.txt"), "a\nb\n\nc\nd\n").expect("Failed to write opening corpus");
    fs::write(
        dir.join("middle.txt"),
        "m0\nm1\nm2\nm3\nm4\nm5\nm6\nm7\nm8\nm9\n",
    )
    .expect("Failed to write middle corpus");
    fs::write(dir.join("end.txt"), "e0\ne1\ne2\ne3\n").expect("Failed to write closing corpus");
    fs::write(dir.join("clothing.json"), CLOTHING).expect("Failed to write clothing config");
    fs::write(dir.join("characters.txt"), characters).expect("Failed to write character list");
}

fn load_resources(dir: &Path) -> SceneResources {
    let config = ResourcesConfig {
        base_dir: dir.to_path_buf(),
        ..ResourcesConfig::default()
    };
    SceneResources::load(&config).expect("Failed to load resources")
}

fn rich_provider() -> StaticTagProvider {
    StaticTagProvider::new()
        .with("sparse", "a,b,c")
        .with("rich", "rich, 1girl, long_hair, smile (happy)")
}

fn assembler(dir: &Path, provider: Arc<dyn TagProvider>) -> SceneAssembler {
    let resolver = TagResolver::new(provider, TagsConfig::default());
    SceneAssembler::new(load_resources(dir), SamplingMode::Window, resolver)
}

/// Counts lookups per character
struct CountingProvider {
    inner: StaticTagProvider,
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl TagProvider for CountingProvider {
    async fn fetch_tags(&self, character: &str) -> Result<String, TagError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(character.to_string());
        self.inner.fetch_tags(character).await
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

#[tokio::test]
async fn two_of_four_opening_lines_are_contiguous() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_resources(temp_dir.path(), "rich\n");
    let assembler = assembler(temp_dir.path(), Arc::new(rich_provider()));
    let corpus = ["a", "b", "c", "d"];

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let scene = assembler
            .assemble(&SceneRequest::new(2, 0, 0, ""), &mut rng)
            .await;

        let lines: Vec<&str> = scene
            .prompt
            .split('/')
            .map(|segment| segment.trim_start_matches("red, dress, "))
            .collect();
        assert_eq!(lines.len(), 2);
        assert!(
            corpus.windows(2).any(|window| window == lines.as_slice()),
            "not contiguous: {lines:?}"
        );
    }
}

#[tokio::test]
async fn only_last_opening_line_gets_a_partner() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_resources(temp_dir.path(), "rich\n");
    let assembler = assembler(temp_dir.path(), Arc::new(rich_provider()));

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let scene = assembler
            .assemble(&SceneRequest::new(4, 0, 0, "X/Y"), &mut rng)
            .await;

        let segments: Vec<&str> = scene.prompt.split('/').collect();
        assert_eq!(segments.len(), 4);
        let with_partner: Vec<bool> = segments
            .iter()
            .map(|segment| segment.contains('X') || segment.contains('Y'))
            .collect();
        assert_eq!(with_partner, vec![false, false, false, true]);
        assert!(segments[3].ends_with(", d"));
    }
}

#[tokio::test]
async fn empty_partner_never_appears_anywhere() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_resources(temp_dir.path(), "rich\n");
    let assembler = assembler(temp_dir.path(), Arc::new(rich_provider()));
    let mut rng = StdRng::seed_from_u64(8);

    let scene = assembler
        .assemble(&SceneRequest::new(4, 10, 4, " / "), &mut rng)
        .await;

    let segments: Vec<&str> = scene.prompt.split('/').collect();
    assert_eq!(segments.len(), 18);
    for segment in segments {
        assert!(!segment.contains(", ,"), "empty fragment in {segment}");
        assert!(!segment.ends_with(", "), "dangling separator in {segment}");
    }
}

#[tokio::test]
async fn sparse_tags_trigger_a_different_character() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_resources(temp_dir.path(), "sparse\nrich\n");

    let mut sparse_drawn_first = false;
    for seed in 0..64 {
        let provider = Arc::new(CountingProvider {
            inner: rich_provider(),
            calls: Mutex::new(Vec::new()),
        });
        let assembler = assembler(temp_dir.path(), provider.clone());
        let mut rng = StdRng::seed_from_u64(seed);

        let scene = assembler
            .assemble(&SceneRequest::new(1, 1, 1, ""), &mut rng)
            .await;

        assert_eq!(scene.character_id, "rich");
        assert_eq!(scene.character_tags, "rich, 1girl, long_hair, smile (happy)");

        let calls = provider.calls.lock().expect("calls lock poisoned").clone();
        if calls.first().map(String::as_str) == Some("sparse") {
            assert_eq!(calls, vec!["sparse".to_string(), "rich".to_string()]);
            sparse_drawn_first = true;
        } else {
            assert_eq!(calls, vec!["rich".to_string()]);
        }
    }
    assert!(sparse_drawn_first, "no seed drew the sparse character first");
}

#[tokio::test]
async fn supplied_name_does_not_replace_the_lookup() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_resources(temp_dir.path(), "rich\n");
    let provider = Arc::new(CountingProvider {
        inner: rich_provider(),
        calls: Mutex::new(Vec::new()),
    });
    let assembler = assembler(temp_dir.path(), provider.clone());

    let output = assembler
        .generate(
            &SceneRequest::new(1, 1, 1, ""),
            0,
            &CharacterOverrides {
                name: Some("Frieren".to_string()),
                tags: None,
            },
        )
        .await;

    assert_eq!(output.character, "Frieren");
    assert_eq!(output.character_tags, "rich, 1girl, long_hair, smile \\(happy\\)");
    let calls = provider.calls.lock().expect("calls lock poisoned").clone();
    assert_eq!(calls, vec!["rich".to_string()]);
}

#[tokio::test]
async fn exhausted_retries_fall_back_to_placeholder() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_resources(temp_dir.path(), "sparse\nnobody\n");
    let assembler = assembler(temp_dir.path(), Arc::new(rich_provider()));

    let output = assembler
        .generate(
            &SceneRequest::new(2, 2, 2, "X"),
            5,
            &CharacterOverrides::default(),
        )
        .await;

    assert_eq!(output.character_tags, "character");
    assert!(output.character == "sparse" || output.character == "nobody");
    assert_eq!(output.scene_prompt.split('/').count(), 6);
}

#[tokio::test]
async fn slow_provider_times_out_into_fallback() {
    struct Stalled;

    #[async_trait]
    impl TagProvider for Stalled {
        async fn fetch_tags(&self, _character: &str) -> Result<String, TagError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("never, used, at, all".to_string())
        }

        fn name(&self) -> &'static str {
            "stalled"
        }
    }

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_resources(temp_dir.path(), "rich\n");
    let resolver = TagResolver::new(Arc::new(Stalled), TagsConfig::default())
        .with_attempt_timeout(Duration::from_millis(5));
    let assembler = SceneAssembler::new(
        load_resources(temp_dir.path()),
        SamplingMode::Window,
        resolver,
    );

    let scene = assembler
        .assemble(&SceneRequest::new(1, 0, 0, ""), &mut StdRng::seed_from_u64(0))
        .await;
    assert_eq!(scene.character_id, "rich");
    assert_eq!(scene.character_tags, "character");
}

#[tokio::test]
async fn output_is_cleaned_for_the_host() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_resources(temp_dir.path(), "rich\n");
    let assembler = assembler(temp_dir.path(), Arc::new(rich_provider()));

    let output = assembler
        .generate(
            &SceneRequest::new(1, 1, 1, ""),
            11,
            &CharacterOverrides::default(),
        )
        .await;

    assert_eq!(output.character, "rich");
    assert_eq!(output.character_tags, "rich, 1girl, long_hair, smile \\(happy\\)");
    assert!(!output.scene_prompt.contains(",,"));
}

#[tokio::test]
async fn seeds_reproduce_and_differ() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_resources(temp_dir.path(), "rich\n");
    let assembler = assembler(temp_dir.path(), Arc::new(rich_provider()));
    let request = SceneRequest::new(2, 5, 2, "X/Y/Z");

    let first = assembler
        .generate(&request, 1234, &CharacterOverrides::default())
        .await;
    let again = assembler
        .generate(&request, 1234, &CharacterOverrides::default())
        .await;
    assert_eq!(first, again);

    let mut prompts = Vec::new();
    for seed in 0..16 {
        let output = assembler
            .generate(&request, seed, &CharacterOverrides::default())
            .await;
        prompts.push(output.scene_prompt);
    }
    prompts.sort();
    prompts.dedup();
    assert!(prompts.len() > 1, "seeds should change the scene");
}

#[test]
fn missing_corpus_is_fatal_at_construction() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_resources(temp_dir.path(), "rich\n");
    fs::remove_file(temp_dir.path().join("end.txt")).expect("Failed to remove closing corpus");

    let manager =
        ConfigManager::load_with_home(temp_dir.path(), None).expect("Failed to load config");
    // defaults look under <workspace>/files
    assert!(SceneAssembler::from_config(manager.config()).is_err());

    let config = ResourcesConfig {
        base_dir: temp_dir.path().to_path_buf(),
        ..ResourcesConfig::default()
    };
    match SceneResources::load(&config) {
        Err(ResourceError::Missing { kind, .. }) => {
            assert_eq!(kind.to_string(), "closing corpus");
            assert!(matches!(kind, ResourceKind::Corpus(_)));
        }
        other => panic!("expected a missing resource error, got {other:?}"),
    }
}

#[tokio::test]
async fn chunked_mode_from_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let files = temp_dir.path().join("corpora");
    fs::create_dir_all(&files).expect("Failed to create resource directory");
    write_resources(&files, "rich\n");
    fs::write(
        temp_dir.path().join("scenegen.toml"),
        "[resources]\nbase_dir = \"corpora\"\n\n[sampling]\nmode = \"chunked\"\n\n[tags]\nenabled = false\nfallback = \"offline\"\n",
    )
    .expect("Failed to write config");

    let manager =
        ConfigManager::load_with_home(temp_dir.path(), None).expect("Failed to load config");
    let config = manager.config();
    assert_eq!(config.sampling.mode, SamplingMode::Chunked);

    let assembler = SceneAssembler::from_config(config).expect("Failed to build assembler");
    let scene = assembler
        .assemble(&SceneRequest::new(0, 6, 0, ""), &mut StdRng::seed_from_u64(3))
        .await;

    assert_eq!(scene.prompt.split('/').count(), 6);
    assert_eq!(scene.character_id, "rich");
    assert_eq!(scene.character_tags, "offline");
}
