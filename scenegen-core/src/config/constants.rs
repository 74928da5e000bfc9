/// Resource file name constants to avoid hardcoding throughout the codebase
pub mod resources {
    pub const DEFAULT_BASE_DIR: &str = "files";
    pub const OPENING_CORPUS: &str = "start.txt";
    pub const MIDDLE_CORPUS: &str = "middle.txt";
    pub const CLOSING_CORPUS: &str = "end.txt";
    pub const CLOTHING_CONFIG: &str = "clothing.json";
    pub const CHARACTER_LIST: &str = "characters.txt";
}

/// Configuration file locations
pub mod config_files {
    pub const FILE_NAME: &str = "scenegen.toml";
    pub const DOT_DIR: &str = ".scenegen";
}

/// Prompt delimiters shared by the composer, the assembler and the formatter
pub mod delimiters {
    /// Separates scene segments (and partner alternatives)
    pub const SEGMENT: char = '/';
    /// Separates fragments inside a segment
    pub const FRAGMENT: &str = ", ";
    pub const TAG: char = ',';
}

/// Host-facing bounds for the scene entry point
pub mod scene {
    pub const MAX_SECTION_COUNT: i64 = 100;
    pub const DEFAULT_OPENING_COUNT: i64 = 5;
    pub const DEFAULT_MIDDLE_COUNT: i64 = 10;
    pub const DEFAULT_CLOSING_COUNT: i64 = 3;
    pub const MAX_CHARACTER_PROMPTS: usize = 250;
}

/// Tag provider defaults
pub mod tags {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 3;
    /// Tag strings with fewer entries than this are rejected
    pub const DEFAULT_MIN_TAGS: usize = 4;
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    pub const DEFAULT_FALLBACK: &str = "character";
    pub const DEFAULT_PAGES: u32 = 3;
    pub const DEFAULT_MAX_WORKERS: usize = 8;
    pub const DEFAULT_FETCH_RETRIES: usize = 3;
    pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;
    pub const FETCH_RETRY_PAUSE_MS: u64 = 1_000;
    pub const DEFAULT_USER_AGENT: &str =
        "Mozilla/5.0 (compatible; TagScraper/1.0; +https://github.com/)";
    pub const POST_SELECTOR: &str = "div.posts-container.gap-2 > article";
    pub const POST_TAGS_ATTR: &str = "data-tags";
    pub const MAX_RELATED_TAGS: usize = 8;
    pub const MAX_ADDITIONAL_TAGS: usize = 2;
    pub const GENDER_TAGS: &[&str] = &["1girl", "1boy"];

    /// Appearance keywords that mark a frequent tag as describing the character
    pub const APPEARANCE_KEYWORDS: &[&str] = &[
        "bangs",
        "belt",
        "bow",
        "braid",
        "choker",
        "earring",
        "ears",
        "eyes",
        "eyeshadow",
        "hair",
        "hair ornament",
        "hairband",
        "hat",
        "headband",
        "headphones",
        "headwear",
        "horns",
        "mask",
        "necklace",
        "ponytail",
        "tail",
        "thighhigh",
        "wings",
    ];
}

/// URL constants for tag sources
pub mod urls {
    pub const DANBOORU_BASE: &str = "https://danbooru.donmai.us";
    pub const POSTS_PATH: &str = "posts";
}

/// Default configuration values
pub mod defaults {
    pub const DEFAULT_LOG_LEVEL: &str = "info";
    pub const DEFAULT_SEED: u64 = 0;
}
