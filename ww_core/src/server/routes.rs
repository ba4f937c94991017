use tracing::info;

pub enum ApiPath {
    Static(&'static str),
    Dynamic(String),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
            ApiPath::Dynamic(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiPrompt {
    PublicGenerate,
    Generate,
    GenerateStream,
    GenerateBatch,
    Random,
    List,
    Accept,
}

impl BackendApiPrompt {
    /// Route template (with `{genre}` placeholders) when `genre` is `None`,
    /// a concrete path otherwise.
    pub fn path(&self, genre: Option<&str>) -> ApiPath {
        let with_genre = |prefix: &str| {
            ApiPath::Dynamic(format!("{}/{}", prefix, genre.unwrap_or("{genre}")))
        };
        match self {
            BackendApiPrompt::PublicGenerate => with_genre("/prompts/public/generate"),
            BackendApiPrompt::Generate => with_genre("/prompts/generate"),
            BackendApiPrompt::GenerateStream => with_genre("/prompts/generate-stream"),
            BackendApiPrompt::Random => with_genre("/prompts/random"),
            BackendApiPrompt::GenerateBatch => ApiPath::Static("/prompts/generate-batch"),
            BackendApiPrompt::List => ApiPath::Static("/prompts"),
            BackendApiPrompt::Accept => ApiPath::Static("/prompts/accept"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiNovel {
    PromptJournal,
}

impl BackendApiNovel {
    pub fn path(&self, user_id: Option<&i32>) -> ApiPath {
        let user_id = user_id
            .map(|i| format!("{}", i))
            .unwrap_or("{user_id}".to_string());
        match self {
            BackendApiNovel::PromptJournal => {
                ApiPath::Dynamic(format!("/novels/prompt-journal/{}", user_id))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiChapter {
    ByNovel,
}

impl BackendApiChapter {
    pub fn path(&self, novel_id: Option<&i32>) -> ApiPath {
        let novel_id = novel_id
            .map(|i| format!("{}", i))
            .unwrap_or("{novel_id}".to_string());
        match self {
            BackendApiChapter::ByNovel => {
                ApiPath::Dynamic(format!("/chapters/{}", novel_id))
            }
        }
    }
}

pub fn print_all_backend_api_paths() {
    // Prompts
    for prompt in [
        BackendApiPrompt::PublicGenerate,
        BackendApiPrompt::Generate,
        BackendApiPrompt::GenerateStream,
        BackendApiPrompt::GenerateBatch,
        BackendApiPrompt::Random,
        BackendApiPrompt::List,
        BackendApiPrompt::Accept,
    ]
    .iter()
    {
        info!("/api{}", prompt.path(None).as_str());
    }

    // Novels
    for novel in [BackendApiNovel::PromptJournal].iter() {
        info!("/api{}", novel.path(None).as_str());
    }

    // Chapters
    for chapter in [BackendApiChapter::ByNovel].iter() {
        info!("/api{}", chapter.path(None).as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_use_axum_placeholders() {
        assert_eq!(
            BackendApiPrompt::Generate.path(None).as_str(),
            "/prompts/generate/{genre}"
        );
        assert_eq!(
            BackendApiNovel::PromptJournal.path(None).as_str(),
            "/novels/prompt-journal/{user_id}"
        );
    }

    #[test]
    fn concrete_paths_fill_placeholders() {
        assert_eq!(
            BackendApiPrompt::Random.path(Some("mystery")).as_str(),
            "/prompts/random/mystery"
        );
        assert_eq!(
            BackendApiChapter::ByNovel.path(Some(&7)).as_str(),
            "/chapters/7"
        );
    }
}
