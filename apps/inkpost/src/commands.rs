//! Subcommand handlers. Each one drives a single view to completion.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use tokio::io::AsyncReadExt;

use inkpost_core::DomainError;
use inkpost_core::domain::PostId;
use inkpost_core::listing::SortOrder;
use inkpost_core::ports::{EditingSurface, Interaction};
use inkpost_core::views::{
    AskOutcome, AskView, ComposeOptions, CreateView, DeleteOutcome, DetailView, EditOutcome,
    EditView, ListView, RenderedPost, Route, SaveOutcome, messages,
};
use inkpost_infra::TextBuffer;

use crate::state::AppState;

/// Where editor content comes from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ContentSource {
    /// HTML content given inline
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read HTML content from a file ("-" for stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl ContentSource {
    async fn read(&self) -> anyhow::Result<String> {
        if let Some(content) = &self.content {
            return Ok(content.clone());
        }

        match &self.file {
            Some(path) if path.as_os_str() != "-" => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading {}", path.display())),
            _ => {
                let mut content = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut content)
                    .await
                    .context("reading content from stdin")?;
                Ok(content)
            }
        }
    }

    fn is_given(&self) -> bool {
        self.content.is_some() || self.file.is_some()
    }
}

fn not_found(id: PostId) -> anyhow::Error {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
    .into()
}

fn print_post(post: &RenderedPost) {
    println!("{}", post.title);
    println!("Published: {}", post.published);
    println!();
    println!("{}", post.html);
}

/// `inkpost new`
pub async fn new_post(
    state: &AppState,
    interaction: Arc<dyn Interaction>,
    source: &ContentSource,
    preview: bool,
) -> anyhow::Result<()> {
    let content = source.read().await?;
    let mut view = CreateView::new(
        state.store.clone(),
        interaction,
        TextBuffer::new(),
        ComposeOptions::with_content(content),
    );

    if preview {
        println!("{}", view.preview());
    }

    match view.save().await {
        SaveOutcome::Saved(post) => {
            println!("{}", post.id);
            Ok(())
        }
        SaveOutcome::EmptyContent => bail!("nothing to save"),
        SaveOutcome::Cancelled => bail!("no title given, post not saved"),
        SaveOutcome::Failed(e) => Err(e.into()),
    }
}

/// `inkpost list`
pub async fn list_posts(
    state: &AppState,
    interaction: Arc<dyn Interaction>,
    sort: SortOrder,
    search: Option<String>,
) -> anyhow::Result<()> {
    let mut view = ListView::new(state.store.clone(), interaction);
    if !view.load().await {
        bail!("could not load posts");
    }

    view.set_sort(sort);
    if let Some(query) = search {
        view.set_query(query);
    }

    let summaries = view.summaries();
    if summaries.is_empty() {
        println!("{}", messages::NO_POSTS);
        return Ok(());
    }

    for summary in summaries {
        println!(
            "{:>15}  Saved on: {}  {}",
            summary.id, summary.saved_on, summary.title
        );
    }
    Ok(())
}

/// `inkpost show`
pub async fn show_post(
    state: &AppState,
    interaction: Arc<dyn Interaction>,
    id: PostId,
) -> anyhow::Result<()> {
    let mut view = DetailView::new(state.store.clone(), interaction, id);
    view.load().await;

    if let Some(post) = view.render() {
        print_post(&post);
        return Ok(());
    }
    if view.state().is_not_found() {
        println!("{}", messages::NOT_FOUND);
        return Err(not_found(id));
    }
    bail!("could not load post {}", id)
}

/// `inkpost edit`
pub async fn edit_post(
    state: &AppState,
    interaction: Arc<dyn Interaction>,
    id: PostId,
    source: &ContentSource,
) -> anyhow::Result<()> {
    if !source.is_given() {
        bail!("pass the new content with --content or --file");
    }

    let mut view = EditView::new(
        state.store.clone(),
        interaction.clone(),
        TextBuffer::new(),
        id,
    );
    view.load().await;
    if view.state().is_not_found() {
        println!("{}", messages::NOT_FOUND);
        return Err(not_found(id));
    }
    if view.state().is_loading() {
        bail!("could not load post {}", id);
    }

    let content = source.read().await?;
    view.editor_mut().load(&content);

    match view.save().await {
        EditOutcome::Saved { next, .. } => navigate(state, interaction, next).await,
        EditOutcome::NotReady => {
            Err(DomainError::Internal(format!("post {} is not loaded", id)).into())
        }
        EditOutcome::Failed(e) => Err(e.into()),
    }
}

/// `inkpost delete`
pub async fn delete_post(
    state: &AppState,
    interaction: Arc<dyn Interaction>,
    id: PostId,
) -> anyhow::Result<()> {
    let mut view = ListView::new(state.store.clone(), interaction);
    if !view.load().await {
        bail!("could not load posts");
    }
    if !view.visible().iter().any(|post| post.id == id) {
        return Err(not_found(id));
    }

    match view.delete(id).await {
        DeleteOutcome::Deleted => {
            println!("Deleted post {}", id);
            Ok(())
        }
        DeleteOutcome::Declined => bail!("delete cancelled"),
        DeleteOutcome::Failed(e) => Err(e.into()),
    }
}

/// `inkpost ask`
pub async fn ask(state: &AppState, question: String) -> anyhow::Result<()> {
    let Some(assistant) = state.assistant.clone() else {
        bail!("this build has no docs assistant (enable the `remote` feature)");
    };

    let mut view = AskView::new(assistant);
    view.set_question(question);
    if view.is_ready() {
        eprintln!("{}", messages::THINKING);
    }

    match view.ask().await {
        AskOutcome::Answered(answer) => {
            println!("{}", messages::ANSWER_HEADING);
            println!("{}", answer);
            Ok(())
        }
        AskOutcome::BlankQuestion => bail!("nothing to ask"),
        AskOutcome::Failed(e) => {
            eprintln!("{}", view.answer().unwrap_or(messages::ASK_FAILED));
            Err(e.into())
        }
    }
}

/// Render the view a completed action points at.
async fn navigate(
    state: &AppState,
    interaction: Arc<dyn Interaction>,
    route: Route,
) -> anyhow::Result<()> {
    tracing::debug!(route = %route, "Navigating");
    match route {
        Route::Detail(id) => show_post(state, interaction, id).await,
        Route::List => list_posts(state, interaction, SortOrder::default(), None).await,
        Route::Edit(_) | Route::NewPost => {
            println!("{}", route);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use inkpost_core::StoreError;
    use inkpost_core::ports::{DocsAssistant, PostStore};
    use inkpost_infra::{InMemoryKeyValueStore, LocalPostStore, ScriptedInteraction};

    use super::*;

    struct EchoAssistant;

    #[async_trait]
    impl DocsAssistant for EchoAssistant {
        async fn answer(&self, question: &str) -> Result<String, StoreError> {
            Ok(format!("You asked: {}", question))
        }
    }

    fn app() -> AppState {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        AppState {
            store: Arc::new(LocalPostStore::new(kv)),
            assistant: None,
        }
    }

    fn inline(content: &str) -> ContentSource {
        ContentSource {
            content: Some(content.to_string()),
            file: None,
        }
    }

    fn titled(title: &str) -> Arc<ScriptedInteraction> {
        Arc::new(ScriptedInteraction::new().with_prompt(Some(title)))
    }

    fn is_not_found(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::NotFound { .. })
        )
    }

    async fn seed(state: &AppState, title: &str) -> PostId {
        new_post(state, titled(title), &inline("<p>Hi</p>"), false)
            .await
            .unwrap();
        state
            .store
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|post| post.title == title)
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_new_saves_with_given_title() {
        let state = app();

        new_post(&state, titled("Hello"), &inline("<p>Hi</p>"), true)
            .await
            .unwrap();

        let posts = state.store.list().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[0].content, "<p>Hi</p>");
    }

    #[tokio::test]
    async fn test_new_without_title_or_content_saves_nothing() {
        let state = app();
        let ui = Arc::new(ScriptedInteraction::new());

        assert!(new_post(&state, ui.clone(), &inline("<p>Hi</p>"), false).await.is_err());
        assert!(new_post(&state, titled("Hello"), &inline("  "), false).await.is_err());

        assert!(state.store.list().await.unwrap().is_empty());
        assert!(ui.alerts().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_succeeds_when_empty_and_filtered() {
        let state = app();
        let ui = Arc::new(ScriptedInteraction::new());

        list_posts(&state, ui.clone(), SortOrder::Newest, None).await.unwrap();
        seed(&state, "Hello").await;
        list_posts(&state, ui, SortOrder::Oldest, Some("nothing".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_show_unknown_post_is_not_found() {
        let state = app();
        let err = show_post(&state, Arc::new(ScriptedInteraction::new()), 404)
            .await
            .unwrap_err();

        assert!(is_not_found(&err));
    }

    #[tokio::test]
    async fn test_edit_replaces_content_only() {
        let state = app();
        let id = seed(&state, "Hello").await;
        let before = state.store.get(id).await.unwrap().unwrap();

        edit_post(&state, Arc::new(ScriptedInteraction::new()), id, &inline("<p>Bye</p>"))
            .await
            .unwrap();

        let after = state.store.get(id).await.unwrap().unwrap();
        assert_eq!(after.content, "<p>Bye</p>");
        assert_eq!(after.title, before.title);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn test_edit_needs_content_and_a_known_post() {
        let state = app();
        let id = seed(&state, "Hello").await;
        let ui = Arc::new(ScriptedInteraction::new());

        assert!(edit_post(&state, ui.clone(), id, &ContentSource::default()).await.is_err());
        let err = edit_post(&state, ui, id + 1, &inline("<p>Bye</p>"))
            .await
            .unwrap_err();
        assert!(is_not_found(&err));

        assert_eq!(state.store.get(id).await.unwrap().unwrap().content, "<p>Hi</p>");
    }

    #[tokio::test]
    async fn test_delete_declined_keeps_post() {
        let state = app();
        let id = seed(&state, "Hello").await;

        let declined = Arc::new(ScriptedInteraction::new().with_confirm(false));
        assert!(delete_post(&state, declined, id).await.is_err());

        assert!(state.store.get(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_confirmed_removes_only_that_post() {
        let state = app();
        let keep = seed(&state, "Keep").await;
        let gone = seed(&state, "Drop").await;

        let yes = Arc::new(ScriptedInteraction::new().confirming_by_default());
        delete_post(&state, yes.clone(), gone).await.unwrap();

        assert!(state.store.get(gone).await.unwrap().is_none());
        assert!(state.store.get(keep).await.unwrap().is_some());

        let err = delete_post(&state, yes, gone).await.unwrap_err();
        assert!(is_not_found(&err));
    }

    #[tokio::test]
    async fn test_ask_requires_an_assistant_and_a_question() {
        let mut state = app();
        assert!(ask(&state, "How?".to_string()).await.is_err());

        state.assistant = Some(Arc::new(EchoAssistant));
        assert!(ask(&state, "  ".to_string()).await.is_err());
        ask(&state, "How?".to_string()).await.unwrap();
    }
}
