//! Shared scenarios run against every `PostStore` binding.

use std::sync::Arc;

use inkpost_core::listing::SortOrder;
use inkpost_core::ports::{EditingSurface, PostStore};
use inkpost_core::views::{
    ComposeOptions, CreateView, DeleteOutcome, DetailView, EditOutcome, EditView, ListView,
    Route, SaveOutcome, messages,
};
use inkpost_infra::{ScriptedInteraction, TextBuffer};

/// Create "Hello", read it back, edit it, delete it.
pub async fn publish_edit_delete(store: Arc<dyn PostStore>) {
    // Create
    let ui = Arc::new(ScriptedInteraction::new().with_prompt(Some("Hello")));
    let mut create = CreateView::new(
        store.clone(),
        ui.clone(),
        TextBuffer::with_content("<p>Hi</p>"),
        ComposeOptions::default(),
    );
    let SaveOutcome::Saved(created) = create.save().await else {
        panic!("post was not saved");
    };
    assert_eq!(create.editor().value(), "");
    assert_eq!(ui.alerts().await, vec![messages::POST_SAVED]);

    // List shows it
    let ui = Arc::new(ScriptedInteraction::new().with_confirm(true));
    let mut list = ListView::new(store.clone(), ui.clone());
    assert!(list.load().await);
    let summaries = list.summaries();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, created.id);
    assert_eq!(summaries[0].title, "Hello");

    // Detail renders the stored HTML
    let mut detail = DetailView::new(store.clone(), ui.clone(), created.id);
    detail.load().await;
    assert_eq!(detail.render().unwrap().html, "<p>Hi</p>");

    // Edit content only
    let mut edit = EditView::new(store.clone(), ui.clone(), TextBuffer::new(), created.id);
    edit.load().await;
    assert_eq!(edit.editor().value(), "<p>Hi</p>");
    edit.editor_mut().load("<p>Bye</p>");
    let EditOutcome::Saved { next, .. } = edit.save().await else {
        panic!("edit was not saved");
    };
    assert_eq!(next, Route::Detail(created.id));

    let mut detail = DetailView::new(store.clone(), ui.clone(), created.id);
    detail.load().await;
    let rendered = detail.render().unwrap();
    assert_eq!(rendered.html, "<p>Bye</p>");
    assert_eq!(rendered.title, "Hello");
    let stored = detail.state().ready().unwrap();
    assert_eq!(stored.created_at, created.created_at);
    assert_eq!(stored.id, created.id);

    // Delete
    list.set_sort(SortOrder::Oldest);
    assert!(matches!(list.delete(created.id).await, DeleteOutcome::Deleted));
    assert!(list.visible().is_empty());

    let mut reloaded = ListView::new(store.clone(), ui.clone());
    reloaded.load().await;
    assert!(reloaded.visible().is_empty());

    let mut detail = DetailView::new(store.clone(), ui.clone(), created.id);
    assert!(detail.load().await.is_not_found());
    let mut edit = EditView::new(store, ui, TextBuffer::new(), created.id);
    assert!(edit.load().await.is_not_found());
}
