use std::fmt;

use crate::domain::PostId;

/// Resolution state of a view bound to one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    NotFound,
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ViewState::NotFound)
    }
}

/// Navigation targets between views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    NewPost,
    List,
    Detail(PostId),
    Edit(PostId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::NewPost => write!(f, "/"),
            Route::List => write!(f, "/posts"),
            Route::Detail(id) => write!(f, "/posts/{}", id),
            Route::Edit(id) => write!(f, "/edit/{}", id),
        }
    }
}
