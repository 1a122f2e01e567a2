use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::get_stats_cmd::{GetLibraryStatsCommand, GetLibraryStatsCommandRequest, GetLibraryStatsCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::replace_books_cmd::{ReplaceBooksCommand, ReplaceBooksCommandRequest, ReplaceBooksCommandResponse};
use crate::catalog::command::set_error_cmd::{SetErrorCommand, SetErrorCommandRequest, SetErrorCommandResponse};
use crate::catalog::command::set_loading_cmd::{SetLoadingCommand, SetLoadingCommandRequest, SetLoadingCommandResponse};
use crate::catalog::command::toggle_read_cmd::{ToggleReadStatusCommand, ToggleReadStatusCommandRequest, ToggleReadStatusCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::utils::date::DATE_FMT;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books",
               get(list_books).post(add_book).put(replace_books))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .route("/books/:id/toggle-read", post(toggle_read_status))
        .route("/state/loading", put(set_loading))
        .route("/state/error", put(set_error))
        .route("/stats", get(library_stats))
        .with_state(state)
}

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.store.clone())
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(build_service(&state)).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn replace_books(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReplaceBooksCommandResponse>, ServerError> {
    let req: ReplaceBooksCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ReplaceBooksCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(book_id);
    let res = GetBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

// The id in the path addresses the book; an id inside the body is ignored.
// created_at is kept by the store, so the body may leave it out.
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let mut body = json.0;
    if let Some(fields) = body.as_object_mut() {
        fields.insert("id".to_string(), Value::String(book_id));
        fields.entry("createdAt")
            .or_insert_with(|| Value::String(Utc::now().format(DATE_FMT).to_string()));
    }
    let req: UpdateBookCommandRequest = serde_json::from_value(body).map_err(json_to_server_error)?;
    let res = UpdateBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id);
    let res = RemoveBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn toggle_read_status(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<ToggleReadStatusCommandResponse>, ServerError> {
    let req = ToggleReadStatusCommandRequest::new(book_id);
    let res = ToggleReadStatusCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn set_loading(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<SetLoadingCommandResponse>, ServerError> {
    let req: SetLoadingCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = SetLoadingCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn set_error(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<SetErrorCommandResponse>, ServerError> {
    let req: SetErrorCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = SetErrorCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn library_stats(
    State(state): State<AppState>) -> Result<Json<GetLibraryStatsCommandResponse>, ServerError> {
    let res = GetLibraryStatsCommand::new(build_service(&state)).execute(GetLibraryStatsCommandRequest::default()).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::response::Json;
    use serde_json::json;
    use crate::books::factory::create_book_store;
    use crate::catalog::controller::{add_book, build_router, find_book_by_id, library_stats, list_books,
                                     remove_book, replace_books, set_error, set_loading, toggle_read_status, update_book};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;

    fn app_state(seed_sample_books: bool) -> AppState {
        let mut config = Configuration::new("test");
        config.seed_sample_books = seed_sample_books;
        let store = create_book_store(&config).expect("should create store");
        AppState::new(config, store)
    }

    #[tokio::test]
    async fn test_should_build_router() {
        let _ = build_router(app_state(true));
    }

    #[tokio::test]
    async fn test_should_add_and_list_books() {
        let state = app_state(false);
        let Json(added) = add_book(State(state.clone()), Json(json!({
            "title": "X", "author": "Y", "isbn": "1", "category": "Z", "publicationYear": 2020, "isRead": false
        }))).await.expect("should add book");
        assert!(!added.book.id.is_empty());

        let Json(listing) = list_books(State(state.clone())).await.expect("should list books");
        assert_eq!(1, listing.listing.books.len());
        assert_eq!(added.book.id, listing.listing.books[0].id);

        let Json(stats) = library_stats(State(state)).await.expect("should get stats");
        assert_eq!("Z", stats.stats.most_popular_category.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_malformed_book() {
        let state = app_state(false);
        let (status, _) = add_book(State(state), Json(json!({"title": 42})))
            .await.expect_err("should reject book");
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_should_return_not_found_for_missing_book() {
        let state = app_state(true);
        let (status, _) = find_book_by_id(State(state), Path("missing".to_string()))
            .await.expect_err("should not find book");
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    async fn test_should_update_using_path_id() {
        let state = app_state(true);
        let Json(res) = update_book(State(state.clone()), Path("2".to_string()), Json(json!({
            "id": "ignored", "title": "Ayat-Ayat Cinta 2", "author": "Habiburrahman El Shirazy",
            "isbn": "978-602-0822-00-0", "category": "Religi", "publicationYear": 2015, "isRead": true
        }))).await.expect("should update book");
        assert!(res.updated);

        let Json(found) = find_book_by_id(State(state.clone()), Path("2".to_string())).await.expect("should find book");
        assert_eq!("Ayat-Ayat Cinta 2", found.book.title.as_str());
        let (status, _) = find_book_by_id(State(state), Path("ignored".to_string()))
            .await.expect_err("should not create book");
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    async fn test_should_toggle_and_remove_book() {
        let state = app_state(true);
        let Json(toggled) = toggle_read_status(State(state.clone()), Path("2".to_string()))
            .await.expect("should toggle");
        assert_eq!(Some(true), toggled.is_read);
        let Json(stats) = library_stats(State(state.clone())).await.expect("should get stats");
        assert_eq!(100, stats.stats.read_percentage);

        let Json(removed) = remove_book(State(state.clone()), Path("2".to_string())).await.expect("should remove");
        assert!(removed.removed);
        let Json(removed) = remove_book(State(state), Path("2".to_string())).await.expect("should not fail");
        assert!(!removed.removed);
    }

    #[tokio::test]
    async fn test_should_conflict_on_duplicate_replace() {
        let state = app_state(true);
        let book = json!({"id": "x", "title": "t", "author": "a", "isbn": "i", "category": "c",
                          "publicationYear": 2000, "isRead": false, "createdAt": "2024-01-01T00:00:00Z"});
        let (status, _) = replace_books(State(state.clone()), Json(json!({"books": [book.clone(), book.clone()]})))
            .await.expect_err("should reject duplicates");
        assert_eq!(StatusCode::CONFLICT, status);

        let Json(res) = replace_books(State(state), Json(json!({"books": [book]})))
            .await.expect("should replace");
        assert_eq!(1, res.size);
    }

    #[tokio::test]
    async fn test_should_set_loading_and_error_signals() {
        let state = app_state(true);
        let _ = set_loading(State(state.clone()), Json(json!({"loading": true}))).await.expect("should set loading");
        let _ = set_error(State(state.clone()), Json(json!({"error": "gagal"}))).await.expect("should set error");

        let Json(listing) = list_books(State(state.clone())).await.expect("should list books");
        assert!(listing.listing.loading);
        assert_eq!(Some("gagal".to_string()), listing.listing.error);

        let _ = set_error(State(state.clone()), Json(json!({"error": null}))).await.expect("should clear error");
        let Json(listing) = list_books(State(state)).await.expect("should list books");
        assert_eq!(None, listing.listing.error);
    }
}
