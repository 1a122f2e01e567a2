pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod get_stats_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod replace_books_cmd;
pub mod set_error_cmd;
pub mod set_loading_cmd;
pub mod toggle_read_cmd;
pub mod update_book_cmd;
