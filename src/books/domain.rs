use crate::core::library::ReadStatus;

pub mod model;

// Book is the read-only view statistics are computed over.
pub trait Book {
    fn is_read(&self) -> bool;
    fn category(&self) -> &str;

    fn read_status(&self) -> ReadStatus {
        ReadStatus::from(self.is_read())
    }
}
