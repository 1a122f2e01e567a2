use crate::books::store::SharedBookStore;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub fn create_catalog_service(config: &Configuration, store: SharedBookStore) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, store))
}

#[cfg(test)]
pub(crate) fn create_test_catalog_service(seed_sample_books: bool) -> Box<dyn CatalogService> {
    let mut config = Configuration::new("test");
    config.seed_sample_books = seed_sample_books;
    let store = crate::books::factory::create_book_store(&config).expect("should create store");
    create_catalog_service(&config, store)
}
