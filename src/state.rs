use crate::client::BackendClient;
use crate::page::Page;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub client: BackendClient,
    pub page: Arc<Mutex<Page>>,
}

impl AppState {
    pub fn new(client: BackendClient, page: Page) -> Self {
        Self {
            client,
            page: Arc::new(Mutex::new(page)),
        }
    }
}
