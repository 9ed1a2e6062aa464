use crate::models::CounterData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub pkg_dir: PathBuf,
    pub data: Arc<Mutex<CounterData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, pkg_dir: PathBuf, data: CounterData) -> Self {
        Self {
            data_path,
            pkg_dir,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
