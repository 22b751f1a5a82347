use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::plan::PricingPlan;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ServicePricePlanner";
const APP_NAME: &str = "ServicePricePlanner";

fn plan_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("pricing_plan.json"))
}

pub fn load_plan() -> Option<PricingPlan> {
    load_plan_from(&plan_file()?)
}

pub fn load_plan_from(path: &Path) -> Option<PricingPlan> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn save_plan(plan: &PricingPlan) -> Result<(), PersistError> {
    let path = plan_file().ok_or(PersistError::StorageUnavailable)?;
    save_plan_to(&path, plan)
}

pub fn save_plan_to(path: &Path, plan: &PricingPlan) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
