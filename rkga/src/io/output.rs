use serde::{Deserialize, Serialize};
use wlsp::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::RkgaConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct Output {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: RkgaConfig,
}
