use cell_layout::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::PHCConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct PHCOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub initial_solution: ExtSolution,
    pub solution: ExtSolution,
    pub config: PHCConfig,
}
