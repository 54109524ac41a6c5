use crate::models::assessment::{Assessment, AssessmentMeta};
use crate::services::ai_service::RemoteGenerator;
use crate::services::assembler_service::AssemblerService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationSource {
    Remote,
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutput {
    pub assessment: Assessment,
    pub source: GenerationSource,
}

/// Front door for generation: tries the remote generator when one is
/// configured and requested, and otherwise assembles locally.
#[derive(Clone, Default)]
pub struct AssessmentService {
    remote: Option<Arc<dyn RemoteGenerator>>,
}

impl AssessmentService {
    pub fn new(remote: Option<Arc<dyn RemoteGenerator>>) -> Self {
        Self { remote }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Never fails: any remote error is logged and replaced by local assembly.
    pub async fn generate(&self, meta: AssessmentMeta, prefer_remote: bool) -> GenerationOutput {
        if prefer_remote {
            if let Some(remote) = &self.remote {
                match remote.generate(&meta).await {
                    Ok(assessment) => {
                        info!(
                            role = %meta.role,
                            items = assessment.items.len(),
                            source = "remote",
                            "Assessment generated"
                        );
                        return GenerationOutput {
                            assessment,
                            source: GenerationSource::Remote,
                        };
                    }
                    Err(e) => {
                        warn!(error = %e, "Remote generation failed, falling back to local assembly");
                    }
                }
            }
        }

        let assessment = Self::assemble_local(meta);
        info!(
            role = %assessment.meta.role,
            items = assessment.items.len(),
            source = "local",
            "Assessment generated"
        );
        GenerationOutput {
            assessment,
            source: GenerationSource::Local,
        }
    }

    pub fn assemble_local(meta: AssessmentMeta) -> Assessment {
        AssemblerService::assemble(meta, &mut rand::thread_rng())
    }
}
