use thiserror::Error;

/// Failures raised while building the disc's GPU program.
///
/// Both variants carry the driver-provided diagnostic text. Each failure is
/// also logged at error level before being returned, so the report stays
/// visible even if a caller chooses to continue degraded.
#[derive(Debug, Error)]
pub enum DiscError {
    /// A shader stage failed WGSL validation.
    #[error("compile failure in {stage} shader: {detail}")]
    ShaderCompile {
        stage: &'static str,
        detail: String,
    },

    /// The render pipeline could not be created from the compiled stages.
    #[error("pipeline link failure: {detail}")]
    PipelineLink { detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_compile_display_names_the_stage() {
        let err = DiscError::ShaderCompile {
            stage: "vertex",
            detail: "unknown identifier".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("vertex"));
        assert!(msg.contains("unknown identifier"));
    }

    #[test]
    fn pipeline_link_display_carries_detail() {
        let err = DiscError::PipelineLink {
            detail: "entry point not found".into(),
        };
        assert!(err.to_string().contains("entry point not found"));
    }
}
