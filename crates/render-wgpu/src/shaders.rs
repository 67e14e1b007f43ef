use crate::error::RenderError;
use std::path::Path;

pub const VERTEX_SHADER_FILE: &str = "line.vert.wgsl";
pub const FRAGMENT_SHADER_FILE: &str = "line.frag.wgsl";

/// WGSL source for the line pipeline.
///
/// The vertex stage (`vs_main`) takes `@location(0) position: vec3<f32>`,
/// `@location(1) color: vec4<f32>` and a `mat4x4<f32>` uniform at
/// `@group(0) @binding(0)`. It passes the color through at `@location(0)`.
/// The fragment stage (`fs_main`) returns that color unmodified.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Read both stages from `dir`. Either file missing is fatal.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, RenderError> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| RenderError::ShaderLoad { path, source })
        };
        let vertex = read(VERTEX_SHADER_FILE)?;
        let fragment = read(FRAGMENT_SHADER_FILE)?;
        tracing::debug!(
            dir = %dir.display(),
            vertex_bytes = vertex.len(),
            fragment_bytes = fragment.len(),
            "loaded shader sources"
        );
        Ok(Self { vertex, fragment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shader_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../shaders")
    }

    #[test]
    fn loads_bundled_shaders() {
        let sources = ShaderSources::load(shader_dir()).expect("bundled shaders load");
        assert!(sources.vertex.contains("fn vs_main"));
        assert!(sources.vertex.contains("@location(0) position: vec3<f32>"));
        assert!(sources.vertex.contains("@location(1) color: vec4<f32>"));
        assert!(sources.vertex.contains("mat4x4<f32>"));
        assert!(sources.fragment.contains("fn fs_main"));
    }

    #[test]
    fn missing_directory_fails_on_vertex_stage() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShaderSources::load(dir.path().join("nope")).unwrap_err();
        match err {
            RenderError::ShaderLoad { path, .. } => {
                assert!(path.ends_with(VERTEX_SHADER_FILE));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_fragment_stage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VERTEX_SHADER_FILE), "// vertex").unwrap();
        let err = ShaderSources::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::ShaderLoad { ref path, .. } if path.ends_with(FRAGMENT_SHADER_FILE)
        ));
        assert!(err.to_string().contains(FRAGMENT_SHADER_FILE));
    }
}
