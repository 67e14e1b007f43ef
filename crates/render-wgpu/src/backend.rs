use crate::context::GpuContext;
use crate::error::RenderError;
use crate::gpu::WgpuRenderer;
use crate::shaders::ShaderSources;
use spectrograph_render::{FramePlan, Renderer};

/// A fully initialized window backend: GPU context plus compiled pipeline.
///
/// Only [`WgpuBackend::initialize`] can produce one, so a frame can never
/// be drawn before the shaders are loaded and compiled.
pub struct WgpuBackend {
    gpu: GpuContext,
    renderer: WgpuRenderer,
}

impl WgpuBackend {
    pub async fn initialize(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        shaders: &ShaderSources,
    ) -> Result<Self, RenderError> {
        let gpu = GpuContext::initialize(target, width, height).await?;
        let renderer = WgpuRenderer::new(gpu.device(), gpu.format(), shaders)?;
        Ok(Self { gpu, renderer })
    }

    pub fn gpu(&self) -> &GpuContext {
        &self.gpu
    }

    /// Aspect ratio of the live surface.
    pub fn aspect_ratio(&self) -> f32 {
        self.gpu.aspect_ratio()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }
}

impl Renderer for WgpuBackend {
    /// `Ok(false)` when the frame was skipped because the surface had to be
    /// reconfigured.
    type Output = Result<bool, RenderError>;

    fn draw(&mut self, plan: &FramePlan) -> Self::Output {
        let Some(output) = self.gpu.acquire()? else {
            return Ok(false);
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer
            .render(self.gpu.device(), self.gpu.queue(), &view, plan);
        output.present();
        Ok(true)
    }
}
