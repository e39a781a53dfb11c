//! Errors raised while bringing up the window and GPU.

use std::fmt;

/// Failures during window, surface, adapter or device creation.
#[derive(Debug)]
pub enum GraphicsError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// Failed to create a surface for the window.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create the GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// The surface reported no usable texture format.
    NoSurfaceFormat,
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            GraphicsError::Window(e) => write!(f, "Failed to create window: {}", e),
            GraphicsError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GraphicsError::NoAdapter => write!(
                f,
                "No compatible GPU adapter found. \
                 Ensure your system has a GPU with Vulkan/Metal/DX12/GL support."
            ),
            GraphicsError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            GraphicsError::NoSurfaceFormat => {
                write!(f, "Surface does not support any texture format")
            }
        }
    }
}

impl std::error::Error for GraphicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphicsError::EventLoop(e) => Some(e),
            GraphicsError::Window(e) => Some(e),
            GraphicsError::SurfaceCreation(e) => Some(e),
            GraphicsError::DeviceCreation(e) => Some(e),
            GraphicsError::NoAdapter | GraphicsError::NoSurfaceFormat => None,
        }
    }
}

impl From<winit::error::EventLoopError> for GraphicsError {
    fn from(e: winit::error::EventLoopError) -> Self {
        GraphicsError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for GraphicsError {
    fn from(e: winit::error::OsError) -> Self {
        GraphicsError::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for GraphicsError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GraphicsError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GraphicsError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GraphicsError::DeviceCreation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_adapter_message() {
        let msg = GraphicsError::NoAdapter.to_string();
        assert!(msg.contains("No compatible GPU adapter"));
        assert!(std::error::Error::source(&GraphicsError::NoAdapter).is_none());
    }
}
