// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the rendering pipeline.

use std::fmt;

/// An error raised while setting up the renderer or executing a frame plan.
#[derive(Debug)]
pub enum RenderError {
    /// The graphics device or surface could not be initialized. Fatal; the
    /// application exits.
    InitializationFailed(String),
    /// The current frame's surface texture could not be acquired. Transient;
    /// the frame is skipped and the surface reconfigured.
    SurfaceAcquisitionFailed(String),
    /// A GPU resource (buffer, texture, pipeline) could not be created.
    ResourceCreationFailed {
        /// What kind of resource failed.
        kind: &'static str,
        /// Detailed error messages from the backend.
        details: String,
    },
    /// A plan referenced a mesh or texture the backend never registered.
    UnknownHandle {
        /// What kind of handle was looked up.
        kind: &'static str,
        /// The raw handle value.
        id: u32,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InitializationFailed(details) => {
                write!(f, "Renderer initialization failed: {details}")
            }
            RenderError::SurfaceAcquisitionFailed(details) => {
                write!(f, "Failed to acquire the surface texture: {details}")
            }
            RenderError::ResourceCreationFailed { kind, details } => {
                write!(f, "Failed to create {kind}: {details}")
            }
            RenderError::UnknownHandle { kind, id } => {
                write!(f, "Unknown {kind} handle: {id}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_resource() {
        let err = RenderError::ResourceCreationFailed {
            kind: "depth texture",
            details: "out of memory".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to create depth texture: out of memory"
        );
    }

    #[test]
    fn unknown_handle_reports_kind_and_id() {
        let err = RenderError::UnknownHandle {
            kind: "mesh",
            id: 7,
        };
        assert_eq!(err.to_string(), "Unknown mesh handle: 7");
    }
}
