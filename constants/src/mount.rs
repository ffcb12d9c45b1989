/// Id of the host element the rendering surface is attached to.
pub const CONTAINER_ID: &str = "solar-root";

/// Id of the canvas created inside the container.
pub const CANVAS_ID: &str = "solar-canvas";

/// Stacking order of the container, behind regular page content.
pub const CONTAINER_Z_INDEX: i32 = -2;
