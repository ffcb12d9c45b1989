pub mod assets;
pub mod camera;
pub mod core;
pub mod frame_loop;
pub mod materials;
pub mod noise;
pub mod orbit;
pub mod scene;
pub mod systems;
